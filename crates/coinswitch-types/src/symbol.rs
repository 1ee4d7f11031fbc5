//! Trading pair symbols

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair in `BASE/QUOTE` form (e.g., "BTC/INR")
///
/// The API matches pairs case-insensitively, so the text is sent exactly as
/// given. Conversions from `&str` and `String` do not validate; use
/// [`FromStr`] when the input comes from a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub const BTC_INR: &'static str = "BTC/INR";
    pub const ETH_INR: &'static str = "ETH/INR";
    pub const USDT_INR: &'static str = "USDT/INR";

    /// Build a pair from its two currency codes
    pub fn pair(base: &str, quote: &str) -> Self {
        Self(format!("{}/{}", base, quote))
    }

    /// Pair text as sent on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base and quote currency codes, when the text is a `BASE/QUOTE` pair
    pub fn split(&self) -> Option<(&str, &str)> {
        self.0.split_once('/')
    }

    /// Base currency (e.g., "BTC" from "BTC/INR")
    pub fn base(&self) -> Option<&str> {
        self.split().map(|(base, _)| base)
    }

    /// Quote currency (e.g., "INR" from "BTC/INR")
    pub fn quote(&self) -> Option<&str> {
        self.split().map(|(_, quote)| quote)
    }

    /// True when quoted in Indian rupees
    pub fn is_inr_quoted(&self) -> bool {
        self.quote()
            .is_some_and(|quote| quote.eq_ignore_ascii_case("INR"))
    }
}

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() && !quote.contains('/') => {
                Ok(Self(s.to_string()))
            }
            _ => Err(SymbolParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&Symbol> for Symbol {
    fn from(s: &Symbol) -> Self {
        s.clone()
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Error parsing a trading pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid trading pair '{0}', expected BASE/QUOTE")]
pub struct SymbolParseError(pub String);

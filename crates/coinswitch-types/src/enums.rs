//! Exchange and Side enums

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading venue an operation targets
///
/// CoinSwitch PRO routes orders to two underlying platforms. Any other tag is
/// rejected when parsing, so an invalid exchange can never reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// CoinSwitch's own order book
    #[serde(rename = "coinswitchx")]
    CoinswitchX,
    /// WazirX order book
    #[serde(rename = "wazirx")]
    Wazirx,
}

impl Exchange {
    /// Every supported platform tag
    pub const ALL: [Exchange; 2] = [Exchange::CoinswitchX, Exchange::Wazirx];

    /// Returns the tag as used in query parameters and request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoinswitchX => "coinswitchx",
            Self::Wazirx => "wazirx",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = ExchangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coinswitchx" => Ok(Self::CoinswitchX),
            "wazirx" => Ok(Self::Wazirx),
            _ => Err(ExchangeParseError(s.to_string())),
        }
    }
}

/// Error parsing an exchange tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported exchange '{0}', expected one of: coinswitchx, wazirx")]
pub struct ExchangeParseError(pub String);

/// Trade side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns the side as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = SideParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("buy") {
            Ok(Self::Buy)
        } else if s.eq_ignore_ascii_case("sell") {
            Ok(Self::Sell)
        } else {
            Err(SideParseError(s.to_string()))
        }
    }
}

// Trades report the side in upper case ("BUY"), other payloads in lower case.
impl<'de> Deserialize<'de> for Side {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Error parsing a trade side
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid side: {0}")]
pub struct SideParseError(pub String);

//! Lenient field deserializers
//!
//! CoinSwitch is inconsistent about numeric encoding: the same field can
//! arrive as a JSON number on one endpoint and as a numeric string on
//! another. These helpers accept both forms.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Epoch values above this are milliseconds, below are seconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 20_000_000_000;

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    pub(crate) fn into_decimal<E: Error>(self) -> Result<Decimal, E> {
        match self {
            Self::String(s) => Decimal::from_str(s.trim()).map_err(E::custom),
            Self::Number(n) => number_to_decimal(&n),
        }
    }
}

/// Convert a JSON number without going through f64 unless we must
fn number_to_decimal<E: Error>(n: &serde_json::Number) -> Result<Decimal, E> {
    let s = n.to_string();
    // Scientific notation (e.g., 5e-6) is not accepted by Decimal::from_str
    if s.contains('e') || s.contains('E') {
        let f = n.as_f64().ok_or_else(|| E::custom("invalid number"))?;
        Decimal::from_f64(f).ok_or_else(|| E::custom("cannot convert to decimal"))
    } else {
        Decimal::from_str(&s).map_err(E::custom)
    }
}

pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer)?.into_decimal()
}

/// Empty strings and nulls become `None` instead of zero or an error
pub(crate) fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value.into_decimal().map(Some),
    }
}

pub(crate) fn u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().parse().map_err(D::Error::custom),
        StringOrNumber::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| D::Error::custom(format!("expected u32, got {}", n))),
    }
}

/// Identifiers sometimes arrive as numbers; keep them as strings
pub(crate) fn string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::Number(n) => Ok(n.to_string()),
    }
}

/// Epoch seconds, epoch milliseconds, or an RFC 3339 string
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => {
            let s = s.trim();
            if let Ok(epoch) = s.parse::<i64>() {
                return from_epoch(epoch);
            }
            if let Ok(epoch) = s.parse::<f64>() {
                return from_epoch(epoch.round() as i64);
            }
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(D::Error::custom)
        }
        StringOrNumber::Number(n) => {
            let epoch = match n.as_i64() {
                Some(v) => v,
                None => n
                    .as_f64()
                    .map(|f| f.round() as i64)
                    .ok_or_else(|| D::Error::custom("invalid timestamp"))?,
            };
            from_epoch(epoch)
        }
    }
}

fn from_epoch<E: Error>(epoch: i64) -> Result<DateTime<Utc>, E> {
    let parsed = if epoch.unsigned_abs() > EPOCH_MILLIS_THRESHOLD.unsigned_abs() {
        Utc.timestamp_millis_opt(epoch).single()
    } else {
        Utc.timestamp_opt(epoch, 0).single()
    };
    parsed.ok_or_else(|| E::custom(format!("timestamp out of range: {}", epoch)))
}

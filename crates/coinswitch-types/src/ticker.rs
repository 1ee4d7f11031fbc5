//! 24 hour ticker snapshots

use crate::de;
use crate::Symbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 24 hour rolling statistics for one trading pair
///
/// Illiquid pairs report `"bidPrice": ""` / `"askPrice": ""`; those become
/// `None` rather than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Trading pair
    pub symbol: Symbol,
    /// Base asset (e.g., "BTC")
    #[serde(alias = "baseAsset")]
    pub base_asset: String,
    /// Quote asset (e.g., "INR")
    #[serde(alias = "quoteAsset")]
    pub quote_asset: String,
    /// Price 24 hours ago
    #[serde(alias = "openPrice", deserialize_with = "de::decimal")]
    pub open_price: Decimal,
    /// 24 hour low
    #[serde(alias = "lowPrice", deserialize_with = "de::decimal")]
    pub low_price: Decimal,
    /// 24 hour high
    #[serde(alias = "highPrice", deserialize_with = "de::decimal")]
    pub high_price: Decimal,
    /// Last traded price
    #[serde(alias = "lastPrice", deserialize_with = "de::decimal")]
    pub last_price: Decimal,
    /// 24 hour volume in the base asset
    #[serde(alias = "baseVolume", deserialize_with = "de::decimal")]
    pub base_volume: Decimal,
    /// 24 hour volume in the quote asset
    #[serde(alias = "quoteVolume", deserialize_with = "de::decimal")]
    pub quote_volume: Decimal,
    /// 24 hour change in percent
    #[serde(alias = "percentageChange", deserialize_with = "de::decimal")]
    pub percentage_change: Decimal,
    /// Best bid, absent when the book has no bids
    #[serde(default, alias = "bidPrice", deserialize_with = "de::optional_decimal")]
    pub bid: Option<Decimal>,
    /// Best ask, absent when the book has no asks
    #[serde(default, alias = "askPrice", deserialize_with = "de::optional_decimal")]
    pub ask: Option<Decimal>,
    /// Snapshot time
    #[serde(deserialize_with = "de::timestamp")]
    pub at: DateTime<Utc>,
}

impl Ticker {
    /// Ask minus bid, when both sides are quoted
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.ask? - self.bid?)
    }

    /// Absolute price change over the window
    pub fn price_change(&self) -> Decimal {
        self.last_price - self.open_price
    }
}

//! Market data records: trades, order books, candles and precision metadata

use crate::de;
use crate::{Exchange, Level, Side, Symbol};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// Trades
// ============================================================================

/// An executed trade
///
/// The wire format uses single-letter keys (`E`, `S`, `p`, ...). Both those
/// and the descriptive field names are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Execution time
    #[serde(alias = "E", deserialize_with = "de::timestamp")]
    pub event_time: DateTime<Utc>,
    /// Taker side
    #[serde(alias = "S")]
    pub side: Side,
    /// Buyer's order ID
    #[serde(alias = "a", deserialize_with = "de::string_lenient")]
    pub buyer_order_id: String,
    /// Seller's order ID
    #[serde(alias = "b", deserialize_with = "de::string_lenient")]
    pub seller_order_id: String,
    /// True when the buyer was the maker
    #[serde(alias = "m")]
    pub is_buyer_maker: bool,
    /// Execution price
    #[serde(alias = "p", deserialize_with = "de::decimal")]
    pub price: Decimal,
    /// Executed quantity
    #[serde(alias = "q", deserialize_with = "de::decimal")]
    pub quantity: Decimal,
    /// Trading pair
    #[serde(alias = "s")]
    pub symbol: Symbol,
    /// Trade ID
    #[serde(alias = "t", deserialize_with = "de::string_lenient")]
    pub trade_id: String,
    /// Venue the trade executed on
    #[serde(alias = "e")]
    pub exchange: String,
}

impl Trade {
    /// Price times quantity
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}

// ============================================================================
// Order book
// ============================================================================

/// Order book depth snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Snapshot time
    #[serde(deserialize_with = "de::timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Bid levels, best first
    pub bids: Vec<Level>,
    /// Ask levels, best first
    pub asks: Vec<Level>,
    /// Trading pair
    pub symbol: Symbol,
}

impl OrderBook {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().map(|l| l.price).max()
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().map(|l| l.price).min()
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Get the mid price (average of best bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.best_ask()? + self.best_bid()?) / Decimal::TWO)
    }
}

// ============================================================================
// Candles
// ============================================================================

/// OHLCV candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Interval open time
    #[serde(deserialize_with = "de::timestamp")]
    pub start_time: DateTime<Utc>,
    /// Interval close time
    #[serde(deserialize_with = "de::timestamp")]
    pub close_time: DateTime<Utc>,
    /// Trading pair
    pub symbol: Symbol,
    /// Open price
    #[serde(alias = "o", deserialize_with = "de::decimal")]
    pub open: Decimal,
    /// High price
    #[serde(alias = "h", deserialize_with = "de::decimal")]
    pub high: Decimal,
    /// Low price
    #[serde(alias = "l", deserialize_with = "de::decimal")]
    pub low: Decimal,
    /// Close price
    #[serde(alias = "c", deserialize_with = "de::decimal")]
    pub close: Decimal,
    /// Interval length in minutes
    #[serde(deserialize_with = "de::u32_lenient")]
    pub interval: u32,
    /// Traded volume
    #[serde(deserialize_with = "de::decimal")]
    pub volume: Decimal,
}

impl Candle {
    /// True when the close is above the open
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// High minus low
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }
}

// ============================================================================
// Exchange precision
// ============================================================================

/// Decimal places allowed for one coin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionData {
    /// Base asset precision
    #[serde(deserialize_with = "de::u32_lenient")]
    pub base: u32,
    /// Quote asset precision
    #[serde(deserialize_with = "de::u32_lenient")]
    pub quote: u32,
    /// Limit price precision
    #[serde(deserialize_with = "de::u32_lenient")]
    pub limit: u32,
}

/// Per-coin precision metadata for one exchange
///
/// The coin map is keyed by the exchange tag (`{"coinswitchx": {...}}`).
/// Depending on the API revision that object is either the whole response
/// body or nested under a `data` field; both shapes deserialize to the same
/// value. A map under a `coins` key is accepted too, which is the shape this
/// type serializes to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangePrecision {
    /// Exchange the map was keyed under, when it was keyed by tag
    pub exchange: Option<Exchange>,
    /// Precision per trading pair
    pub coins: HashMap<String, PrecisionData>,
}

impl ExchangePrecision {
    /// Look up precision for one symbol
    pub fn get(&self, symbol: &str) -> Option<&PrecisionData> {
        self.coins.get(symbol)
    }

    /// Number of coins described
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// True when no coins are described
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

impl<'de> Deserialize<'de> for ExchangePrecision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let (exchange, coins) = locate_coin_map(&value).ok_or_else(|| {
            D::Error::custom("expected a coin map keyed by coinswitchx, wazirx or coins")
        })?;

        let coins = HashMap::<String, PrecisionData>::deserialize(coins.clone())
            .map_err(D::Error::custom)?;

        Ok(Self { exchange, coins })
    }
}

/// Find the coin map at the top level or one `data` level down
fn locate_coin_map(value: &Value) -> Option<(Option<Exchange>, &Value)> {
    let obj = value.as_object()?;

    for exchange in Exchange::ALL {
        if let Some(coins) = obj.get(exchange.as_str()) {
            return Some((Some(exchange), coins));
        }
    }
    if let Some(coins) = obj.get("coins") {
        let exchange = obj
            .get("exchange")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok());
        return Some((exchange, coins));
    }

    obj.get("data").and_then(locate_coin_map)
}

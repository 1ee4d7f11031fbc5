//! Price level types with decimal precision

use crate::de::StringOrNumber;
use rust_decimal::Decimal;
use serde::de::Error;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single price level in the orderbook
///
/// On the wire a level is a `[price, quantity]` pair whose entries may be
/// numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Price of this level
    pub price: Decimal,
    /// Quantity at this price level
    pub qty: Decimal,
}

impl Level {
    /// Create a new price level
    pub fn new(price: Decimal, qty: Decimal) -> Self {
        Self { price, qty }
    }

    /// Notional value resting at this level
    pub fn notional(&self) -> Decimal {
        self.price * self.qty
    }

    /// Check if this level has zero quantity
    pub fn is_zero(&self) -> bool {
        self.qty.is_zero()
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<StringOrNumber>::deserialize(deserializer)?;
        if raw.len() < 2 {
            return Err(D::Error::invalid_length(raw.len(), &"a [price, quantity] pair"));
        }

        let mut iter = raw.into_iter();
        let price = level_decimal(iter.next())?;
        let qty = level_decimal(iter.next())?;
        Ok(Self { price, qty })
    }
}

fn level_decimal<E: Error>(value: Option<StringOrNumber>) -> Result<Decimal, E> {
    value
        .ok_or_else(|| E::custom("missing level entry"))?
        .into_decimal()
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.price.to_string())?;
        pair.serialize_element(&self.qty.to_string())?;
        pair.end()
    }
}

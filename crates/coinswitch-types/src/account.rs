//! Account records

use crate::de;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One currency holding from the user's portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Currency code (e.g., "BTC", "INR")
    pub currency: String,
    /// Display name
    pub name: String,
    /// Freely available balance
    #[serde(deserialize_with = "de::decimal")]
    pub main_balance: Decimal,
    /// Held for pending deposits
    #[serde(deserialize_with = "de::decimal")]
    pub blocked_balance_deposit: Decimal,
    /// Held for pending withdrawals
    #[serde(deserialize_with = "de::decimal")]
    pub blocked_balance_withdraw: Decimal,
    /// Held by open orders
    #[serde(deserialize_with = "de::decimal")]
    pub blocked_balance_order: Decimal,
    /// Held by staking
    #[serde(deserialize_with = "de::decimal")]
    pub blocked_balance_stake: Decimal,
    /// Held in vaults
    #[serde(deserialize_with = "de::decimal")]
    pub blocked_balance_vault: Decimal,
    /// Average buy price
    #[serde(deserialize_with = "de::decimal")]
    pub buy_average_price: Decimal,
    /// Amount invested, fees included
    #[serde(deserialize_with = "de::decimal")]
    pub invested_value: Decimal,
    /// Amount invested, fees excluded
    #[serde(deserialize_with = "de::decimal")]
    pub invested_value_excluding_fee: Decimal,
    /// Current valuation
    #[serde(deserialize_with = "de::decimal")]
    pub current_value: Decimal,
    /// Current sell rate
    #[serde(deserialize_with = "de::decimal")]
    pub sell_rate: Decimal,
    /// Current buy rate
    #[serde(deserialize_with = "de::decimal")]
    pub buy_rate: Decimal,
    /// Whether `buy_average_price` is meaningful
    #[serde(default)]
    pub is_average_price_available: Option<bool>,
    /// Whether the coin has been delisted
    #[serde(default)]
    pub is_delisted_coin: Option<bool>,
}

impl Balance {
    /// Sum of every blocked bucket
    pub fn total_blocked(&self) -> Decimal {
        self.blocked_balance_deposit
            + self.blocked_balance_withdraw
            + self.blocked_balance_order
            + self.blocked_balance_stake
            + self.blocked_balance_vault
    }

    /// Available plus blocked balance
    pub fn total_balance(&self) -> Decimal {
        self.main_balance + self.total_blocked()
    }

    /// Unrealized profit or loss against the invested amount
    pub fn unrealized_pnl(&self) -> Decimal {
        self.current_value - self.invested_value
    }
}

//! Shared types for the CoinSwitch PRO REST API
//!
//! This crate provides the typed records returned by the REST endpoints and
//! the small value types used to build requests. It has no HTTP or crypto
//! dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Exchange`] - Platform tag (`coinswitchx` or `wazirx`)
//! - [`Symbol`] - Trading pair symbols (e.g., "BTC/INR")
//! - [`Level`] - Orderbook price level with decimal precision
//! - [`Balance`], [`Trade`], [`OrderBook`], [`Candle`], [`Ticker`] - Response records
//! - [`ExchangePrecision`] - Per-coin precision metadata
//! - [`ApiResponse`] - The `data` envelope most endpoints wrap payloads in

mod de;

pub mod account;
pub mod enums;
pub mod level;
pub mod market;
pub mod response;
pub mod symbol;
pub mod ticker;

// Re-export commonly used types
pub use account::*;
pub use enums::*;
pub use level::*;
pub use market::*;
pub use response::*;
pub use symbol::*;
pub use ticker::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;

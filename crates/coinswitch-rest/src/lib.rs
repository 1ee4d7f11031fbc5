//! REST API client for the CoinSwitch PRO exchange
//!
//! Covers connectivity checks, the user portfolio, recent trades, order book
//! depth, candles, exchange precision and 24 hour tickers. Every request is
//! signed with the caller's Ed25519 key.
//!
//! # Example
//!
//! ```no_run
//! use coinswitch_rest::{CoinSwitchClient, Exchange};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinSwitchClient::from_env()?;
//!
//!     for balance in client.portfolio().await? {
//!         println!("{}: {}", balance.currency, balance.main_balance);
//!     }
//!
//!     let tickers = client.ticker_all_pairs(Exchange::CoinswitchX).await?;
//!     println!("{} pairs listed", tickers.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Callers without an async runtime can use [`BlockingClient`] instead.

pub mod blocking;
pub mod client;
pub mod endpoints;
pub mod error;

pub use blocking::BlockingClient;
pub use client::{ClientConfig, CoinSwitchClient, DEFAULT_BASE_URL};
pub use endpoints::{paths, AccountEndpoints, MarketEndpoints, TickerEndpoints};
pub use error::{RestError, RestResult};

pub use coinswitch_auth::Credentials;
pub use coinswitch_types::*;

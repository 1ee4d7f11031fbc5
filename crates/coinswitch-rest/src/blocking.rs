//! Synchronous facade over [`CoinSwitchClient`]
//!
//! Each call blocks the calling thread until the response is parsed. The
//! client owns a single-threaded runtime, so it must not be used from
//! inside another async runtime.

use crate::client::{ClientConfig, CoinSwitchClient};
use crate::error::{RestError, RestResult};
use coinswitch_auth::Credentials;
use coinswitch_types::{
    Balance, Candle, Exchange, ExchangePrecision, OrderBook, Symbol, Ticker,
    Trade,
};
use std::collections::HashMap;
use tokio::runtime::{Builder, Runtime};

/// Blocking CoinSwitch REST client
pub struct BlockingClient {
    inner: CoinSwitchClient,
    runtime: Runtime,
}

impl BlockingClient {
    /// Create a new client against the production API
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client from environment variables
    pub fn from_env() -> RestResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RestError::InvalidConfig(format!("failed to start runtime: {}", e)))?;
        let inner = CoinSwitchClient::with_config(config)?;

        Ok(Self { inner, runtime })
    }

    /// Underlying async client
    pub fn inner(&self) -> &CoinSwitchClient {
        &self.inner
    }

    /// Check that the API is reachable (true iff HTTP 200)
    pub fn ping(&self) -> bool {
        self.runtime.block_on(self.inner.ping())
    }

    /// Check that the credentials are accepted (true iff HTTP 200)
    pub fn validate_keys(&self) -> bool {
        self.runtime.block_on(self.inner.validate_keys())
    }

    /// Get every currency balance in the portfolio
    pub fn portfolio(&self) -> RestResult<Vec<Balance>> {
        self.runtime.block_on(self.inner.portfolio())
    }

    /// Get recent trades for a trading pair
    pub fn trades(&self, exchange: Exchange, symbol: impl Into<Symbol>) -> RestResult<Vec<Trade>> {
        self.runtime.block_on(self.inner.trades(exchange, symbol))
    }

    /// Get precision metadata, optionally for a single pair
    pub fn exchange_precision(
        &self,
        exchange: Exchange,
        symbol: Option<&str>,
    ) -> RestResult<ExchangePrecision> {
        self.runtime
            .block_on(self.inner.exchange_precision(exchange, symbol))
    }

    /// Get order book depth for a trading pair
    pub fn depth(&self, exchange: Exchange, symbol: impl Into<Symbol>) -> RestResult<OrderBook> {
        self.runtime.block_on(self.inner.depth(exchange, symbol))
    }

    /// Get candles for a trading pair
    pub fn candles(
        &self,
        exchange: Exchange,
        symbol: impl Into<Symbol>,
        interval: u32,
        start_time: u64,
        end_time: u64,
    ) -> RestResult<Vec<Candle>> {
        self.runtime.block_on(
            self.inner
                .candles(exchange, symbol, interval, start_time, end_time),
        )
    }

    /// Get the 24 hour ticker for every pair on an exchange
    pub fn ticker_all_pairs(&self, exchange: Exchange) -> RestResult<HashMap<String, Ticker>> {
        self.runtime.block_on(self.inner.ticker_all_pairs(exchange))
    }

    /// Get the 24 hour ticker for one pair
    pub fn ticker_for(&self, exchange: Exchange, symbol: impl Into<Symbol>) -> RestResult<HashMap<String, Ticker>> {
        self.runtime.block_on(self.inner.ticker_for(exchange, symbol))
    }
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("inner", &self.inner)
            .finish()
    }
}

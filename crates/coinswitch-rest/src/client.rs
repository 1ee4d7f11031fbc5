//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TickerEndpoints, Transport};
use crate::error::{RestError, RestResult};
use coinswitch_auth::Credentials;
use coinswitch_types::{
    Balance, Candle, Exchange, ExchangePrecision, OrderBook, Symbol, Ticker,
    Trade,
};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://coinswitch.co";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API host
pub const BASE_URL_ENV: &str = "COINSWITCH_BASE_URL";
/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_ENV: &str = "COINSWITCH_TIMEOUT_SECS";

/// CoinSwitch REST API client
///
/// Every endpoint is authenticated, so the client always holds credentials.
/// Signatures are computed per request and never stored, which makes the
/// client cheap to clone and safe to share between tasks.
///
/// # Example
///
/// ```no_run
/// use coinswitch_rest::{CoinSwitchClient, Credentials, Exchange};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = CoinSwitchClient::new(creds)?;
///
///     if client.ping().await {
///         let book = client.depth(Exchange::CoinswitchX, "BTC/INR").await?;
///         println!("Best bid: {:?}", book.best_bid());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinSwitchClient {
    http_client: Client,
    credentials: Credentials,
    base_url: String,
}

impl CoinSwitchClient {
    /// Create a new client against the production API
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client from environment variables
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> RestResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(concat!(
                "coinswitch-rest/",
                env!("CARGO_PKG_VERSION")
            )))
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        info!(base_url = %base_url, "Created CoinSwitch REST client");

        Ok(Self {
            http_client,
            credentials: config.credentials,
            base_url,
        })
    }

    /// API host requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport(&self) -> Transport<'_> {
        Transport::new(&self.http_client, &self.base_url, &self.credentials)
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Get connectivity and account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self.transport())
    }

    /// Get market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self.transport())
    }

    /// Get ticker endpoints
    pub fn ticker(&self) -> TickerEndpoints<'_> {
        TickerEndpoints::new(self.transport())
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// Check that the API is reachable (true iff HTTP 200)
    pub async fn ping(&self) -> bool {
        self.account().ping().await
    }

    /// Check that the credentials are accepted (true iff HTTP 200)
    pub async fn validate_keys(&self) -> bool {
        self.account().validate_keys().await
    }

    /// Get every currency balance in the portfolio
    pub async fn portfolio(&self) -> RestResult<Vec<Balance>> {
        self.account().portfolio().await
    }

    // ========================================================================
    // Market data
    // ========================================================================

    /// Get recent trades for a trading pair
    pub async fn trades(&self, exchange: Exchange, symbol: impl Into<Symbol>) -> RestResult<Vec<Trade>> {
        self.market().trades(exchange, symbol).await
    }

    /// Get precision metadata, optionally for a single pair
    pub async fn exchange_precision(
        &self,
        exchange: Exchange,
        symbol: Option<&str>,
    ) -> RestResult<ExchangePrecision> {
        self.market().exchange_precision(exchange, symbol).await
    }

    /// Get order book depth for a trading pair
    pub async fn depth(&self, exchange: Exchange, symbol: impl Into<Symbol>) -> RestResult<OrderBook> {
        self.market().depth(exchange, symbol).await
    }

    /// Get candles for a trading pair
    ///
    /// # Arguments
    /// * `interval` - Candle length in minutes
    /// * `start_time`, `end_time` - Range as epoch milliseconds
    pub async fn candles(
        &self,
        exchange: Exchange,
        symbol: impl Into<Symbol>,
        interval: u32,
        start_time: u64,
        end_time: u64,
    ) -> RestResult<Vec<Candle>> {
        self.market()
            .candles(exchange, symbol, interval, start_time, end_time)
            .await
    }

    // ========================================================================
    // Tickers
    // ========================================================================

    /// Get the 24 hour ticker for every pair on an exchange
    pub async fn ticker_all_pairs(&self, exchange: Exchange) -> RestResult<HashMap<String, Ticker>> {
        self.ticker().all_pairs(exchange).await
    }

    /// Get the 24 hour ticker for one pair
    pub async fn ticker_for(
        &self,
        exchange: Exchange,
        symbol: impl Into<Symbol>,
    ) -> RestResult<HashMap<String, Ticker>> {
        self.ticker().symbol(exchange, symbol).await
    }
}

impl std::fmt::Debug for CoinSwitchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinSwitchClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials
    pub credentials: Credentials,
    /// API host, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration for the production API
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Credentials come from `COINSWITCH_API_KEY` and
    /// `COINSWITCH_API_SECRET_KEY`. `COINSWITCH_BASE_URL` and
    /// `COINSWITCH_TIMEOUT_SECS` optionally override the defaults.
    pub fn from_env() -> RestResult<Self> {
        let mut config = Self::new(Credentials::from_env()?);

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        if let Ok(timeout) = std::env::var(TIMEOUT_ENV) {
            let secs = timeout.trim().parse().map_err(|_| {
                RestError::InvalidConfig(format!("{} must be a whole number of seconds", TIMEOUT_ENV))
            })?;
            config = config.with_timeout(secs);
        }

        Ok(config)
    }

    /// Set the API host (e.g., a mock server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

//! API endpoint implementations

pub mod account;
pub mod market;
pub mod ticker;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use ticker::TickerEndpoints;

use crate::error::{RestError, RestResult};
use coinswitch_auth::{Credentials, Method, RequestSigner, SignedRequest};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Endpoint paths, all under the v2 trade API
pub mod paths {
    pub const PING: &str = "/trade/api/v2/ping";
    pub const VALIDATE_KEYS: &str = "/trade/api/v2/validate/keys";
    pub const PORTFOLIO: &str = "/trade/api/v2/user/portfolio";
    pub const TRADES: &str = "/trade/api/v2/trades";
    pub const EXCHANGE_PRECISION: &str = "/trade/api/v2/exchangePrecision";
    pub const DEPTH: &str = "/trade/api/v2/depth";
    pub const CANDLES: &str = "/trade/api/v2/candles";
    pub const TICKER_ALL_PAIRS: &str = "/trade/api/v2/24hr/all-pairs/ticker";
    pub const TICKER: &str = "/trade/api/v2/24hr/ticker";
}

/// Signs, sends and status-checks a single request
///
/// Every call signs afresh; nothing from a previous request is reused.
#[derive(Clone, Copy)]
pub(crate) struct Transport<'a> {
    client: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> Transport<'a> {
    pub(crate) fn new(client: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    async fn send(&self, request: &SignedRequest) -> RestResult<reqwest::Response> {
        let headers = RequestSigner::new(self.credentials).sign(request)?;
        let path = request.request_path()?;
        let url = format!("{}{}", self.base_url, path);

        debug!(method = %request.method(), path = %path, "Sending request");

        let mut builder = match request.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        for (name, value) in headers.to_pairs() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body_bytes() {
            builder = builder.body(body);
        }

        Ok(builder.send().await?)
    }

    /// Liveness-style call: true iff the server answers 200
    pub(crate) async fn check(&self, operation: &'static str, request: SignedRequest) -> bool {
        match self.send(&request).await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                warn!(operation, status = response.status().as_u16(), "Check failed");
                false
            }
            Err(e) => {
                warn!(operation, error = %e, "Check request failed");
                false
            }
        }
    }

    /// Data call: non-200 is an error naming the operation, body must parse as `T`
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: SignedRequest,
    ) -> RestResult<T> {
        let response = self.send(&request).await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!(operation, status = status.as_u16(), "Request rejected");
            return Err(RestError::Status {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

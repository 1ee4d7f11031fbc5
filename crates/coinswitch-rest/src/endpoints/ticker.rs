//! 24 hour ticker endpoints

use super::{paths, Transport};
use crate::error::RestResult;
use coinswitch_auth::SignedRequest;
use coinswitch_types::{ApiResponse, Exchange, Symbol, Ticker};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// 24 hour ticker snapshots, keyed by symbol
pub struct TickerEndpoints<'a> {
    transport: Transport<'a>,
}

impl<'a> TickerEndpoints<'a> {
    pub(crate) fn new(transport: Transport<'a>) -> Self {
        Self { transport }
    }

    /// Get the 24 hour ticker for every pair on an exchange
    #[instrument(skip(self))]
    pub async fn all_pairs(&self, exchange: Exchange) -> RestResult<HashMap<String, Ticker>> {
        let request =
            SignedRequest::get(paths::TICKER_ALL_PAIRS).with_param("exchange", exchange);

        let response: ApiResponse<HashMap<String, Ticker>> =
            self.transport.fetch("tickers", request).await?;
        debug!("Received {} tickers", response.data.len());

        Ok(response.into_data())
    }

    /// Get the 24 hour ticker for one pair
    ///
    /// The result has the same shape as [`all_pairs`](Self::all_pairs), with
    /// a single entry.
    #[instrument(skip(self, symbol))]
    pub async fn symbol(
        &self,
        exchange: Exchange,
        symbol: impl Into<Symbol>,
    ) -> RestResult<HashMap<String, Ticker>> {
        let request = SignedRequest::get(paths::TICKER)
            .with_param("exchange", exchange)
            .with_param("symbol", symbol.into());

        let response: ApiResponse<HashMap<String, Ticker>> =
            self.transport.fetch("ticker", request).await?;
        Ok(response.into_data())
    }
}

//! Market data endpoints

use super::{paths, Transport};
use crate::error::{RestError, RestResult};
use coinswitch_auth::SignedRequest;
use coinswitch_types::{
    ApiResponse, Candle, Exchange, ExchangePrecision, MaybeWrapped, OrderBook, Symbol, Trade,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Body of the exchange precision request
#[derive(Debug, Serialize)]
struct PrecisionRequest<'a> {
    exchange: Exchange,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<&'a str>,
}

/// Trades, depth, candles and precision metadata
pub struct MarketEndpoints<'a> {
    transport: Transport<'a>,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(transport: Transport<'a>) -> Self {
        Self { transport }
    }

    /// Get recent trades
    ///
    /// # Arguments
    /// * `exchange` - Venue to query
    /// * `symbol` - Trading pair (e.g., "BTC/INR")
    #[instrument(skip(self, symbol))]
    pub async fn trades(
        &self,
        exchange: Exchange,
        symbol: impl Into<Symbol>,
    ) -> RestResult<Vec<Trade>> {
        let request = SignedRequest::get(paths::TRADES)
            .with_param("exchange", exchange)
            .with_param("symbol", symbol.into());

        let response: ApiResponse<Vec<Trade>> = self.transport.fetch("trades", request).await?;
        Ok(response.into_data())
    }

    /// Get quantity and price precision per coin
    ///
    /// # Arguments
    /// * `exchange` - Venue to query
    /// * `symbol` - Restrict to one trading pair; all pairs when `None`
    #[instrument(skip(self))]
    pub async fn exchange_precision(
        &self,
        exchange: Exchange,
        symbol: Option<&str>,
    ) -> RestResult<ExchangePrecision> {
        let request = SignedRequest::post(paths::EXCHANGE_PRECISION)
            .with_json(&PrecisionRequest { exchange, symbol })?;

        let precision: ExchangePrecision =
            self.transport.fetch("exchange precision", request).await?;
        debug!("Received precision for {} coins", precision.len());

        Ok(precision)
    }

    /// Get order book depth
    ///
    /// # Arguments
    /// * `exchange` - Venue to query
    /// * `symbol` - Trading pair (e.g., "BTC/INR")
    #[instrument(skip(self, symbol))]
    pub async fn depth(
        &self,
        exchange: Exchange,
        symbol: impl Into<Symbol>,
    ) -> RestResult<OrderBook> {
        let request = SignedRequest::get(paths::DEPTH)
            .with_param("exchange", exchange)
            .with_param("symbol", symbol.into());

        let response: MaybeWrapped<OrderBook> =
            self.transport.fetch("order book depth", request).await?;
        Ok(response.into_inner())
    }

    /// Get candlestick history
    ///
    /// # Arguments
    /// * `exchange` - Venue to query
    /// * `symbol` - Trading pair (e.g., "BTC/INR")
    /// * `interval` - Candle length in minutes
    /// * `start_time` - Range start, epoch milliseconds
    /// * `end_time` - Range end, epoch milliseconds
    #[instrument(skip(self, symbol))]
    pub async fn candles(
        &self,
        exchange: Exchange,
        symbol: impl Into<Symbol>,
        interval: u32,
        start_time: u64,
        end_time: u64,
    ) -> RestResult<Vec<Candle>> {
        if interval == 0 {
            return Err(RestError::InvalidParameter(
                "interval must be at least one minute".to_string(),
            ));
        }
        if start_time > end_time {
            return Err(RestError::InvalidParameter(format!(
                "start_time {} is after end_time {}",
                start_time, end_time
            )));
        }

        let request = SignedRequest::get(paths::CANDLES)
            .with_param("end_time", end_time)
            .with_param("start_time", start_time)
            .with_param("symbol", symbol.into())
            .with_param("interval", interval)
            .with_param("exchange", exchange);

        let response: ApiResponse<Vec<Candle>> = self.transport.fetch("candles", request).await?;
        Ok(response.into_data())
    }
}

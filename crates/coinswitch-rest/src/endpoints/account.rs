//! Connectivity and account endpoints

use super::{paths, Transport};
use crate::error::RestResult;
use coinswitch_auth::SignedRequest;
use coinswitch_types::{ApiResponse, Balance};
use tracing::instrument;

/// Connectivity checks and the user's portfolio
pub struct AccountEndpoints<'a> {
    transport: Transport<'a>,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(transport: Transport<'a>) -> Self {
        Self { transport }
    }

    /// Check that the API is reachable
    ///
    /// Returns true iff the server answers 200. Never errors.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> bool {
        self.transport
            .check("ping", SignedRequest::get(paths::PING))
            .await
    }

    /// Check that the API key and secret are accepted
    ///
    /// Returns true iff the server answers 200. Never errors.
    #[instrument(skip(self))]
    pub async fn validate_keys(&self) -> bool {
        self.transport
            .check("key validation", SignedRequest::get(paths::VALIDATE_KEYS))
            .await
    }

    /// Get every currency balance in the portfolio
    #[instrument(skip(self))]
    pub async fn portfolio(&self) -> RestResult<Vec<Balance>> {
        let response: ApiResponse<Vec<Balance>> = self
            .transport
            .fetch("portfolio", SignedRequest::get(paths::PORTFOLIO))
            .await?;

        Ok(response.into_data())
    }
}

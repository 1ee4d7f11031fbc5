//! Response envelopes

use serde::Deserialize;

/// Standard CoinSwitch response wrapper
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload
    pub fn into_data(self) -> T {
        self.data
    }
}

/// A payload that may or may not be wrapped in `data`
///
/// Some endpoints changed shape between API revisions; this accepts both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MaybeWrapped<T> {
    /// `{"data": payload}`
    Wrapped {
        /// Payload
        data: T,
    },
    /// The payload itself
    Bare(T),
}

impl<T> MaybeWrapped<T> {
    /// Unwrap the payload regardless of shape
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(inner) => inner,
        }
    }
}

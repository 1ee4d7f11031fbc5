//! Error types for REST API operations

use coinswitch_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials or signing failed
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Server answered with a non-200 status
    #[error("Unable to fetch {operation}: HTTP {status}")]
    Status {
        /// Operation that failed (e.g., "portfolio")
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Raw response body, for diagnostics
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RestError {
    /// HTTP status, when the server responded
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server rejected the credentials or signature
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

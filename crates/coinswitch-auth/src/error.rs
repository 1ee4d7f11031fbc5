//! Error types for authentication operations

/// Errors that can occur while loading credentials or signing requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Secret key is not valid hex or has the wrong length
    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Signature is malformed or does not verify
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Request parameters or body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

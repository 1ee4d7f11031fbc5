//! Request descriptors and per-request signing
//!
//! Signature message, in order and with no separator:
//! 1. HTTP method (`GET` / `POST`)
//! 2. Endpoint path; for GET requests with parameters, the path with its
//!    encoded query string appended and then `+`/percent decoded
//! 3. Canonical JSON of the body (`{}` when there is none)
//!
//! The message is signed with Ed25519 and sent as lowercase hex.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::trace;

use crate::canonical::{append_query, canonical_json, encode_query, unquote_plus};
use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-AUTH-APIKEY";
/// Header carrying the hex signature
pub const SIGNATURE_HEADER: &str = "X-AUTH-SIGNATURE";
/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP methods the API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Upper-case method name as it appears in the signature message
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything about one outgoing request that the signature covers
///
/// The same descriptor produces both the signed message and the path/body
/// actually transmitted, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    method: Method,
    endpoint: String,
    params: Vec<(String, String)>,
    body: Option<Value>,
}

impl SignedRequest {
    /// Create a request for the given method and endpoint path
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    /// Create a POST request
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    /// Add a query parameter
    ///
    /// Parameters keep insertion order. They are only sent (and signed) on
    /// GET requests.
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Set the JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the JSON body from any serializable value
    pub fn with_json<T: Serialize>(self, body: &T) -> AuthResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| AuthError::Serialization(e.to_string()))?;
        Ok(self.with_body(value))
    }

    /// HTTP method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Endpoint path without any appended parameters
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query parameters in insertion order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Path and URL-encoded query string as transmitted
    pub fn request_path(&self) -> AuthResult<String> {
        match self.method {
            Method::Get if !self.params.is_empty() => {
                Ok(append_query(&self.endpoint, &encode_query(&self.params)?))
            }
            _ => Ok(self.endpoint.clone()),
        }
    }

    /// Endpoint string as it appears in the signature message
    pub fn canonical_endpoint(&self) -> AuthResult<String> {
        match self.method {
            Method::Get if !self.params.is_empty() => Ok(unquote_plus(&self.request_path()?)),
            _ => Ok(self.endpoint.clone()),
        }
    }

    /// Canonical JSON body, `{}` when none was set
    pub fn body_json(&self) -> String {
        match &self.body {
            Some(body) => canonical_json(body),
            None => "{}".to_string(),
        }
    }

    /// Body bytes to transmit, if the request carries a body
    pub fn body_bytes(&self) -> Option<Vec<u8>> {
        self.body.as_ref().map(|body| canonical_json(body).into_bytes())
    }

    /// The exact string that gets signed
    pub fn signature_message(&self) -> AuthResult<String> {
        Ok(format!(
            "{}{}{}",
            self.method.as_str(),
            self.canonical_endpoint()?,
            self.body_json()
        ))
    }
}

/// Authentication headers for exactly one request
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Value of `X-AUTH-APIKEY`
    pub api_key: String,
    /// Value of `X-AUTH-SIGNATURE`
    pub signature: String,
}

impl AuthHeaders {
    /// All headers to attach, including the JSON content type
    pub fn to_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("Content-Type", CONTENT_TYPE_JSON),
            (API_KEY_HEADER, self.api_key.as_str()),
            (SIGNATURE_HEADER, self.signature.as_str()),
        ]
    }
}

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeaders")
            .field(
                "api_key",
                &format!("{}...", self.api_key.chars().take(8).collect::<String>()),
            )
            .field(
                "signature",
                &format!("{}...", self.signature.chars().take(8).collect::<String>()),
            )
            .finish()
    }
}

/// Signs request descriptors with a set of credentials
///
/// Signing is pure: each call returns a fresh [`AuthHeaders`] and nothing is
/// cached, so one signer can be shared freely between tasks.
#[derive(Debug, Clone, Copy)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Compute the authentication headers for one request
    pub fn sign(&self, request: &SignedRequest) -> AuthResult<AuthHeaders> {
        let message = request.signature_message()?;
        trace!(
            method = %request.method(),
            endpoint = request.endpoint(),
            message_len = message.len(),
            "Signing request"
        );

        Ok(AuthHeaders {
            api_key: self.credentials.api_key().to_string(),
            signature: self.credentials.sign(message.as_bytes()),
        })
    }
}

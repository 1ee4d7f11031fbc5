//! Request signing for the CoinSwitch PRO REST API
//!
//! Every CoinSwitch call carries an `X-AUTH-SIGNATURE` header: an Ed25519
//! signature over the method, the decoded endpoint and the canonical JSON
//! body of that exact request. This crate owns the key material and the
//! byte-exact canonicalization.
//!
//! # Example
//!
//! ```no_run
//! use coinswitch_auth::{Credentials, RequestSigner, SignedRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     let request = SignedRequest::get("/trade/api/v2/trades")
//!         .with_param("exchange", "coinswitchx")
//!         .with_param("symbol", "btc/inr");
//!
//!     let headers = RequestSigner::new(&creds).sign(&request)?;
//!     println!("Signature: {}", headers.signature);
//!
//!     Ok(())
//! }
//! ```

mod canonical;
mod credentials;
mod error;
mod signer;

pub use canonical::{append_query, canonical_json, encode_query, unquote_plus};
pub use credentials::{Credentials, API_KEY_ENV, SECRET_KEY_ENV};
pub use error::{AuthError, AuthResult};
pub use signer::{
    AuthHeaders, Method, RequestSigner, SignedRequest, API_KEY_HEADER, CONTENT_TYPE_JSON,
    SIGNATURE_HEADER,
};

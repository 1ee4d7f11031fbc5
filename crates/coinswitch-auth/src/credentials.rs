//! Authentication credentials for the CoinSwitch API
//!
//! CoinSwitch authenticates each request with an Ed25519 signature made with
//! the account's secret key, which is handed out hex-encoded.
//!
//! # Security
//!
//! The secret seed is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey, SECRET_KEY_LENGTH};
use secrecy::zeroize::Zeroize;
use secrecy::{ExposeSecret, SecretBox};

use crate::error::{AuthError, AuthResult};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "COINSWITCH_API_KEY";
/// Environment variable holding the hex-encoded secret key
pub const SECRET_KEY_ENV: &str = "COINSWITCH_API_SECRET_KEY";

/// API credentials for authenticated requests
///
/// The secret seed is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// Ed25519 seed (decoded from hex, zeroized on drop)
    secret_key: SecretBox<[u8; SECRET_KEY_LENGTH]>,
}

impl Credentials {
    /// Create new credentials from an API key and a hex secret key
    ///
    /// # Arguments
    /// * `api_key` - Your CoinSwitch API key
    /// * `secret_key` - Your secret key, hex encoded. Either the 32-byte seed
    ///   or the 64-byte seed + public key encoding.
    ///
    /// # Returns
    /// Result containing Credentials or error if the secret key is malformed.
    /// This is checked up front so a bad key never reaches the network.
    pub fn new(api_key: impl Into<String>, secret_key: impl AsRef<str>) -> AuthResult<Self> {
        let mut decoded = hex::decode(secret_key.as_ref().trim())
            .map_err(|e| AuthError::InvalidSecretKey(format!("Invalid hex secret key: {}", e)))?;

        let seed = seed_from_bytes(&decoded);
        decoded.zeroize();

        Ok(Self {
            api_key: api_key.into(),
            secret_key: SecretBox::new(Box::new(seed?)),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINSWITCH_API_KEY` and `COINSWITCH_API_SECRET_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_KEY_ENV.to_string()))?;

        Self::new(api_key, secret_key)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Public half of the signing key
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key().verifying_key()
    }

    /// Sign raw message bytes, returning the lowercase hex signature
    pub fn sign(&self, message: &[u8]) -> String {
        let signature: Signature = self.signing_key().sign(message);
        hex::encode(signature.to_bytes())
    }

    /// Check a hex signature against this key
    pub fn verify(&self, message: &[u8], signature_hex: &str) -> AuthResult<()> {
        let bytes = hex::decode(signature_hex)
            .map_err(|e| AuthError::InvalidSignature(format!("Invalid hex signature: {}", e)))?;
        let signature = Signature::from_slice(&bytes)
            .map_err(|e| AuthError::InvalidSignature(e.to_string()))?;

        self.verifying_key()
            .verify(message, &signature)
            .map_err(|e| AuthError::InvalidSignature(e.to_string()))
    }

    fn signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(self.secret_key.expose_secret())
    }
}

fn seed_from_bytes(bytes: &[u8]) -> AuthResult<[u8; SECRET_KEY_LENGTH]> {
    match bytes.len() {
        SECRET_KEY_LENGTH => {
            let mut seed = [0u8; SECRET_KEY_LENGTH];
            seed.copy_from_slice(bytes);
            Ok(seed)
        }
        ed25519_dalek::KEYPAIR_LENGTH => {
            let mut keypair = [0u8; ed25519_dalek::KEYPAIR_LENGTH];
            keypair.copy_from_slice(bytes);
            let key = SigningKey::from_keypair_bytes(&keypair);
            keypair.zeroize();
            key.map(|k| k.to_bytes()).map_err(|e| {
                AuthError::InvalidSecretKey(format!("Public key does not match seed: {}", e))
            })
        }
        n => Err(AuthError::InvalidSecretKey(format!(
            "Expected {} or {} bytes, got {}",
            SECRET_KEY_LENGTH,
            ed25519_dalek::KEYPAIR_LENGTH,
            n
        ))),
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret_key: SecretBox::new(Box::new(*self.secret_key.expose_secret())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", self.api_key.chars().take(8).collect::<String>()),
            )
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

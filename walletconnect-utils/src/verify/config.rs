//! Configuration for the verify public key fetcher.

use serde::{Deserialize, Serialize};

/// Default endpoint serving the verify server's current public key.
pub const DEFAULT_PUBLIC_KEY_URL: &str = "https://verify.walletconnect.org/v2/public-key";

/// Configuration for [`super::HttpPublicKeyFetcher`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Full URL of the public key endpoint.
    #[serde(default = "default_public_key_url")]
    pub public_key_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_public_key_url() -> String {
    DEFAULT_PUBLIC_KEY_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            public_key_url: default_public_key_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl VerifyConfig {
    /// Create a configuration pointing at a custom endpoint.
    pub fn new(public_key_url: impl Into<String>) -> Self {
        Self {
            public_key_url: public_key_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

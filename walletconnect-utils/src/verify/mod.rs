//! Verify server public key retrieval.
//!
//! The verify server signs attestations about app origins. Clients fetch its
//! current public key together with the time the key stops being valid; the
//! caching policy on top of that belongs to the caller.

mod config;
mod http;

pub use config::{VerifyConfig, DEFAULT_PUBLIC_KEY_URL};
pub use http::HttpPublicKeyFetcher;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Public key document served by the verify server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyServerPublicKey {
    /// Encoded public key (JWK `x` coordinate or similar, opaque here).
    pub public_key: String,
    /// Expiry as unix seconds.
    pub expires_at: f64,
}

impl VerifyServerPublicKey {
    /// Whether the key has expired at `now` (unix seconds).
    pub fn is_expired_at(&self, now: f64) -> bool {
        now >= self.expires_at
    }
}

/// Source of the verify server's public key.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait PublicKeyFetcher {
    /// Fetch the current public key and its expiry.
    async fn fetch_public_key(&self) -> Result<VerifyServerPublicKey>;
}

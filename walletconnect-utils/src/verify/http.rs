//! HTTP implementation of [`PublicKeyFetcher`].
//!
//! Requires the `http-fetcher` feature for actual requests. Without it,
//! `fetch_public_key` returns an `Unimplemented` error.

use async_trait::async_trait;
#[cfg(feature = "http-fetcher")]
use std::time::Duration;

use super::{PublicKeyFetcher, VerifyConfig, VerifyServerPublicKey};
use crate::{Result, WalletConnectError};

/// Fetches the verify public key over HTTPS.
pub struct HttpPublicKeyFetcher {
    config: VerifyConfig,
    #[cfg(feature = "http-fetcher")]
    client: reqwest::Client,
}

impl HttpPublicKeyFetcher {
    /// Create a fetcher with the given configuration.
    #[cfg(feature = "http-fetcher")]
    pub fn new(config: VerifyConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WalletConnectError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create a fetcher with the given configuration (stub when feature disabled).
    #[cfg(not(feature = "http-fetcher"))]
    pub fn new(config: VerifyConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// GET the public key document.
    #[cfg(feature = "http-fetcher")]
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(url = %self.config.public_key_url)))]
    async fn request(&self) -> Result<VerifyServerPublicKey> {
        let response = self
            .client
            .get(&self.config.public_key_url)
            .send()
            .await
            .map_err(|e| WalletConnectError::Transport(format!("verify request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WalletConnectError::Transport(format!(
                "verify server returned {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        response.json::<VerifyServerPublicKey>().await.map_err(|e| {
            WalletConnectError::Serialization(format!("Failed to parse verify public key: {}", e))
        })
    }

    /// GET the public key document (stub when feature disabled).
    #[cfg(not(feature = "http-fetcher"))]
    async fn request(&self) -> Result<VerifyServerPublicKey> {
        Err(WalletConnectError::Unimplemented(
            "verify HTTP client not compiled - enable the 'http-fetcher' feature",
        ))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl PublicKeyFetcher for HttpPublicKeyFetcher {
    async fn fetch_public_key(&self) -> Result<VerifyServerPublicKey> {
        self.request().await
    }
}

#[cfg(all(test, not(feature = "http-fetcher")))]
mod tests {
    use super::*;
    use crate::WalletConnectErrorCode;

    #[tokio::test]
    async fn test_fetch_without_feature_is_unimplemented() {
        let fetcher = HttpPublicKeyFetcher::new(VerifyConfig::default()).unwrap();
        let err = fetcher.fetch_public_key().await.unwrap_err();
        assert_eq!(err.code(), WalletConnectErrorCode::Unimplemented);
    }
}

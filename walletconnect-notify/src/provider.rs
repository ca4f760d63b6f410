//! HTTP notify config provider.
//!
//! Looks app configs up in the explorer's notify-config endpoint.
//!
//! # Feature Flags
//!
//! Requires the `http-provider` feature for actual HTTP requests. Without it,
//! every lookup fails with `NotifyError::Unimplemented`.
//!
//! ```toml
//! [dependencies]
//! walletconnect-notify = { version = "0.2", features = ["http-provider"] }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
#[cfg(feature = "http-provider")]
use std::time::Duration;

use crate::config::{NotifyConfig, NotifyConfigProvider};
use crate::{NotifyError, Result};

/// Default explorer base URL.
pub const DEFAULT_EXPLORER_URL: &str = "https://explorer-api.walletconnect.com";

/// Configuration for [`HttpNotifyConfigProvider`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyConfigProviderConfig {
    /// Explorer base URL, without trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Project id sent with every lookup.
    pub project_id: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_EXPLORER_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl NotifyConfigProviderConfig {
    /// Create a configuration for `project_id` against the default explorer.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            project_id: project_id.into(),
            timeout_secs: default_timeout(),
        }
    }

    /// Set the explorer base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Full URL of the notify-config endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/w3i/v1/notify-config", self.base_url.trim_end_matches('/'))
    }
}

#[cfg_attr(not(feature = "http-provider"), allow(dead_code))]
#[derive(Deserialize)]
struct NotifyConfigResponse {
    data: NotifyConfig,
}

/// Resolves notify configs over HTTP.
pub struct HttpNotifyConfigProvider {
    config: NotifyConfigProviderConfig,
    #[cfg(feature = "http-provider")]
    client: reqwest::Client,
}

impl HttpNotifyConfigProvider {
    /// Create a provider with the given configuration.
    #[cfg(feature = "http-provider")]
    pub fn new(config: NotifyConfigProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NotifyError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create a provider with the given configuration (stub when feature disabled).
    #[cfg(not(feature = "http-provider"))]
    pub fn new(config: NotifyConfigProviderConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &NotifyConfigProviderConfig {
        &self.config
    }

    #[cfg(feature = "http-provider")]
    async fn fetch(&self, app_domain: &str) -> Result<NotifyConfig> {
        let response = self
            .client
            .get(self.config.endpoint())
            .query(&[
                ("projectId", self.config.project_id.as_str()),
                ("appDomain", app_domain),
            ])
            .send()
            .await
            .map_err(|e| NotifyError::Transport(format!("notify config request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(NotifyError::Transport(format!(
                "notify config lookup for {} returned {}: {}",
                app_domain,
                status.as_u16(),
                error_text
            ))
            .into());
        }

        let body = response
            .json::<NotifyConfigResponse>()
            .await
            .map_err(|e| NotifyError::Serialization(e.to_string()))?;
        Ok(body.data)
    }

    #[cfg(not(feature = "http-provider"))]
    async fn fetch(&self, _app_domain: &str) -> Result<NotifyConfig> {
        Err(NotifyError::Unimplemented(
            "notify config HTTP client not compiled - enable the 'http-provider' feature",
        )
        .into())
    }
}

#[async_trait]
impl NotifyConfigProvider for HttpNotifyConfigProvider {
    async fn resolve_notify_config(&self, app_domain: &str) -> Result<NotifyConfig> {
        self.fetch(app_domain).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_slash() {
        let config = NotifyConfigProviderConfig::new("p1").with_base_url("http://localhost:9000/");
        assert_eq!(config.endpoint(), "http://localhost:9000/w3i/v1/notify-config");
    }

    #[test]
    fn test_config_defaults() {
        let config: NotifyConfigProviderConfig =
            serde_json::from_str(r#"{"project_id": "p1"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_EXPLORER_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[cfg(not(feature = "http-provider"))]
    #[tokio::test]
    async fn test_lookup_without_feature_fails() {
        let provider = HttpNotifyConfigProvider::new(NotifyConfigProviderConfig::new("p1")).unwrap();
        let err = provider.resolve_notify_config("gm.example").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NotifyError>(),
            Some(NotifyError::Unimplemented(_))
        ));
    }
}

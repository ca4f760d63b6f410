//! Notify configuration published by an app domain.
//!
//! Every app that sends notifications advertises its metadata and the
//! notification types a subscriber may opt into. The configuration is looked
//! up per app domain through a [`NotifyConfigProvider`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::Result;

/// Display metadata of the app behind a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub icons: Vec<String>,
}

/// One notification type an app advertises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationType {
    /// Scope name, matched against a subscriber's selected scope.
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,
}

impl NotificationType {
    /// Create a notification type with just a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            id: None,
            image_urls: Vec::new(),
        }
    }
}

/// Resolved notify configuration of an app domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyConfig {
    pub metadata: AppMetadata,
    /// Authoritative list of scopes, in the order the app lists them.
    #[serde(default)]
    pub notification_types: Vec<NotificationType>,
}

/// Looks up the notify configuration of an app domain.
///
/// Implementations may hit the network; timeouts are theirs to enforce.
#[async_trait]
pub trait NotifyConfigProvider: Send + Sync {
    /// Resolve the configuration for `app_domain`.
    async fn resolve_notify_config(&self, app_domain: &str) -> Result<NotifyConfig>;
}

#[async_trait]
impl<T: NotifyConfigProvider + ?Sized> NotifyConfigProvider for Arc<T> {
    async fn resolve_notify_config(&self, app_domain: &str) -> Result<NotifyConfig> {
        (**self).resolve_notify_config(app_domain).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_config_document() {
        let json = r#"{
            "metadata": {"name": "Gm", "description": "gm dapp", "url": "https://gm.example"},
            "notificationTypes": [
                {"name": "promotional", "description": "Promotions", "id": "a1"},
                {"name": "alerts", "description": "Security alerts", "imageUrls": ["https://x/y.png"]}
            ]
        }"#;
        let config: NotifyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.metadata.name, "Gm");
        assert!(config.metadata.icons.is_empty());
        assert_eq!(config.notification_types.len(), 2);
        assert_eq!(config.notification_types[0].id.as_deref(), Some("a1"));
        assert_eq!(config.notification_types[1].image_urls.len(), 1);
    }
}

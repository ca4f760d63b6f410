use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use walletconnect_utils::{RelayProtocolOptions, Topic};

use crate::config::AppMetadata;
use crate::scope::ScopeValue;

/// A subscription record as returned by the notify server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyServerSubscription {
    pub app_domain: String,
    /// Hex-encoded symmetric key of the subscription topic
    pub sym_key: String,
    /// Scope names the subscriber selected
    #[serde(default)]
    pub scope: Vec<String>,
    /// CAIP-10 account, e.g. `eip155:1:0xab16...`
    pub account: String,
    /// Unix seconds
    pub expiry: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_authentication_key: Option<String>,
}

/// A validated subscription, ready for storage and sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifySubscription {
    pub topic: Topic,
    pub account: String,
    pub relay: RelayProtocolOptions,
    pub metadata: AppMetadata,
    pub scope: HashMap<String, ScopeValue>,
    /// Unix seconds
    pub expiry: i64,
    pub sym_key: String,
}

impl NotifySubscription {
    /// Expiry as a timestamp, if it is representable
    pub fn expiry_date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expiry, 0)
    }

    /// Check if subscription has expired
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() >= self.expiry
    }

    /// Names of the enabled scopes, sorted
    pub fn enabled_scopes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .scope
            .iter()
            .filter(|(_, value)| value.enabled)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

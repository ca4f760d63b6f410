//! # WalletConnect Notify Subscriptions
//!
//! Builds validated notify subscriptions from the records a notify server
//! returns for an account.
//!
//! ## Pipeline
//! For each server record:
//! - the app's notify config is resolved through a [`NotifyConfigProvider`]
//! - the record's symmetric key is decoded and its topic derived
//! - the selected scope is merged with the app's advertised notification types
//!
//! A record failing any step is dropped; the batch never fails as a whole.

pub mod builder;
pub mod config;
pub mod provider;
pub mod scope;
pub mod subscription;

pub use builder::NotifySubscriptionsBuilder;
pub use config::{AppMetadata, NotificationType, NotifyConfig, NotifyConfigProvider};
pub use provider::{HttpNotifyConfigProvider, NotifyConfigProviderConfig};
pub use scope::{resolve_scope, ScopeValue};
pub use subscription::{NotifyServerSubscription, NotifySubscription};

pub type Result<T> = anyhow::Result<T>;

#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    #[error("notify config for {app_domain} unavailable: {reason}")]
    ConfigUnavailable { app_domain: String, reason: String },
    #[error("invalid symmetric key: {0}")]
    InvalidSymKey(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}

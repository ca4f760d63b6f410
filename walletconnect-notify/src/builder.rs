//! Notify subscription building
//!
//! Turns a batch of server subscription records into validated
//! [`NotifySubscription`]s.
//!
//! ## Failure Policy
//!
//! Each record is built independently through [`NotifySubscriptionsBuilder::build_subscription`],
//! which returns a `Result`. The batch operations keep the successes and drop
//! the failures: a record whose app config cannot be resolved, or whose key is
//! malformed, contributes nothing to the output and the rest of the batch
//! continues. Callers only observe the difference between input and output.
//!
//! ## Cancellation
//!
//! [`NotifySubscriptionsBuilder::build_subscriptions_cancellable`] stops issuing
//! config lookups once its token fires and returns the subscriptions completed
//! so far, in input order. An in-flight lookup is abandoned.

use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;
use walletconnect_utils::{RelayProtocolOptions, SymmetricKey};

use crate::config::NotifyConfigProvider;
use crate::scope::resolve_scope;
use crate::subscription::{NotifyServerSubscription, NotifySubscription};
use crate::{NotifyError, Result};

/// Builds notify subscriptions from server records.
pub struct NotifySubscriptionsBuilder<P> {
    provider: P,
}

impl<P: NotifyConfigProvider> NotifySubscriptionsBuilder<P> {
    /// Create a builder resolving app configs through `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get the config provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build one subscription.
    ///
    /// Steps, in order: resolve the app's notify config, decode the key and
    /// derive the topic, resolve the scope.
    ///
    /// # Errors
    ///
    /// Fails if the config cannot be resolved or the key is not 32 hex-encoded
    /// bytes.
    pub async fn build_subscription(
        &self,
        record: &NotifyServerSubscription,
    ) -> Result<NotifySubscription> {
        let config = self
            .provider
            .resolve_notify_config(&record.app_domain)
            .await
            .map_err(|e| NotifyError::ConfigUnavailable {
                app_domain: record.app_domain.clone(),
                reason: format!("{:#}", e),
            })?;

        let topic = SymmetricKey::from_hex(&record.sym_key)
            .map_err(|e| NotifyError::InvalidSymKey(e.to_string()))?
            .derived_topic();

        let scope = resolve_scope(&record.scope, &config.notification_types);

        Ok(NotifySubscription {
            topic,
            account: record.account.clone(),
            relay: RelayProtocolOptions::irn(),
            metadata: config.metadata,
            scope,
            expiry: record.expiry,
            sym_key: record.sym_key.clone(),
        })
    }

    /// Build subscriptions one record at a time, dropping failed records.
    ///
    /// Output order follows input order.
    pub async fn build_subscriptions(
        &self,
        records: &[NotifyServerSubscription],
    ) -> Vec<NotifySubscription> {
        let mut result = Vec::with_capacity(records.len());

        for record in records {
            let outcome = self.build_subscription(record).await;
            if let Some(subscription) = keep_success(record, outcome) {
                result.push(subscription);
            }
        }

        result
    }

    /// Build subscriptions with up to `max_in_flight` config lookups running
    /// at once, dropping failed records.
    ///
    /// Output order follows input order regardless of completion order.
    pub async fn build_subscriptions_concurrent(
        &self,
        records: &[NotifyServerSubscription],
        max_in_flight: usize,
    ) -> Vec<NotifySubscription> {
        stream::iter(records)
            .map(|record| async move { (record, self.build_subscription(record).await) })
            .buffered(max_in_flight.max(1))
            .filter_map(|(record, outcome)| futures::future::ready(keep_success(record, outcome)))
            .collect()
            .await
    }

    /// Build subscriptions sequentially until `cancel` fires.
    ///
    /// Returns the subscriptions built before cancellation.
    pub async fn build_subscriptions_cancellable(
        &self,
        records: &[NotifyServerSubscription],
        cancel: &CancellationToken,
    ) -> Vec<NotifySubscription> {
        let mut result = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!(
                        processed = index,
                        total = records.len(),
                        "notify subscription build cancelled"
                    );
                    break;
                }
                outcome = self.build_subscription(record) => outcome,
            };
            if let Some(subscription) = keep_success(record, outcome) {
                result.push(subscription);
            }
        }

        result
    }
}

fn keep_success(
    record: &NotifyServerSubscription,
    outcome: Result<NotifySubscription>,
) -> Option<NotifySubscription> {
    match outcome {
        Ok(subscription) => Some(subscription),
        Err(e) => {
            tracing::debug!(
                app_domain = %record.app_domain,
                account = %record.account,
                "skipping notify subscription: {:#}",
                e
            );
            None
        }
    }
}

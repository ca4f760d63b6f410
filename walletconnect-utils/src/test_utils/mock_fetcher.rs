//! Scriptable public key fetcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::verify::{PublicKeyFetcher, VerifyServerPublicKey};
use crate::{Result, WalletConnectError};

/// Returns a configured key, or fails with a transport error when none is set.
#[derive(Default)]
pub struct MockPublicKeyFetcher {
    public_key: Mutex<Option<VerifyServerPublicKey>>,
    error: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MockPublicKeyFetcher {
    /// A fetcher that always returns `key`.
    pub fn with_key(key: VerifyServerPublicKey) -> Self {
        let fetcher = Self::default();
        fetcher.set_public_key(key);
        fetcher
    }

    /// Replace the key returned by subsequent fetches.
    pub fn set_public_key(&self, key: VerifyServerPublicKey) {
        *self.public_key.lock().unwrap() = Some(key);
    }

    /// Make subsequent fetches fail with `message`.
    pub fn set_error(&self, message: impl Into<String>) {
        *self.error.lock().unwrap() = Some(message.into());
    }

    /// Number of fetches so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PublicKeyFetcher for MockPublicKeyFetcher {
    async fn fetch_public_key(&self) -> Result<VerifyServerPublicKey> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(WalletConnectError::Transport(message));
        }
        self.public_key
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| WalletConnectError::Transport("no public key configured".into()))
    }
}

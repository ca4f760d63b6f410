//! WalletConnect pairing utilities.
//!
//! This crate stays stateless: it parses and renders pairing URIs, derives
//! relay topics from symmetric keys, and exposes collaborator traits for the
//! pieces that need the network.
//!
//! # Features
//!
//! - **Pairing URIs**: Parse and serialize `wc:` URIs with a canonical output form
//! - **Topic Derivation**: `topic = sha256(sym_key)`, identical on both peers
//! - **Verify**: Trait-based access to the verify server's public key
//!
//! # Example
//!
//! ```
//! use walletconnect_utils::{RelayProtocolOptions, SymmetricKey, WalletConnectUri};
//!
//! let key = SymmetricKey::from_bytes([1u8; 32]);
//! let uri = WalletConnectUri::new(key, RelayProtocolOptions::irn(), None);
//!
//! let parsed: WalletConnectUri = uri.to_string().parse().unwrap();
//! assert_eq!(parsed, uri);
//! assert_eq!(parsed.topic, parsed.sym_key.derived_topic());
//! ```

pub mod errors;
pub mod prelude;
pub mod protocol;
pub mod relay;
pub mod uri;
pub mod verify;

/// Test utilities for pairing and verify tests.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::{UriParseError, WalletConnectError, WalletConnectErrorCode};
pub use protocol::{derive_topic, SymmetricKey, Topic};
pub use relay::RelayProtocolOptions;
pub use uri::WalletConnectUri;

/// Common result alias for fallible non-parsing operations.
pub type Result<T> = std::result::Result<T, WalletConnectError>;

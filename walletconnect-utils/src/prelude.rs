//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use walletconnect_utils::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Core types: `Topic`, `SymmetricKey`, `RelayProtocolOptions`, `WalletConnectUri`
//! - Error types: `UriParseError`, `WalletConnectError`, `WalletConnectErrorCode`, `Result`
//! - Verify: `PublicKeyFetcher`, `VerifyServerPublicKey`

// Core types
pub use crate::{derive_topic, RelayProtocolOptions, SymmetricKey, Topic, WalletConnectUri};

// Error handling
pub use crate::errors::{UriParseError, WalletConnectError, WalletConnectErrorCode};
pub use crate::Result;

// Verify
pub use crate::verify::{PublicKeyFetcher, VerifyServerPublicKey};

//! Test utilities for WalletConnect peers.
//!
//! This module provides:
//! - Random key, topic and pairing URI fixtures
//! - A scriptable [`PublicKeyFetcher`](crate::verify::PublicKeyFetcher) mock
//!
//! ## Usage
//!
//! ```rust,ignore
//! use walletconnect_utils::test_utils::{stub_uri, MockPublicKeyFetcher};
//!
//! let (uri, string) = stub_uri(true);
//! assert_eq!(uri.to_string(), string);
//! ```

mod fixtures;
mod mock_fetcher;

pub use fixtures::{random_hex32, random_sym_key, stub_uri, TestFixtures};

pub use mock_fetcher::MockPublicKeyFetcher;

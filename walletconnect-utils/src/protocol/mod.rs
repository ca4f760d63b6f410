//! Canonical pairing protocol conventions.
//!
//! This module defines the single source of truth for:
//! - Symmetric key decoding and topic derivation
//! - The pairing protocol version and the default relay protocol name
//!
//! All WalletConnect clients (Rust, Kotlin, Swift, JS) must implement
//! equivalent logic and pass the same test vectors.
//!
//! # Topic Derivation
//!
//! `topic = hex(sha256(sym_key_bytes))`
//!
//! Both peers hold the same symmetric key, so both arrive at the same topic
//! without exchanging it.

mod topic;

pub use topic::*;

/// Pairing protocol version carried after `@` in a pairing URI.
pub const PAIRING_VERSION: &str = "2";

/// Relay protocol spoken by the WalletConnect relay network.
pub const RELAY_PROTOCOL_IRN: &str = "irn";

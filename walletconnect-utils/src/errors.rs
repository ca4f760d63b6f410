//! Error types for WalletConnect utilities.
//!
//! URI parsing has its own narrow error type so callers can tell exactly why a
//! pairing URI was rejected. Everything else funnels into [`WalletConnectError`].

use std::fmt;

/// Reason a pairing URI was rejected by [`crate::WalletConnectUri::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriParseError {
    /// The input does not start with the `wc:` scheme.
    #[error("invalid scheme, expected `wc:`")]
    InvalidScheme,

    /// The version tag after `@` is not `2`.
    #[error("unsupported pairing version: {0:?}")]
    UnsupportedVersion(String),

    /// The required `symKey` query parameter is absent.
    #[error("missing `symKey` parameter")]
    MissingSymKey,

    /// The required `relay-protocol` query parameter is absent.
    #[error("missing `relay-protocol` parameter")]
    MissingRelay,

    /// The input cannot form a valid URI at all.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// A hex field is not exactly 64 hex characters.
    #[error("{field} is not 64 hex characters (length {len})")]
    InvalidHexLength {
        /// Field that failed validation (`topic` or `symKey`).
        field: &'static str,
        /// Length of the rejected value.
        len: usize,
    },
}

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WalletConnectErrorCode {
    /// Feature not compiled in
    Unimplemented = 1000,
    /// Transport/network layer error
    Transport = 2000,
    /// Pairing URI rejected
    InvalidUri = 5000,
    /// Serialization error
    Serialization = 5002,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Error type for operations outside the pure URI parser.
#[derive(Debug)]
pub enum WalletConnectError {
    /// Feature not compiled in.
    Unimplemented(&'static str),

    /// Transport/network layer error.
    Transport(String),

    /// A pairing URI was rejected.
    Uri(UriParseError),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Internal/unexpected error.
    Internal(String),
}

impl WalletConnectError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> WalletConnectErrorCode {
        match self {
            Self::Unimplemented(_) => WalletConnectErrorCode::Unimplemented,
            Self::Transport(_) => WalletConnectErrorCode::Transport,
            Self::Uri(_) => WalletConnectErrorCode::InvalidUri,
            Self::Serialization(_) => WalletConnectErrorCode::Serialization,
            Self::Internal(_) => WalletConnectErrorCode::Internal,
        }
    }

    /// Returns true if this error is potentially recoverable by retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl fmt::Display for WalletConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unimplemented(label) => write!(f, "{} is not implemented", label),
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
            Self::Uri(err) => write!(f, "invalid pairing URI: {}", err),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for WalletConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Uri(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UriParseError> for WalletConnectError {
    fn from(err: UriParseError) -> Self {
        Self::Uri(err)
    }
}

impl From<serde_json::Error> for WalletConnectError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

//! Relay transport descriptor negotiated through the pairing URI.

use serde::{Deserialize, Serialize};

use crate::protocol::RELAY_PROTOCOL_IRN;

/// Names the relay protocol and carries optional opaque transport data.
///
/// # Example
///
/// ```
/// use walletconnect_utils::RelayProtocolOptions;
///
/// let relay = RelayProtocolOptions::irn();
/// assert_eq!(relay.protocol, "irn");
/// assert!(relay.data.is_none());
///
/// let custom = RelayProtocolOptions::new("waku", Some("bootstrap".into()));
/// assert_ne!(relay, custom);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelayProtocolOptions {
    /// Relay protocol identifier (e.g. `irn`). Never empty: a pairing URI
    /// with an empty `relay-protocol` does not parse.
    pub protocol: String,
    /// Opaque transport data, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl RelayProtocolOptions {
    /// Create relay options from a protocol name and optional data.
    ///
    /// `protocol` must be non-empty.
    pub fn new(protocol: impl Into<String>, data: Option<String>) -> Self {
        let protocol = protocol.into();
        debug_assert!(!protocol.is_empty(), "relay protocol must be non-empty");
        Self { protocol, data }
    }

    /// The WalletConnect relay network, without transport data.
    pub fn irn() -> Self {
        Self::new(RELAY_PROTOCOL_IRN, None)
    }
}

impl Default for RelayProtocolOptions {
    fn default() -> Self {
        Self::irn()
    }
}

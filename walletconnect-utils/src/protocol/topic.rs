//! Symmetric keys and the topics derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::UriParseError;

/// Length in bytes of a symmetric key and of a topic.
pub const KEY_LENGTH: usize = 32;

/// Length of the hex encoding of a key or topic.
pub const HEX_LENGTH: usize = KEY_LENGTH * 2;

/// Identifier of a publish/subscribe channel on the relay.
///
/// Externally always 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Topic([u8; KEY_LENGTH]);

impl Topic {
    /// Wrap raw topic bytes.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the raw topic bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex form (64 chars).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topic({})", self.to_hex())
    }
}

impl FromStr for Topic {
    type Err = UriParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex_field("topic", s).map(Self)
    }
}

impl Serialize for Topic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Shared secret between two peers.
///
/// Key bytes are zeroized on drop and never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_LENGTH]);

impl SymmetricKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Decode a key from its 64-character hex form.
    ///
    /// # Errors
    ///
    /// Returns `UriParseError::InvalidHexLength` unless the input decodes to
    /// exactly 32 bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use walletconnect_utils::SymmetricKey;
    ///
    /// let key = SymmetricKey::from_hex(&"ab".repeat(32)).unwrap();
    /// assert_eq!(key.to_hex(), "ab".repeat(32));
    /// assert!(SymmetricKey::from_hex("abcd").is_err());
    /// ```
    pub fn from_hex(hex_key: &str) -> Result<Self, UriParseError> {
        decode_hex_field("symKey", hex_key).map(Self)
    }

    /// Get the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex form (64 chars).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Derive the topic both holders of this key subscribe to.
    ///
    /// # Example
    ///
    /// ```
    /// use walletconnect_utils::SymmetricKey;
    ///
    /// let key = SymmetricKey::from_bytes([7u8; 32]);
    /// assert_eq!(key.derived_topic(), key.clone().derived_topic());
    /// assert_eq!(key.derived_topic().to_string().len(), 64);
    /// ```
    pub fn derived_topic(&self) -> Topic {
        derive_topic(self)
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(..)")
    }
}

/// Map a symmetric key to its topic.
///
/// `topic = sha256(key_bytes)`
pub fn derive_topic(key: &SymmetricKey) -> Topic {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    Topic(hasher.finalize().into())
}

/// Internal: decode a 64-char hex field into 32 bytes.
fn decode_hex_field(field: &'static str, value: &str) -> Result<[u8; KEY_LENGTH], UriParseError> {
    let err = || UriParseError::InvalidHexLength {
        field,
        len: value.len(),
    };
    if value.len() != HEX_LENGTH {
        return Err(err());
    }
    let mut out = [0u8; KEY_LENGTH];
    hex::decode_to_slice(value, &mut out).map_err(|_| err())?;
    Ok(out)
}

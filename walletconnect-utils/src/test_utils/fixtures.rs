//! Test fixtures and data generators.

use rand::RngCore;

use crate::{RelayProtocolOptions, SymmetricKey, Topic, WalletConnectUri};

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// Methods a wallet expects on a freshly proposed pairing.
    pub const PAIRING_METHODS: &'static [&'static str] =
        &["wc_sessionPropose", "wc_sessionAuthenticated"];

    /// Relay protocol used by the stubs.
    pub const RELAY_PROTOCOL: &'static str = "irn";
}

/// 32 random bytes as 64 lowercase hex chars.
pub fn random_hex32() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// A random symmetric key.
pub fn random_sym_key() -> SymmetricKey {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    SymmetricKey::from_bytes(bytes)
}

/// A pairing URI with a random topic and key, plus its expected string form.
///
/// The topic is random rather than derived so parse/serialize tests do not
/// depend on topic derivation.
pub fn stub_uri(include_methods: bool) -> (WalletConnectUri, String) {
    let topic = random_hex32();
    let sym_key = random_hex32();
    let protocol = TestFixtures::RELAY_PROTOCOL;

    let mut string = format!("wc:{topic}@2?symKey={sym_key}&relay-protocol={protocol}");
    let methods: Vec<String> = TestFixtures::PAIRING_METHODS
        .iter()
        .map(|m| m.to_string())
        .collect();
    if include_methods {
        string.push_str(&format!("&methods={}", methods.join(",")));
    }

    let uri = WalletConnectUri::with_topic(
        topic.parse::<Topic>().expect("random topic is valid hex"),
        SymmetricKey::from_hex(&sym_key).expect("random key is valid hex"),
        RelayProtocolOptions::new(protocol, None),
        include_methods.then_some(methods),
    );
    (uri, string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_hex_format() {
        let hex = random_hex32();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(hex, random_hex32());
    }

    #[test]
    fn test_stub_uri_string_shape() {
        let (uri, string) = stub_uri(false);
        assert!(string.starts_with(&format!("wc:{}@2?", uri.topic)));
        assert!(!string.contains("methods="));
    }
}

//! Pairing URI parser
//!
//! A pairing URI carries everything a peer needs to join a pairing: the topic,
//! the symmetric key protecting it, the relay to reach it through, and
//! optionally the JSON-RPC methods the pairing is expected to carry.
//!
//! # Format
//!
//! ```text
//! wc:<topic>@2?symKey=<hex>&relay-protocol=<name>[&relay-data=<data>][&methods=<m1,m2,...>]
//! ```
//!
//! `wc://<topic>@2?...` is accepted as well and parses to the same value, but
//! serialization always emits the colon-only form.
//!
//! # Examples
//!
//! ```rust
//! use walletconnect_utils::uri::WalletConnectUri;
//!
//! let topic = "a".repeat(64);
//! let key = "b".repeat(64);
//! let input = format!("wc:{topic}@2?symKey={key}&relay-protocol=irn&methods=wc_sessionPropose");
//!
//! let uri = WalletConnectUri::parse(&input).unwrap();
//! assert_eq!(uri.relay.protocol, "irn");
//! assert_eq!(uri.methods.as_deref(), Some(&["wc_sessionPropose".to_string()][..]));
//! assert_eq!(uri.to_string(), input);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

use url::Url;

use crate::errors::UriParseError;
use crate::protocol::{SymmetricKey, Topic, PAIRING_VERSION};
use crate::relay::RelayProtocolOptions;

/// URI scheme prefix, colon included.
pub const SCHEME_PREFIX: &str = "wc:";

const PARAM_SYM_KEY: &str = "symKey";
const PARAM_RELAY_PROTOCOL: &str = "relay-protocol";
const PARAM_RELAY_DATA: &str = "relay-data";
const PARAM_METHODS: &str = "methods";

/// A parsed pairing URI.
///
/// `methods == None` means the URI carried no `methods` parameter, which is
/// different from carrying an empty one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConnectUri {
    /// Pairing topic.
    pub topic: Topic,
    /// Symmetric key for the pairing topic.
    pub sym_key: SymmetricKey,
    /// Relay to reach the topic through.
    pub relay: RelayProtocolOptions,
    /// Expected JSON-RPC methods, in the order given.
    pub methods: Option<Vec<String>>,
}

impl WalletConnectUri {
    /// Build a URI whose topic is derived from `sym_key`.
    pub fn new(
        sym_key: SymmetricKey,
        relay: RelayProtocolOptions,
        methods: Option<Vec<String>>,
    ) -> Self {
        Self {
            topic: sym_key.derived_topic(),
            sym_key,
            relay,
            methods,
        }
    }

    /// Build a URI from explicit fields.
    pub fn with_topic(
        topic: Topic,
        sym_key: SymmetricKey,
        relay: RelayProtocolOptions,
        methods: Option<Vec<String>>,
    ) -> Self {
        Self {
            topic,
            sym_key,
            relay,
            methods,
        }
    }

    /// Parse a pairing URI string.
    ///
    /// # Errors
    ///
    /// - `InvalidScheme` if the input does not start with `wc:`
    /// - `MalformedUrl` if the input is not a valid URL, contains control
    ///   characters, has a bad `%` escape, or has no `@version`
    /// - `UnsupportedVersion` if the version is not `2`
    /// - `InvalidHexLength` if the topic or `symKey` is not 64 hex chars
    /// - `MissingSymKey` / `MissingRelay` if a required parameter is absent
    pub fn parse(input: &str) -> Result<Self, UriParseError> {
        let input = input.trim();
        if input.chars().any(|c| c.is_ascii_control()) {
            return Err(UriParseError::MalformedUrl(
                "control character in input".into(),
            ));
        }

        let rest = input
            .strip_prefix(SCHEME_PREFIX)
            .ok_or(UriParseError::InvalidScheme)?;

        Url::parse(input).map_err(|e| UriParseError::MalformedUrl(e.to_string()))?;

        // `wc://` is an authority-style spelling of the same URI
        let rest = rest.strip_prefix("//").unwrap_or(rest);
        let rest = rest.split('#').next().unwrap_or(rest);

        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let (topic, version) = path
            .split_once('@')
            .ok_or_else(|| UriParseError::MalformedUrl("missing `@` version tag".into()))?;

        if version != PAIRING_VERSION {
            return Err(UriParseError::UnsupportedVersion(version.to_string()));
        }
        let topic = Topic::from_str(topic)?;

        let mut sym_key = None;
        let mut relay_protocol = None;
        let mut relay_data = None;
        let mut methods = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(key)?;
            let value = decode(value)?;
            match key.as_ref() {
                PARAM_SYM_KEY if sym_key.is_none() => {
                    sym_key = Some(value.into_owned());
                }
                PARAM_RELAY_PROTOCOL if relay_protocol.is_none() => {
                    relay_protocol = Some(value.into_owned());
                }
                PARAM_RELAY_DATA if relay_data.is_none() => {
                    relay_data = Some(value.into_owned());
                }
                PARAM_METHODS if methods.is_none() => {
                    methods = Some(split_methods(&value));
                }
                _ => {
                    // Ignore unknown and repeated parameters
                }
            }
        }

        let sym_key = sym_key.ok_or(UriParseError::MissingSymKey)?;
        let sym_key = SymmetricKey::from_hex(&sym_key)?;
        let relay_protocol = relay_protocol
            .filter(|p| !p.is_empty())
            .ok_or(UriParseError::MissingRelay)?;

        Ok(Self {
            topic,
            sym_key,
            relay: RelayProtocolOptions::new(relay_protocol, relay_data),
            methods,
        })
    }

    /// Canonical string form, always using the colon-only scheme.
    pub fn to_uri_string(&self) -> String {
        let mut out = format!(
            "{SCHEME_PREFIX}{}@{PAIRING_VERSION}?{PARAM_SYM_KEY}={}&{PARAM_RELAY_PROTOCOL}={}",
            self.topic,
            self.sym_key.to_hex(),
            encode(&self.relay.protocol),
        );
        if let Some(data) = &self.relay.data {
            out.push_str(&format!("&{PARAM_RELAY_DATA}={}", encode(data)));
        }
        if let Some(methods) = &self.methods {
            let joined = methods
                .iter()
                .map(|m| encode(m))
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&format!("&{PARAM_METHODS}={joined}"));
        }
        out
    }
}

/// Percent-decode a query component. `+` stays a literal plus.
fn decode(component: &str) -> Result<Cow<'_, str>, UriParseError> {
    urlencoding::decode(component)
        .map_err(|e| UriParseError::MalformedUrl(format!("invalid percent-encoding: {}", e)))
}

/// An empty `methods=` value is an empty list, not a list with one empty name.
fn split_methods(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}

/// Percent-encode everything outside the unreserved set, so `+`, `,` and
/// space survive as `%2B`, `%2C` and `%20`.
fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

impl fmt::Display for WalletConnectUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri_string())
    }
}

impl FromStr for WalletConnectUri {
    type Err = UriParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for WalletConnectUri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_uri_string())
    }
}

impl<'de> Deserialize<'de> for WalletConnectUri {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{random_sym_key, stub_uri};

    #[test]
    fn test_init_uri_to_string() {
        let (uri, string) = stub_uri(true);
        let output = WalletConnectUri::parse(&uri.to_string()).unwrap();
        assert_eq!(output, uri);
        assert_eq!(output.to_string(), string);
    }

    #[test]
    fn test_init_string_to_uri() {
        let (_, string) = stub_uri(true);
        let uri = WalletConnectUri::parse(&string).unwrap();
        assert_eq!(uri.to_string(), string);
    }

    #[test]
    fn test_authority_form_serializes_to_colon_form() {
        let (uri, expected) = stub_uri(true);
        let input = expected.replacen("wc:", "wc://", 1);
        let parsed = WalletConnectUri::parse(&input).unwrap();
        assert_eq!(parsed, uri);
        assert_eq!(parsed.to_string(), expected);
    }

    #[test]
    fn test_bad_scheme() {
        let (_, string) = stub_uri(true);
        let input = string.replacen("wc:", "", 1);
        assert_eq!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::InvalidScheme)
        );
        let input = string.replacen("wc:", "http:", 1);
        assert_eq!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::InvalidScheme)
        );
    }

    #[test]
    fn test_malformed_url() {
        assert!(matches!(
            WalletConnectUri::parse("wc://<"),
            Err(UriParseError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_missing_version_tag() {
        let (uri, _) = stub_uri(false);
        let input = format!("wc:{}?symKey={}&relay-protocol=irn", uri.topic, uri.sym_key.to_hex());
        assert!(matches!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let (_, string) = stub_uri(false);
        let input = string.replacen("@2?", "@1?", 1);
        assert_eq!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::UnsupportedVersion("1".into()))
        );
    }

    #[test]
    fn test_no_sym_key_param() {
        let (uri, string) = stub_uri(true);
        let input = string.replace(&format!("symKey={}", uri.sym_key.to_hex()), "");
        assert_eq!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::MissingSymKey)
        );
    }

    #[test]
    fn test_no_relay_param() {
        let (uri, string) = stub_uri(true);
        let input = string.replace(&format!("&relay-protocol={}", uri.relay.protocol), "");
        assert_eq!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::MissingRelay)
        );
    }

    #[test]
    fn test_short_sym_key() {
        let (uri, string) = stub_uri(false);
        let input = string.replace(&uri.sym_key.to_hex(), "abcd");
        assert_eq!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::InvalidHexLength {
                field: "symKey",
                len: 4
            })
        );
    }

    #[test]
    fn test_bad_topic() {
        let (uri, string) = stub_uri(false);
        let input = string.replace(&uri.topic.to_string(), "xyz");
        assert_eq!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::InvalidHexLength {
                field: "topic",
                len: 3
            })
        );
    }

    #[test]
    fn test_methods_included() {
        let (expected, string) = stub_uri(true);
        let uri = WalletConnectUri::parse(&string).unwrap();
        assert_eq!(
            uri.methods,
            Some(vec![
                "wc_sessionPropose".to_string(),
                "wc_sessionAuthenticated".to_string()
            ])
        );
        assert_eq!(uri.topic, expected.topic);
        assert_eq!(uri.sym_key, expected.sym_key);
        assert_eq!(uri.relay.protocol, expected.relay.protocol);
    }

    #[test]
    fn test_methods_excluded() {
        let (expected, string) = stub_uri(false);
        let uri = WalletConnectUri::parse(&string).unwrap();
        assert!(uri.methods.is_none());
        assert_eq!(uri.to_string(), expected.to_string());
    }

    #[test]
    fn test_empty_methods_is_not_absent() {
        let (_, string) = stub_uri(false);
        let uri = WalletConnectUri::parse(&format!("{string}&methods=")).unwrap();
        assert_eq!(uri.methods, Some(vec![]));
        assert_eq!(WalletConnectUri::parse(&uri.to_string()).unwrap(), uri);
    }

    #[test]
    fn test_relay_data_round_trip() {
        let (uri, _) = stub_uri(false);
        let uri = WalletConnectUri {
            relay: RelayProtocolOptions::new("irn", Some("a b&c=d/e".into())),
            ..uri
        };
        let string = uri.to_string();
        assert!(string.contains("&relay-data=a%20b%26c%3Dd%2Fe"));
        assert_eq!(WalletConnectUri::parse(&string).unwrap(), uri);
    }

    #[test]
    fn test_plus_is_literal() {
        let (uri, string) = stub_uri(false);
        let input = format!("{string}&relay-data=ab+cd%3D%3D&methods=wc_a+b,wc_c");
        let parsed = WalletConnectUri::parse(&input).unwrap();
        assert_eq!(parsed.relay.data.as_deref(), Some("ab+cd=="));
        assert_eq!(
            parsed.methods,
            Some(vec!["wc_a+b".to_string(), "wc_c".to_string()])
        );
        assert_eq!(parsed.topic, uri.topic);

        let output = parsed.to_string();
        assert!(output.contains("&relay-data=ab%2Bcd%3D%3D"));
        assert!(output.contains("&methods=wc_a%2Bb,wc_c"));
        assert_eq!(WalletConnectUri::parse(&output).unwrap(), parsed);
    }

    #[test]
    fn test_space_encodes_as_percent_20() {
        let (uri, _) = stub_uri(false);
        let uri = WalletConnectUri {
            relay: RelayProtocolOptions::new("irn", Some("a b".into())),
            ..uri
        };
        assert!(uri.to_string().ends_with("&relay-data=a%20b"));
    }

    #[test]
    fn test_invalid_utf8_escape_is_malformed() {
        let (_, string) = stub_uri(false);
        assert!(matches!(
            WalletConnectUri::parse(&format!("{string}&relay-data=%FF")),
            Err(UriParseError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        let (uri, string) = stub_uri(false);
        let key = uri.sym_key.to_hex();
        let input = string.replace(&key, &format!("{}\n{}", &key[..32], &key[32..]));
        assert!(matches!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::MalformedUrl(_))
        ));
        let input = string.replacen("@2", "\t@2", 1);
        assert!(matches!(
            WalletConnectUri::parse(&input),
            Err(UriParseError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_unknown_params_ignored() {
        let (uri, string) = stub_uri(true);
        let parsed = WalletConnectUri::parse(&format!("{string}&expiryTimestamp=1700000000")).unwrap();
        assert_eq!(parsed, uri);
    }

    #[test]
    fn test_new_derives_topic() {
        let key = random_sym_key();
        let uri = WalletConnectUri::new(key.clone(), RelayProtocolOptions::irn(), None);
        assert_eq!(uri.topic, key.derived_topic());
    }

    #[test]
    fn test_serde_as_string() {
        let (uri, string) = stub_uri(true);
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, format!("\"{string}\""));
        let back: WalletConnectUri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uri);
        assert!(serde_json::from_str::<WalletConnectUri>("\"wc://<\"").is_err());
    }
}

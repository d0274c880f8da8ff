use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// An `e=` or `p=` entry, optionally carrying a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Address or number
    pub value: String,
    /// Name in parentheses after the value
    pub name: Option<String>,
}

impl Contact {
    /// A contact without a display name.
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            name: None,
        }
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// A `b=<modifier>:<kbps>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandwidthDescription {
    /// CT (conference total), AS (application specific), or an extension token
    pub modifier: String,
    /// Kilobits per second
    pub value: u64,
}

impl BandwidthDescription {
    /// Creates a bandwidth line.
    pub fn new(modifier: &str, value: u64) -> Self {
        Self {
            modifier: modifier.to_string(),
            value,
        }
    }
}

/// An `a=` line. `value` is `None` for property attributes such as
/// `a=recvonly`, and `Some("")` for `a=name:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Text before the first `:`
    pub name: String,
    /// Text after the first `:`, if there was one
    pub value: Option<String>,
}

impl Attribute {
    /// A property attribute with no value.
    pub fn property(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
        }
    }

    /// A value attribute, written as `name:value`.
    pub fn value(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }
}

/// Method token of a `k=` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionMethod {
    /// Key given untransformed
    Clear,
    /// Key given base64 encoded
    Base64,
    /// Key fetched from a URI
    Uri,
    /// User is prompted for the key; no key text
    Prompt,
}

impl EncryptionMethod {
    /// The wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            EncryptionMethod::Clear => "clear",
            EncryptionMethod::Base64 => "base64",
            EncryptionMethod::Uri => "uri",
            EncryptionMethod::Prompt => "prompt",
        }
    }
}

/// Returned when a `k=` method is not one of the four RFC 4566 methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncryptionMethod(
    /// The unrecognized token
    pub String,
);

impl fmt::Display for UnknownEncryptionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown encryption method {:?}", self.0)
    }
}

impl std::error::Error for UnknownEncryptionMethod {}

impl FromStr for EncryptionMethod {
    type Err = UnknownEncryptionMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(EncryptionMethod::Clear),
            "base64" => Ok(EncryptionMethod::Base64),
            "uri" => Ok(EncryptionMethod::Uri),
            "prompt" => Ok(EncryptionMethod::Prompt),
            other => Err(UnknownEncryptionMethod(other.to_string())),
        }
    }
}

/// The legacy `k=` line (deprecated by RFC 4566 but still accepted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionKey {
    /// How `key` is to be read
    pub method: EncryptionMethod,
    /// Text after the `:`, absent for `prompt`
    pub key: Option<String>,
}

impl EncryptionKey {
    /// Creates a key line.
    pub fn new(method: EncryptionMethod, key: Option<&str>) -> Self {
        Self {
            method,
            key: key.map(str::to_string),
        }
    }

    /// Raw key bytes for the `base64` method.
    pub fn decoded_key(&self) -> Option<Vec<u8>> {
        match (self.method, self.key.as_deref()) {
            (EncryptionMethod::Base64, Some(key)) => BASE64_STANDARD.decode(key).ok(),
            _ => None,
        }
    }

    /// Key location for the `uri` method.
    pub fn key_uri(&self) -> Option<Url> {
        match (self.method, self.key.as_deref()) {
            (EncryptionMethod::Uri, Some(key)) => Url::parse(key).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption_method_tokens() {
        for method in [
            EncryptionMethod::Clear,
            EncryptionMethod::Base64,
            EncryptionMethod::Uri,
            EncryptionMethod::Prompt,
        ] {
            assert_eq!(method.as_str().parse::<EncryptionMethod>(), Ok(method));
        }
        assert!("rot13".parse::<EncryptionMethod>().is_err());
    }

    #[test]
    fn test_key_material() {
        let key = EncryptionKey::new(EncryptionMethod::Base64, Some("c2VjcmV0"));
        assert_eq!(key.decoded_key(), Some(b"secret".to_vec()));
        assert!(key.key_uri().is_none());

        let key = EncryptionKey::new(EncryptionMethod::Uri, Some("https://keys.example.com/k1"));
        assert_eq!(key.key_uri().unwrap().host_str(), Some("keys.example.com"));
        assert!(key.decoded_key().is_none());

        let key = EncryptionKey::new(EncryptionMethod::Prompt, None);
        assert!(key.decoded_key().is_none());
        assert!(key.key_uri().is_none());
    }
}

//! Credential lookup in provider settings.
//!
//! Providers name their secret differently (`apikey`, `bottoken`, ...). The
//! first non-empty string found in [`CREDENTIAL_KEYS`] order is the provider's
//! credential; any further secret fields are ignored.

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};

/// Recognized credential field names, in priority order.
pub const CREDENTIAL_KEYS: &[&str] = &["apikey", "bottoken", "token", "access_token", "key", "secret"];

/// A secure API key that prevents accidental logging.
///
/// The key is wrapped in `SecretString` which:
/// - Zeroizes memory on drop
/// - Requires explicit `.expose_secret()` to access the value
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Create a new API key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Expose the secret key value.
    ///
    /// Use sparingly - only when actually sending to an API.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Return the raw credential string of a settings object, if any.
pub fn credential_value(settings: &Map<String, Value>) -> Option<&str> {
    CREDENTIAL_KEYS
        .iter()
        .filter_map(|key| settings.get(*key)?.as_str())
        .find(|value| !value.is_empty())
}

/// Return the credential of a settings object as an [`ApiKey`].
pub fn credential(settings: &Map<String, Value>) -> Option<ApiKey> {
    credential_value(settings).map(ApiKey::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret-key-12345");
        let debug = format!("{:?}", key);
        assert_eq!(debug, "ApiKey([REDACTED])");
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn api_key_expose_secret_returns_value() {
        let key = ApiKey::new("sk-secret-key-12345");
        assert_eq!(key.expose_secret(), "sk-secret-key-12345");
    }

    #[test]
    fn credential_follows_priority_order() {
        let s = settings(json!({"secret": "s", "token": "t", "apikey": "a"}));
        assert_eq!(credential_value(&s), Some("a"));

        let s = settings(json!({"secret": "s", "key": "k"}));
        assert_eq!(credential_value(&s), Some("k"));
    }

    #[test]
    fn credential_skips_empty_and_non_string_values() {
        let s = settings(json!({"apikey": "", "bottoken": 12345, "token": "tok"}));
        assert_eq!(credential_value(&s), Some("tok"));
    }

    #[test]
    fn credential_absent() {
        let s = settings(json!({"endpoint": "https://example.com"}));
        assert!(credential_value(&s).is_none());
        assert!(credential(&s).is_none());
    }
}

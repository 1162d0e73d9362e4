//! Service tester trait, result type and registry.
//!
//! A [`ServiceTester`] knows how to check one provider type's connectivity
//! and credentials. Testers are collected once at startup into a
//! [`TesterRegistry`], which callers query with a plain key lookup.
//!
//! # Example
//!
//! ```ignore
//! use aidash_core::testers::TesterRegistry;
//!
//! let registry = TesterRegistry::with_builtin_testers(reqwest::Client::new());
//! if let Some(tester) = registry.get("openai") {
//!     let result = tester.test(&settings).await?;
//! }
//! ```

mod http;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

pub use http::{AuthStyle, HttpTester, PROBES, Probe, builtin_testers, http_client};

use crate::Result;

/// Outcome of a single service test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Whether the service is usable.
    pub ok: bool,
    /// Whether the credential was accepted; `None` when it could not be judged.
    pub apikey_valid: Option<bool>,
    /// Human-readable explanation.
    pub message: String,
}

impl TestResult {
    /// Service reachable and credential accepted.
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            apikey_valid: Some(true),
            message: message.into(),
        }
    }

    /// Credential missing or rejected.
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            apikey_valid: Some(false),
            message: message.into(),
        }
    }

    /// Failure that says nothing about the credential.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            apikey_valid: None,
            message: message.into(),
        }
    }
}

/// Connectivity and credential check for one provider type.
#[async_trait]
pub trait ServiceTester: Send + Sync {
    /// Provider type handled by this tester (e.g. "openai").
    fn service_type(&self) -> &str;

    /// Test the provider described by `settings`.
    ///
    /// Returns `Err` only for failures the tester cannot express as a
    /// [`TestResult`], such as a dropped connection.
    async fn test(&self, settings: &Map<String, Value>) -> Result<TestResult>;
}

/// Provider type to tester map, populated once at startup.
///
/// Iteration follows registration order. Registering a type twice replaces
/// the earlier tester but keeps its position.
#[derive(Default, Clone)]
pub struct TesterRegistry {
    testers: Vec<Arc<dyn ServiceTester>>,
}

impl TesterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in HTTP testers.
    pub fn with_builtin_testers(client: reqwest::Client) -> Self {
        let mut registry = Self::new();
        for tester in builtin_testers(client) {
            registry.register(tester);
        }
        registry
    }

    /// Add a tester, replacing any tester already registered for its type.
    pub fn register(&mut self, tester: Arc<dyn ServiceTester>) {
        let service_type = tester.service_type().to_string();
        match self
            .testers
            .iter_mut()
            .find(|existing| existing.service_type() == service_type)
        {
            Some(slot) => {
                debug!(service_type = %service_type, "replacing registered tester");
                *slot = tester;
            }
            None => {
                debug!(service_type = %service_type, "registered tester");
                self.testers.push(tester);
            }
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, tester: Arc<dyn ServiceTester>) -> Self {
        self.register(tester);
        self
    }

    /// Tester for a provider type.
    pub fn get(&self, service_type: &str) -> Option<&Arc<dyn ServiceTester>> {
        self.testers
            .iter()
            .find(|tester| tester.service_type() == service_type)
    }

    /// Whether a tester is registered for a provider type.
    pub fn contains(&self, service_type: &str) -> bool {
        self.get(service_type).is_some()
    }

    /// Testers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ServiceTester>> {
        self.testers.iter()
    }

    /// Registered provider types in registration order.
    pub fn types(&self) -> Vec<&str> {
        self.testers.iter().map(|t| t.service_type()).collect()
    }

    pub fn len(&self) -> usize {
        self.testers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.testers.is_empty()
    }
}

impl std::fmt::Debug for TesterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TesterRegistry")
            .field("types", &self.types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tester that answers with a fixed message.
    struct FixedTester {
        service_type: &'static str,
        message: &'static str,
    }

    #[async_trait]
    impl ServiceTester for FixedTester {
        fn service_type(&self) -> &str {
            self.service_type
        }

        async fn test(&self, _settings: &Map<String, Value>) -> Result<TestResult> {
            Ok(TestResult::passed(self.message))
        }
    }

    fn fixed(service_type: &'static str, message: &'static str) -> Arc<dyn ServiceTester> {
        Arc::new(FixedTester {
            service_type,
            message,
        })
    }

    #[test]
    fn registry_preserves_registration_order() {
        let registry = TesterRegistry::new()
            .with(fixed("deepl", "d"))
            .with(fixed("openai", "o"))
            .with(fixed("qdrant", "q"));

        assert_eq!(registry.types(), vec!["deepl", "openai", "qdrant"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn registry_last_registration_wins_in_place() {
        let registry = TesterRegistry::new()
            .with(fixed("openai", "first"))
            .with(fixed("deepl", "d"))
            .with(fixed("openai", "second"));

        assert_eq!(registry.types(), vec!["openai", "deepl"]);

        let tester = registry.get("openai").unwrap();
        let result = tokio_test::block_on(tester.test(&Map::new())).unwrap();
        assert_eq!(result.message, "second");
    }

    #[test]
    fn registry_lookup_misses() {
        let registry = TesterRegistry::new().with(fixed("openai", "o"));
        assert!(registry.contains("openai"));
        assert!(!registry.contains("ghost"));
        assert!(registry.get("").is_none());
        assert!(TesterRegistry::new().is_empty());
    }

    #[test]
    fn builtin_registry_covers_known_providers() {
        let registry = TesterRegistry::with_builtin_testers(reqwest::Client::new());
        for service_type in [
            "openai",
            "deepseek",
            "openrouter",
            "deepl",
            "base3qdrant",
            "base3unstructured",
            "qualituschat",
            "qualitusembedding",
            "qualitusvectordb",
            "qualitusparser",
            "telegram",
        ] {
            assert!(registry.contains(service_type), "missing {service_type}");
        }
    }

    #[test]
    fn test_result_serializes_null_apikey_validity() {
        let json = serde_json::to_value(TestResult::failed("boom")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"ok": false, "apikey_valid": null, "message": "boom"})
        );
    }

    #[test]
    fn test_result_constructors() {
        assert_eq!(TestResult::passed("OK").apikey_valid, Some(true));
        assert!(TestResult::passed("OK").ok);
        assert_eq!(TestResult::invalid_key("bad").apikey_valid, Some(false));
        assert!(!TestResult::invalid_key("bad").ok);
    }
}

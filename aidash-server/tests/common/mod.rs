//! Shared test utilities for aidash-server integration tests

use std::sync::Arc;

use aidash_core::{
    ConfigSource, Error, Result, ServiceTester, StaticConfigSource, TestResult, TesterRegistry,
};
use aidash_server::{AppState, create_router};
use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Map, Value};

/// Tester answering with a fixed result
pub struct StubTester {
    pub service_type: &'static str,
    pub result: TestResult,
}

#[async_trait]
impl ServiceTester for StubTester {
    fn service_type(&self) -> &str {
        self.service_type
    }

    async fn test(&self, _settings: &Map<String, Value>) -> Result<TestResult> {
        Ok(self.result.clone())
    }
}

/// Tester that always fails with a transport error
pub struct BrokenTester(pub &'static str);

#[async_trait]
impl ServiceTester for BrokenTester {
    fn service_type(&self) -> &str {
        self.0
    }

    async fn test(&self, _settings: &Map<String, Value>) -> Result<TestResult> {
        Err(Error::Request("connection reset by peer".to_string()))
    }
}

/// Registry with a passing `openai`, a rejecting `deepl` and a broken `base3qdrant`
pub fn stub_registry() -> TesterRegistry {
    TesterRegistry::new()
        .with(Arc::new(StubTester {
            service_type: "openai",
            result: TestResult::passed("OK"),
        }))
        .with(Arc::new(StubTester {
            service_type: "deepl",
            result: TestResult::invalid_key("Invalid API key (HTTP 403)"),
        }))
        .with(Arc::new(BrokenTester("base3qdrant")))
}

/// Creates a test server over a static configuration
#[allow(dead_code)]
pub fn create_test_server(config: Value) -> TestServer {
    create_test_server_with_source(Arc::new(StaticConfigSource::new(config)))
}

/// Creates a test server over any configuration source
#[allow(dead_code)]
pub fn create_test_server_with_source(source: Arc<dyn ConfigSource>) -> TestServer {
    let state = Arc::new(AppState::new(source, Arc::new(stub_registry())));
    TestServer::new(create_router(state)).unwrap()
}

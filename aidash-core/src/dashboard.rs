//! Configuration source and tester registry bundled for request handlers.

use std::sync::Arc;

use crate::config::ConfigSource;
use crate::dispatch;
use crate::presentation::{Group, build_groups};
use crate::testers::{TestResult, TesterRegistry};
use crate::Result;

/// The two dashboard operations over one configuration source.
///
/// Every call reads the configuration afresh; nothing is cached between calls.
#[derive(Clone)]
pub struct Dashboard {
    source: Arc<dyn ConfigSource>,
    testers: Arc<TesterRegistry>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn ConfigSource>, testers: Arc<TesterRegistry>) -> Self {
        Self { source, testers }
    }

    pub fn testers(&self) -> &TesterRegistry {
        &self.testers
    }

    /// Grouped, redacted listing of the configured services.
    pub fn groups(&self) -> Vec<Group> {
        build_groups(&self.source.get(), &self.testers)
    }

    /// Test one service by provider type.
    pub async fn run_test(&self, service_type: &str) -> Result<TestResult> {
        let config = self.source.get();
        dispatch::run_test(&config, &self.testers, service_type).await
    }
}

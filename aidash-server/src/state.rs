//! Shared application state for the aidash server

use std::sync::Arc;

use aidash_core::{ConfigSource, Dashboard, TesterRegistry};
use chrono::{DateTime, Utc};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service listing and test dispatch
    pub dashboard: Dashboard,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state over a configuration source and tester registry
    pub fn new(source: Arc<dyn ConfigSource>, testers: Arc<TesterRegistry>) -> Self {
        Self {
            dashboard: Dashboard::new(source, testers),
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

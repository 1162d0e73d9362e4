//! On-demand service test dispatch.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::provider_settings;
use crate::testers::{TestResult, TesterRegistry};
use crate::Result;

pub const MISSING_SERVICE: &str = "Missing service";
pub const UNKNOWN_SERVICE: &str = "Unknown service";
pub const NO_TESTER: &str = "No tester available";

/// Run the registered tester for `service_type` against its settings.
///
/// Precondition failures come back as `Ok` results with `ok: false`, checked
/// in order: empty type, missing or non-mapping settings, no tester. Past
/// that the tester's answer is returned untouched, errors included.
#[instrument(name = "dispatch::run_test", skip(config, testers))]
pub async fn run_test(config: &Value, testers: &TesterRegistry, service_type: &str) -> Result<TestResult> {
    if service_type.is_empty() {
        return Ok(TestResult::invalid_key(MISSING_SERVICE));
    }

    let Some(settings) = provider_settings(config, service_type) else {
        debug!("no settings for service");
        return Ok(TestResult::invalid_key(UNKNOWN_SERVICE));
    };

    let Some(tester) = testers.get(service_type) else {
        debug!("no tester registered for service");
        return Ok(TestResult::invalid_key(NO_TESTER));
    };

    tester.test(settings).await
}

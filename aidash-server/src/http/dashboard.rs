//! Dashboard route: service listing and on-demand tests
//!
//! One endpoint, two paths selected by query parameters:
//! - `?action=test&service=<type>` runs a test and answers JSON
//! - anything else lists the services, as HTML or (`out=json`) JSON

use std::sync::Arc;

use aidash_core::TestResult;
use axum::{
    Json,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::view;
use crate::AppState;

/// Query parameters of the dashboard route
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    /// `test` to run a service test; anything else lists services
    pub action: Option<String>,
    /// Provider type to test
    pub service: Option<String>,
    /// `json` for a JSON listing; HTML otherwise
    pub out: Option<String>,
}

/// GET / - list services or test one
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardParams>,
) -> Response {
    if params.action.as_deref() == Some("test") {
        let service = params.service.unwrap_or_default();
        return Json(test_service(&state, &service).await).into_response();
    }

    let groups = state.dashboard.groups();
    if params.out.as_deref() == Some("json") {
        return Json(groups).into_response();
    }

    Html(view::render_dashboard(&groups)).into_response()
}

/// Run a test, turning a tester failure into a failed result
async fn test_service(state: &AppState, service: &str) -> TestResult {
    match state.dashboard.run_test(service).await {
        Ok(result) => {
            tracing::debug!(service, ok = result.ok, "service test finished");
            result
        }
        Err(e) => {
            tracing::warn!(service, error = %e, "service test failed");
            TestResult::failed(e.to_string())
        }
    }
}

//! HTTP server module

mod api;
mod dashboard;
mod static_files;
pub mod view;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;

use crate::AppState;

pub use api::HealthResponse;
pub use dashboard::DashboardParams;

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/api/health", get(api::health))
        .route("/assets/*path", get(static_files::asset_handler))
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidash_core::{StaticConfigSource, TesterRegistry};
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_router_has_health_endpoint() {
        let state = Arc::new(AppState::new(
            Arc::new(StaticConfigSource::default()),
            Arc::new(TesterRegistry::new()),
        ));
        let router = create_router(state);
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/health").await;
        response.assert_status_ok();
    }
}

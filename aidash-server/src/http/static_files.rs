//! Static file serving for the embedded dashboard assets

use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Dashboard stylesheet and script (compiled into binary)
#[derive(RustEmbed)]
#[folder = "assets/"]
struct DashboardAssets;

/// Handler for `/assets/*path`
pub async fn asset_handler(Path(path): Path<String>) -> Response {
    serve_file(&path).unwrap_or_else(|| (StatusCode::NOT_FOUND, "Asset not found").into_response())
}

/// Serve a file from embedded assets
fn serve_file(path: &str) -> Option<Response<Body>> {
    let file = DashboardAssets::get(path)?;

    // Determine content type from file extension
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(file.data.into_owned()))
        .ok()
}

//! Binary content stub

use axum::{extract::Path, http::header, response::IntoResponse};

/// Body returned for every binary content request
pub const PLACEHOLDER: &[u8] = b"PDF bytes placeholder";

/// GET /Binary/{id}/$content - Placeholder bytes, no fixture lookup
pub async fn content(Path(id): Path<String>) -> impl IntoResponse {
    tracing::debug!(id = %id, "Serving binary placeholder");
    ([(header::CONTENT_TYPE, "application/octet-stream")], PLACEHOLDER)
}

mod binary;
pub mod docs;
pub mod health;
pub mod metadata;
pub mod metrics;
mod resource;

use std::sync::Arc;

use axum::{Router, routing::get};
use fhir_mock_core::FixtureResolver;

/// Resolver shared by every handler
pub type SharedResolver = Arc<FixtureResolver>;

/// Build FHIR routes.
///
/// Routes are declared most specific first: literal paths, then the binary
/// content path, then single reads, then the collection paths. The
/// collection pattern matches any first segment, so every literal route must
/// stay ahead of it. `/{resourceType}/` is a collection search too.
pub fn fhir_routes() -> Router<SharedResolver> {
    Router::new()
        .route("/metadata", get(metadata::get))
        .route("/Binary/{id}/$content", get(binary::content))
        .route("/{resource_type}/{id}", get(resource::read))
        .route("/{resource_type}/", get(resource::search))
        .route("/{resource_type}", get(resource::search))
}

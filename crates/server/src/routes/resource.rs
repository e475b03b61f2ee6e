//! Fixture-backed read and search handlers

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::Uri,
};
use fhir_mock_core::{Bundle, Resolved};
use serde_json::Value as JsonValue;

use super::SharedResolver;
use crate::error::AppError;
use crate::response::FhirJson;

/// GET /{resourceType}/{id} - Read a single resource
pub async fn read(
    State(resolver): State<SharedResolver>,
    uri: Uri,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<FhirJson<JsonValue>, AppError> {
    // Undecodable segments (e.g. invalid UTF-8) can never name a fixture
    let Path((resource_type, id)) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, uri = %uri, "Unusable read path");
        let mut segments = uri.path().trim_start_matches('/').splitn(2, '/');
        AppError::NotFound {
            resource_type: segments.next().unwrap_or_default().to_string(),
            id: segments.next().unwrap_or_default().to_string(),
        }
    })?;

    match resolver.resolve(&resource_type, Some(&id)) {
        Resolved::Resource(resource) => Ok(FhirJson(resource)),
        Resolved::Bundle(_) | Resolved::NotFound => {
            tracing::debug!(resource_type = %resource_type, id = %id, "Resource not found");
            Err(AppError::NotFound { resource_type, id })
        }
    }
}

/// GET /{resourceType} - Search a collection; never 404s
pub async fn search(
    State(resolver): State<SharedResolver>,
    path: Result<Path<String>, PathRejection>,
) -> FhirJson<JsonValue> {
    let resolved = match path {
        Ok(Path(resource_type)) => resolver.resolve(&resource_type, None),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unusable search path");
            Resolved::NotFound
        }
    };

    let body = match resolved {
        Resolved::Bundle(bundle) => bundle,
        Resolved::Resource(resource) => Bundle::wrap(resource).to_value(),
        Resolved::NotFound => Bundle::empty().to_value(),
    };

    FhirJson(body)
}

//! Metadata endpoint handler

use axum::extract::State;
use fhir_mock_core::CapabilityStatement;

use super::SharedResolver;
use crate::response::FhirJson;

/// GET /metadata - Capability statement for the registered resource types
pub async fn get(State(resolver): State<SharedResolver>) -> FhirJson<CapabilityStatement> {
    FhirJson(CapabilityStatement::for_resource_types(
        resolver.registry().resource_types(),
    ))
}

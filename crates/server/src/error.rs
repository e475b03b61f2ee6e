//! Application error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fhir_mock_core::{IssueType, OperationOutcome};

use crate::response::FhirJson;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound { resource_type: String, id: String },
    Throttled,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, outcome) = match self {
            AppError::NotFound { resource_type, id } => (
                StatusCode::NOT_FOUND,
                OperationOutcome::not_found(&resource_type, &id),
            ),
            AppError::Throttled => (
                StatusCode::TOO_MANY_REQUESTS,
                OperationOutcome::error(
                    IssueType::Throttled,
                    "Too many requests, please try again later.",
                ),
            ),
        };

        (status, FhirJson(outcome)).into_response()
    }
}

//! FHIR JSON response body

use axum::{
    Json,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const FHIR_JSON: &str = "application/fhir+json";

/// Like [`Json`], but labelled `application/fhir+json`
pub struct FhirJson<T>(pub T);

impl<T: Serialize> IntoResponse for FhirJson<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.0).into_response();
        // Serialization failures keep axum's plain-text 500
        if response.status().is_success() {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(FHIR_JSON));
        }
        response
    }
}

//! Service index and OpenAPI document

use axum::{Extension, Json, extract::State};
use serde_json::{Value as JsonValue, json};

use super::SharedResolver;

/// Static facts about the running service, shown on the index page
#[derive(Clone)]
pub struct ServiceInfo {
    pub mode: String,
}

/// GET / - Service index
pub async fn index(Extension(info): Extension<ServiceInfo>) -> Json<JsonValue> {
    Json(json!({
        "service": "Mock FHIR API",
        "version": env!("CARGO_PKG_VERSION"),
        "mode": info.mode,
        "docs": "/docs.json",
        "health": "/healthz",
        "endpoints": {
            "collection": "GET /{resourceType}",
            "single": "GET /{resourceType}/{id}",
            "binary": "GET /Binary/{id}/$content",
        },
    }))
}

/// GET /docs.json - OpenAPI 3.0 description of the fixture endpoints
pub async fn openapi(State(resolver): State<SharedResolver>) -> Json<JsonValue> {
    let resource_types: Vec<&str> = resolver.registry().resource_types().collect();
    Json(openapi_document(&resource_types))
}

fn openapi_document(resource_types: &[&str]) -> JsonValue {
    let fhir_json = |schema: JsonValue| json!({ "application/fhir+json": { "schema": schema } });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Mock FHIR API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "FHIR-shaped responses served from static JSON fixtures",
        },
        "paths": {
            "/{resourceType}": {
                "get": {
                    "summary": "Search resources",
                    "parameters": [{
                        "name": "resourceType",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string", "enum": resource_types },
                    }],
                    "responses": {
                        "200": {
                            "description": "Bundle, empty when no fixture matches",
                            "content": fhir_json(json!({ "$ref": "#/components/schemas/Bundle" })),
                        },
                    },
                },
            },
            "/{resourceType}/{id}": {
                "get": {
                    "summary": "Read resource by id",
                    "parameters": [
                        { "name": "resourceType", "in": "path", "required": true, "schema": { "type": "string" } },
                        { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } },
                    ],
                    "responses": {
                        "200": { "description": "Resource found", "content": fhir_json(json!({ "type": "object" })) },
                        "404": {
                            "description": "Resource not found",
                            "content": fhir_json(json!({ "$ref": "#/components/schemas/OperationOutcome" })),
                        },
                    },
                },
            },
            "/Binary/{id}/$content": {
                "get": {
                    "summary": "Binary content placeholder",
                    "parameters": [
                        { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } },
                    ],
                    "responses": {
                        "200": {
                            "description": "Raw bytes",
                            "content": {
                                "application/octet-stream": { "schema": { "type": "string", "format": "binary" } },
                            },
                        },
                    },
                },
            },
            "/healthz": {
                "get": {
                    "summary": "Health check",
                    "responses": { "200": { "description": "Service is up" } },
                },
            },
        },
        "components": {
            "schemas": {
                "Bundle": {
                    "type": "object",
                    "properties": {
                        "resourceType": { "type": "string", "example": "Bundle" },
                        "type": { "type": "string", "example": "searchset" },
                        "total": { "type": "integer" },
                        "entry": { "type": "array", "items": { "type": "object" } },
                    },
                },
                "OperationOutcome": {
                    "type": "object",
                    "properties": {
                        "resourceType": { "type": "string", "example": "OperationOutcome" },
                        "issue": { "type": "array", "items": { "type": "object" } },
                    },
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_resource_types() {
        let doc = openapi_document(&["Patient", "Coverage"]);
        assert_eq!(
            doc["paths"]["/{resourceType}"]["get"]["parameters"][0]["schema"]["enum"],
            json!(["Patient", "Coverage"])
        );
        assert!(doc["paths"]["/Binary/{id}/$content"].is_object());
    }
}

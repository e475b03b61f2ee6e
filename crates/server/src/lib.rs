//! fhir-mock-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod config;
mod error;
mod middleware;
mod response;
mod routes;

use std::sync::Arc;

use axum::{Extension, Router, extract::Request, middleware as axum_mw, routing::get};
use fhir_mock_core::FixtureResolver;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Config;
use middleware::RequestId;
use routes::docs::ServiceInfo;

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(resolver: Arc<FixtureResolver>, config: &Config) -> Router {
    // Create rate limiter
    let rate_limiter = middleware::create_rate_limiter(config.rate_limit_per_minute);

    // Fixture-backed routes (rate limited)
    let fhir_routes = routes::fhir_routes()
        .layer(axum_mw::from_fn(middleware::rate_limit_middleware))
        .layer(Extension(rate_limiter));

    // Install Prometheus metrics recorder.
    // Use build_recorder() + set_global_recorder() so that repeated calls
    // (e.g. in integration tests) don't panic; the second install is
    // silently ignored and we still get a valid handle for /metrics.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    // Service routes (not rate limited)
    let public_routes = Router::new()
        .route("/", get(routes::docs::index))
        .route("/docs.json", get(routes::docs::openapi))
        .route("/healthz", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle))
        .layer(Extension(ServiceInfo {
            mode: config.ehr_mode.clone(),
        }));

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let mut app = Router::new().merge(public_routes).merge(fhir_routes);

    // Static files only answer paths no route claims
    if config.public_dir.is_dir() {
        tracing::info!(dir = %config.public_dir.display(), "Serving static files");
        app = app.fallback_service(ServeDir::new(&config.public_dir));
    }

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let request_id = request
            .extensions()
            .get::<RequestId>()
            .map(|r| r.0.as_str())
            .unwrap_or("unknown");
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    // Build application
    app.with_state(resolver)
        .layer(trace)
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}

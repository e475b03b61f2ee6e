//! Rate limiting middleware

use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::error::AppError;

/// Rate limiter state (shared across requests), one quota per client IP
pub type SharedRateLimiter = Arc<DefaultKeyedRateLimiter<IpAddr>>;

/// Create a new rate limiter allowing `requests_per_minute` (at least one) per client
pub fn create_rate_limiter(requests_per_minute: u32) -> SharedRateLimiter {
    let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);
    Arc::new(RateLimiter::keyed(Quota::per_minute(per_minute)))
}

/// Peer address of the connection; requests without one share a single quota
fn client_ip(request: &Request<Body>) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Rate limiting middleware
pub async fn rate_limit_middleware(request: Request<Body>, next: Next) -> Response {
    let limiter = request.extensions().get::<SharedRateLimiter>().cloned();

    if let Some(limiter) = limiter {
        let ip = client_ip(&request);
        if limiter.check_key(&ip).is_err() {
            tracing::warn!(client = %ip, path = %request.uri().path(), "Rate limit exceeded");
            return AppError::Throttled.into_response();
        }
    }

    next.run(request).await
}

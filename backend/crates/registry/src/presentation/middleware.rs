//! Registry Middleware
//!
//! Sliding-window rate limiting per client address and the security
//! headers applied to every response.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;

use platform::client::client_ip;
use platform::rate_limit::{RateLimitConfig, SlidingWindowLimiter};

use crate::error::RegistryError;

/// Rate limiting middleware state, one per endpoint category.
///
/// The limiter instance is shared; the `category` prefix keeps the
/// write and read windows for the same address separate.
#[derive(Clone)]
pub struct RateLimitState {
    pub limiter: Arc<SlidingWindowLimiter>,
    pub config: RateLimitConfig,
    pub category: &'static str,
    pub trust_forwarded_for: bool,
}

/// Middleware that rejects bursts above the configured threshold
pub async fn enforce_rate_limit(
    State(state): State<RateLimitState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let direct_ip = req
        .extensions()
        .get::<axum::extract::ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());

    let ip = client_ip(req.headers(), direct_ip, state.trust_forwarded_for);

    let key = match ip {
        Some(ip) => format!("{}:{}", state.category, ip),
        // Requests with no resolvable address share one bucket rather
        // than passing unmetered.
        None => format!("{}:unknown", state.category),
    };

    let decision = state.limiter.check(&key, &state.config);
    if !decision.allowed {
        tracing::warn!(key = %key, "Request rate limited");
        return RegistryError::RateLimited.into_response();
    }

    next.run(req).await
}

/// Security headers applied to every response
pub async fn security_headers(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "x-xss-protection",
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        "strict-transport-security",
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        "content-security-policy",
        HeaderValue::from_static(
            "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'",
        ),
    );

    response
}

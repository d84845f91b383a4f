//! Registry Router

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use std::sync::Arc;

use platform::rate_limit::SlidingWindowLimiter;

use crate::application::config::RegistryConfig;
use crate::domain::repository::{ClientRepository, SessionRepository, SupplierRepository};
use crate::infra::postgres::PgRegistryRepository;
use crate::presentation::handlers::{self, RegistryAppState};
use crate::presentation::middleware::{RateLimitState, enforce_rate_limit, security_headers};

/// Create the registry router with the PostgreSQL repository
pub fn registry_router(
    repo: PgRegistryRepository,
    config: RegistryConfig,
    limiter: Arc<SlidingWindowLimiter>,
) -> Router {
    registry_router_generic(repo, config, limiter)
}

/// Create a registry router for any repository implementation
pub fn registry_router_generic<R>(
    repo: R,
    config: RegistryConfig,
    limiter: Arc<SlidingWindowLimiter>,
) -> Router
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let write_limit = RateLimitState {
        limiter: limiter.clone(),
        config: config.write_rate_limit.clone(),
        category: "write",
        trust_forwarded_for: config.trust_forwarded_for,
    };
    let read_limit = RateLimitState {
        limiter,
        config: config.read_rate_limit.clone(),
        category: "read",
        trust_forwarded_for: config.trust_forwarded_for,
    };

    let state = RegistryAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    // Stricter limit on mutating/auth endpoints
    let write_routes = Router::new()
        .route("/cadastrar", post(handlers::cadastrar_fornecedor::<R>))
        .route("/cadastrar_cliente", post(handlers::cadastrar_cliente::<R>))
        .route("/login_cliente", post(handlers::login_cliente::<R>))
        .layer(from_fn_with_state(write_limit, enforce_rate_limit));

    // Looser limit on read endpoints
    let read_routes = Router::new()
        .route("/fornecedores_json", get(handlers::fornecedores_json::<R>))
        .route("/clientes_json", get(handlers::clientes_json::<R>))
        .route("/check_session", get(handlers::check_session::<R>))
        .layer(from_fn_with_state(read_limit, enforce_rate_limit));

    Router::new()
        .merge(write_routes)
        .merge(read_routes)
        .route("/logout", get(handlers::logout::<R>))
        .layer(from_fn(security_headers))
        .with_state(state)
}

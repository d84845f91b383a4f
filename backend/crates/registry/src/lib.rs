//! Registry Backend Module
//!
//! Registration and listing of suppliers (fornecedores) and clients
//! (clientes), with cookie-session login for clients.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, validated value objects, repository traits
//! - `application/` - Use cases and application config
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Security Model
//! - Free-text fields sanitized before validation and storage
//! - CPF/CNPJ checksums verified on registration
//! - Passwords hashed with Argon2id, never stored in plaintext
//! - Server-side sessions with HMAC-signed cookie tokens
//! - Sliding-window rate limiting per client address

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use infra::postgres::PgRegistryRepository;
pub use presentation::router::registry_router;

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations with no domain
//! knowledge:
//! - Sliding-window rate limiting
//! - Password hashing (Argon2id)
//! - Free-text input sanitization
//! - Cookie management
//! - Client address extraction

pub mod client;
pub mod cookie;
pub mod password;
pub mod rate_limit;
pub mod sanitize;

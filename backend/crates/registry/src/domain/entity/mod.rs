//! Domain Entities

pub mod client;
pub mod client_session;
pub mod supplier;

pub use client::{Client, NewClient};
pub use client_session::ClientSession;
pub use supplier::{NewSupplier, Supplier};

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer. `insert` implementations must surface storage
//! unique-constraint violations as the typed duplicate errors - the
//! pre-insert existence checks in the use cases are an optimization, the
//! constraint is the authoritative guard against concurrent duplicates.

use uuid::Uuid;

use crate::domain::entity::{Client, ClientSession, NewClient, NewSupplier, Supplier};
use crate::domain::value_object::{Cpf, Email, TaxId};
use crate::error::RegistryResult;

/// Supplier repository trait
#[trait_variant::make(SupplierRepository: Send)]
pub trait LocalSupplierRepository {
    /// Insert a supplier; `RegistryError::DuplicateTaxId` on a unique
    /// violation
    async fn insert(&self, supplier: &NewSupplier) -> RegistryResult<Supplier>;

    /// Check whether a tax id is already registered
    async fn exists_by_tax_id(&self, tax_id: &TaxId) -> RegistryResult<bool>;

    /// All suppliers, newest first
    async fn list_recent(&self) -> RegistryResult<Vec<Supplier>>;
}

/// Client repository trait
#[trait_variant::make(ClientRepository: Send)]
pub trait LocalClientRepository {
    /// Insert a client; `RegistryError::DuplicateClient` on a unique
    /// violation
    async fn insert(&self, client: &NewClient) -> RegistryResult<Client>;

    /// Check whether the email or CPF is already registered
    async fn exists_by_email_or_cpf(&self, email: &Email, cpf: &Cpf) -> RegistryResult<bool>;

    /// Find client by email
    async fn find_by_email(&self, email: &Email) -> RegistryResult<Option<Client>>;

    /// All clients, newest first
    async fn list_recent(&self) -> RegistryResult<Vec<Client>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &ClientSession) -> RegistryResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> RegistryResult<Option<ClientSession>>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> RegistryResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> RegistryResult<u64>;
}

//! Listing Use Cases
//!
//! Newest-first listings for the JSON endpoints. Masking of sensitive
//! fields happens in the presentation layer.

use std::sync::Arc;

use crate::domain::entity::{Client, Supplier};
use crate::domain::repository::{ClientRepository, SupplierRepository};
use crate::error::RegistryResult;

/// List suppliers use case
pub struct ListSuppliersUseCase<R>
where
    R: SupplierRepository,
{
    repo: Arc<R>,
}

impl<R> ListSuppliersUseCase<R>
where
    R: SupplierRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> RegistryResult<Vec<Supplier>> {
        self.repo.list_recent().await
    }
}

/// List clients use case
pub struct ListClientsUseCase<R>
where
    R: ClientRepository,
{
    repo: Arc<R>,
}

impl<R> ListClientsUseCase<R>
where
    R: ClientRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> RegistryResult<Vec<Client>> {
        self.repo.list_recent().await
    }
}

//! Sign Out Use Case

use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::application::session_token;
use crate::domain::repository::SessionRepository;
use crate::error::{RegistryError, RegistryResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<RegistryConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<RegistryConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session referenced by the token.
    pub async fn execute(&self, token: &str) -> RegistryResult<()> {
        let session_id = session_token::verify(token, &self.config.session_secret)
            .ok_or(RegistryError::SessionInvalid)?;

        self.session_repo.delete(session_id).await
    }
}

//! Check Session Use Case
//!
//! Verifies the signed token and retrieves session information.

use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::application::session_token;
use crate::domain::entity::ClientSession;
use crate::domain::repository::SessionRepository;
use crate::error::{RegistryError, RegistryResult};

/// Session info output
#[derive(Debug)]
pub struct SessionInfoOutput {
    pub cliente_id: i64,
    pub cliente_nome: String,
    pub cliente_email: String,
}

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<RegistryConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<RegistryConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Check if the session is valid and return session info
    pub async fn execute(&self, token: &str) -> RegistryResult<SessionInfoOutput> {
        let session = self.get_session(token).await?;

        Ok(SessionInfoOutput {
            cliente_id: session.cliente_id,
            cliente_nome: session.cliente_nome,
            cliente_email: session.cliente_email.to_string(),
        })
    }

    /// Verify the token and load the session. Expired sessions are
    /// deleted and reported as invalid.
    pub async fn get_session(&self, token: &str) -> RegistryResult<ClientSession> {
        let session_id = session_token::verify(token, &self.config.session_secret)
            .ok_or(RegistryError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(RegistryError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(RegistryError::SessionInvalid);
        }

        Ok(session)
    }
}

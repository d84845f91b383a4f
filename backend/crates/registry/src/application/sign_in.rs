//! Sign In Use Case
//!
//! Authenticates a client by email and password and creates a session.
//! Every credential failure collapses into the same 401 so the response
//! does not reveal whether the email exists.

use std::sync::Arc;

use platform::sanitize::sanitize;

use crate::application::config::RegistryConfig;
use crate::application::session_token;
use crate::domain::entity::ClientSession;
use crate::domain::repository::{ClientRepository, SessionRepository};
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{RegistryError, RegistryResult};

/// Sign in input
#[derive(Debug, Default)]
pub struct SignInInput {
    pub email: Option<String>,
    pub senha: Option<String>,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    pub cliente_nome: String,
}

/// Sign in use case
pub struct SignInUseCase<C, S>
where
    C: ClientRepository,
    S: SessionRepository,
{
    client_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<RegistryConfig>,
}

impl<C, S> SignInUseCase<C, S>
where
    C: ClientRepository,
    S: SessionRepository,
{
    pub fn new(client_repo: Arc<C>, session_repo: Arc<S>, config: Arc<RegistryConfig>) -> Self {
        Self {
            client_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> RegistryResult<SignInOutput> {
        let email = sanitize(input.email.as_deref());
        let senha = input.senha.unwrap_or_default();

        if email.is_empty() || senha.is_empty() {
            return Err(RegistryError::MissingCredentials);
        }

        let email = Email::new(&email).map_err(|_| RegistryError::InvalidCredentials)?;

        let client = self
            .client_repo
            .find_by_email(&email)
            .await?
            .ok_or(RegistryError::InvalidCredentials)?;

        // A stored password always satisfied the policy at registration,
        // so a parse failure here can only mean a wrong password.
        let senha = RawPassword::new(senha).map_err(|_| RegistryError::InvalidCredentials)?;

        if !client.senha.verify(&senha, self.config.pepper()) {
            return Err(RegistryError::InvalidCredentials);
        }

        let session = ClientSession::for_client(&client, self.config.session_ttl);
        self.session_repo.create(&session).await?;
        let session_token = session_token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            cliente_id = client.id,
            session_id = %session.session_id,
            "Client signed in"
        );

        Ok(SignInOutput {
            session_token,
            cliente_nome: client.nome,
        })
    }
}

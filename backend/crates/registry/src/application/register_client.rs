//! Register Client Use Case
//!
//! Validates the submitted form, hashes the password and inserts the
//! client, then establishes a session (the original flow logs the client
//! in right after registration).

use std::sync::Arc;

use platform::sanitize::sanitize;

use crate::application::config::RegistryConfig;
use crate::application::session_token;
use crate::domain::entity::{Client, ClientSession, NewClient};
use crate::domain::repository::{ClientRepository, SessionRepository};
use crate::domain::value_object::{Age, ClientPassword, Cpf, Email, Gender, Phone, RawPassword};
use crate::error::{RegistryError, RegistryResult};

/// Raw client form fields
#[derive(Debug, Default)]
pub struct RegisterClientInput {
    pub nome: Option<String>,
    pub idade: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub genero: Option<String>,
    pub cpf: Option<String>,
    pub senha: Option<String>,
    pub confirmar_senha: Option<String>,
}

/// Register client output
#[derive(Debug)]
pub struct RegisterClientOutput {
    pub client: Client,
    /// Signed token for the session cookie (auto-login)
    pub session_token: String,
}

/// Register client use case
pub struct RegisterClientUseCase<C, S>
where
    C: ClientRepository,
    S: SessionRepository,
{
    client_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<RegistryConfig>,
}

impl<C, S> RegisterClientUseCase<C, S>
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

    pub async fn execute(&self, input: RegisterClientInput) -> RegistryResult<RegisterClientOutput> {
        let nome = sanitize(input.nome.as_deref());
        let idade = sanitize(input.idade.as_deref());
        let email = sanitize(input.email.as_deref());
        let telefone = sanitize(input.telefone.as_deref());
        let endereco = sanitize(input.endereco.as_deref());
        let genero = sanitize(input.genero.as_deref());
        let cpf = sanitize(input.cpf.as_deref());

        // Passwords are hashed, not stored; they skip sanitization so
        // legitimate symbols survive.
        let senha = input.senha.unwrap_or_default();
        let confirmar_senha = input.confirmar_senha.unwrap_or_default();

        let all_present = [&nome, &idade, &email, &telefone, &endereco, &genero, &cpf]
            .iter()
            .all(|field| !field.is_empty())
            && !senha.is_empty();
        if !all_present {
            return Err(RegistryError::MissingFields);
        }

        if senha != confirmar_senha {
            return Err(RegistryError::PasswordMismatch);
        }

        let senha = RawPassword::new(senha)?;
        let email = Email::new(&email)?;
        let telefone = Phone::new(&telefone)?;
        let cpf = Cpf::new(&cpf)?;
        let idade = Age::parse(&idade)?;
        let genero = Gender::new(&genero)?;

        let senha = ClientPassword::from_raw(&senha, self.config.pepper())?;

        if self.client_repo.exists_by_email_or_cpf(&email, &cpf).await? {
            return Err(RegistryError::DuplicateClient);
        }

        let client = self
            .client_repo
            .insert(&NewClient {
                nome,
                idade,
                email,
                telefone,
                endereco,
                genero,
                cpf,
                senha,
            })
            .await?;

        // Auto-login
        let session = ClientSession::for_client(&client, self.config.session_ttl);
        self.session_repo.create(&session).await?;
        let session_token = session_token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            cliente_id = client.id,
            session_id = %session.session_id,
            "Client registered"
        );

        Ok(RegisterClientOutput {
            client,
            session_token,
        })
    }
}

//! Registry Error Types
//!
//! Domain-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The `Display` text of each variant is
//! the user-facing message that ends up in the `mensagem` response field;
//! internal detail travels in sources and is only logged.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Registry-specific result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-specific error variants
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A single named required field is missing (supplier form)
    #[error("O campo '{0}' é obrigatório.")]
    MissingField(&'static str),

    /// One or more required fields missing (client form)
    #[error("Todos os campos são obrigatórios.")]
    MissingFields,

    /// Email and password are required for login
    #[error("Email e senha são obrigatórios.")]
    MissingCredentials,

    /// Password and confirmation differ
    #[error("As senhas não coincidem.")]
    PasswordMismatch,

    /// Password fails the strength policy
    #[error(
        "Senha fraca. Use pelo menos 8 caracteres incluindo maiúsculas, minúsculas, números e símbolos."
    )]
    WeakPassword,

    /// Supplier tax id already registered
    #[error("CPF/CNPJ já cadastrado.")]
    DuplicateTaxId,

    /// Client email or CPF already registered
    #[error("Email ou CPF já cadastrado.")]
    DuplicateClient,

    /// Unknown email or wrong password (indistinguishable on purpose)
    #[error("Email ou senha incorretos.")]
    InvalidCredentials,

    /// Session token missing, malformed, tampered or expired
    #[error("Sessão inválida ou expirada.")]
    SessionInvalid,

    /// Sliding-window rate limit exceeded
    #[error("Muitas requisições. Tente novamente mais tarde.")]
    RateLimited,

    /// Field-level validation failure from a value object
    #[error("{}", .0.message())]
    Validation(AppError),

    /// Database error, already classified by the kernel conversion.
    /// The user only sees the generic message; detail stays in the
    /// source chain for logging.
    #[error("Erro interno do servidor.")]
    Database(#[source] AppError),

    /// Internal error
    #[error("Erro interno do servidor.")]
    Internal(String),
}

impl RegistryError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::MissingField(_)
            | RegistryError::MissingFields
            | RegistryError::MissingCredentials
            | RegistryError::PasswordMismatch
            | RegistryError::WeakPassword
            | RegistryError::DuplicateTaxId
            | RegistryError::DuplicateClient => ErrorKind::BadRequest,
            RegistryError::InvalidCredentials | RegistryError::SessionInvalid => {
                ErrorKind::Unauthorized
            }
            RegistryError::RateLimited => ErrorKind::TooManyRequests,
            RegistryError::Validation(err) => err.kind(),
            // Connectivity problems surface as 503, everything else as 500
            RegistryError::Database(err) => match err.kind() {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            RegistryError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError, carrying the user-facing message
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RegistryError::Database(e) => {
                tracing::error!(error = %e, "Registry database error");
            }
            RegistryError::Internal(msg) => {
                tracing::error!(message = %msg, "Registry internal error");
            }
            RegistryError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            RegistryError::RateLimited => {
                tracing::warn!("Rate limit exceeded");
            }
            _ => {
                tracing::debug!(error = %self, "Registry request rejected");
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for RegistryError {
    fn from(err: AppError) -> Self {
        RegistryError::Validation(err)
    }
}

impl From<sqlx::Error> for RegistryError {
    fn from(err: sqlx::Error) -> Self {
        RegistryError::Database(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(RegistryError::MissingField("nome").status_code(), 400);
        assert_eq!(RegistryError::DuplicateTaxId.status_code(), 400);
        assert_eq!(RegistryError::DuplicateClient.status_code(), 400);
        assert_eq!(RegistryError::InvalidCredentials.status_code(), 401);
        assert_eq!(RegistryError::SessionInvalid.status_code(), 401);
        assert_eq!(RegistryError::RateLimited.status_code(), 429);
        assert_eq!(RegistryError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_database_errors_keep_generic_message() {
        let err: RegistryError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Erro interno do servidor.");

        let err: RegistryError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.to_string(), "Erro interno do servidor.");
    }

    #[test]
    fn test_validation_passes_through_kind_and_message() {
        let err: RegistryError = AppError::bad_request("Email inválido.").into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Email inválido.");
    }

    #[test]
    fn test_internal_detail_is_not_user_visible() {
        let err = RegistryError::Internal("pool exhausted at 192.0.2.1".into());
        assert_eq!(err.to_string(), "Erro interno do servidor.");
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = RegistryError::MissingField("razao");
        assert_eq!(err.to_string(), "O campo 'razao' é obrigatório.");
    }
}

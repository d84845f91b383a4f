//! Gender Value Object
//!
//! Constrained to the three-symbol enum stored as `M` / `F` / `O`.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Client gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Gender {
    #[display("M")]
    Masculino,
    #[display("F")]
    Feminino,
    #[display("O")]
    Outro,
}

impl Gender {
    /// Parse from form input, accepting both the full word and the
    /// single-letter code, case-insensitively.
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        match input.as_ref().trim().to_lowercase().as_str() {
            "masculino" | "m" => Ok(Gender::Masculino),
            "feminino" | "f" => Ok(Gender::Feminino),
            "outro" | "o" => Ok(Gender::Outro),
            _ => Err(AppError::bad_request("Gênero inválido.")),
        }
    }

    /// Single-letter storage code
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Masculino => "M",
            Gender::Feminino => "F",
            Gender::Outro => "O",
        }
    }

    /// Create from database code (assumed already validated)
    pub fn from_db(code: &str) -> Self {
        match code {
            "F" => Gender::Feminino,
            "O" => Gender::Outro,
            _ => Gender::Masculino,
        }
    }
}

//! Phone Value Object
//!
//! Brazilian phone number: 10 digits (landline) or 11 digits (mobile),
//! area code starting with 1-9. Stored as the bare digit string.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Validated phone number, digits only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Create from raw input. Formatting characters are stripped.
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let digits: String = input
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if !matches!(digits.len(), 10 | 11) || digits.starts_with('0') {
            return Err(AppError::bad_request("Telefone inválido."));
        }

        Ok(Self(digits))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

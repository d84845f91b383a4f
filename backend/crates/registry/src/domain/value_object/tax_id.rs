//! Tax Id Value Object
//!
//! A supplier registers with either a CPF (individual) or a CNPJ
//! (company); the stripped digit count decides which checksum applies.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::cnpj::Cnpj;
use super::cpf::Cpf;

/// CPF or CNPJ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxId {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl TaxId {
    /// Create from raw input: 11 digits select the CPF checksum, 14 the
    /// CNPJ checksum, anything else is rejected.
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let digits: String = input
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        match digits.len() {
            11 => Cpf::new(&digits).map(TaxId::Cpf),
            14 => Cnpj::new(&digits).map(TaxId::Cnpj),
            _ => Err(AppError::bad_request("CPF/CNPJ inválido.")),
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(digits: impl Into<String>) -> Self {
        let digits = digits.into();
        if digits.len() == 14 {
            TaxId::Cnpj(Cnpj::from_db(digits))
        } else {
            TaxId::Cpf(Cpf::from_db(digits))
        }
    }

    /// The bare digit string (11 or 14 digits)
    pub fn as_digits(&self) -> &str {
        match self {
            TaxId::Cpf(cpf) => cpf.as_digits(),
            TaxId::Cnpj(cnpj) => cnpj.as_digits(),
        }
    }

    /// Fixed placeholder for listings
    pub fn masked(&self) -> &'static str {
        match self {
            TaxId::Cpf(cpf) => cpf.masked(),
            TaxId::Cnpj(cnpj) => cnpj.masked(),
        }
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxId::Cpf(cpf) => cpf.fmt(f),
            TaxId::Cnpj(cnpj) => cnpj.fmt(f),
        }
    }
}

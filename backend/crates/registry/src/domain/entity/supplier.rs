//! Supplier Entity (fornecedor)
//!
//! Created on registration; never updated or deleted.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Age, Email, Phone, TaxId};

/// Supplier row
#[derive(Debug, Clone)]
pub struct Supplier {
    pub id: i64,
    pub nome: String,
    /// Legal name (razão social)
    pub razao: String,
    /// CPF or CNPJ, unique per table
    pub cpfcnpj: TaxId,
    pub idade: Option<Age>,
    pub telefone: Phone,
    pub email: Email,
    pub endereco: String,
    pub site: Option<String>,
    /// Service description
    pub servico: String,
    /// Contract duration
    pub tempo: String,
    /// Contract reference
    pub contrato: String,
    /// Responsible party
    pub responsavel: String,
    pub obs: Option<String>,
    pub data_criacao: DateTime<Utc>,
}

/// Validated supplier fields, ready for insertion.
/// `id` and `data_criacao` are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub nome: String,
    pub razao: String,
    pub cpfcnpj: TaxId,
    pub idade: Option<Age>,
    pub telefone: Phone,
    pub email: Email,
    pub endereco: String,
    pub site: Option<String>,
    pub servico: String,
    pub tempo: String,
    pub contrato: String,
    pub responsavel: String,
    pub obs: Option<String>,
}

//! Client Entity (cliente)
//!
//! Created on registration; read during login.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Age, ClientPassword, Cpf, Email, Gender, Phone};

/// Client row
#[derive(Debug, Clone)]
pub struct Client {
    pub id: i64,
    pub nome: String,
    pub idade: Age,
    /// Unique per table
    pub email: Email,
    pub telefone: Phone,
    pub endereco: String,
    pub genero: Gender,
    /// Unique per table
    pub cpf: Cpf,
    /// Argon2id PHC string, never plaintext
    pub senha: ClientPassword,
    pub data_criacao: DateTime<Utc>,
}

/// Validated client fields, ready for insertion.
/// `id` and `data_criacao` are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub nome: String,
    pub idade: Age,
    pub email: Email,
    pub telefone: Phone,
    pub endereco: String,
    pub genero: Gender,
    pub cpf: Cpf,
    pub senha: ClientPassword,
}

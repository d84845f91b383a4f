//! API DTOs (Data Transfer Objects)
//!
//! Form field names and response shapes mirror the frontend contract:
//! `{status, mensagem, redirect?}` envelopes, and listing objects with
//! tax ids replaced by fixed masked placeholders. Password hashes have
//! no serializable representation at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{Client, Supplier};

// ============================================================================
// Forms
// ============================================================================

/// Supplier registration form (POST /cadastrar)
#[derive(Debug, Clone, Deserialize)]
pub struct FornecedorForm {
    pub nome: Option<String>,
    pub razao: Option<String>,
    pub cpfcnpj: Option<String>,
    pub idade: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub site: Option<String>,
    pub servico: Option<String>,
    pub tempo: Option<String>,
    pub contrato: Option<String>,
    pub responsavel: Option<String>,
    pub obs: Option<String>,
}

/// Client registration form (POST /cadastrar_cliente)
#[derive(Debug, Clone, Deserialize)]
pub struct ClienteForm {
    pub nome: Option<String>,
    pub idade: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub genero: Option<String>,
    pub cpf: Option<String>,
    pub senha: Option<String>,
    #[serde(rename = "confirmarSenha")]
    pub confirmar_senha: Option<String>,
}

/// Login form (POST /login_cliente)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub senha: Option<String>,
}

// ============================================================================
// Response envelopes
// ============================================================================

/// Success envelope: `{"status":"ok","mensagem":...,"redirect"?:...}`
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub mensagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl StatusResponse {
    pub fn ok(mensagem: impl Into<String>) -> Self {
        Self {
            status: "ok",
            mensagem: mensagem.into(),
            redirect: None,
        }
    }

    pub fn ok_with_redirect(mensagem: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            status: "ok",
            mensagem: mensagem.into(),
            redirect: Some(redirect.into()),
        }
    }
}

/// Session status response (GET /check_session)
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_email: Option<String>,
}

impl SessionStatusResponse {
    pub fn logged_out() -> Self {
        Self {
            logged_in: false,
            cliente_nome: None,
            cliente_email: None,
        }
    }
}

// ============================================================================
// Listings
// ============================================================================

/// Supplier listing object; the tax id is always masked
#[derive(Debug, Clone, Serialize)]
pub struct FornecedorJson {
    pub id: i64,
    pub nome: String,
    pub razao: String,
    pub cpfcnpj: String,
    pub idade: Option<i32>,
    pub telefone: String,
    pub email: String,
    pub endereco: String,
    pub site: Option<String>,
    pub servico: String,
    pub tempo: String,
    pub contrato: String,
    pub responsavel: String,
    pub obs: Option<String>,
    pub data_criacao: DateTime<Utc>,
}

impl From<&Supplier> for FornecedorJson {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id,
            nome: supplier.nome.clone(),
            razao: supplier.razao.clone(),
            cpfcnpj: supplier.cpfcnpj.masked().to_string(),
            idade: supplier.idade.map(|a| a.value()),
            telefone: supplier.telefone.as_str().to_string(),
            email: supplier.email.as_str().to_string(),
            endereco: supplier.endereco.clone(),
            site: supplier.site.clone(),
            servico: supplier.servico.clone(),
            tempo: supplier.tempo.clone(),
            contrato: supplier.contrato.clone(),
            responsavel: supplier.responsavel.clone(),
            obs: supplier.obs.clone(),
            data_criacao: supplier.data_criacao,
        }
    }
}

/// Client listing object; the CPF is always masked and the password hash
/// is never part of the shape
#[derive(Debug, Clone, Serialize)]
pub struct ClienteJson {
    pub id: i64,
    pub nome: String,
    pub idade: i32,
    pub email: String,
    pub telefone: String,
    pub endereco: String,
    pub genero: String,
    pub cpf: String,
    pub data_criacao: DateTime<Utc>,
}

impl From<&Client> for ClienteJson {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            nome: client.nome.clone(),
            idade: client.idade.value(),
            email: client.email.as_str().to_string(),
            telefone: client.telefone.as_str().to_string(),
            endereco: client.endereco.clone(),
            genero: client.genero.code().to_string(),
            cpf: client.cpf.masked().to_string(),
            data_criacao: client.data_criacao,
        }
    }
}

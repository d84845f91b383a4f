//! Register Supplier Use Case
//!
//! Sanitizes the submitted form, validates every field, then inserts the
//! supplier. The duplicate pre-check is advisory; the unique constraint
//! on the tax id settles concurrent duplicates at insert time.

use std::sync::Arc;

use platform::sanitize::{sanitize, sanitize_optional};

use crate::domain::entity::{NewSupplier, Supplier};
use crate::domain::repository::SupplierRepository;
use crate::domain::value_object::{Age, Email, Phone, TaxId};
use crate::error::{RegistryError, RegistryResult};

/// Raw supplier form fields
#[derive(Debug, Default)]
pub struct RegisterSupplierInput {
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

/// Register supplier use case
pub struct RegisterSupplierUseCase<R>
where
    R: SupplierRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterSupplierUseCase<R>
where
    R: SupplierRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterSupplierInput) -> RegistryResult<Supplier> {
        let nome = sanitize(input.nome.as_deref());
        let razao = sanitize(input.razao.as_deref());
        let cpfcnpj = sanitize(input.cpfcnpj.as_deref());
        let idade = sanitize(input.idade.as_deref());
        let telefone = sanitize(input.telefone.as_deref());
        let email = sanitize(input.email.as_deref());
        let endereco = sanitize(input.endereco.as_deref());
        let site = sanitize_optional(input.site.as_deref());
        let servico = sanitize(input.servico.as_deref());
        let tempo = sanitize(input.tempo.as_deref());
        let contrato = sanitize(input.contrato.as_deref());
        let responsavel = sanitize(input.responsavel.as_deref());
        let obs = sanitize_optional(input.obs.as_deref());

        let required: [(&'static str, &str); 10] = [
            ("nome", &nome),
            ("razao", &razao),
            ("cpfcnpj", &cpfcnpj),
            ("telefone", &telefone),
            ("email", &email),
            ("endereco", &endereco),
            ("servico", &servico),
            ("tempo", &tempo),
            ("contrato", &contrato),
            ("responsavel", &responsavel),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(RegistryError::MissingField(field));
            }
        }

        let email = Email::new(&email)?;
        let telefone = Phone::new(&telefone)?;
        let cpfcnpj = TaxId::new(&cpfcnpj)?;
        let idade = if idade.is_empty() {
            None
        } else {
            Some(Age::parse(&idade)?)
        };

        if self.repo.exists_by_tax_id(&cpfcnpj).await? {
            return Err(RegistryError::DuplicateTaxId);
        }

        let supplier = self
            .repo
            .insert(&NewSupplier {
                nome,
                razao,
                cpfcnpj,
                idade,
                telefone,
                email,
                endereco,
                site,
                servico,
                tempo,
                contrato,
                responsavel,
                obs,
            })
            .await?;

        tracing::info!(supplier_id = supplier.id, "Supplier registered");

        Ok(supplier)
    }
}

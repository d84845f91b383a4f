//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Client, ClientSession, NewClient, NewSupplier, Supplier};
use crate::domain::repository::{ClientRepository, SessionRepository, SupplierRepository};
use crate::domain::value_object::{Age, ClientPassword, Cpf, Email, Gender, Phone, TaxId};
use crate::error::{RegistryError, RegistryResult};

/// PostgreSQL-backed registry repository
#[derive(Clone)]
pub struct PgRegistryRepository {
    pool: PgPool,
}

impl PgRegistryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> RegistryResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessoes WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

/// PostgreSQL unique-constraint violation (error code 23505)
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

// ============================================================================
// Supplier Repository Implementation
// ============================================================================

impl SupplierRepository for PgRegistryRepository {
    async fn insert(&self, supplier: &NewSupplier) -> RegistryResult<Supplier> {
        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            INSERT INTO fornecedores (
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
                obs
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING
                id,
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
                data_criacao
            "#,
        )
        .bind(&supplier.nome)
        .bind(&supplier.razao)
        .bind(supplier.cpfcnpj.as_digits())
        .bind(supplier.idade.map(|a| a.value()))
        .bind(supplier.telefone.as_str())
        .bind(supplier.email.as_str())
        .bind(&supplier.endereco)
        .bind(&supplier.site)
        .bind(&supplier.servico)
        .bind(&supplier.tempo)
        .bind(&supplier.contrato)
        .bind(&supplier.responsavel)
        .bind(&supplier.obs)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RegistryError::DuplicateTaxId
            } else {
                RegistryError::from(e)
            }
        })?;

        Ok(row.into_supplier())
    }

    async fn exists_by_tax_id(&self, tax_id: &TaxId) -> RegistryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM fornecedores WHERE cpfcnpj = $1)",
        )
        .bind(tax_id.as_digits())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list_recent(&self) -> RegistryResult<Vec<Supplier>> {
        let rows = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT
                id,
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
                data_criacao
            FROM fornecedores
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_supplier()).collect())
    }
}

// ============================================================================
// Client Repository Implementation
// ============================================================================

impl ClientRepository for PgRegistryRepository {
    async fn insert(&self, client: &NewClient) -> RegistryResult<Client> {
        let row = sqlx::query_as::<_, ClienteRow>(
            r#"
            INSERT INTO clientes (
                nome,
                idade,
                email,
                telefone,
                endereco,
                genero,
                cpf,
                senha
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id,
                nome,
                idade,
                email,
                telefone,
                endereco,
                genero,
                cpf,
                senha,
                data_criacao
            "#,
        )
        .bind(&client.nome)
        .bind(client.idade.value())
        .bind(client.email.as_str())
        .bind(client.telefone.as_str())
        .bind(&client.endereco)
        .bind(client.genero.code())
        .bind(client.cpf.as_digits())
        .bind(client.senha.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RegistryError::DuplicateClient
            } else {
                RegistryError::from(e)
            }
        })?;

        row.into_client()
    }

    async fn exists_by_email_or_cpf(&self, email: &Email, cpf: &Cpf) -> RegistryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM clientes WHERE email = $1 OR cpf = $2)",
        )
        .bind(email.as_str())
        .bind(cpf.as_digits())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_email(&self, email: &Email) -> RegistryResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClienteRow>(
            r#"
            SELECT
                id,
                nome,
                idade,
                email,
                telefone,
                endereco,
                genero,
                cpf,
                senha,
                data_criacao
            FROM clientes
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_client()).transpose()
    }

    async fn list_recent(&self) -> RegistryResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClienteRow>(
            r#"
            SELECT
                id,
                nome,
                idade,
                email,
                telefone,
                endereco,
                genero,
                cpf,
                senha,
                data_criacao
            FROM clientes
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_client()).collect()
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgRegistryRepository {
    async fn create(&self, session: &ClientSession) -> RegistryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessoes (
                session_id,
                cliente_id,
                cliente_nome,
                cliente_email,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.session_id)
        .bind(session.cliente_id)
        .bind(&session.cliente_nome)
        .bind(session.cliente_email.as_str())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> RegistryResult<Option<ClientSession>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                cliente_id,
                cliente_nome,
                cliente_email,
                expires_at_ms,
                created_at
            FROM sessoes
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn delete(&self, session_id: Uuid) -> RegistryResult<()> {
        sqlx::query("DELETE FROM sessoes WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> RegistryResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct SupplierRow {
    id: i64,
    nome: String,
    razao: String,
    cpfcnpj: String,
    idade: Option<i32>,
    telefone: String,
    email: String,
    endereco: String,
    site: Option<String>,
    servico: String,
    tempo: String,
    contrato: String,
    responsavel: String,
    obs: Option<String>,
    data_criacao: DateTime<Utc>,
}

impl SupplierRow {
    fn into_supplier(self) -> Supplier {
        Supplier {
            id: self.id,
            nome: self.nome,
            razao: self.razao,
            cpfcnpj: TaxId::from_db(self.cpfcnpj),
            idade: self.idade.map(Age::from_db),
            telefone: Phone::from_db(self.telefone),
            email: Email::from_db(self.email),
            endereco: self.endereco,
            site: self.site,
            servico: self.servico,
            tempo: self.tempo,
            contrato: self.contrato,
            responsavel: self.responsavel,
            obs: self.obs,
            data_criacao: self.data_criacao,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ClienteRow {
    id: i64,
    nome: String,
    idade: i32,
    email: String,
    telefone: String,
    endereco: String,
    genero: String,
    cpf: String,
    senha: String,
    data_criacao: DateTime<Utc>,
}

impl ClienteRow {
    fn into_client(self) -> RegistryResult<Client> {
        Ok(Client {
            id: self.id,
            nome: self.nome,
            idade: Age::from_db(self.idade),
            email: Email::from_db(self.email),
            telefone: Phone::from_db(self.telefone),
            endereco: self.endereco,
            genero: Gender::from_db(&self.genero),
            cpf: Cpf::from_db(self.cpf),
            senha: ClientPassword::from_phc_string(self.senha)?,
            data_criacao: self.data_criacao,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    cliente_id: i64,
    cliente_nome: String,
    cliente_email: String,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> ClientSession {
        ClientSession {
            session_id: self.session_id,
            cliente_id: self.cliente_id,
            cliente_nome: self.cliente_nome,
            cliente_email: Email::from_db(self.cliente_email),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}

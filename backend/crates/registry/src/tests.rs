//! Unit tests for the registry use cases, driven through an in-memory
//! repository double whose inserts enforce uniqueness the way the
//! database constraints do.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::application::config::RegistryConfig;
use crate::application::{
    CheckSessionUseCase, RegisterClientInput, RegisterClientUseCase, RegisterSupplierInput,
    RegisterSupplierUseCase, SignInInput, SignInUseCase, SignOutUseCase, session_token,
};
use crate::domain::entity::{Client, ClientSession, NewClient, NewSupplier, Supplier};
use crate::domain::repository::{ClientRepository, SessionRepository, SupplierRepository};
use crate::domain::value_object::{Cpf, Email, TaxId};
use crate::error::{RegistryError, RegistryResult};

// ============================================================================
// In-memory repository double
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryRepository {
    suppliers: Arc<Mutex<Vec<Supplier>>>,
    clients: Arc<Mutex<Vec<Client>>>,
    sessions: Arc<Mutex<Vec<ClientSession>>>,
}

impl InMemoryRepository {
    fn supplier_count(&self) -> usize {
        self.suppliers.lock().unwrap().len()
    }

    fn client_count(&self) -> usize {
        self.clients.lock().unwrap().len()
    }

    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl SupplierRepository for InMemoryRepository {
    async fn insert(&self, supplier: &NewSupplier) -> RegistryResult<Supplier> {
        let mut suppliers = self.suppliers.lock().unwrap();
        if suppliers
            .iter()
            .any(|s| s.cpfcnpj.as_digits() == supplier.cpfcnpj.as_digits())
        {
            return Err(RegistryError::DuplicateTaxId);
        }

        let row = Supplier {
            id: suppliers.len() as i64 + 1,
            nome: supplier.nome.clone(),
            razao: supplier.razao.clone(),
            cpfcnpj: supplier.cpfcnpj.clone(),
            idade: supplier.idade,
            telefone: supplier.telefone.clone(),
            email: supplier.email.clone(),
            endereco: supplier.endereco.clone(),
            site: supplier.site.clone(),
            servico: supplier.servico.clone(),
            tempo: supplier.tempo.clone(),
            contrato: supplier.contrato.clone(),
            responsavel: supplier.responsavel.clone(),
            obs: supplier.obs.clone(),
            data_criacao: Utc::now(),
        };
        suppliers.push(row.clone());
        Ok(row)
    }

    async fn exists_by_tax_id(&self, tax_id: &TaxId) -> RegistryResult<bool> {
        Ok(self
            .suppliers
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.cpfcnpj.as_digits() == tax_id.as_digits()))
    }

    async fn list_recent(&self) -> RegistryResult<Vec<Supplier>> {
        let mut all = self.suppliers.lock().unwrap().clone();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }
}

impl ClientRepository for InMemoryRepository {
    async fn insert(&self, client: &NewClient) -> RegistryResult<Client> {
        let mut clients = self.clients.lock().unwrap();
        if clients
            .iter()
            .any(|c| c.email == client.email || c.cpf == client.cpf)
        {
            return Err(RegistryError::DuplicateClient);
        }

        let row = Client {
            id: clients.len() as i64 + 1,
            nome: client.nome.clone(),
            idade: client.idade,
            email: client.email.clone(),
            telefone: client.telefone.clone(),
            endereco: client.endereco.clone(),
            genero: client.genero,
            cpf: client.cpf.clone(),
            senha: client.senha.clone(),
            data_criacao: Utc::now(),
        };
        clients.push(row.clone());
        Ok(row)
    }

    async fn exists_by_email_or_cpf(&self, email: &Email, cpf: &Cpf) -> RegistryResult<bool> {
        Ok(self
            .clients
            .lock()
            .unwrap()
            .iter()
            .any(|c| &c.email == email || &c.cpf == cpf))
    }

    async fn find_by_email(&self, email: &Email) -> RegistryResult<Option<Client>> {
        Ok(self
            .clients
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.email == email)
            .cloned())
    }

    async fn list_recent(&self) -> RegistryResult<Vec<Client>> {
        let mut all = self.clients.lock().unwrap().clone();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }
}

impl SessionRepository for InMemoryRepository {
    async fn create(&self, session: &ClientSession) -> RegistryResult<()> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> RegistryResult<Option<ClientSession>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_id == session_id)
            .cloned())
    }

    async fn delete(&self, session_id: Uuid) -> RegistryResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .retain(|s| s.session_id != session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> RegistryResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.expires_at_ms >= now_ms);
        Ok((before - sessions.len()) as u64)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn config() -> Arc<RegistryConfig> {
    Arc::new(RegistryConfig::default())
}

fn client_input() -> RegisterClientInput {
    RegisterClientInput {
        nome: Some("Maria Silva".to_string()),
        idade: Some("30".to_string()),
        email: Some("maria@example.com".to_string()),
        telefone: Some("(11) 98765-4321".to_string()),
        endereco: Some("Rua A, 100".to_string()),
        genero: Some("feminino".to_string()),
        cpf: Some("529.982.247-25".to_string()),
        senha: Some("SenhaForte#2024".to_string()),
        confirmar_senha: Some("SenhaForte#2024".to_string()),
    }
}

fn supplier_input() -> RegisterSupplierInput {
    RegisterSupplierInput {
        nome: Some("Fornecedor X".to_string()),
        razao: Some("Fornecedor X Ltda".to_string()),
        cpfcnpj: Some("11.222.333/0001-81".to_string()),
        idade: None,
        telefone: Some("1187654321".to_string()),
        email: Some("contato@fornecedor.com".to_string()),
        endereco: Some("Av. B, 200".to_string()),
        site: Some("https://fornecedor.com".to_string()),
        servico: Some("Limpeza".to_string()),
        tempo: Some("12 meses".to_string()),
        contrato: Some("CT-001".to_string()),
        responsavel: Some("João".to_string()),
        obs: None,
    }
}

// ============================================================================
// Supplier registration
// ============================================================================

#[tokio::test]
async fn test_register_supplier() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterSupplierUseCase::new(repo.clone());

    let supplier = use_case.execute(supplier_input()).await.unwrap();
    assert_eq!(supplier.id, 1);
    assert_eq!(supplier.cpfcnpj.as_digits(), "11222333000181");
    assert!(supplier.idade.is_none());
    assert_eq!(repo.supplier_count(), 1);
}

#[tokio::test]
async fn test_register_supplier_duplicate_tax_id_creates_no_row() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterSupplierUseCase::new(repo.clone());

    use_case.execute(supplier_input()).await.unwrap();
    let count_before = repo.supplier_count();

    let mut second = supplier_input();
    second.email = Some("outro@fornecedor.com".to_string());
    let err = use_case.execute(second).await.unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateTaxId));
    assert_eq!(repo.supplier_count(), count_before);
}

#[tokio::test]
async fn test_register_supplier_missing_field_named() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterSupplierUseCase::new(repo.clone());

    let mut input = supplier_input();
    input.razao = None;
    let err = use_case.execute(input).await.unwrap_err();

    assert!(matches!(err, RegistryError::MissingField("razao")));
    assert_eq!(err.to_string(), "O campo 'razao' é obrigatório.");
    assert_eq!(repo.supplier_count(), 0);
}

#[tokio::test]
async fn test_register_supplier_invalid_tax_id_rejected() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterSupplierUseCase::new(repo.clone());

    let mut input = supplier_input();
    input.cpfcnpj = Some("123456".to_string());
    let err = use_case.execute(input).await.unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "CPF/CNPJ inválido.");
}

#[tokio::test]
async fn test_register_supplier_with_cpf_and_age() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterSupplierUseCase::new(repo.clone());

    let mut input = supplier_input();
    input.cpfcnpj = Some("529.982.247-25".to_string());
    input.idade = Some("45".to_string());
    let supplier = use_case.execute(input).await.unwrap();

    assert_eq!(supplier.cpfcnpj.as_digits(), "52998224725");
    assert_eq!(supplier.idade.unwrap().value(), 45);
}

// ============================================================================
// Client registration
// ============================================================================

#[tokio::test]
async fn test_register_client_creates_session() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterClientUseCase::new(repo.clone(), repo.clone(), config());

    let output = use_case.execute(client_input()).await.unwrap();

    assert_eq!(repo.client_count(), 1);
    assert_eq!(repo.session_count(), 1);

    // The issued token opens the session it created
    let check = CheckSessionUseCase::new(repo.clone(), config());
    let info = check.execute(&output.session_token).await.unwrap();
    assert_eq!(info.cliente_nome, "Maria Silva");
    assert_eq!(info.cliente_email, "maria@example.com");
}

#[tokio::test]
async fn test_register_client_duplicate_cpf_creates_no_row() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterClientUseCase::new(repo.clone(), repo.clone(), config());

    use_case.execute(client_input()).await.unwrap();
    let count_before = repo.client_count();

    // Same CPF, different email
    let mut second = client_input();
    second.email = Some("outra@example.com".to_string());
    let err = use_case.execute(second).await.unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateClient));
    assert_eq!(err.status_code(), 400);
    assert_eq!(repo.client_count(), count_before);
}

#[tokio::test]
async fn test_client_insert_surfaces_duplicate_from_constraint() {
    // Bypass the use-case pre-check to exercise the storage-level guard
    let repo = InMemoryRepository::default();
    let use_case = RegisterClientUseCase::new(
        Arc::new(repo.clone()),
        Arc::new(repo.clone()),
        config(),
    );
    use_case.execute(client_input()).await.unwrap();

    let existing = repo.clients.lock().unwrap()[0].clone();
    let duplicate = NewClient {
        nome: existing.nome.clone(),
        idade: existing.idade,
        email: Email::from_db("nova@example.com"),
        telefone: existing.telefone.clone(),
        endereco: existing.endereco.clone(),
        genero: existing.genero,
        cpf: existing.cpf.clone(),
        senha: existing.senha.clone(),
    };

    let err = ClientRepository::insert(&repo, &duplicate).await.unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateClient));
    assert_eq!(repo.client_count(), 1);
}

#[tokio::test]
async fn test_register_client_missing_fields() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterClientUseCase::new(repo.clone(), repo.clone(), config());

    let mut input = client_input();
    input.telefone = None;
    let err = use_case.execute(input).await.unwrap_err();

    assert!(matches!(err, RegistryError::MissingFields));
    assert_eq!(repo.client_count(), 0);
}

#[tokio::test]
async fn test_register_client_password_mismatch() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterClientUseCase::new(repo.clone(), repo.clone(), config());

    let mut input = client_input();
    input.confirmar_senha = Some("Diferente#2024".to_string());
    let err = use_case.execute(input).await.unwrap_err();

    assert!(matches!(err, RegistryError::PasswordMismatch));
}

#[tokio::test]
async fn test_register_client_weak_password() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterClientUseCase::new(repo.clone(), repo.clone(), config());

    let mut input = client_input();
    input.senha = Some("senhafraca".to_string());
    input.confirmar_senha = Some("senhafraca".to_string());
    let err = use_case.execute(input).await.unwrap_err();

    assert!(matches!(err, RegistryError::WeakPassword));
    assert_eq!(repo.client_count(), 0);
}

#[tokio::test]
async fn test_register_client_invalid_gender() {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterClientUseCase::new(repo.clone(), repo.clone(), config());

    let mut input = client_input();
    input.genero = Some("desconhecido".to_string());
    let err = use_case.execute(input).await.unwrap_err();

    assert_eq!(err.to_string(), "Gênero inválido.");
}

// ============================================================================
// Login / session lifecycle
// ============================================================================

async fn registered_repo() -> Arc<InMemoryRepository> {
    let repo = Arc::new(InMemoryRepository::default());
    let use_case = RegisterClientUseCase::new(repo.clone(), repo.clone(), config());
    use_case.execute(client_input()).await.unwrap();
    repo
}

#[tokio::test]
async fn test_sign_in_with_correct_password() {
    let repo = registered_repo().await;
    let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config());

    let output = use_case
        .execute(SignInInput {
            email: Some("maria@example.com".to_string()),
            senha: Some("SenhaForte#2024".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(output.cliente_nome, "Maria Silva");

    let check = CheckSessionUseCase::new(repo.clone(), config());
    assert!(check.execute(&output.session_token).await.is_ok());
}

#[tokio::test]
async fn test_sign_in_with_wrong_password() {
    let repo = registered_repo().await;
    let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config());

    let err = use_case
        .execute(SignInInput {
            email: Some("maria@example.com".to_string()),
            senha: Some("SenhaErrada#2024".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::InvalidCredentials));
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn test_sign_in_unknown_email_same_error() {
    let repo = registered_repo().await;
    let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config());

    let err = use_case
        .execute(SignInInput {
            email: Some("ninguem@example.com".to_string()),
            senha: Some("SenhaForte#2024".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::InvalidCredentials));
}

#[tokio::test]
async fn test_sign_in_missing_credentials() {
    let repo = registered_repo().await;
    let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config());

    let err = use_case.execute(SignInInput::default()).await.unwrap_err();
    assert!(matches!(err, RegistryError::MissingCredentials));
}

#[tokio::test]
async fn test_check_session_rejects_tampered_token() {
    let repo = registered_repo().await;
    let check = CheckSessionUseCase::new(repo.clone(), config());

    let forged = session_token::issue(Uuid::new_v4(), &[1u8; 32]);
    let err = check.execute(&forged).await.unwrap_err();
    assert!(matches!(err, RegistryError::SessionInvalid));

    let err = check.execute("garbage").await.unwrap_err();
    assert!(matches!(err, RegistryError::SessionInvalid));
}

#[tokio::test]
async fn test_check_session_deletes_expired_session() {
    let repo = registered_repo().await;

    // Force the stored session into the past
    let token = {
        let mut sessions = repo.sessions.lock().unwrap();
        let session = &mut sessions[0];
        session.expires_at_ms = Utc::now().timestamp_millis() - 1_000;
        session_token::issue(session.session_id, &config().session_secret)
    };

    let check = CheckSessionUseCase::new(repo.clone(), config());
    let err = check.execute(&token).await.unwrap_err();

    assert!(matches!(err, RegistryError::SessionInvalid));
    assert_eq!(repo.session_count(), 0);
}

#[tokio::test]
async fn test_sign_out_removes_session() {
    let repo = registered_repo().await;
    let sign_in = SignInUseCase::new(repo.clone(), repo.clone(), config());
    let output = sign_in
        .execute(SignInInput {
            email: Some("maria@example.com".to_string()),
            senha: Some("SenhaForte#2024".to_string()),
        })
        .await
        .unwrap();

    let sessions_before = repo.session_count();
    let sign_out = SignOutUseCase::new(repo.clone(), config());
    sign_out.execute(&output.session_token).await.unwrap();
    assert_eq!(repo.session_count(), sessions_before - 1);

    let check = CheckSessionUseCase::new(repo.clone(), config());
    assert!(check.execute(&output.session_token).await.is_err());
}

#[tokio::test]
async fn test_cleanup_expired_sessions() {
    let repo = registered_repo().await;
    {
        let mut sessions = repo.sessions.lock().unwrap();
        sessions[0].expires_at_ms = Utc::now().timestamp_millis() - 1_000;
    }

    let deleted = SessionRepository::cleanup_expired(repo.as_ref()).await.unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(repo.session_count(), 0);
}

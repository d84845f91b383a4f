//! HTTP Handlers

use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use axum::{Form, Json};
use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::application::{
    CheckSessionUseCase, ListClientsUseCase, ListSuppliersUseCase, RegisterClientInput,
    RegisterClientUseCase, RegisterSupplierInput, RegisterSupplierUseCase, SignInInput,
    SignInUseCase, SignOutUseCase,
};
use crate::domain::repository::{ClientRepository, SessionRepository, SupplierRepository};
use crate::error::RegistryResult;
use crate::presentation::dto::{
    ClienteForm, ClienteJson, FornecedorForm, FornecedorJson, LoginForm, SessionStatusResponse,
    StatusResponse,
};

/// Shared state for registry handlers
#[derive(Clone)]
pub struct RegistryAppState<R>
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<RegistryConfig>,
}

// ============================================================================
// Supplier Registration
// ============================================================================

/// POST /cadastrar
pub async fn cadastrar_fornecedor<R>(
    State(state): State<RegistryAppState<R>>,
    Form(form): Form<FornecedorForm>,
) -> RegistryResult<Json<StatusResponse>>
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterSupplierUseCase::new(state.repo.clone());

    use_case
        .execute(RegisterSupplierInput {
            nome: form.nome,
            razao: form.razao,
            cpfcnpj: form.cpfcnpj,
            idade: form.idade,
            telefone: form.telefone,
            email: form.email,
            endereco: form.endereco,
            site: form.site,
            servico: form.servico,
            tempo: form.tempo,
            contrato: form.contrato,
            responsavel: form.responsavel,
            obs: form.obs,
        })
        .await?;

    Ok(Json(StatusResponse::ok("Cadastro realizado com sucesso!")))
}

// ============================================================================
// Client Registration
// ============================================================================

/// POST /cadastrar_cliente
pub async fn cadastrar_cliente<R>(
    State(state): State<RegistryAppState<R>>,
    Form(form): Form<ClienteForm>,
) -> RegistryResult<impl IntoResponse>
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        RegisterClientUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterClientInput {
            nome: form.nome,
            idade: form.idade,
            email: form.email,
            telefone: form.telefone,
            endereco: form.endereco,
            genero: form.genero,
            cpf: form.cpf,
            senha: form.senha,
            confirmar_senha: form.confirmar_senha,
        })
        .await?;

    // Registration logs the client in right away
    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(StatusResponse::ok_with_redirect(
            "Cliente cadastrado com sucesso!",
            "/",
        )),
    ))
}

// ============================================================================
// Login / Logout / Session
// ============================================================================

/// POST /login_cliente
pub async fn login_cliente<R>(
    State(state): State<RegistryAppState<R>>,
    Form(form): Form<LoginForm>,
) -> RegistryResult<impl IntoResponse>
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            email: form.email,
            senha: form.senha,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(StatusResponse::ok_with_redirect(
            "Login realizado com sucesso!",
            "/",
        )),
    ))
}

/// GET /logout
pub async fn logout<R>(
    State(state): State<RegistryAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_session_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        [(header::SET_COOKIE, cookie)],
        Json(StatusResponse::ok_with_redirect("Sessão encerrada.", "/")),
    )
}

/// GET /check_session
pub async fn check_session<R>(
    State(state): State<RegistryAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let info = match extract_session_cookie(&headers, &state.config.session_cookie_name) {
        Some(token) => use_case.execute(&token).await.ok(),
        None => None,
    };

    match info {
        Some(info) => Json(SessionStatusResponse {
            logged_in: true,
            cliente_nome: Some(info.cliente_nome),
            cliente_email: Some(info.cliente_email),
        }),
        None => Json(SessionStatusResponse::logged_out()),
    }
}

// ============================================================================
// Listings
// ============================================================================

/// GET /fornecedores_json
pub async fn fornecedores_json<R>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<FornecedorJson>>>
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let suppliers = ListSuppliersUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(suppliers.iter().map(FornecedorJson::from).collect()))
}

/// GET /clientes_json
pub async fn clientes_json<R>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<ClienteJson>>>
where
    R: SupplierRepository + ClientRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let clients = ListClientsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(clients.iter().map(ClienteJson::from).collect()))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}

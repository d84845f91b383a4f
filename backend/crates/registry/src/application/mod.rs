//! Application Layer - Use Cases

pub mod check_session;
pub mod config;
pub mod list_records;
pub mod register_client;
pub mod register_supplier;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;

pub use check_session::{CheckSessionUseCase, SessionInfoOutput};
pub use list_records::{ListClientsUseCase, ListSuppliersUseCase};
pub use register_client::{RegisterClientInput, RegisterClientOutput, RegisterClientUseCase};
pub use register_supplier::{RegisterSupplierInput, RegisterSupplierUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;

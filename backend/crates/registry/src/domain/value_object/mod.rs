//! Value Objects
//!
//! Validated wrappers over raw form input. Constructors reject invalid
//! values with user-facing messages; `from_db` constructors trust values
//! that already passed validation on the way in.

pub mod age;
pub mod client_password;
pub mod cnpj;
pub mod cpf;
pub mod email;
pub mod gender;
pub mod phone;
pub mod tax_id;

pub use age::Age;
pub use client_password::{ClientPassword, RawPassword};
pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use email::Email;
pub use gender::Gender;
pub use phone::Phone;
pub use tax_id::TaxId;

//! Cadastro record types and form validation.
//!
//! The records mirror the backend's JSON shape; the validation layer runs
//! the CPF/CNPJ check from [`crate::documento`] before anything is submitted.

mod error;
mod types;
mod validation;

pub use error::*;
pub use types::*;
pub use validation::*;

//! # cadastro
//!
//! Customer ("cadastro/cliente") records for Brazilian businesses: CPF and
//! CNPJ masking and check-digit validation, form validation, and a typed
//! async client for the cadastro REST backend.
//!
//! The validator is pure and framework-free, so the same checks can run
//! in a form, a CLI, or a server.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::*;
//!
//! assert_eq!(mask_documento("1114447"), "111.444.7");
//! assert_eq!(mask_documento("11222333000181"), "11.222.333/0001-81");
//! assert!(is_documento_valido("111.444.777-35"));
//! assert!(!is_documento_valido("111.444.777-36"));
//!
//! let form = CadastroForm {
//!     nome: "ACME Ltda".into(),
//!     documento: "11.222.333/0001-81".into(),
//!     ..Default::default()
//! };
//! assert!(validate_cadastro(&form).is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ validation and masking, record types, form validation |
//! | `client` | Async REST client, env configuration, `CadastroStore` state holder |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod documento;

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "core")]
pub use crate::documento::{DocumentKind, Documento, is_documento_valido, mask_documento};

use thiserror::Error;

use crate::documento::DocumentoError;

/// Errors that can occur while building or checking cadastro records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CadastroError {
    /// One or more form validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The document is not a valid CPF or CNPJ.
    #[error("invalid document: {0}")]
    Documento(#[from] DocumentoError),
}

impl CadastroError {
    /// Collapse a list of field errors into a single `Validation` error.
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        Self::Validation(ValidationError::join(errors))
    }
}

/// A single validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the invalid form field (e.g. "documento").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Render several errors as one `"; "`-separated line.
    pub fn join(errors: &[Self]) -> String {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::kind::DocumentKind;
use super::mask::mask_as;
use super::{all_same, digits_only};

/// Why a value is not a valid CPF or CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentoError {
    /// Digit count is neither 11 nor 14.
    #[error("expected 11 (CPF) or 14 (CNPJ) digits, got {len}")]
    InvalidLength { len: usize },

    /// Every digit is the same.
    #[error("repeated-digit sequence is not a valid document")]
    RepeatedDigits,

    /// Check digits do not match the base digits.
    #[error("{kind} check digits do not match")]
    CheckDigitMismatch { kind: DocumentKind },
}

/// A CPF or CNPJ whose check digits have been verified.
///
/// Stores digits only; punctuation is re-applied by [`Documento::masked`]
/// and `Display`. Serializes as the bare digit string and validates again
/// on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Documento {
    digits: String,
    kind: DocumentKind,
}

impl Documento {
    /// Parse a CPF or CNPJ, with or without punctuation.
    pub fn parse(value: &str) -> Result<Self, DocumentoError> {
        let digits = digits_only(value);
        let kind = DocumentKind::from_len(digits.len())
            .ok_or(DocumentoError::InvalidLength { len: digits.len() })?;

        if all_same(digits.as_bytes()) {
            return Err(DocumentoError::RepeatedDigits);
        }
        if !kind.is_valid(&digits) {
            return Err(DocumentoError::CheckDigitMismatch { kind });
        }

        Ok(Self { digits, kind })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The document as bare digits, e.g. `"11144477735"`.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The document with its display mask, e.g. `"111.444.777-35"`.
    pub fn masked(&self) -> String {
        mask_as(self.kind, &self.digits)
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> &str {
        &self.digits[self.digits.len() - 2..]
    }
}

impl FromStr for Documento {
    type Err = DocumentoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Documento {
    type Error = DocumentoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Documento> for String {
    fn from(doc: Documento) -> Self {
        doc.digits
    }
}

impl fmt::Display for Documento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

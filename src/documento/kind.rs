use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CNPJ_LEN, CPF_LEN, digits_only, validate_cnpj, validate_cpf};

/// Which Brazilian tax identifier a digit sequence represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// Individual taxpayer, 11 digits.
    Cpf,
    /// Company, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Classify by digit count: 11 is a CPF, 14 a CNPJ, anything else neither.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Classify a possibly formatted value by its digits.
    pub fn detect(value: &str) -> Option<Self> {
        Self::from_len(digits_only(value).len())
    }

    /// Number of digits, check digits included.
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }

    /// Run this kind's check-digit validation over bare digits.
    pub fn is_valid(self, digits: &str) -> bool {
        match self {
            Self::Cpf => validate_cpf(digits),
            Self::Cnpj => validate_cnpj(digits),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

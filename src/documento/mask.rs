//! Progressive display masks for CPF and CNPJ.

use super::kind::DocumentKind;
use super::{CNPJ_LEN, CPF_LEN, digits_only};

/// `XXX.XXX.XXX-XX`: separator inserted before the digit at each index.
const CPF_SEPARATORS: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];

/// `XX.XXX.XXX/XXXX-XX`
const CNPJ_SEPARATORS: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Apply the CPF or CNPJ display mask to partial or complete input.
///
/// Non-digits are discarded first. Up to 11 digits are grouped as a CPF,
/// more than 11 as a CNPJ truncated to 14 digits. A separator only appears
/// once a digit follows it, so input still being typed stays readable:
///
/// ```rust
/// use cadastro::documento::mask_documento;
///
/// assert_eq!(mask_documento("123"), "123");
/// assert_eq!(mask_documento("1234"), "123.4");
/// assert_eq!(mask_documento("12345678901"), "123.456.789-01");
/// assert_eq!(mask_documento("123456789012"), "12.345.678/9012");
/// assert_eq!(mask_documento("12345678901234"), "12.345.678/9012-34");
/// ```
///
/// This is purely a display transform; it never validates.
pub fn mask_documento(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() <= CPF_LEN {
        apply_separators(&digits, CPF_SEPARATORS)
    } else {
        let end = digits.len().min(CNPJ_LEN);
        apply_separators(&digits[..end], CNPJ_SEPARATORS)
    }
}

/// Mask `digits` with the fixed pattern of `kind`, regardless of length.
pub(crate) fn mask_as(kind: DocumentKind, digits: &str) -> String {
    match kind {
        DocumentKind::Cpf => apply_separators(digits, CPF_SEPARATORS),
        DocumentKind::Cnpj => apply_separators(digits, CNPJ_SEPARATORS),
    }
}

fn apply_separators(digits: &str, separators: &[(usize, char)]) -> String {
    let mut out = String::with_capacity(digits.len() + separators.len());
    for (i, c) in digits.chars().enumerate() {
        if let Some(&(_, sep)) = separators.iter().find(|(pos, _)| *pos == i) {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

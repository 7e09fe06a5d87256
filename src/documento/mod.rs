//! CPF and CNPJ masking and check-digit validation.
//!
//! Everything here is a pure function over `&str`: no I/O, no shared state,
//! and no error channel. Malformed input is "not a valid document", so the
//! predicates return `false` and the mask returns whatever digits it found.
//!
//! # Example
//!
//! ```rust
//! use cadastro::documento::*;
//!
//! assert_eq!(mask_documento("11144477735"), "111.444.777-35");
//! assert!(is_documento_valido("111.444.777-35"));
//! assert!(is_documento_valido("11.222.333/0001-81"));
//! assert!(!is_documento_valido("11111111111"));
//!
//! let doc: Documento = "11.222.333/0001-81".parse().unwrap();
//! assert_eq!(doc.kind(), DocumentKind::Cnpj);
//! assert_eq!(doc.digits(), "11222333000181");
//! ```

mod cnpj;
mod cpf;
mod kind;
mod mask;
mod value;

pub use cnpj::{CNPJ_LEN, cnpj_check_digits, validate_cnpj};
pub use cpf::{CPF_LEN, cpf_check_digits, validate_cpf};
pub use kind::DocumentKind;
pub use mask::mask_documento;
pub use value::{Documento, DocumentoError};

/// Strip every character that is not an ASCII decimal digit, keeping order.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a CPF or CNPJ, with or without punctuation.
///
/// 11 digits are checked as a CPF, 14 as a CNPJ. Any other digit count
/// is not a supported document and yields `false`.
pub fn is_documento_valido(doc: &str) -> bool {
    let clean = digits_only(doc);
    match DocumentKind::from_len(clean.len()) {
        Some(DocumentKind::Cpf) => validate_cpf(&clean),
        Some(DocumentKind::Cnpj) => validate_cnpj(&clean),
        None => false,
    }
}

/// Parse exactly `N` ASCII digits into their numeric values.
pub(crate) fn parse_digits<const N: usize>(value: &str) -> Option<[u8; N]> {
    let bytes = value.as_bytes();
    if bytes.len() != N || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut out = [0u8; N];
    for (slot, b) in out.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    Some(out)
}

/// `00000000000`, `11111111111`, ... pass the arithmetic but are never issued.
pub(crate) fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Reduce a weighted sum to a check digit: `0` when `sum % 11 < 2`, else `11 - sum % 11`.
pub(crate) fn mod11_check_digit(sum: u32) -> u8 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_punctuation() {
        assert_eq!(digits_only("111.444.777-35"), "11144477735");
        assert_eq!(digits_only("11.222.333/0001-81"), "11222333000181");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn digits_only_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not decimal digits for this purpose
        assert_eq!(digits_only("١٢٣4"), "4");
    }

    #[test]
    fn dispatch_by_length() {
        assert!(is_documento_valido("11144477735"));
        assert!(is_documento_valido("11222333000181"));
        assert!(!is_documento_valido("1114447773"));
        assert!(!is_documento_valido("112223330001811"));
        assert!(!is_documento_valido(""));
    }

    #[test]
    fn dispatch_accepts_formatted_input() {
        assert!(is_documento_valido("111.444.777-35"));
        assert!(is_documento_valido(" 11.222.333/0001-81 "));
    }

    #[test]
    fn parse_digits_rejects_wrong_shape() {
        assert_eq!(parse_digits::<3>("123"), Some([1, 2, 3]));
        assert_eq!(parse_digits::<3>("12"), None);
        assert_eq!(parse_digits::<3>("1a3"), None);
        assert_eq!(parse_digits::<3>("1234"), None);
    }

    #[test]
    fn mod11_reduction() {
        assert_eq!(mod11_check_digit(0), 0);
        assert_eq!(mod11_check_digit(1), 0);
        assert_eq!(mod11_check_digit(2), 9);
        assert_eq!(mod11_check_digit(102), 8);
        assert_eq!(mod11_check_digit(120), 1);
    }

    #[test]
    fn repeated_digits_detected() {
        assert!(all_same(&[7; 11]));
        assert!(!all_same(&[1, 1, 2]));
    }
}

//! CNPJ (Cadastro Nacional da Pessoa Jurídica) check digits.

use super::{all_same, mod11_check_digit, parse_digits};

/// Number of digits in a CNPJ, check digits included.
pub const CNPJ_LEN: usize = 14;

/// Validate a CNPJ given as exactly 14 digits, without punctuation.
///
/// Anything that is not 14 ASCII digits returns `false`, as do the
/// repeated-digit sequences.
pub fn validate_cnpj(cnpj: &str) -> bool {
    let Some(d) = parse_digits::<CNPJ_LEN>(cnpj) else {
        return false;
    };
    if all_same(&d) {
        return false;
    }

    cycling_check_digit(&d[..12]) == d[12] && cycling_check_digit(&d[..13]) == d[13]
}

/// Compute both CNPJ check digits for a 12-digit base.
///
/// Returns `None` unless `base` is exactly 12 ASCII digits.
pub fn cnpj_check_digits(base: &str) -> Option<[u8; 2]> {
    let base = parse_digits::<12>(base)?;
    let dv1 = cycling_check_digit(&base);

    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(&base);
    extended[12] = dv1;
    Some([dv1, cycling_check_digit(&extended)])
}

/// Weights start at `len - 7` and count down, wrapping from 2 back to 9.
///
/// 12 digits: 5,4,3,2,9,8,7,6,5,4,3,2. 13 digits: 6,5,4,3,2,9,8,7,6,5,4,3,2.
fn cycling_check_digit(digits: &[u8]) -> u8 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0u32;
    for &d in digits {
        sum += u32::from(d) * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }
    mod11_check_digit(sum)
}

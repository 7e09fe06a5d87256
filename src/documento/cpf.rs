//! CPF (Cadastro de Pessoas Físicas) check digits.

use super::{all_same, mod11_check_digit, parse_digits};

/// Number of digits in a CPF, check digits included.
pub const CPF_LEN: usize = 11;

/// Validate a CPF given as exactly 11 digits, without punctuation.
///
/// Anything that is not 11 ASCII digits returns `false`, as do the
/// repeated-digit sequences (`00000000000` .. `99999999999`).
pub fn validate_cpf(cpf: &str) -> bool {
    let Some(d) = parse_digits::<CPF_LEN>(cpf) else {
        return false;
    };
    if all_same(&d) {
        return false;
    }

    // The second digit is weighed over the digits as given, d[9] included
    weighted_check_digit(&d[..9]) == d[9] && weighted_check_digit(&d[..10]) == d[10]
}

/// Compute both CPF check digits for a 9-digit base.
///
/// Returns `None` unless `base` is exactly 9 ASCII digits.
pub fn cpf_check_digits(base: &str) -> Option<[u8; 2]> {
    let base = parse_digits::<9>(base)?;
    let dv1 = weighted_check_digit(&base);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(&base);
    extended[9] = dv1;
    Some([dv1, weighted_check_digit(&extended)])
}

/// Weights run linearly from `len + 1` down to 2.
fn weighted_check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip(0u32..)
        .map(|(&d, i)| u32::from(d) * (top - i))
        .sum();
    mod11_check_digit(sum)
}

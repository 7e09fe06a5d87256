use super::error::ValidationError;
use super::types::CadastroForm;
use crate::documento::{DocumentKind, digits_only, is_documento_valido};

/// Validate a cadastro form before it is submitted.
/// Returns all validation errors found (not just the first).
pub fn validate_cadastro(form: &CadastroForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if form.nome.trim().is_empty() {
        errors.push(ValidationError::new("nome", "nome é obrigatório"));
    }

    validate_documento(&form.documento, &mut errors);

    errors
}

fn validate_documento(documento: &str, errors: &mut Vec<ValidationError>) {
    let digits = digits_only(documento);
    if digits.is_empty() {
        errors.push(ValidationError::new("documento", "CPF/CNPJ é obrigatório"));
        return;
    }

    match DocumentKind::from_len(digits.len()) {
        None => errors.push(ValidationError::new(
            "documento",
            format!("CPF/CNPJ deve ter 11 ou 14 dígitos, encontrados {}", digits.len()),
        )),
        Some(kind) if !is_documento_valido(&digits) => {
            errors.push(ValidationError::new("documento", format!("{kind} inválido")));
        }
        Some(_) => {}
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // The predicate and the typed parser must agree on every input.
        let valid = cadastro::is_documento_valido(s);
        assert_eq!(valid, cadastro::Documento::parse(s).is_ok());
        let _ = cadastro::documento::validate_cpf(s);
        let _ = cadastro::documento::validate_cnpj(s);
    }
});

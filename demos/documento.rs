use cadastro::documento::*;

fn main() {
    println!("=== Mask while typing ===\n");

    let mut field = String::new();
    for ch in "11222333000181".chars() {
        field.push(ch);
        field = mask_documento(&field);
        println!("  {field}");
    }

    println!("\n=== CPF / CNPJ Validation ===\n");

    let test_docs = [
        "111.444.777-35",     // valid CPF
        "111.444.777-36",     // wrong check digit
        "11.222.333/0001-81", // valid CNPJ
        "22.222.222/2222-22", // repeated digits
        "123.456",            // incomplete
    ];

    for doc in &test_docs {
        match Documento::parse(doc) {
            Ok(d) => println!("  {doc} => valid {} (digits: {})", d.kind(), d.digits()),
            Err(e) => println!("  {doc} => INVALID: {e}"),
        }
    }

    println!("\n=== Check digits ===\n");

    if let Some([a, b]) = cpf_check_digits("987654321") {
        println!("  CPF base 987654321 => {}", mask_documento(&format!("987654321{a}{b}")));
    }
    if let Some([a, b]) = cnpj_check_digits("987654320001") {
        println!("  CNPJ base 987654320001 => {}", mask_documento(&format!("987654320001{a}{b}")));
    }
}

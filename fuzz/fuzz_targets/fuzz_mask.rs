#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and re-masking must be stable.
        let once = cadastro::mask_documento(s);
        let twice = cadastro::mask_documento(&once);
        assert_eq!(once, twice);
    }
});

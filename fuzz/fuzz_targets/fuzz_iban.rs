#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; errors are fine, panics are bugs.
        let valid = finident::iban::validate(s).is_valid();
        if valid {
            assert!(finident::iban::is_valid_iban(s));
            assert!(finident::iban::parse(s).is_some());
        }
        let _ = finident::iban::format(s);
        let _ = finident::iban::check_digits(s);
    }
});

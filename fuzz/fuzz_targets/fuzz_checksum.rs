#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = finident::checksum::mod97(s);
        let _ = finident::checksum::luhn(s);
        let _ = finident::checksum::mod10_recursive(s);
        let _ = finident::checksum::iso7064_mod11_10(s);
        let _ = finident::checksum::expand_letters(s);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Every family, both dispatch paths; only panics are bugs.
        let _ = finident::iban::registry().validate(s);
        let _ = finident::vat::validate_vat(s);
        let _ = finident::vat::registry().validate_for(s.get(..2).unwrap_or(""), s);
        let _ = finident::card::parse_card(s);
        let _ = finident::national::registry().validate_for("CN", s);
        let _ = finident::reference::validate_kid(s);
        let _ = finident::reference::validate_ogm(s);
        let _ = finident::reference::validate_rf(s);
        let _ = finident::reference::validate_qr_reference(s);
        let _ = finident::reference::validate_finnish_reference(s);
    }
});

#![cfg(feature = "iban")]

use finident::core::ErrorCode;
use finident::iban::*;

// ---------------------------------------------------------------------------
// Known vectors
// ---------------------------------------------------------------------------

#[test]
fn belgian_vectors() {
    assert!(is_valid_iban("BE68539007547034"));
    assert!(!is_valid_iban("BE00539007547034"));
    assert!(is_valid_iban("be68 5390 0754 7034"));
}

#[test]
fn letters_anywhere_in_bban() {
    assert!(is_valid_iban("GB82WEST12345698765432"));
    assert!(is_valid_iban("gb82 west 1234 5698 7654 32"));
    assert!(!is_valid_iban("GB82WEST12345698765433"));
    // Swapping a letter changes its two-digit expansion.
    assert!(!is_valid_iban("GB82WESU12345698765432"));
}

#[test]
fn published_examples_validate_fully() {
    for iban in [
        "AD1200012030200359100100",
        "AT611904300234573201",
        "CH9300762011623852957",
        "DE89370400440532013000",
        "ES9121000418450200051332",
        "FR1420041010050500013M02606",
        "GB82WEST12345698765432",
        "IT60X0542811101000000123456",
        "NL91ABNA0417164300",
        "NO9386011117947",
        "PL61109010140000071219812874",
        "SE4550000000058398257466",
    ] {
        let result = validate(iban);
        assert!(result.is_valid(), "{iban}: {:?}", result.message());
    }
}

// ---------------------------------------------------------------------------
// Error ordering
// ---------------------------------------------------------------------------

#[test]
fn each_stage_reports_its_code() {
    let code = |raw: &str| validate(raw).error_code();
    assert_eq!(code(""), Some(ErrorCode::InvalidInput));
    assert_eq!(code("BE6"), Some(ErrorCode::InvalidInput));
    assert_eq!(code("1268539007547034"), Some(ErrorCode::InvalidCountryCode));
    assert_eq!(code("QQ68539007547034"), Some(ErrorCode::InvalidCountryCode));
    assert_eq!(code("US68539007547034"), Some(ErrorCode::UnsupportedCountry));
    assert_eq!(code("BE685390075470341"), Some(ErrorCode::InvalidLength));
    assert_eq!(code("BE6853900754703A"), Some(ErrorCode::InvalidFormat));
    assert_eq!(code("BE69539007547034"), Some(ErrorCode::InvalidChecksum));
}

#[test]
fn junk_never_panics() {
    for raw in ["", "  ", "----", "ÄÄÄÄ", "BE😀", "DE89 3704 0044 0532 0130 0Ω", "\u{0}\u{0}\u{0}\u{0}"] {
        let _ = validate(raw);
        let _ = parse(raw);
        let _ = is_valid_iban(raw);
        let _ = country_code(raw);
        let _ = check_digits(raw);
    }
}

// ---------------------------------------------------------------------------
// Accessors, formatting, check digit computation
// ---------------------------------------------------------------------------

#[test]
fn accessors_are_bounds_checked() {
    assert_eq!(country_code("BE68539007547034"), "BE");
    assert_eq!(check_digits("BE68539007547034"), 68);
    assert_eq!(country_code("B"), "");
    assert_eq!(check_digits("BE6"), 0);
}

#[test]
fn format_round_trips_through_normalize() {
    let formatted = format("DE89370400440532013000");
    assert_eq!(formatted, "DE89 3704 0044 0532 0130 00");
    assert_eq!(normalize(&formatted), "DE89370400440532013000");
}

#[test]
fn computed_check_digits_validate() {
    assert_eq!(compute_check_digits("BE", "539007547034").unwrap(), "68");
    assert_eq!(compute_check_digits("gb", "WEST12345698765432").unwrap(), "82");
    assert!(compute_check_digits("BE", "5390.07547034").is_err());
}

#[test]
fn parse_components() {
    let d = parse("FR14 2004 1010 0505 0001 3M02 606").unwrap();
    assert_eq!(d.country_code.as_deref(), Some("FR"));
    assert_eq!(d.normalized, "FR1420041010050500013M02606");
    assert_eq!(d.component("check_digits"), Some("14"));
    assert_eq!(d.component("bban"), Some("20041010050500013M02606"));
    assert!(parse("FR1420041010050500013M02607").is_none());
}

#[test]
fn aggregator_and_country_validator_agree() {
    let via_registry = registry().validate("NL91 ABNA 0417 1643 00");
    let direct = IbanValidator::for_country("NL").unwrap();
    assert!(via_registry.is_valid());
    assert_eq!(
        finident::registry::IdentifierValidator::validate(&direct, "NL91ABNA0417164300"),
        via_registry
    );
}

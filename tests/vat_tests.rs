#![cfg(feature = "vat")]

use std::sync::Arc;

use finident::core::{ErrorCode, IdentifierDetails, IdentifierKind, ValidationResult};
use finident::registry::{IdentifierValidator, ValidatorContainer};
use finident::vat::*;

// ---------------------------------------------------------------------------
// Published examples per country
// ---------------------------------------------------------------------------

#[test]
fn valid_ids_per_country() {
    for id in [
        "ATU13585627",
        "BE0776091951",
        "BE 0428.759.497",
        "CHE-116.281.710 MWST",
        "DE136695976",
        "DK13585628",
        "EE100931558",
        "EL094259216",
        "FI20774740",
        "FR40303265045",
        "HR33392005961",
        "IT00743110157",
        "LU26375245",
        "NL004495445B01",
        "NO923609016MVA",
        "PL5260250274",
        "PT501964843",
        "SE556188840401",
    ] {
        let result = validate_vat(id);
        assert!(result.is_valid(), "{id}: {:?}", result.message());
    }
}

#[test]
fn format_only_countries() {
    assert!(validate_vat("AD U-132950-X").is_valid());
    assert!(validate_vat("SM12345").is_valid());
    assert_eq!(
        validate_vat("SM1234").error_code(),
        Some(ErrorCode::InvalidLength)
    );
}

#[test]
fn corrupted_check_digits() {
    for id in ["ATU13585628", "DE136695977", "DK13585629", "IT00743110158", "PL5260250275"] {
        assert_eq!(
            validate_vat(id).error_code(),
            Some(ErrorCode::InvalidCheckDigit),
            "{id}"
        );
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn unsupported_prefix() {
    assert_eq!(
        validate_vat("ZZ12345").error_code(),
        Some(ErrorCode::UnsupportedCountry)
    );
    assert_eq!(
        validate_vat("GB123456789").error_code(),
        Some(ErrorCode::UnsupportedCountry)
    );
}

struct AcceptAllGb;

impl IdentifierValidator for AcceptAllGb {
    fn country_code(&self) -> &str {
        "GB"
    }

    fn validate(&self, _raw: &str) -> ValidationResult {
        ValidationResult::ok()
    }

    fn parse(&self, raw: &str) -> Option<IdentifierDetails> {
        Some(IdentifierDetails::new(IdentifierKind::Vat, raw).country("GB"))
    }
}

#[test]
fn runtime_registration_adds_a_country() {
    let container = Arc::new(ValidatorContainer::new());
    container.register(Arc::new(AcceptAllGb));
    let registry = registry_with_source(&container);

    assert!(registry.validate("GB123456789").is_valid());
    assert!(registry.validate("DE136695976").is_valid());
    assert_eq!(
        registry.parse("GB123456789").unwrap().country_code.as_deref(),
        Some("GB")
    );
}

#[test]
fn parse_exposes_number() {
    let d = parse_vat("FR 40 303 265 045").unwrap();
    assert_eq!(d.normalized, "FR40303265045");
    assert_eq!(d.component("number"), Some("40303265045"));
}

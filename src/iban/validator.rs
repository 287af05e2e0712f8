use std::sync::{Arc, LazyLock};

use super::checksum::iban_remainder;
use super::format::{country_code, format, normalize};
use super::rules::{CountryRule, country_rule, country_rules};
use crate::core::{
    ErrorCode, IdentifierDetails, IdentifierKind, ValidationResult, is_alpha2,
    is_identifier_country_prefix,
};
use crate::registry::{IdentifierValidator, StaticTable, ValidatorRegistry, ValidatorSource};

/// Region tag of the IBAN aggregator.
pub const IBAN_REGION: &str = "IBAN";

/// Fully validate an IBAN: country, length, BBAN structure and checksum.
///
/// Returns the first failure found, in that order.
pub fn validate(raw: &str) -> ValidationResult {
    let iban = normalize(raw);
    match rule_for(&iban) {
        Ok(rule) => validate_with_rule(&iban, rule),
        Err(failure) => failure,
    }
}

/// Parse a valid IBAN into its parts; `None` if it does not validate.
pub fn parse(raw: &str) -> Option<IdentifierDetails> {
    let iban = normalize(raw);
    let rule = rule_for(&iban).ok()?;
    details(&iban, rule)
}

fn rule_for(iban: &str) -> Result<&'static CountryRule, ValidationResult> {
    if iban.chars().count() < 4 {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidInput,
            "IBAN must have at least 4 characters",
        ));
    }
    let cc = country_code(iban);
    if !is_alpha2(cc) {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidCountryCode,
            "IBAN must start with a two-letter country code",
        ));
    }
    match country_rule(cc) {
        Some(rule) => Ok(rule),
        None if is_identifier_country_prefix(cc) => Err(ValidationResult::fail(
            ErrorCode::UnsupportedCountry,
            format!("country '{cc}' does not use IBAN"),
        )),
        None => Err(ValidationResult::fail(
            ErrorCode::InvalidCountryCode,
            format!("unknown country code '{cc}'"),
        )),
    }
}

fn validate_with_rule(iban: &str, rule: &CountryRule) -> ValidationResult {
    let cc = rule.country_code;
    let length = iban.chars().count();
    if length != rule.total_length {
        return ValidationResult::fail(
            ErrorCode::InvalidLength,
            format!(
                "IBAN for {cc} must have {} characters, got {length}",
                rule.total_length
            ),
        );
    }
    // every rule is ASCII, so a char/byte length mismatch means foreign characters
    if iban.len() != length || !iban.as_bytes()[2..4].iter().all(u8::is_ascii_digit) {
        return ValidationResult::fail(
            ErrorCode::InvalidFormat,
            "check digits must be two decimal digits",
        );
    }
    if let Err((position, charset)) = rule.check_bban(&iban[4..]) {
        return ValidationResult::fail(
            ErrorCode::InvalidFormat,
            format!(
                "BBAN for {cc} must match {}; invalid character at position {} (expected '{}')",
                rule.bban_format(),
                position + 5,
                charset.notation()
            ),
        );
    }
    match iban_remainder(iban) {
        Ok(1) => ValidationResult::ok(),
        Ok(_) => ValidationResult::fail(ErrorCode::InvalidChecksum, "IBAN checksum mismatch"),
        Err(err) => err.into(),
    }
}

fn details(iban: &str, rule: &CountryRule) -> Option<IdentifierDetails> {
    if !validate_with_rule(iban, rule).is_valid() {
        return None;
    }
    Some(
        IdentifierDetails::new(IdentifierKind::Iban, iban)
            .country(rule.country_code)
            .with("country_code", rule.country_code)
            .with("check_digits", &iban[2..4])
            .with("bban", &iban[4..])
            .with("formatted", format(iban)),
    )
}

/// IBAN validator bound to one country's rule.
///
/// Rejects IBANs of any other country with `InvalidCountryCode`.
#[derive(Debug, Clone, Copy)]
pub struct IbanValidator {
    rule: &'static CountryRule,
}

impl IbanValidator {
    pub fn new(rule: &'static CountryRule) -> Self {
        Self { rule }
    }

    /// Validator for `country_code`, if it uses IBAN.
    pub fn for_country(country_code: &str) -> Option<Self> {
        country_rule(&country_code.to_ascii_uppercase()).map(Self::new)
    }

    pub fn rule(&self) -> &'static CountryRule {
        self.rule
    }

    fn own_country(&self, iban: &str) -> Result<(), ValidationResult> {
        if country_code(iban) == self.rule.country_code {
            return Ok(());
        }
        Err(ValidationResult::fail(
            ErrorCode::InvalidCountryCode,
            format!("expected an IBAN from {}", self.rule.country_code),
        ))
    }
}

impl IdentifierValidator for IbanValidator {
    fn country_code(&self) -> &str {
        self.rule.country_code
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let iban = normalize(raw);
        if let Err(failure) = rule_for(&iban).and_then(|_| self.own_country(&iban)) {
            return failure;
        }
        validate_with_rule(&iban, self.rule)
    }

    fn parse(&self, raw: &str) -> Option<IdentifierDetails> {
        let iban = normalize(raw);
        self.own_country(&iban).ok()?;
        details(&iban, self.rule)
    }
}

/// One [`IbanValidator`] per country of the rule table.
pub fn iban_table() -> &'static StaticTable {
    static TABLE: LazyLock<StaticTable> = LazyLock::new(|| {
        StaticTable::new(
            country_rules()
                .iter()
                .map(|rule| Box::new(IbanValidator::new(rule)) as Box<dyn IdentifierValidator>),
        )
    });
    &TABLE
}

/// The IBAN aggregator over the built-in table.
pub fn registry() -> &'static ValidatorRegistry {
    static REGISTRY: LazyLock<ValidatorRegistry> =
        LazyLock::new(|| ValidatorRegistry::new(IBAN_REGION, iban_table()));
    &REGISTRY
}

/// An IBAN aggregator whose built-in table can be overridden per country by
/// registrations from `source`.
pub fn registry_with_source<S>(source: &Arc<S>) -> Arc<ValidatorRegistry>
where
    S: ValidatorSource + 'static,
{
    ValidatorRegistry::with_source(IBAN_REGION, iban_table(), source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> Option<ErrorCode> {
        validate(raw).error_code()
    }

    #[test]
    fn valid_ibans() {
        for iban in [
            "BE68539007547034",
            "DE89370400440532013000",
            "GB82WEST12345698765432",
            "FR1420041010050500013M02606",
            "NO9386011117947",
            "CH9300762011623852957",
            "XK051212012345678906",
        ] {
            assert!(validate(iban).is_valid(), "{iban}: {:?}", validate(iban));
        }
    }

    #[test]
    fn error_ordering() {
        assert_eq!(code(""), Some(ErrorCode::InvalidInput));
        assert_eq!(code("BE6"), Some(ErrorCode::InvalidInput));
        assert_eq!(code("1268539007547034"), Some(ErrorCode::InvalidCountryCode));
        assert_eq!(code("QQ68539007547034"), Some(ErrorCode::InvalidCountryCode));
        assert_eq!(code("US68539007547034"), Some(ErrorCode::UnsupportedCountry));
        assert_eq!(code("BE685390075470340"), Some(ErrorCode::InvalidLength));
        assert_eq!(code("BEAB539007547034"), Some(ErrorCode::InvalidFormat));
        assert_eq!(code("BE6853900754703X"), Some(ErrorCode::InvalidFormat));
        assert_eq!(code("BE69539007547034"), Some(ErrorCode::InvalidChecksum));
    }

    #[test]
    fn non_ascii_is_format_error() {
        assert_eq!(code("BE68539007547Ä34"), Some(ErrorCode::InvalidFormat));
    }

    #[test]
    fn parse_components() {
        let d = parse("gb82 west 1234 5698 7654 32").unwrap();
        assert_eq!(d.kind, IdentifierKind::Iban);
        assert_eq!(d.country_code.as_deref(), Some("GB"));
        assert_eq!(d.normalized, "GB82WEST12345698765432");
        assert_eq!(d.component("check_digits"), Some("82"));
        assert_eq!(d.component("bban"), Some("WEST12345698765432"));
        assert_eq!(d.component("formatted"), Some("GB82 WEST 1234 5698 7654 32"));
        assert!(parse("GB82WEST12345698765433").is_none());
    }

    #[test]
    fn country_bound_validator() {
        let de = IbanValidator::for_country("de").unwrap();
        assert!(de.validate("DE89 3704 0044 0532 0130 00").is_valid());
        assert_eq!(
            de.validate("BE68539007547034").error_code(),
            Some(ErrorCode::InvalidCountryCode)
        );
        assert!(de.parse("BE68539007547034").is_none());
        assert!(IbanValidator::for_country("US").is_none());
    }

    #[test]
    fn aggregator_dispatch() {
        let registry = registry();
        assert!(registry.validate("BE68539007547034").is_valid());
        assert_eq!(
            registry.validate("ZZ12345").error_code(),
            Some(ErrorCode::UnsupportedCountry)
        );
        assert_eq!(
            registry.validate_for("DE", "BE68539007547034").error_code(),
            Some(ErrorCode::InvalidCountryCode)
        );
        assert_eq!(iban_table().len(), country_rules().len());
    }
}

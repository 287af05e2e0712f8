use std::sync::{Arc, LazyLock};

use super::rules::{VatRule, vat_rule, vat_rules};
use crate::core::{
    ErrorCode, IdentifierDetails, IdentifierKind, ValidationResult, country_prefix, is_alpha2,
    normalize_identifier,
};
use crate::registry::{IdentifierValidator, StaticTable, ValidatorRegistry, ValidatorSource};

/// Region tag of the VAT aggregator.
pub const VAT_REGION: &str = "VAT";

/// Normalize a VAT ID: the common form plus dots removed (`CHE-116.281.710`).
pub fn normalize_vat(raw: &str) -> String {
    normalize_identifier(raw).replace('.', "")
}

/// VAT validator of one country.
#[derive(Debug, Clone, Copy)]
pub struct VatValidator {
    rule: &'static VatRule,
}

impl VatValidator {
    pub fn new(rule: &'static VatRule) -> Self {
        Self { rule }
    }

    pub fn for_country(country_code: &str) -> Option<Self> {
        vat_rule(&country_code.to_ascii_uppercase()).map(Self::new)
    }

    pub fn rule(&self) -> &'static VatRule {
        self.rule
    }

    /// Split off the country prefix, checking it belongs to this rule.
    fn number<'a>(&self, vat_id: &'a str) -> Result<&'a str, ValidationResult> {
        let Some(prefix) = country_prefix(vat_id) else {
            return Err(ValidationResult::fail(
                ErrorCode::InvalidInput,
                "VAT ID must start with a country prefix",
            ));
        };
        if !is_alpha2(prefix) || prefix != self.rule.country_code {
            return Err(ValidationResult::fail(
                ErrorCode::InvalidCountryCode,
                format!("expected a VAT ID from {}", self.rule.country_code),
            ));
        }
        Ok(&vat_id[2..])
    }
}

impl IdentifierValidator for VatValidator {
    fn country_code(&self) -> &str {
        self.rule.country_code
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let vat_id = normalize_vat(raw);
        let number = match self.number(&vat_id) {
            Ok(number) => number,
            Err(failure) => return failure,
        };
        let cc = self.rule.country_code;
        if number.is_empty() {
            return ValidationResult::fail(ErrorCode::InvalidInput, "VAT number is missing");
        }
        if !self.rule.lengths.contains(&number.chars().count()) {
            return ValidationResult::fail(
                ErrorCode::InvalidLength,
                format!("invalid length for {} ({cc})", self.rule.name),
            );
        }
        if !self.rule.matches_format(number) {
            return ValidationResult::fail(
                ErrorCode::InvalidFormat,
                format!("invalid format for {} ({cc})", self.rule.name),
            );
        }
        match self.rule.verify_checksum(number) {
            None | Some(Ok(true)) => ValidationResult::ok(),
            Some(Ok(false)) => ValidationResult::fail(
                ErrorCode::InvalidCheckDigit,
                format!("check digit mismatch for {} ({cc})", self.rule.name),
            ),
            Some(Err(err)) => err.into(),
        }
    }

    fn parse(&self, raw: &str) -> Option<IdentifierDetails> {
        if !self.validate(raw).is_valid() {
            return None;
        }
        let vat_id = normalize_vat(raw);
        Some(
            IdentifierDetails::new(IdentifierKind::Vat, vat_id.as_str())
                .country(self.rule.country_code)
                .with("number", &vat_id[2..])
                .with("scheme", self.rule.name)
                .with(
                    "checksum",
                    if self.rule.has_checksum() { "verified" } else { "none" },
                ),
        )
    }
}

/// One [`VatValidator`] per supported country.
pub fn vat_table() -> &'static StaticTable {
    static TABLE: LazyLock<StaticTable> = LazyLock::new(|| {
        StaticTable::new(
            vat_rules()
                .iter()
                .map(|rule| Box::new(VatValidator::new(rule)) as Box<dyn IdentifierValidator>),
        )
    });
    &TABLE
}

/// The VAT aggregator over the built-in table.
pub fn registry() -> &'static ValidatorRegistry {
    static REGISTRY: LazyLock<ValidatorRegistry> =
        LazyLock::new(|| ValidatorRegistry::new(VAT_REGION, vat_table()));
    &REGISTRY
}

/// A VAT aggregator with per-country overrides from `source`.
pub fn registry_with_source<S>(source: &Arc<S>) -> Arc<ValidatorRegistry>
where
    S: ValidatorSource + 'static,
{
    ValidatorRegistry::with_source(VAT_REGION, vat_table(), source)
}

/// Validate a VAT ID by its own prefix through the built-in aggregator.
pub fn validate_vat(raw: &str) -> ValidationResult {
    registry().validate(&normalize_vat(raw))
}

/// Parse a VAT ID by its own prefix through the built-in aggregator.
pub fn parse_vat(raw: &str) -> Option<IdentifierDetails> {
    registry().parse(&normalize_vat(raw))
}

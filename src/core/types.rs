use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Family an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum IdentifierKind {
    /// International Bank Account Number (ISO 13616).
    Iban,
    /// VAT / tax registration number.
    Vat,
    /// Payment card number (PAN).
    Card,
    /// Structured payment reference (OGM, RF, QR-reference, ...).
    PaymentReference,
    /// National identity number.
    NationalId,
}

/// Parsed view of a valid identifier.
///
/// `components` holds the named substructure (bank code, check digits,
/// brand, ...). Keys are stable snake_case names chosen by each validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierDetails {
    pub kind: IdentifierKind,
    /// ISO 3166-1 alpha-2 code (or VAT prefix such as `EL`) if the
    /// identifier is country-bound.
    pub country_code: Option<String>,
    /// Normalized form: upper-case, without whitespace or hyphens.
    pub normalized: String,
    pub components: BTreeMap<String, String>,
}

impl IdentifierDetails {
    pub fn new(kind: IdentifierKind, normalized: impl Into<String>) -> Self {
        Self {
            kind,
            country_code: None,
            normalized: normalized.into(),
            components: BTreeMap::new(),
        }
    }

    /// Set the country code.
    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Add a named component.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.components.insert(name.to_string(), value.into());
        self
    }

    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Option<&str> {
        self.components.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_style_construction() {
        let d = IdentifierDetails::new(IdentifierKind::Iban, "BE68539007547034")
            .country("BE")
            .with("check_digits", "68");
        assert_eq!(d.country_code.as_deref(), Some("BE"));
        assert_eq!(d.component("check_digits"), Some("68"));
        assert_eq!(d.component("bban"), None);
    }

    #[test]
    fn serializes_components_in_key_order() {
        let d = IdentifierDetails::new(IdentifierKind::Card, "4111111111111111")
            .with("last4", "1111")
            .with("brand", "Visa");
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains(r#""components":{"brand":"Visa","last4":"1111"}"#));
        assert!(json.contains(r#""kind":"Card""#));
    }
}

use crate::checksum::luhn;
use crate::core::{
    ErrorCode, IdentifierDetails, IdentifierKind, ValidationResult, is_digits,
    normalize_identifier,
};
use crate::registry::IdentifierValidator;

use super::CardBrand;

/// Tag returned as the validator's country code; card numbers are not
/// country-bound.
pub const CARD_REGION: &str = "CARD";

const MIN_LENGTH: usize = 12;
const MAX_LENGTH: usize = 19;

/// Validate a payment card number (PAN).
///
/// Spaces and hyphens are ignored. Checks, in order: digits only, overall
/// length 12..=19, the detected brand's issued lengths, Luhn.
pub fn validate_card(raw: &str) -> ValidationResult {
    let pan = normalize_identifier(raw);
    match check(&pan) {
        Ok(_) => ValidationResult::ok(),
        Err(failure) => failure,
    }
}

/// Parse a valid card number into brand, IIN and last four digits.
pub fn parse_card(raw: &str) -> Option<IdentifierDetails> {
    let pan = normalize_identifier(raw);
    let brand = check(&pan).ok()?;
    let last4 = &pan[pan.len() - 4..];
    Some(
        IdentifierDetails::new(IdentifierKind::Card, pan.as_str())
            .with("brand", brand.name())
            .with("iin", &pan[..6])
            .with("last4", last4)
            .with("masked", mask(&pan))
            .with("length", pan.len().to_string()),
    )
}

/// Detect the brand of a (possibly formatted) card number.
pub fn card_brand(raw: &str) -> CardBrand {
    CardBrand::detect(&normalize_identifier(raw))
}

/// Keep the first six and last four digits, star out the rest.
///
/// Works on characters, so any string is accepted.
pub fn mask(pan: &str) -> String {
    let length = pan.chars().count();
    if length <= 10 {
        return pan.to_string();
    }
    pan.chars()
        .enumerate()
        .map(|(i, c)| if i < 6 || i >= length - 4 { c } else { '*' })
        .collect()
}

fn check(pan: &str) -> Result<CardBrand, ValidationResult> {
    if pan.is_empty() {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidInput,
            "card number is empty",
        ));
    }
    if !is_digits(pan) {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidFormat,
            "card number must contain digits only",
        ));
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&pan.len()) {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidLength,
            format!(
                "card number must have {MIN_LENGTH} to {MAX_LENGTH} digits, got {}",
                pan.len()
            ),
        ));
    }
    let brand = CardBrand::detect(pan);
    if !brand.lengths().contains(&pan.len()) {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidLength,
            format!("{brand} numbers cannot have {} digits", pan.len()),
        ));
    }
    if !luhn(pan)? {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidCheckDigit,
            "Luhn check digit mismatch",
        ));
    }
    Ok(brand)
}

/// [`IdentifierValidator`] adapter over [`validate_card`] / [`parse_card`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CardValidator;

impl IdentifierValidator for CardValidator {
    fn country_code(&self) -> &str {
        CARD_REGION
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        validate_card(raw)
    }

    fn parse(&self, raw: &str) -> Option<IdentifierDetails> {
        parse_card(raw)
    }
}

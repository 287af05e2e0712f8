//! Belgian structured communication (OGM / VCS).
//!
//! Twelve digits: a ten-digit base followed by `base mod 97` as two
//! digits, where a remainder of 0 is written as 97. Displayed as
//! `+++ddd/dddd/ddddd+++`.

use crate::checksum::mod97;
use crate::core::{
    ChecksumError, ErrorCode, IdentifierDetails, IdentifierKind, ValidationFailure,
    ValidationResult, is_digits,
};

/// Strip the display decoration (`+`, `*`, `/`, whitespace).
fn strip(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '+' | '*' | '/') && !c.is_whitespace())
        .collect()
}

fn check_value(base: &str) -> Result<u32, ChecksumError> {
    let remainder = mod97(base)?;
    Ok(if remainder == 0 { 97 } else { remainder })
}

/// Validate an OGM in plain or decorated form.
pub fn validate_ogm(raw: &str) -> ValidationResult {
    let digits = strip(raw);
    if digits.is_empty() {
        return ValidationResult::fail(ErrorCode::InvalidInput, "OGM must not be empty");
    }
    if digits.chars().count() != 12 {
        return ValidationResult::fail(ErrorCode::InvalidLength, "OGM must have 12 digits");
    }
    if !is_digits(&digits) {
        return ValidationResult::fail(ErrorCode::InvalidFormat, "OGM must be numeric");
    }
    let expected = match check_value(&digits[..10]) {
        Ok(v) => v,
        Err(err) => return err.into(),
    };
    ValidationResult::check(
        digits[10..] == format!("{expected:02}"),
        ErrorCode::InvalidCheckDigit,
        format!("OGM check digits must be {expected:02}"),
    )
}

/// Build a decorated OGM from a base of up to 10 digits (zero-padded left).
pub fn generate_ogm(base: &str) -> Result<String, ValidationFailure> {
    let base = strip(base);
    if base.is_empty() || base.len() > 10 {
        return Err(ValidationFailure {
            code: ErrorCode::InvalidLength,
            message: "OGM base must have 1 to 10 digits".into(),
        });
    }
    if !is_digits(&base) {
        return Err(ValidationFailure {
            code: ErrorCode::InvalidFormat,
            message: "OGM base must be numeric".into(),
        });
    }
    let padded = format!("{base:0>10}");
    let check = check_value(&padded)?;
    Ok(format_ogm(&format!("{padded}{check:02}")))
}

/// Decorate twelve digits as `+++ddd/dddd/ddddd+++`.
///
/// Anything that is not twelve characters after stripping is returned
/// stripped but undecorated.
pub fn format_ogm(raw: &str) -> String {
    let digits = strip(raw);
    match (digits.get(..3), digits.get(3..7), digits.get(7..)) {
        (Some(a), Some(b), Some(c)) if digits.len() == 12 => format!("+++{a}/{b}/{c}+++"),
        _ => digits,
    }
}

/// Parse a valid OGM into base and check digits.
pub fn parse_ogm(raw: &str) -> Option<IdentifierDetails> {
    if !validate_ogm(raw).is_valid() {
        return None;
    }
    let digits = strip(raw);
    Some(
        IdentifierDetails::new(IdentifierKind::PaymentReference, digits.as_str())
            .country("BE")
            .with("base", &digits[..10])
            .with("check_digits", &digits[10..])
            .with("formatted", format_ogm(&digits)),
    )
}

//! ISO 11649 creditor reference (`RF` + two check digits + up to 21
//! alphanumerics), checked with the same rearranged Mod-97 as an IBAN.

use crate::checksum::{expand_letters, mod97};
use crate::core::{
    ChecksumError, ErrorCode, IdentifierDetails, IdentifierKind, ValidationFailure,
    ValidationResult, normalize_identifier,
};

fn remainder(reference: &str) -> Result<u32, ChecksumError> {
    let (head, tail) = reference.split_at(4);
    mod97(&expand_letters(&format!("{tail}{head}"))?)
}

/// Validate a creditor reference such as `RF18 5390 0754 7034`.
pub fn validate_rf(raw: &str) -> ValidationResult {
    let reference = normalize_identifier(raw);
    if reference.is_empty() {
        return ValidationResult::fail(ErrorCode::InvalidInput, "reference must not be empty");
    }
    if !reference.is_ascii() || !reference.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return ValidationResult::fail(
            ErrorCode::InvalidFormat,
            "reference may only contain letters and digits",
        );
    }
    if !(5..=25).contains(&reference.len()) {
        return ValidationResult::fail(
            ErrorCode::InvalidLength,
            "creditor reference must have 5 to 25 characters",
        );
    }
    if !reference.starts_with("RF") || !reference.as_bytes()[2..4].iter().all(u8::is_ascii_digit) {
        return ValidationResult::fail(
            ErrorCode::InvalidFormat,
            "creditor reference must start with RF and two check digits",
        );
    }
    match remainder(&reference) {
        Ok(1) => ValidationResult::ok(),
        Ok(_) => ValidationResult::fail(ErrorCode::InvalidChecksum, "creditor reference checksum mismatch"),
        Err(err) => err.into(),
    }
}

/// Build a creditor reference around `reference` (1 to 21 alphanumerics).
pub fn generate_rf(reference: &str) -> Result<String, ValidationFailure> {
    let reference = normalize_identifier(reference);
    if reference.is_empty() || reference.chars().count() > 21 {
        return Err(ValidationFailure {
            code: ErrorCode::InvalidLength,
            message: "reference must have 1 to 21 characters".into(),
        });
    }
    let check = 98 - mod97(&expand_letters(&format!("{reference}RF00"))?)?;
    Ok(format!("RF{check:02}{reference}"))
}

/// Parse a valid creditor reference.
pub fn parse_rf(raw: &str) -> Option<IdentifierDetails> {
    if !validate_rf(raw).is_valid() {
        return None;
    }
    let reference = normalize_identifier(raw);
    Some(
        IdentifierDetails::new(IdentifierKind::PaymentReference, reference.as_str())
            .with("check_digits", &reference[2..4])
            .with("reference", &reference[4..]),
    )
}

//! Finnish national creditor reference (viitenumero): 4 to 20 digits, the
//! last one a check digit over the others with repeating weights 7, 3, 1
//! from the right.

use crate::checksum::digit_values;
use crate::core::{ChecksumError, ErrorCode, ValidationResult, is_digits};

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Check digit for a 3 to 19 digit payload.
pub fn finnish_check_digit(payload: &str) -> Result<u8, ChecksumError> {
    let sum: u32 = digit_values(payload)?
        .iter()
        .rev()
        .zip(WEIGHTS.iter().cycle())
        .map(|(d, w)| d * w)
        .sum();
    Ok(((10 - sum % 10) % 10) as u8)
}

pub fn validate_finnish_reference(raw: &str) -> ValidationResult {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return ValidationResult::fail(ErrorCode::InvalidInput, "reference must not be empty");
    }
    if !is_digits(&digits) {
        return ValidationResult::fail(ErrorCode::InvalidFormat, "reference must be numeric");
    }
    if !(4..=20).contains(&digits.len()) {
        return ValidationResult::fail(ErrorCode::InvalidLength, "reference must have 4 to 20 digits");
    }
    let (payload, check) = digits.split_at(digits.len() - 1);
    match finnish_check_digit(payload) {
        Ok(expected) => ValidationResult::check(
            check.as_bytes()[0] - b'0' == expected,
            ErrorCode::InvalidCheckDigit,
            format!("reference check digit must be {expected}"),
        ),
        Err(err) => err.into(),
    }
}

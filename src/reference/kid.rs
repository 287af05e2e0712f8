//! Norwegian KID (kundeidentifikasjon) payment number.
//!
//! 2 to 25 digits; the last position is a check digit computed either with
//! Luhn (MOD10) or with MOD11 (weights 2..7 from the right). A MOD11 value
//! of 10 is written as `-`.

use crate::checksum::{CheckDigitFrom, Mod11Policy, TenPolicy, luhn, weighted_mod11};
use crate::core::{ChecksumError, ErrorCode, ValidationResult, is_digits};

/// Which algorithm a KID's check digit satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KidAlgorithm {
    Mod10,
    Mod11,
}

const MOD11: Mod11Policy = Mod11Policy::new(CheckDigitFrom::Complement, TenPolicy::Invalid);

fn mod11_check(payload: &str) -> Result<Option<u8>, ChecksumError> {
    let weights: Vec<u32> = (0..payload.len()).rev().map(|i| 2 + (i % 6) as u32).collect();
    Ok(MOD11.check_digit(weighted_mod11(payload, &weights)?))
}

/// Determine which algorithm (if any) a KID satisfies, Luhn first.
pub fn kid_algorithm(raw: &str) -> Result<Option<KidAlgorithm>, ChecksumError> {
    let kid: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let Some((payload, check)) = split_check(&kid) else {
        return Err(ChecksumError::Empty);
    };
    if check == '-' {
        return Ok((mod11_check(payload)?.is_none()).then_some(KidAlgorithm::Mod11));
    }
    if luhn(&kid)? {
        return Ok(Some(KidAlgorithm::Mod10));
    }
    let digit = check.to_digit(10).map(|d| d as u8);
    Ok((mod11_check(payload)? == digit).then_some(KidAlgorithm::Mod11))
}

pub fn validate_kid(raw: &str) -> ValidationResult {
    let kid: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if kid.is_empty() {
        return ValidationResult::fail(ErrorCode::InvalidInput, "KID must not be empty");
    }
    if !(2..=25).contains(&kid.chars().count()) {
        return ValidationResult::fail(ErrorCode::InvalidLength, "KID must have 2 to 25 characters");
    }
    let payload_ok = split_check(&kid).is_some_and(|(payload, check)| {
        is_digits(payload) && (check.is_ascii_digit() || check == '-')
    });
    if !payload_ok {
        return ValidationResult::fail(
            ErrorCode::InvalidFormat,
            "KID must be digits, optionally ending in '-'",
        );
    }
    match kid_algorithm(&kid) {
        Ok(Some(_)) => ValidationResult::ok(),
        Ok(None) => ValidationResult::fail(ErrorCode::InvalidCheckDigit, "KID check digit mismatch"),
        Err(err) => err.into(),
    }
}

fn split_check(kid: &str) -> Option<(&str, char)> {
    let (i, c) = kid.char_indices().next_back()?;
    Some((&kid[..i], c))
}

//! Chinese resident identity card number (GB 11643-1999).
//!
//! Layout: 6-digit administrative region, 8-digit birth date `YYYYMMDD`,
//! 3-digit sequence (odd for men, even for women), one ISO 7064 Mod 11-2
//! check character (`0-9` or `X`).

use chrono::{NaiveDate, Utc};

use crate::checksum::{ISO7064_MOD11_2_WEIGHTS, iso7064_mod11_2};
use crate::core::{
    ErrorCode, IdentifierDetails, IdentifierKind, ValidationResult, is_digits,
    normalize_identifier,
};
use crate::registry::IdentifierValidator;

const LENGTH: usize = 18;

/// Earliest birth date accepted.
const MIN_BIRTH_YEAR: i32 = 1900;

/// Validate a Chinese resident identity number.
pub fn validate_cn_resident_id(raw: &str) -> ValidationResult {
    let id = normalize_identifier(raw);
    match check(&id) {
        Ok(_) => ValidationResult::ok(),
        Err(failure) => failure,
    }
}

/// Parse a valid resident identity number.
///
/// Components: `region_code`, `birth_date` (ISO 8601), `sequence`, `sex`
/// (`male` / `female`) and `check_character`.
pub fn parse_cn_resident_id(raw: &str) -> Option<IdentifierDetails> {
    let id = normalize_identifier(raw);
    let birth = check(&id).ok()?;
    let sequence = &id[14..17];
    let sex = if sequence.bytes().last().is_some_and(|b| (b - b'0') % 2 == 1) {
        "male"
    } else {
        "female"
    };
    Some(
        IdentifierDetails::new(IdentifierKind::NationalId, id.as_str())
            .country("CN")
            .with("region_code", &id[..6])
            .with("birth_date", birth.format("%Y-%m-%d").to_string())
            .with("sequence", sequence)
            .with("sex", sex)
            .with("check_character", &id[17..]),
    )
}

fn check(id: &str) -> Result<NaiveDate, ValidationResult> {
    if id.is_empty() {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidInput,
            "identity number is empty",
        ));
    }
    if id.chars().count() != LENGTH {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidLength,
            format!("identity number must have {LENGTH} characters"),
        ));
    }
    if !id.is_ascii() {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidFormat,
            "identity number must be ASCII",
        ));
    }
    let (body, check_char) = id.split_at(LENGTH - 1);
    if !is_digits(body) || !matches!(check_char.as_bytes(), [b'0'..=b'9' | b'X']) {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidFormat,
            "expected 17 digits followed by a digit or 'X'",
        ));
    }
    if matches!(body.as_bytes()[0], b'0' | b'9') {
        return Err(ValidationResult::fail(
            ErrorCode::InvalidFormat,
            format!("'{}' is not an administrative region code", &body[..6]),
        ));
    }
    let birth = birth_date(&body[6..14])?;
    let expected = iso7064_mod11_2(body, &ISO7064_MOD11_2_WEIGHTS)?;
    if check_char.starts_with(expected) {
        Ok(birth)
    } else {
        Err(ValidationResult::fail(
            ErrorCode::InvalidCheckDigit,
            format!("check character should be '{expected}'"),
        ))
    }
}

fn birth_date(yyyymmdd: &str) -> Result<NaiveDate, ValidationResult> {
    let invalid = || {
        ValidationResult::fail(
            ErrorCode::InvalidFormat,
            format!("'{yyyymmdd}' is not a valid birth date"),
        )
    };
    let year: i32 = yyyymmdd[..4].parse().map_err(|_| invalid())?;
    let month: u32 = yyyymmdd[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = yyyymmdd[6..].parse().map_err(|_| invalid())?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    let earliest = NaiveDate::from_ymd_opt(MIN_BIRTH_YEAR, 1, 1).ok_or_else(invalid)?;
    if date < earliest || date > Utc::now().date_naive() {
        return Err(invalid());
    }
    Ok(date)
}

/// [`IdentifierValidator`] for Chinese resident identity numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnResidentIdValidator;

impl IdentifierValidator for CnResidentIdValidator {
    fn country_code(&self) -> &str {
        "CN"
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        validate_cn_resident_id(raw)
    }

    fn parse(&self, raw: &str) -> Option<IdentifierDetails> {
        parse_cn_resident_id(raw)
    }
}

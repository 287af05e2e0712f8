//! Swiss QR-reference: 27 digits, the last one a Mod-10 recursive check
//! digit over the first 26.

use crate::checksum::mod10_recursive;
use crate::core::{ErrorCode, ValidationFailure, ValidationResult, is_digits};

const PAYLOAD_LEN: usize = 26;

fn strip(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn validate_qr_reference(raw: &str) -> ValidationResult {
    let digits = strip(raw);
    if digits.is_empty() {
        return ValidationResult::fail(ErrorCode::InvalidInput, "QR-reference must not be empty");
    }
    if !is_digits(&digits) {
        return ValidationResult::fail(ErrorCode::InvalidFormat, "QR-reference must be numeric");
    }
    if digits.len() != PAYLOAD_LEN + 1 {
        return ValidationResult::fail(ErrorCode::InvalidLength, "QR-reference must have 27 digits");
    }
    let expected = match mod10_recursive(&digits[..PAYLOAD_LEN]) {
        Ok(d) => d,
        Err(err) => return err.into(),
    };
    ValidationResult::check(
        digits.as_bytes()[PAYLOAD_LEN] - b'0' == expected,
        ErrorCode::InvalidCheckDigit,
        format!("QR-reference check digit must be {expected}"),
    )
}

/// Build a QR-reference from up to 26 digits (zero-padded left).
pub fn generate_qr_reference(payload: &str) -> Result<String, ValidationFailure> {
    let payload = strip(payload);
    if payload.is_empty() || payload.len() > PAYLOAD_LEN {
        return Err(ValidationFailure {
            code: ErrorCode::InvalidLength,
            message: "QR-reference payload must have 1 to 26 digits".into(),
        });
    }
    let padded = format!("{payload:0>26}");
    let check = mod10_recursive(&padded)?;
    Ok(format!("{padded}{check}"))
}

/// Display form: `dd ddddd ddddd ddddd ddddd ddddd`.
pub fn format_qr_reference(raw: &str) -> String {
    let digits = strip(raw);
    let first = digits.len() % 5;
    let mut out = String::with_capacity(digits.len() + 6);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 5 - first) % 5 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

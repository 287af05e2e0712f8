//! ISO 13616 Mod-97 checksum.

use super::format::normalize;
use crate::checksum::{expand_letters, mod97};
use crate::core::ChecksumError;

/// Mod-97 remainder of a normalized IBAN after the ISO 13616 rearrangement.
///
/// The first four characters move to the end and every letter, wherever
/// it occurs, is expanded to its two-digit value before the modulus.
pub(crate) fn iban_remainder(iban: &str) -> Result<u32, ChecksumError> {
    let (head, tail) = match (iban.get(..4), iban.get(4..)) {
        (Some(head), Some(tail)) => (head, tail),
        _ => {
            return Err(ChecksumError::LengthMismatch {
                expected: 5,
                found: iban.chars().count(),
            });
        }
    };
    let rearranged = format!("{tail}{head}");
    mod97(&expand_letters(&rearranged)?)
}

/// Verify the ISO 13616 checksum (remainder must be 1).
///
/// Normalizes first. Characters outside `0-9A-Z` make the IBAN invalid.
/// No country-specific length or BBAN structure is checked here.
pub fn validate_checksum(iban: &str) -> bool {
    matches!(iban_remainder(&normalize(iban)), Ok(1))
}

/// Whether `iban` passes the Mod-97 check after normalization.
///
/// Country structure is deliberately not enforced; use
/// [`validate`](super::validate) for the full check.
pub fn is_valid_iban(iban: &str) -> bool {
    validate_checksum(&normalize(iban))
}

/// Compute the two check digits for `country_code` + `bban`.
pub fn compute_check_digits(country_code: &str, bban: &str) -> Result<String, ChecksumError> {
    let expanded = expand_letters(&format!(
        "{}{}00",
        normalize(bban),
        country_code.to_ascii_uppercase()
    ))?;
    let check = 98 - mod97(&expanded)?;
    Ok(format!("{check:02}"))
}

//! Checksum and check-digit primitives.
//!
//! Pure, stateless functions shared by every identifier family. Each one
//! works on ASCII digit strings (or alphanumerics where stated) and returns
//! a [`ChecksumError`] instead of guessing when the input breaks its
//! contract. What a result *means* (e.g. whether a Mod-11 remainder of 10
//! is acceptable) is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use finident::checksum::{luhn, mod97};
//!
//! assert!(luhn("4111111111111111").unwrap());
//! assert_eq!(mod97("0000000001").unwrap(), 1);
//! assert!(luhn("4111-1111").is_err());
//! ```

mod iso7064;
mod luhn;
mod mod10;
mod mod11;
mod mod97;

pub use iso7064::{ISO7064_MOD11_2_WEIGHTS, iso7064_mod11_10, iso7064_mod11_2};
pub use luhn::{luhn, luhn_check_digit};
pub use mod10::mod10_recursive;
pub use mod11::{CheckDigitFrom, Mod11Policy, TenPolicy, weighted_mod11};
pub use mod97::{expand_letters, mod97};

use crate::core::ChecksumError;

/// Decode an all-digit string into digit values.
pub(crate) fn digit_values(digits: &str) -> Result<Vec<u32>, ChecksumError> {
    if digits.is_empty() {
        return Err(ChecksumError::Empty);
    }
    digits
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10)
                .filter(|_| c.is_ascii_digit())
                .ok_or(ChecksumError::NonDigit { position, found: c })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_digits() {
        assert_eq!(digit_values("0925").unwrap(), vec![0, 9, 2, 5]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(digit_values(""), Err(ChecksumError::Empty));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(matches!(
            digit_values("12\u{0663}"),
            Err(ChecksumError::NonDigit { position: 2, .. })
        ));
        assert!(matches!(
            digit_values("1 2"),
            Err(ChecksumError::NonDigit { position: 1, found: ' ' })
        ));
    }
}

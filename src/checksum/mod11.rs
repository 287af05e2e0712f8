use serde::{Deserialize, Serialize};

use super::digit_values;
use crate::core::ChecksumError;

/// Weighted sum of products modulo 11.
///
/// `digits` and `weights` must have the same length. Only the raw remainder
/// (0–10) is returned; turning it into a check digit is a per-country
/// decision expressed with [`Mod11Policy`].
pub fn weighted_mod11(digits: &str, weights: &[u32]) -> Result<u8, ChecksumError> {
    let values = digit_values(digits)?;
    if values.len() != weights.len() {
        return Err(ChecksumError::LengthMismatch {
            expected: weights.len(),
            found: values.len(),
        });
    }
    // reduce each product so arbitrary weights cannot overflow
    let sum = values
        .iter()
        .zip(weights)
        .fold(0u32, |acc, (d, w)| (acc + d * (w % 11)) % 11);
    Ok(sum as u8)
}

/// How the check digit is derived from the Mod-11 remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckDigitFrom {
    /// The remainder itself is the check digit.
    Remainder,
    /// `11 - remainder`; a result of 11 is always check digit 0.
    Complement,
}

/// What a derived value of 10 means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenPolicy {
    /// No single-digit check value exists; the number is invalid.
    Invalid,
    /// Check digit 0.
    Zero,
}

/// A country's published interpretation of a Mod-11 remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mod11Policy {
    pub derive: CheckDigitFrom,
    pub on_ten: TenPolicy,
}

impl Mod11Policy {
    pub const fn new(derive: CheckDigitFrom, on_ten: TenPolicy) -> Self {
        Self { derive, on_ten }
    }

    /// Map a remainder (0–10) to the expected check digit.
    ///
    /// `None` means no number with this payload can be valid. Remainders
    /// above 10 are not Mod-11 remainders and always give `None`.
    pub fn check_digit(&self, remainder: u8) -> Option<u8> {
        if remainder > 10 {
            return None;
        }
        let value = match self.derive {
            CheckDigitFrom::Remainder => remainder,
            CheckDigitFrom::Complement => (11 - remainder) % 11,
        };
        match (value, self.on_ten) {
            (10, TenPolicy::Invalid) => None,
            (10, TenPolicy::Zero) => Some(0),
            (v, _) => Some(v),
        }
    }

    /// Compute the remainder over `payload` and compare with `check`.
    pub fn verify(&self, payload: &str, weights: &[u32], check: u8) -> Result<bool, ChecksumError> {
        let remainder = weighted_mod11(payload, weights)?;
        Ok(self.check_digit(remainder) == Some(check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_remainder() {
        // 1*2 + 2*3 + 3*4 = 20, 20 mod 11 = 9
        assert_eq!(weighted_mod11("123", &[2, 3, 4]).unwrap(), 9);
        assert_eq!(weighted_mod11("000", &[2, 3, 4]).unwrap(), 0);
    }

    #[test]
    fn remainder_ten_is_returned_raw() {
        // 5*2 = 10
        assert_eq!(weighted_mod11("5", &[2]).unwrap(), 10);
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        // 9 * u32::MAX would overflow; u32::MAX % 11 == 3, so each term is 27
        let w = [u32::MAX; 4];
        assert_eq!(weighted_mod11("9999", &w).unwrap(), (4 * 27 % 11) as u8);
        assert_eq!(weighted_mod11("1", &[u32::MAX]).unwrap(), 3);
    }

    #[test]
    fn weight_length_mismatch() {
        assert_eq!(
            weighted_mod11("1234", &[1, 2, 3]),
            Err(ChecksumError::LengthMismatch {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn non_digit() {
        assert!(matches!(
            weighted_mod11("1X3", &[1, 1, 1]),
            Err(ChecksumError::NonDigit { position: 1, .. })
        ));
    }

    #[test]
    fn remainder_policies() {
        let strict = Mod11Policy::new(CheckDigitFrom::Remainder, TenPolicy::Invalid);
        let lenient = Mod11Policy::new(CheckDigitFrom::Remainder, TenPolicy::Zero);
        assert_eq!(strict.check_digit(10), None);
        assert_eq!(lenient.check_digit(10), Some(0));
        assert_eq!(strict.check_digit(4), Some(4));
    }

    #[test]
    fn out_of_range_remainder_rejected() {
        for derive in [CheckDigitFrom::Remainder, CheckDigitFrom::Complement] {
            for on_ten in [TenPolicy::Invalid, TenPolicy::Zero] {
                let policy = Mod11Policy::new(derive, on_ten);
                assert_eq!(policy.check_digit(11), None);
                assert_eq!(policy.check_digit(200), None);
            }
        }
    }

    #[test]
    fn complement_policies() {
        let strict = Mod11Policy::new(CheckDigitFrom::Complement, TenPolicy::Invalid);
        let lenient = Mod11Policy::new(CheckDigitFrom::Complement, TenPolicy::Zero);
        // remainder 0 -> 11 -> 0 regardless of policy
        assert_eq!(strict.check_digit(0), Some(0));
        assert_eq!(lenient.check_digit(0), Some(0));
        // remainder 1 -> 10
        assert_eq!(strict.check_digit(1), None);
        assert_eq!(lenient.check_digit(1), Some(0));
        assert_eq!(strict.check_digit(4), Some(7));
    }

    #[test]
    fn verify_polish_nip() {
        // PL NIP 5260250274: weights 6,5,7,2,3,4,5,6,7 over the first nine digits
        let pl = Mod11Policy::new(CheckDigitFrom::Remainder, TenPolicy::Invalid);
        let w = [6, 5, 7, 2, 3, 4, 5, 6, 7];
        assert!(pl.verify("526025027", &w, 4).unwrap());
        assert!(!pl.verify("526025027", &w, 5).unwrap());
    }
}

//! ISO/IEC 7064 check character systems.

use super::digit_values;
use crate::core::ChecksumError;

/// Weights of the 18-character resident identity number (GB 11643).
pub const ISO7064_MOD11_2_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

const MOD11_2_ALPHABET: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// ISO 7064 Mod 11-2 check character over 17 digits.
///
/// The weighted sum modulo 11 indexes the fixed alphabet
/// `1 0 X 9 8 7 6 5 4 3 2`, so the result may be the letter `X`.
pub fn iso7064_mod11_2(digits: &str, weights: &[u32; 17]) -> Result<char, ChecksumError> {
    let values = digit_values(digits)?;
    if values.len() != weights.len() {
        return Err(ChecksumError::LengthMismatch {
            expected: weights.len(),
            found: values.len(),
        });
    }
    let sum: u32 = values.iter().zip(weights).map(|(d, w)| d * w).sum();
    Ok(MOD11_2_ALPHABET[(sum % 11) as usize])
}

/// ISO 7064 Mod 11,10 (hybrid) check digit for `payload`.
///
/// Runs the product/sum recursion seeded with 10 and returns the digit
/// that completes it; a computed 10 becomes 0.
pub fn iso7064_mod11_10(payload: &str) -> Result<u8, ChecksumError> {
    let mut product = 10;
    for d in digit_values(payload)? {
        let mut sum = (d + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (2 * sum) % 11;
    }
    Ok(((11 - product) % 10) as u8)
}

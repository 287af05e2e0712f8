use crate::core::ChecksumError;

use super::digit_values;

const CARRY_TABLE: [u32; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Mod-10 recursive check digit (Swiss ESR / QR-reference).
///
/// A single carry seeded at 0 is pushed through the substitution table
/// with `(carry + digit) mod 10`; the check digit is `(10 - carry) mod 10`.
pub fn mod10_recursive(digits: &str) -> Result<u8, ChecksumError> {
    let carry = digit_values(digits)?
        .into_iter()
        .fold(0, |carry, d| CARRY_TABLE[((carry + d) % 10) as usize]);
    Ok(((10 - carry) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_reference_example() {
        assert_eq!(mod10_recursive("21000000000313947143000901").unwrap(), 7);
    }

    #[test]
    fn all_zeros() {
        assert_eq!(mod10_recursive(&"0".repeat(26)).unwrap(), 0);
    }

    #[test]
    fn sequential_digits() {
        assert_eq!(mod10_recursive("12345678901234567890123456").unwrap(), 7);
    }

    #[test]
    fn rejects_non_digits() {
        assert!(mod10_recursive("2100 0000").is_err());
        assert_eq!(mod10_recursive(""), Err(ChecksumError::Empty));
    }
}

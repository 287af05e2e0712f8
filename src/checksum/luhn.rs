use super::digit_values;
use crate::core::ChecksumError;

/// Verify a Luhn (mod 10, alternating doubling) checksum.
///
/// Starting from the rightmost digit, every second digit is doubled and
/// reduced by 9 when it exceeds 9. The number is valid iff the total is a
/// multiple of 10.
///
/// Returns an error for empty input or any non-digit character.
pub fn luhn(digits: &str) -> Result<bool, ChecksumError> {
    let values = digit_values(digits)?;
    Ok(luhn_sum(&values, false) % 10 == 0)
}

/// Compute the Luhn check digit to append to `payload`.
pub fn luhn_check_digit(payload: &str) -> Result<u8, ChecksumError> {
    let values = digit_values(payload)?;
    // The check digit will sit in the rightmost position, so the
    // payload's rightmost digit is the first one doubled.
    let sum = luhn_sum(&values, true);
    Ok(((10 - sum % 10) % 10) as u8)
}

fn luhn_sum(values: &[u32], double_first: bool) -> u32 {
    values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if (i % 2 == 1) != double_first {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visa_test_number() {
        assert!(luhn("4111111111111111").unwrap());
        assert!(!luhn("4111111111111112").unwrap());
    }

    #[test]
    fn single_digits() {
        assert!(luhn("0").unwrap());
        assert!(!luhn("1").unwrap());
    }

    #[test]
    fn classic_example() {
        assert!(luhn("79927398713").unwrap());
        assert!(!luhn("79927398710").unwrap());
    }

    #[test]
    fn non_digit_is_error() {
        assert!(matches!(
            luhn("4111 1111"),
            Err(ChecksumError::NonDigit { position: 4, found: ' ' })
        ));
        assert_eq!(luhn(""), Err(ChecksumError::Empty));
    }

    #[test]
    fn check_digit_completes_number() {
        assert_eq!(luhn_check_digit("7992739871").unwrap(), 3);
        assert_eq!(luhn_check_digit("411111111111111").unwrap(), 1);
        for payload in ["1", "12", "123456789", "000"] {
            let d = luhn_check_digit(payload).unwrap();
            assert!(luhn(&format!("{payload}{d}")).unwrap(), "{payload}{d}");
        }
    }
}

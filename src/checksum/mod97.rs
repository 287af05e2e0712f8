use crate::core::ChecksumError;

/// Remainder of a decimal digit string modulo 97.
///
/// Processes one digit at a time (`r = (r * 10 + d) % 97`) so the input may
/// be arbitrarily long; the full number is never materialized.
pub fn mod97(digits: &str) -> Result<u32, ChecksumError> {
    if digits.is_empty() {
        return Err(ChecksumError::Empty);
    }
    let mut remainder = 0u32;
    for (position, c) in digits.chars().enumerate() {
        let Some(digit) = c.to_digit(10).filter(|_| c.is_ascii_digit()) else {
            return Err(ChecksumError::NonDigit { position, found: c });
        };
        remainder = (remainder * 10 + digit) % 97;
    }
    Ok(remainder)
}

/// Replace every letter `A`–`Z` by its two-digit value `10`–`35`.
///
/// Digits are copied as-is. Lower-case letters and any other character are
/// rejected; normalize before calling.
pub fn expand_letters(s: &str) -> Result<String, ChecksumError> {
    let mut out = String::with_capacity(s.len() * 2);
    for (position, c) in s.chars().enumerate() {
        match c {
            '0'..='9' => out.push(c),
            'A'..='Z' => {
                let value = c as u32 - 'A' as u32 + 10;
                out.push_str(&value.to_string());
            }
            _ => return Err(ChecksumError::InvalidCharacter { position, found: c }),
        }
    }
    Ok(out)
}

use crate::core::normalize_identifier;

/// Strip whitespace and hyphens and upper-case the rest.
pub fn normalize(raw: &str) -> String {
    normalize_identifier(raw)
}

/// Display form: the normalized IBAN in groups of four separated by a space.
pub fn format(iban: &str) -> String {
    let normalized = normalize(iban);
    let mut out = String::with_capacity(normalized.len() + normalized.len() / 4);
    for (i, c) in normalized.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// The two-character country prefix, or `""` if the input is too short or
/// does not start with two ASCII characters.
pub fn country_code(iban: &str) -> &str {
    iban.get(..2).filter(|prefix| prefix.is_ascii()).unwrap_or("")
}

/// The numeric check digits, or 0 if absent or not two digits.
pub fn check_digits(iban: &str) -> u8 {
    match iban.as_bytes().get(2..4) {
        Some(&[a, b]) if a.is_ascii_digit() && b.is_ascii_digit() => (a - b'0') * 10 + (b - b'0'),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_groups_of_four() {
        insta::assert_snapshot!(format("GB82WEST12345698765432"), @"GB82 WEST 1234 5698 7654 32");
        insta::assert_snapshot!(format("be68-5390-0754-7034"), @"BE68 5390 0754 7034");
    }

    #[test]
    fn format_short_and_empty() {
        assert_eq!(format(""), "");
        assert_eq!(format("BE6"), "BE6");
        assert_eq!(format("BE68"), "BE68");
        assert_eq!(format("BE685"), "BE68 5");
    }

    #[test]
    fn normalize_then_format_round_trip() {
        let n = normalize(" de89 3704 0044 0532 0130 00 ");
        assert_eq!(normalize(&format(&n)), n);
    }

    #[test]
    fn extraction() {
        assert_eq!(country_code("BE68539007547034"), "BE");
        assert_eq!(check_digits("BE68539007547034"), 68);
        assert_eq!(check_digits("XK051212012345678906"), 5);
    }

    #[test]
    fn extraction_on_short_input() {
        assert_eq!(country_code("B"), "");
        assert_eq!(country_code(""), "");
        assert_eq!(check_digits("BE6"), 0);
        assert_eq!(check_digits("BEAB"), 0);
    }

    #[test]
    fn extraction_on_multibyte_input() {
        assert_eq!(country_code("ÄB12"), "");
        assert_eq!(country_code("BÄ12"), "");
        assert_eq!(country_code("€"), "");
        assert_eq!(check_digits("ÄB12"), 0);
    }
}

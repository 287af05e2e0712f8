//! Identifier normalization.
//!
//! The normalized form is always derived on demand from user input and
//! never cached.

/// Strip ASCII whitespace and hyphens and upper-case the rest.
///
/// All other characters pass through unchanged; rejecting them is the
/// job of the format checks that run afterwards.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// First two characters of the normalized input, if there are at least two.
pub fn country_prefix(normalized: &str) -> Option<&str> {
    let end = normalized.char_indices().nth(2).map_or(normalized.len(), |(i, _)| i);
    if normalized[..end].chars().count() < 2 {
        return None;
    }
    Some(&normalized[..end])
}

/// Whether `code` consists of exactly two ASCII upper-case letters.
pub fn is_alpha2(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Whether `s` is non-empty and all ASCII digits.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

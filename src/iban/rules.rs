//! Per-country IBAN structure (SWIFT IBAN registry).
//!
//! Each entry gives the total IBAN length and the BBAN as an ordered list
//! of `(length, charset)` fields. The table is static data, sorted for
//! binary search, and never changes at runtime.

use serde::{Deserialize, Serialize};

/// Allowed characters of one BBAN field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    /// Digits `0-9` (registry notation `n`).
    Numeric,
    /// Upper-case letters `A-Z` (registry notation `a`).
    Alpha,
    /// Upper-case letters and digits (registry notation `c`).
    Alphanumeric,
}

impl Charset {
    pub fn allows(self, c: char) -> bool {
        match self {
            Self::Numeric => c.is_ascii_digit(),
            Self::Alpha => c.is_ascii_uppercase(),
            Self::Alphanumeric => c.is_ascii_digit() || c.is_ascii_uppercase(),
        }
    }

    /// Registry notation letter.
    pub fn notation(self) -> char {
        match self {
            Self::Numeric => 'n',
            Self::Alpha => 'a',
            Self::Alphanumeric => 'c',
        }
    }
}

/// IBAN structure of one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryRule {
    pub country_code: &'static str,
    pub total_length: usize,
    pub bban: &'static [(usize, Charset)],
}

impl CountryRule {
    /// BBAN length implied by the field list.
    pub fn bban_length(&self) -> usize {
        self.bban.iter().map(|(len, _)| len).sum()
    }

    /// Registry-style description, e.g. `4!a6!n8!n`.
    pub fn bban_format(&self) -> String {
        self.bban
            .iter()
            .map(|(len, cs)| format!("{len}!{}", cs.notation()))
            .collect()
    }

    /// Check a normalized BBAN against the field list.
    ///
    /// On mismatch returns the 0-based position within the BBAN and the
    /// charset that was expected there.
    pub fn check_bban(&self, bban: &str) -> Result<(), (usize, Charset)> {
        let mut chars = bban.chars();
        let mut position = 0;
        for &(len, charset) in self.bban {
            for _ in 0..len {
                match chars.next() {
                    Some(c) if charset.allows(c) => position += 1,
                    _ => return Err((position, charset)),
                }
            }
        }
        match chars.next() {
            None => Ok(()),
            Some(_) => Err((position, Charset::Numeric)),
        }
    }
}

/// Look up the IBAN rule for an upper-case country code.
pub fn country_rule(country_code: &str) -> Option<&'static CountryRule> {
    COUNTRY_RULES
        .binary_search_by(|r| r.country_code.cmp(country_code))
        .ok()
        .map(|i| &COUNTRY_RULES[i])
}

/// All known IBAN countries, sorted by country code.
pub fn country_rules() -> &'static [CountryRule] {
    COUNTRY_RULES
}

use Charset::{Alpha as A, Alphanumeric as C, Numeric as N};

const fn rule(
    country_code: &'static str,
    total_length: usize,
    bban: &'static [(usize, Charset)],
) -> CountryRule {
    CountryRule {
        country_code,
        total_length,
        bban,
    }
}

static COUNTRY_RULES: &[CountryRule] = &[
    rule("AD", 24, &[(4, N), (4, N), (12, C)]),
    rule("AE", 23, &[(3, N), (16, N)]),
    rule("AL", 28, &[(8, N), (16, C)]),
    rule("AT", 20, &[(5, N), (11, N)]),
    rule("AZ", 28, &[(4, A), (20, C)]),
    rule("BA", 20, &[(3, N), (3, N), (8, N), (2, N)]),
    rule("BE", 16, &[(3, N), (7, N), (2, N)]),
    rule("BG", 22, &[(4, A), (4, N), (2, N), (8, C)]),
    rule("BH", 22, &[(4, A), (14, C)]),
    rule("BR", 29, &[(8, N), (5, N), (10, N), (1, A), (1, C)]),
    rule("BY", 28, &[(4, C), (4, N), (16, C)]),
    rule("CH", 21, &[(5, N), (12, C)]),
    rule("CR", 22, &[(4, N), (14, N)]),
    rule("CY", 28, &[(3, N), (5, N), (16, C)]),
    rule("CZ", 24, &[(4, N), (6, N), (10, N)]),
    rule("DE", 22, &[(8, N), (10, N)]),
    rule("DK", 18, &[(4, N), (9, N), (1, N)]),
    rule("DO", 28, &[(4, C), (20, N)]),
    rule("EE", 20, &[(2, N), (2, N), (11, N), (1, N)]),
    rule("EG", 29, &[(4, N), (4, N), (17, N)]),
    rule("ES", 24, &[(4, N), (4, N), (1, N), (1, N), (10, N)]),
    rule("FI", 18, &[(3, N), (11, N)]),
    rule("FO", 18, &[(4, N), (9, N), (1, N)]),
    rule("FR", 27, &[(5, N), (5, N), (11, C), (2, N)]),
    rule("GB", 22, &[(4, A), (6, N), (8, N)]),
    rule("GE", 22, &[(2, A), (16, N)]),
    rule("GI", 23, &[(4, A), (15, C)]),
    rule("GL", 18, &[(4, N), (9, N), (1, N)]),
    rule("GR", 27, &[(3, N), (4, N), (16, C)]),
    rule("GT", 28, &[(4, C), (20, C)]),
    rule("HR", 21, &[(7, N), (10, N)]),
    rule("HU", 28, &[(3, N), (4, N), (1, N), (15, N), (1, N)]),
    rule("IE", 22, &[(4, A), (6, N), (8, N)]),
    rule("IL", 23, &[(3, N), (3, N), (13, N)]),
    rule("IQ", 23, &[(4, A), (3, N), (12, N)]),
    rule("IS", 26, &[(4, N), (2, N), (6, N), (10, N)]),
    rule("IT", 27, &[(1, A), (5, N), (5, N), (12, C)]),
    rule("JO", 30, &[(4, A), (4, N), (18, C)]),
    rule("KW", 30, &[(4, A), (22, C)]),
    rule("KZ", 20, &[(3, N), (13, C)]),
    rule("LB", 28, &[(4, N), (20, C)]),
    rule("LC", 32, &[(4, A), (24, C)]),
    rule("LI", 21, &[(5, N), (12, C)]),
    rule("LT", 20, &[(5, N), (11, N)]),
    rule("LU", 20, &[(3, N), (13, C)]),
    rule("LV", 21, &[(4, A), (13, C)]),
    rule("MC", 27, &[(5, N), (5, N), (11, C), (2, N)]),
    rule("MD", 24, &[(2, C), (18, C)]),
    rule("ME", 22, &[(3, N), (13, N), (2, N)]),
    rule("MK", 19, &[(3, N), (10, C), (2, N)]),
    rule("MR", 27, &[(5, N), (5, N), (11, N), (2, N)]),
    rule("MT", 31, &[(4, A), (5, N), (18, C)]),
    rule("MU", 30, &[(4, A), (2, N), (2, N), (12, N), (3, N), (3, A)]),
    rule("NL", 18, &[(4, A), (10, N)]),
    rule("NO", 15, &[(4, N), (6, N), (1, N)]),
    rule("PK", 24, &[(4, A), (16, C)]),
    rule("PL", 28, &[(8, N), (16, N)]),
    rule("PS", 29, &[(4, A), (21, C)]),
    rule("PT", 25, &[(4, N), (4, N), (11, N), (2, N)]),
    rule("QA", 29, &[(4, A), (21, C)]),
    rule("RO", 24, &[(4, A), (16, C)]),
    rule("RS", 22, &[(3, N), (13, N), (2, N)]),
    rule("SA", 24, &[(2, N), (18, C)]),
    rule("SC", 31, &[(4, A), (2, N), (2, N), (16, N), (3, A)]),
    rule("SE", 24, &[(3, N), (16, N), (1, N)]),
    rule("SI", 19, &[(5, N), (8, N), (2, N)]),
    rule("SK", 24, &[(4, N), (6, N), (10, N)]),
    rule("SM", 27, &[(1, A), (5, N), (5, N), (12, C)]),
    rule("ST", 25, &[(8, N), (11, N), (2, N)]),
    rule("SV", 28, &[(4, A), (20, N)]),
    rule("TL", 23, &[(3, N), (14, N), (2, N)]),
    rule("TN", 24, &[(2, N), (3, N), (13, N), (2, N)]),
    rule("TR", 26, &[(5, N), (1, N), (16, C)]),
    rule("UA", 29, &[(6, N), (19, C)]),
    rule("VA", 22, &[(3, N), (15, N)]),
    rule("VG", 24, &[(4, A), (16, N)]),
    rule("XK", 20, &[(4, N), (10, N), (2, N)]),
];

//! Per-country VAT number rules.
//!
//! Each rule checks the number *without* its country prefix. Format
//! closures only look at shape; checksum functions implement the
//! published national algorithm on top of the shared primitives. Andorra
//! and San Marino publish no checksum, so they are format-only.

use crate::checksum::{
    CheckDigitFrom, Mod11Policy, TenPolicy, digit_values, iso7064_mod11_10, luhn, mod97,
    weighted_mod11,
};
use crate::core::ChecksumError;

type FormatCheck = fn(&str) -> bool;
type ChecksumCheck = fn(&str) -> Result<bool, ChecksumError>;

/// VAT number rule of one country.
#[derive(Clone, Copy)]
pub struct VatRule {
    /// VAT prefix (ISO code, except `EL` for Greece).
    pub country_code: &'static str,
    pub name: &'static str,
    /// Accepted lengths of the number part.
    pub lengths: &'static [usize],
    format: FormatCheck,
    checksum: Option<ChecksumCheck>,
}

impl VatRule {
    /// Length and shape check of the number part.
    pub fn matches_format(&self, number: &str) -> bool {
        number.is_ascii() && self.lengths.contains(&number.len()) && (self.format)(number)
    }

    /// `None` when the country publishes no checksum. A number that fails
    /// [`matches_format`](Self::matches_format) never verifies.
    pub fn verify_checksum(&self, number: &str) -> Option<Result<bool, ChecksumError>> {
        let check = self.checksum?;
        if !self.matches_format(number) {
            return Some(Ok(false));
        }
        Some(check(number))
    }

    pub fn has_checksum(&self) -> bool {
        self.checksum.is_some()
    }
}

impl std::fmt::Debug for VatRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VatRule")
            .field("country_code", &self.country_code)
            .field("lengths", &self.lengths)
            .field("has_checksum", &self.has_checksum())
            .finish()
    }
}

/// Look up the rule for an upper-case VAT prefix.
pub fn vat_rule(country_code: &str) -> Option<&'static VatRule> {
    VAT_RULES
        .binary_search_by(|r| r.country_code.cmp(country_code))
        .ok()
        .map(|i| &VAT_RULES[i])
}

pub fn vat_rules() -> &'static [VatRule] {
    VAT_RULES
}

fn digits(n: &str) -> bool {
    n.bytes().all(|b| b.is_ascii_digit())
}

/// Compare the last digit of `number` with the policy's check digit over
/// the preceding digits.
fn mod11_last(number: &str, weights: &[u32], policy: Mod11Policy) -> Result<bool, ChecksumError> {
    let payload = &number[..weights.len()];
    let check = digit_values(&number[weights.len()..weights.len() + 1])?[0];
    policy.verify(payload, weights, check as u8)
}

fn last_digit(number: &str) -> Result<u32, ChecksumError> {
    digit_values(&number[number.len() - 1..]).map(|d| d[0])
}

fn two_digits(s: &str) -> Result<u32, ChecksumError> {
    Ok(digit_values(s)?.iter().fold(0, |acc, d| acc * 10 + d))
}

const COMPLEMENT_STRICT: Mod11Policy =
    Mod11Policy::new(CheckDigitFrom::Complement, TenPolicy::Invalid);
const COMPLEMENT_ZERO: Mod11Policy = Mod11Policy::new(CheckDigitFrom::Complement, TenPolicy::Zero);
const REMAINDER_STRICT: Mod11Policy =
    Mod11Policy::new(CheckDigitFrom::Remainder, TenPolicy::Invalid);
const REMAINDER_ZERO: Mod11Policy = Mod11Policy::new(CheckDigitFrom::Remainder, TenPolicy::Zero);

fn at_checksum(n: &str) -> Result<bool, ChecksumError> {
    let d = digit_values(&n[1..])?;
    let sum: u32 = d[..7]
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if i % 2 == 1 { v * 2 } else { v };
            x / 10 + x % 10
        })
        .sum();
    Ok((10 - (sum + 4) % 10) % 10 == d[7])
}

fn be_checksum(n: &str) -> Result<bool, ChecksumError> {
    Ok(97 - mod97(&n[..8])? == two_digits(&n[8..])?)
}

fn ch_checksum(n: &str) -> Result<bool, ChecksumError> {
    mod11_last(&n[1..10], &[5, 4, 3, 2, 7, 6, 5, 4], COMPLEMENT_STRICT)
}

fn de_checksum(n: &str) -> Result<bool, ChecksumError> {
    Ok(u32::from(iso7064_mod11_10(&n[..8])?) == last_digit(n)?)
}

fn dk_checksum(n: &str) -> Result<bool, ChecksumError> {
    Ok(weighted_mod11(n, &[2, 7, 6, 5, 4, 3, 2, 1])? == 0)
}

fn ee_checksum(n: &str) -> Result<bool, ChecksumError> {
    let sum: u32 = digit_values(&n[..8])?
        .iter()
        .zip([3, 7, 1, 3, 7, 1, 3, 7])
        .map(|(d, w)| d * w)
        .sum();
    Ok((10 - sum % 10) % 10 == last_digit(n)?)
}

fn el_checksum(n: &str) -> Result<bool, ChecksumError> {
    mod11_last(n, &[256, 128, 64, 32, 16, 8, 4, 2], REMAINDER_ZERO)
}

fn fi_checksum(n: &str) -> Result<bool, ChecksumError> {
    mod11_last(n, &[7, 9, 10, 5, 8, 4, 2], COMPLEMENT_STRICT)
}

fn fr_checksum(n: &str) -> Result<bool, ChecksumError> {
    // Alphanumeric keys (new-style numbers) have no published formula.
    if !digits(&n[..2]) {
        return Ok(true);
    }
    Ok(two_digits(&n[..2])? == (12 + 3 * mod97(&n[2..])?) % 97)
}

fn hr_checksum(n: &str) -> Result<bool, ChecksumError> {
    Ok(u32::from(iso7064_mod11_10(&n[..10])?) == last_digit(n)?)
}

fn it_checksum(n: &str) -> Result<bool, ChecksumError> {
    luhn(n)
}

fn lu_checksum(n: &str) -> Result<bool, ChecksumError> {
    let base = digit_values(&n[..6])?.iter().fold(0, |acc, d| (acc * 10 + d) % 89);
    Ok(base == two_digits(&n[6..])?)
}

fn nl_checksum(n: &str) -> Result<bool, ChecksumError> {
    mod11_last(&n[..9], &[9, 8, 7, 6, 5, 4, 3, 2], REMAINDER_STRICT)
}

fn no_checksum(n: &str) -> Result<bool, ChecksumError> {
    mod11_last(&n[..9], &[3, 2, 7, 6, 5, 4, 3, 2], COMPLEMENT_STRICT)
}

fn pl_checksum(n: &str) -> Result<bool, ChecksumError> {
    mod11_last(n, &[6, 5, 7, 2, 3, 4, 5, 6, 7], REMAINDER_STRICT)
}

fn pt_checksum(n: &str) -> Result<bool, ChecksumError> {
    mod11_last(n, &[9, 8, 7, 6, 5, 4, 3, 2], COMPLEMENT_ZERO)
}

fn se_checksum(n: &str) -> Result<bool, ChecksumError> {
    luhn(&n[..10])
}

static VAT_RULES: &[VatRule] = &[
    VatRule {
        country_code: "AD",
        name: "Andorra NRT",
        lengths: &[8],
        format: |n| {
            let b = n.as_bytes();
            b"FEALECDGOPU".contains(&b[0]) && digits(&n[1..7]) && b[7].is_ascii_uppercase()
        },
        checksum: None,
    },
    VatRule {
        country_code: "AT",
        name: "Austria UID",
        lengths: &[9],
        format: |n| n.starts_with('U') && digits(&n[1..]),
        checksum: Some(at_checksum),
    },
    VatRule {
        country_code: "BE",
        name: "Belgium enterprise number",
        lengths: &[10],
        format: |n| digits(n) && matches!(n.as_bytes()[0], b'0' | b'1'),
        checksum: Some(be_checksum),
    },
    VatRule {
        country_code: "CH",
        name: "Switzerland UID",
        lengths: &[10, 13, 14],
        format: |n| {
            n.starts_with('E')
                && digits(&n[1..10])
                && matches!(&n[10..], "" | "MWST" | "TVA" | "IVA")
        },
        checksum: Some(ch_checksum),
    },
    VatRule {
        country_code: "DE",
        name: "Germany USt-IdNr.",
        lengths: &[9],
        format: |n| digits(n) && n.as_bytes()[0] != b'0',
        checksum: Some(de_checksum),
    },
    VatRule {
        country_code: "DK",
        name: "Denmark CVR",
        lengths: &[8],
        format: |n| digits(n) && n.as_bytes()[0] != b'0',
        checksum: Some(dk_checksum),
    },
    VatRule {
        country_code: "EE",
        name: "Estonia KMKR",
        lengths: &[9],
        format: |n| digits(n) && n.starts_with("10"),
        checksum: Some(ee_checksum),
    },
    VatRule {
        country_code: "EL",
        name: "Greece AFM",
        lengths: &[9],
        format: digits,
        checksum: Some(el_checksum),
    },
    VatRule {
        country_code: "FI",
        name: "Finland ALV",
        lengths: &[8],
        format: digits,
        checksum: Some(fi_checksum),
    },
    VatRule {
        country_code: "FR",
        name: "France TVA",
        lengths: &[11],
        format: |n| n[..2].bytes().all(|b| b.is_ascii_alphanumeric()) && digits(&n[2..]),
        checksum: Some(fr_checksum),
    },
    VatRule {
        country_code: "HR",
        name: "Croatia OIB",
        lengths: &[11],
        format: digits,
        checksum: Some(hr_checksum),
    },
    VatRule {
        country_code: "IT",
        name: "Italy Partita IVA",
        lengths: &[11],
        format: digits,
        checksum: Some(it_checksum),
    },
    VatRule {
        country_code: "LU",
        name: "Luxembourg TVA",
        lengths: &[8],
        format: digits,
        checksum: Some(lu_checksum),
    },
    VatRule {
        country_code: "NL",
        name: "Netherlands BTW",
        lengths: &[12],
        format: |n| digits(&n[..9]) && n.as_bytes()[9] == b'B' && digits(&n[10..]),
        checksum: Some(nl_checksum),
    },
    VatRule {
        country_code: "NO",
        name: "Norway MVA",
        lengths: &[9, 12],
        format: |n| digits(&n[..9]) && matches!(&n[9..], "" | "MVA"),
        checksum: Some(no_checksum),
    },
    VatRule {
        country_code: "PL",
        name: "Poland NIP",
        lengths: &[10],
        format: digits,
        checksum: Some(pl_checksum),
    },
    VatRule {
        country_code: "PT",
        name: "Portugal NIF",
        lengths: &[9],
        format: digits,
        checksum: Some(pt_checksum),
    },
    VatRule {
        country_code: "SE",
        name: "Sweden momsregistreringsnummer",
        lengths: &[12],
        format: |n| digits(n) && n.ends_with("01"),
        checksum: Some(se_checksum),
    },
    VatRule {
        country_code: "SM",
        name: "San Marino COE",
        lengths: &[5],
        format: digits,
        checksum: None,
    },
];

use serde::{Deserialize, Serialize};

/// Card scheme detected from the issuer identification number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CardBrand {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    Jcb,
    DinersClub,
    Maestro,
    /// Luhn-valid, but no known scheme claims the prefix.
    Unknown,
}

impl CardBrand {
    /// Detect the brand from the leading digits of a PAN.
    ///
    /// Only the first six digits are looked at; shorter input is matched on
    /// what is there.
    pub fn detect(pan: &str) -> Self {
        let prefix = |n: usize| -> u32 {
            pan.get(..n.min(pan.len()))
                .and_then(|p| p.parse().ok())
                .unwrap_or(0)
        };
        let has = |n: usize, lo: u32, hi: u32| pan.len() >= n && (lo..=hi).contains(&prefix(n));

        if has(2, 34, 34) || has(2, 37, 37) {
            Self::AmericanExpress
        } else if has(3, 300, 305) || has(2, 36, 36) || has(2, 38, 39) {
            Self::DinersClub
        } else if has(4, 3528, 3589) {
            Self::Jcb
        } else if has(2, 51, 55) || has(4, 2221, 2720) {
            Self::Mastercard
        } else if has(4, 6011, 6011)
            || has(3, 644, 649)
            || has(2, 65, 65)
            || has(6, 622126, 622925)
        {
            Self::Discover
        } else if has(2, 50, 50)
            || has(2, 56, 58)
            || has(4, 6304, 6304)
            || has(4, 6759, 6759)
            || has(4, 6761, 6763)
        {
            Self::Maestro
        } else if has(1, 4, 4) {
            Self::Visa
        } else {
            Self::Unknown
        }
    }

    /// PAN lengths the scheme issues.
    pub fn lengths(self) -> &'static [usize] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::AmericanExpress => &[15],
            Self::Discover | Self::Jcb => &[16, 17, 18, 19],
            Self::DinersClub => &[14, 15, 16, 17, 18, 19],
            Self::Maestro | Self::Unknown => &[12, 13, 14, 15, 16, 17, 18, 19],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Maestro => "Maestro",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_brands() {
        let cases = [
            ("4111111111111111", CardBrand::Visa),
            ("5555555555554444", CardBrand::Mastercard),
            ("2223003122003222", CardBrand::Mastercard),
            ("378282246310005", CardBrand::AmericanExpress),
            ("6011111111111117", CardBrand::Discover),
            ("6221260000000000", CardBrand::Discover),
            ("3530111333300000", CardBrand::Jcb),
            ("30569309025904", CardBrand::DinersClub),
            ("36227206271667", CardBrand::DinersClub),
            ("6759649826438453", CardBrand::Maestro),
            ("5018000000000009", CardBrand::Maestro),
            ("6200000000000005", CardBrand::Unknown),
        ];
        for (pan, brand) in cases {
            assert_eq!(CardBrand::detect(pan), brand, "{pan}");
        }
    }

    #[test]
    fn mastercard_2_series_bounds() {
        assert_eq!(CardBrand::detect("2220990000000000"), CardBrand::Unknown);
        assert_eq!(CardBrand::detect("2720990000000000"), CardBrand::Mastercard);
        assert_eq!(CardBrand::detect("2721000000000000"), CardBrand::Unknown);
    }

    #[test]
    fn short_input_does_not_panic() {
        assert_eq!(CardBrand::detect(""), CardBrand::Unknown);
        assert_eq!(CardBrand::detect("4"), CardBrand::Visa);
        assert_eq!(CardBrand::detect("3"), CardBrand::Unknown);
    }

    #[test]
    fn serde_name() {
        assert_eq!(
            serde_json::to_string(&CardBrand::AmericanExpress).unwrap(),
            r#""AmericanExpress""#
        );
    }
}

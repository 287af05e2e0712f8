use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an identifier was rejected.
///
/// Every failed [`ValidationResult`] carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Input is empty or too short to carry any identifier.
    InvalidInput,
    /// Input has the wrong number of characters for its kind or country.
    InvalidLength,
    /// Input contains characters or a pattern not allowed at that position.
    InvalidFormat,
    /// The country prefix is not a plausible ISO 3166-1 alpha-2 code.
    InvalidCountryCode,
    /// A checksum over the whole identifier failed (e.g. IBAN Mod-97).
    InvalidChecksum,
    /// A dedicated check digit or check character does not match.
    InvalidCheckDigit,
    /// The country is well-formed but no validator is registered for it.
    UnsupportedCountry,
}

impl ErrorCode {
    /// Stable upper-snake name, useful for logs and API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidCountryCode => "INVALID_COUNTRY_CODE",
            Self::InvalidChecksum => "INVALID_CHECKSUM",
            Self::InvalidCheckDigit => "INVALID_CHECK_DIGIT",
            Self::UnsupportedCountry => "UNSUPPORTED_COUNTRY",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one identifier.
///
/// A result is valid exactly when it carries no error code; a valid result
/// never carries a message. Fields are private so that invariant cannot be
/// broken after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    is_valid: bool,
    error_code: Option<ErrorCode>,
    message: Option<String>,
}

impl ValidationResult {
    /// A successful result.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error_code: None,
            message: None,
        }
    }

    /// A failed result with the given code and human-readable message.
    pub fn fail(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_code: Some(code),
            message: Some(message.into()),
        }
    }

    /// `ok()` when `valid`, otherwise `fail(code, message)`.
    pub fn check(valid: bool, code: ErrorCode, message: impl Into<String>) -> Self {
        if valid {
            Self::ok()
        } else {
            Self::fail(code, message)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The failure reason, `None` for a valid result.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self.error_code {
            None => Ok(()),
            Some(code) => Err(ValidationFailure {
                code,
                message: self.message.unwrap_or_default(),
            }),
        }
    }
}

impl From<ChecksumError> for ValidationResult {
    fn from(err: ChecksumError) -> Self {
        Self::fail(ErrorCode::InvalidFormat, err.to_string())
    }
}

/// A failed validation in `Result` form, see [`ValidationResult::into_result`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ValidationFailure {
    pub code: ErrorCode,
    pub message: String,
}

impl From<ChecksumError> for ValidationFailure {
    fn from(err: ChecksumError) -> Self {
        Self {
            code: ErrorCode::InvalidFormat,
            message: err.to_string(),
        }
    }
}

/// Contract violation inside a checksum primitive.
///
/// Primitives never guess: any input they cannot process exactly is
/// reported here and turned into [`ErrorCode::InvalidFormat`] at the
/// public boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChecksumError {
    /// No digits to process.
    #[error("empty input")]
    Empty,

    /// A non-digit where only digits are allowed. `position` counts
    /// characters, not bytes, here and in `InvalidCharacter`.
    #[error("non-digit character '{found}' at position {position}")]
    NonDigit { position: usize, found: char },

    /// A character outside `0-9A-Z` where alphanumerics are allowed.
    #[error("invalid character '{found}' at position {position}")]
    InvalidCharacter { position: usize, found: char },

    /// Digit count does not match the weight vector or fixed width.
    #[error("expected {expected} digits, got {found}")]
    LengthMismatch { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_has_no_code_or_message() {
        let r = ValidationResult::ok();
        assert!(r.is_valid());
        assert_eq!(r.error_code(), None);
        assert_eq!(r.message(), None);
    }

    #[test]
    fn fail_carries_code_and_message() {
        let r = ValidationResult::fail(ErrorCode::InvalidLength, "too long");
        assert!(!r.is_valid());
        assert_eq!(r.error_code(), Some(ErrorCode::InvalidLength));
        assert_eq!(r.message(), Some("too long"));
    }

    #[test]
    fn check_picks_branch() {
        assert!(ValidationResult::check(true, ErrorCode::InvalidChecksum, "x").is_valid());
        let r = ValidationResult::check(false, ErrorCode::InvalidChecksum, "bad");
        assert_eq!(r.error_code(), Some(ErrorCode::InvalidChecksum));
    }

    #[test]
    fn checksum_error_maps_to_invalid_format() {
        let r = ValidationResult::from(ChecksumError::NonDigit {
            position: 3,
            found: 'x',
        });
        assert_eq!(r.error_code(), Some(ErrorCode::InvalidFormat));
        assert!(r.message().unwrap().contains("position 3"));
    }

    #[test]
    fn into_result() {
        assert!(ValidationResult::ok().into_result().is_ok());
        let err = ValidationResult::fail(ErrorCode::UnsupportedCountry, "ZZ")
            .into_result()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedCountry);
        assert_eq!(err.to_string(), "UNSUPPORTED_COUNTRY: ZZ");
    }

    #[test]
    fn serde_round_trip() {
        let r = ValidationResult::fail(ErrorCode::InvalidCheckDigit, "digit 7 expected");
        let json = serde_json::to_string(&r).unwrap();
        let back: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}

//! IBAN normalization, formatting and validation (ISO 13616).
//!
//! Two levels are offered:
//!
//! - [`is_valid_iban`] / [`validate_checksum`]: the bare Mod-97 check, no
//!   country structure.
//! - [`validate`] / [`parse`]: country rule lookup, length, BBAN charset
//!   and checksum, reported as a [`ValidationResult`](crate::core::ValidationResult).
//!
//! # Example
//!
//! ```rust
//! use finident::core::ErrorCode;
//! use finident::iban;
//!
//! assert!(iban::is_valid_iban("be68 5390 0754 7034"));
//! assert_eq!(iban::format("GB82WEST12345698765432"), "GB82 WEST 1234 5698 7654 32");
//!
//! let result = iban::validate("DE89 3704 0044 0532 0130 0");
//! assert_eq!(result.error_code(), Some(ErrorCode::InvalidLength));
//! ```

mod checksum;
mod format;
mod rules;
mod validator;

pub use checksum::{compute_check_digits, is_valid_iban, validate_checksum};
pub use format::{check_digits, country_code, format, normalize};
pub use rules::{Charset, CountryRule, country_rule, country_rules};
pub use validator::{
    IBAN_REGION, IbanValidator, iban_table, parse, registry, registry_with_source, validate,
};

//! VAT number validation for EU and EFTA countries.
//!
//! Validates VAT IDs by format and, where a national algorithm is
//! published, by check digit. Routing by country prefix goes through a
//! [`ValidatorRegistry`](crate::registry::ValidatorRegistry).
//!
//! # Example
//!
//! ```rust
//! use finident::core::ErrorCode;
//! use finident::vat::*;
//!
//! assert!(validate_vat("DE136695976").is_valid());
//! assert_eq!(
//!     validate_vat("DE136695977").error_code(),
//!     Some(ErrorCode::InvalidCheckDigit)
//! );
//! ```

mod rules;
mod validator;

pub use rules::{VatRule, vat_rule, vat_rules};
pub use validator::{
    VAT_REGION, VatValidator, normalize_vat, parse_vat, registry, registry_with_source, vat_table,
    validate_vat,
};

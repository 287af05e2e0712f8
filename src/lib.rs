//! # finident
//!
//! Validation and parsing of financial identifiers: IBANs, VAT IDs,
//! payment card numbers, structured payment references and national
//! identity numbers.
//!
//! Every check returns a [`ValidationResult`](crate::core::ValidationResult)
//! carrying exactly one [`ErrorCode`](crate::core::ErrorCode) on failure.
//! Country-bound identifiers are routed through a
//! [`ValidatorRegistry`](crate::registry::ValidatorRegistry) that lets
//! runtime registrations override the built-in country table.
//!
//! ## Quick Start
//!
//! ```rust
//! use finident::core::ErrorCode;
//! use finident::iban;
//!
//! assert!(iban::validate("BE68 5390 0754 7034").is_valid());
//!
//! let result = iban::validate("BE68 5390 0754 7035");
//! assert_eq!(result.error_code(), Some(ErrorCode::InvalidChecksum));
//!
//! let details = iban::parse("GB82 WEST 1234 5698 7654 32").unwrap();
//! assert_eq!(details.component("bban"), Some("WEST12345698765432"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Result types, normalization, checksum primitives |
//! | `registry` | Validator trait, static tables, country dispatch |
//! | `iban` | IBAN rules for ~80 countries, validate, parse, check digits |
//! | `vat` | VAT IDs of EU/EFTA countries with national check digits |
//! | `reference` | OGM/VCS, RF creditor reference, QR-reference, KID, Finnish reference |
//! | `card` | Payment card numbers, Luhn and brand detection |
//! | `national` | National identity numbers (CN resident ID) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod checksum;

#[cfg(feature = "registry")]
pub mod registry;

#[cfg(feature = "iban")]
pub mod iban;

#[cfg(feature = "vat")]
pub mod vat;

#[cfg(feature = "reference")]
pub mod reference;

#[cfg(feature = "card")]
pub mod card;

#[cfg(feature = "national")]
pub mod national;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

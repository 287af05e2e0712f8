//! Country-code dispatch for multi-country validators.
//!
//! A [`ValidatorRegistry`] is the aggregator of one region (all IBAN
//! countries, the EU VAT area, ...). It combines a compiled-in
//! [`StaticTable`] with optional runtime registrations supplied through a
//! [`ValidatorSource`], where the runtime side always wins.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, LazyLock};
//! use finident::core::{ErrorCode, IdentifierDetails, ValidationResult};
//! use finident::registry::*;
//!
//! struct Anything;
//!
//! impl IdentifierValidator for Anything {
//!     fn country_code(&self) -> &str { "ZZ" }
//!     fn validate(&self, _raw: &str) -> ValidationResult { ValidationResult::ok() }
//!     fn parse(&self, _raw: &str) -> Option<IdentifierDetails> { None }
//! }
//!
//! static TABLE: LazyLock<StaticTable> = LazyLock::new(StaticTable::empty);
//!
//! let container = Arc::new(ValidatorContainer::new());
//! container.register(Arc::new(Anything));
//! let registry = ValidatorRegistry::with_source("DEMO", &TABLE, &container);
//!
//! assert!(registry.validate("zz-123").is_valid());
//! assert_eq!(
//!     registry.validate("YY123").error_code(),
//!     Some(ErrorCode::UnsupportedCountry)
//! );
//! ```

mod dispatch;
mod table;
mod validator;

pub use dispatch::{Resolved, ValidatorRegistry};
pub use table::StaticTable;
pub use validator::{IdentifierValidator, ValidatorContainer, ValidatorSource};

//! Core result types, normalization and country codes.
//!
//! Every validator in this crate, built-in or supplied by the caller,
//! reports through [`ValidationResult`] and parses into
//! [`IdentifierDetails`].

pub mod countries;
mod error;
mod normalize;
mod types;

pub use countries::{is_identifier_country_prefix, is_known_country_code};
pub use error::*;
pub use normalize::*;
pub use types::*;

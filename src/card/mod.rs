//! Payment card numbers (PAN): Luhn, length and brand detection.
//!
//! ```rust
//! use finident::card::{CardBrand, card_brand, parse_card, validate_card};
//!
//! assert!(validate_card("4111 1111 1111 1111").is_valid());
//! assert_eq!(card_brand("5555555555554444"), CardBrand::Mastercard);
//!
//! let details = parse_card("378282246310005").unwrap();
//! assert_eq!(details.component("last4"), Some("0005"));
//! ```

mod brand;
mod validator;

pub use brand::CardBrand;
pub use validator::{CARD_REGION, CardValidator, card_brand, mask, parse_card, validate_card};

//! Structured payment references.
//!
//! | Scheme | Country | Rule |
//! |--------|---------|------|
//! | OGM / VCS | BE | base mod 97 (0 → 97) |
//! | RF creditor reference | international | ISO 11649, rearranged Mod-97 |
//! | QR-reference | CH | Mod-10 recursive |
//! | KID | NO | Luhn or Mod-11 |
//! | viitenumero | FI | weights 7-3-1 |
//!
//! # Example
//!
//! ```rust
//! use finident::reference::*;
//!
//! assert_eq!(generate_ogm("1").unwrap(), "+++000/0000/00101+++");
//! assert!(validate_rf("RF18 5390 0754 7034").is_valid());
//! assert!(validate_qr_reference("210000000003139471430009017").is_valid());
//! ```

mod finnish;
mod kid;
mod ogm;
mod qr;
mod rf;

pub use finnish::{finnish_check_digit, validate_finnish_reference};
pub use kid::{KidAlgorithm, kid_algorithm, validate_kid};
pub use ogm::{format_ogm, generate_ogm, parse_ogm, validate_ogm};
pub use qr::{format_qr_reference, generate_qr_reference, validate_qr_reference};
pub use rf::{generate_rf, parse_rf, validate_rf};

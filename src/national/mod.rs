//! National identity numbers.
//!
//! National IDs carry no country prefix, so the aggregator is addressed
//! with an explicit country code through
//! [`ValidatorRegistry::validate_for`](crate::registry::ValidatorRegistry::validate_for).
//!
//! ```rust
//! use finident::national;
//!
//! let result = national::registry().validate_for("CN", "11010519491231002X");
//! assert!(result.is_valid());
//! ```

mod cn;

use std::sync::{Arc, LazyLock};

use crate::registry::{IdentifierValidator, StaticTable, ValidatorRegistry, ValidatorSource};

pub use cn::{CnResidentIdValidator, parse_cn_resident_id, validate_cn_resident_id};

/// Region tag of the national ID aggregator.
pub const NATIONAL_REGION: &str = "NATIONAL_ID";

pub fn national_table() -> &'static StaticTable {
    static TABLE: LazyLock<StaticTable> = LazyLock::new(|| {
        StaticTable::new([Box::new(CnResidentIdValidator) as Box<dyn IdentifierValidator>])
    });
    &TABLE
}

/// The national ID aggregator over the built-in table.
pub fn registry() -> &'static ValidatorRegistry {
    static REGISTRY: LazyLock<ValidatorRegistry> =
        LazyLock::new(|| ValidatorRegistry::new(NATIONAL_REGION, national_table()));
    &REGISTRY
}

/// A national ID aggregator with per-country overrides from `source`.
pub fn registry_with_source<S>(source: &Arc<S>) -> Arc<ValidatorRegistry>
where
    S: ValidatorSource + 'static,
{
    ValidatorRegistry::with_source(NATIONAL_REGION, national_table(), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorCode;

    #[test]
    fn explicit_dispatch() {
        let r = registry();
        assert!(r.validate_for("cn", "11010519491231002X").is_valid());
        assert_eq!(
            r.validate_for("DE", "11010519491231002X").error_code(),
            Some(ErrorCode::UnsupportedCountry)
        );
        assert!(r.parse_for("CN", "440524198001010013").is_some());
    }

    #[test]
    fn derived_prefix_is_unsupported() {
        // "11" is taken as the prefix and nothing claims it.
        assert_eq!(
            registry().validate("11010519491231002X").error_code(),
            Some(ErrorCode::UnsupportedCountry)
        );
    }
}

use std::sync::{Arc, PoisonError, RwLock};

use crate::core::{IdentifierDetails, ValidationResult};

/// A validator for one country (or one region, for aggregators).
///
/// This is the only surface the registry uses; it never looks inside.
pub trait IdentifierValidator: Send + Sync {
    /// ISO 3166-1 alpha-2 code (or scheme prefix) this validator answers for.
    fn country_code(&self) -> &str;

    /// Validate a raw, un-normalized identifier.
    fn validate(&self, raw: &str) -> ValidationResult;

    /// Parse a raw identifier; `None` when it is not valid.
    fn parse(&self, raw: &str) -> Option<IdentifierDetails>;
}

/// Supplier of runtime validator registrations, in priority order.
///
/// Implemented by [`ValidatorContainer`] and by a plain `Vec` of
/// validators. A registry reads its source once, on first use, and keeps
/// the returned validators; the source only has to live until then.
pub trait ValidatorSource: Send + Sync {
    fn validators(&self) -> Vec<Arc<dyn IdentifierValidator>>;
}

impl ValidatorSource for Vec<Arc<dyn IdentifierValidator>> {
    fn validators(&self) -> Vec<Arc<dyn IdentifierValidator>> {
        self.clone()
    }
}

/// Thread-safe, append-only collection of validator registrations.
///
/// Owns the validators it holds. Registries keep only a weak reference to
/// the container, so a registry may be registered in the container it reads.
#[derive(Default)]
pub struct ValidatorContainer {
    entries: RwLock<Vec<Arc<dyn IdentifierValidator>>>,
}

impl ValidatorContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registration. Earlier registrations win on conflicts.
    pub fn register(&self, validator: Arc<dyn IdentifierValidator>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(validator);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ValidatorSource for ValidatorContainer {
    fn validators(&self) -> Vec<Arc<dyn IdentifierValidator>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for ValidatorContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorContainer")
            .field("len", &self.len())
            .finish()
    }
}

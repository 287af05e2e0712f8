use std::ops::Deref;
use std::sync::{Arc, OnceLock, Weak};

use tracing::{debug, trace, warn};

use super::{IdentifierValidator, StaticTable, ValidatorSource};
use crate::core::{
    ErrorCode, IdentifierDetails, ValidationResult, country_prefix, is_alpha2,
    normalize_identifier,
};

/// A validator picked by the registry.
pub enum Resolved {
    /// Runtime registration from the registry's source.
    Override(Arc<dyn IdentifierValidator>),
    /// Entry of the compiled-in table.
    Builtin(&'static dyn IdentifierValidator),
}

impl Resolved {
    pub fn is_override(&self) -> bool {
        matches!(self, Self::Override(_))
    }
}

impl Deref for Resolved {
    type Target = dyn IdentifierValidator;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Override(v) => v.as_ref(),
            Self::Builtin(v) => *v,
        }
    }
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_override() { "Override" } else { "Builtin" };
        f.debug_tuple(kind).field(&self.country_code()).finish()
    }
}

struct Candidate {
    country_code: String,
    validator: Arc<dyn IdentifierValidator>,
}

/// Routes identifiers of one region to the right country validator.
///
/// Resolution order:
/// 1. runtime registrations from the source given at construction, first
///    match on country code (case-insensitive);
/// 2. the compiled-in [`StaticTable`];
/// 3. otherwise [`ErrorCode::UnsupportedCountry`].
///
/// The delegate's result is returned unchanged.
///
/// The source is read once, on first use, and the snapshot is kept for the
/// lifetime of the registry: validators registered afterwards are not seen.
/// The source itself is held weakly, so a registry registered in its own
/// source does not keep it alive. The caller must keep the source alive
/// until first use; a source dropped before then contributes no overrides.
/// Validators in the snapshot are held strongly.
pub struct ValidatorRegistry {
    region: &'static str,
    table: &'static StaticTable,
    source: Option<Weak<dyn ValidatorSource>>,
    // allocation address of this registry when built with a source
    identity: Option<usize>,
    overrides: OnceLock<Vec<Candidate>>,
}

impl ValidatorRegistry {
    /// A registry backed by the static table only.
    pub fn new(region: &'static str, table: &'static StaticTable) -> Self {
        Self {
            region,
            table,
            source: None,
            identity: None,
            overrides: OnceLock::new(),
        }
    }

    /// A registry that lets runtime registrations from `source` override
    /// the static table.
    ///
    /// The returned registry may itself be registered in `source`; it is
    /// never admitted into its own candidate list.
    pub fn with_source<S>(region: &'static str, table: &'static StaticTable, source: &Arc<S>) -> Arc<Self>
    where
        S: ValidatorSource + 'static,
    {
        let source: Arc<dyn ValidatorSource> = source.clone();
        let source = Arc::downgrade(&source);
        Arc::new_cyclic(|me: &Weak<Self>| Self {
            region,
            table,
            source: Some(source),
            identity: Some(me.as_ptr() as *const () as usize),
            overrides: OnceLock::new(),
        })
    }

    /// Region tag given at construction.
    pub fn region(&self) -> &'static str {
        self.region
    }

    /// Resolve a raw identifier by its two-letter prefix.
    ///
    /// Fails with `InvalidInput` when the normalized input has fewer than two
    /// characters and `UnsupportedCountry` when nothing claims the prefix.
    pub fn resolve(&self, raw: &str) -> Result<Resolved, ValidationResult> {
        let normalized = normalize_identifier(raw);
        let Some(code) = country_prefix(&normalized) else {
            return Err(ValidationResult::fail(
                ErrorCode::InvalidInput,
                "identifier must have at least 2 characters",
            ));
        };
        self.resolve_country(code)
            .ok_or_else(|| self.unsupported(code))
    }

    /// Resolve an explicit country code.
    pub fn resolve_country(&self, country_code: &str) -> Option<Resolved> {
        let code = country_code.to_uppercase();
        for candidate in self.overrides() {
            if candidate.country_code == code {
                debug!(region = self.region, country = %code, "resolved runtime validator");
                return Some(Resolved::Override(candidate.validator.clone()));
            }
        }
        let builtin = self.table.get(&code)?;
        debug!(region = self.region, country = %code, "resolved builtin validator");
        Some(Resolved::Builtin(builtin))
    }

    /// Validate by the identifier's own country prefix.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        match self.resolve(raw) {
            Ok(validator) => validator.validate(raw),
            Err(failure) => failure,
        }
    }

    /// Validate against an explicitly given country.
    pub fn validate_for(&self, country_code: &str, raw: &str) -> ValidationResult {
        match self.resolve_explicit(country_code) {
            Ok(validator) => validator.validate(raw),
            Err(failure) => failure,
        }
    }

    /// Parse by the identifier's own country prefix.
    pub fn parse(&self, raw: &str) -> Option<IdentifierDetails> {
        self.resolve(raw).ok()?.parse(raw)
    }

    /// Parse against an explicitly given country.
    pub fn parse_for(&self, country_code: &str, raw: &str) -> Option<IdentifierDetails> {
        self.resolve_explicit(country_code).ok()?.parse(raw)
    }

    /// Number of runtime registrations in the snapshot (takes it if needed).
    pub fn override_count(&self) -> usize {
        self.overrides().len()
    }

    fn resolve_explicit(&self, country_code: &str) -> Result<Resolved, ValidationResult> {
        let code = country_code.trim().to_uppercase();
        if !is_alpha2(&code) {
            return Err(ValidationResult::fail(
                ErrorCode::InvalidCountryCode,
                format!("'{country_code}' is not a two-letter country code"),
            ));
        }
        self.resolve_country(&code)
            .ok_or_else(|| self.unsupported(&code))
    }

    fn unsupported(&self, code: &str) -> ValidationResult {
        trace!(region = self.region, country = %code, "no validator registered");
        ValidationResult::fail(
            ErrorCode::UnsupportedCountry,
            format!("country '{code}' is not supported by {}", self.region),
        )
    }

    fn overrides(&self) -> &[Candidate] {
        // Concurrent first callers block on the same initialization; the
        // snapshot is deterministic either way.
        self.overrides.get_or_init(|| {
            let Some(weak) = self.source.as_ref() else {
                return Vec::new();
            };
            let Some(source) = weak.upgrade() else {
                warn!(region = self.region, "validator source dropped before first use");
                return Vec::new();
            };
            let registered = source.validators();
            let total = registered.len();
            let candidates: Vec<Candidate> = registered
                .into_iter()
                .filter(|v| Some(Arc::as_ptr(v) as *const () as usize) != self.identity)
                .map(|v| Candidate {
                    country_code: v.country_code().to_uppercase(),
                    validator: v,
                })
                .collect();
            debug!(
                region = self.region,
                candidates = candidates.len(),
                excluded_self = total - candidates.len(),
                "snapshotted runtime validators"
            );
            candidates
        })
    }
}

impl IdentifierValidator for ValidatorRegistry {
    fn country_code(&self) -> &str {
        self.region
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        ValidatorRegistry::validate(self, raw)
    }

    fn parse(&self, raw: &str) -> Option<IdentifierDetails> {
        ValidatorRegistry::parse(self, raw)
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("region", &self.region)
            .field("builtin", &self.table.len())
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

use super::IdentifierValidator;

/// Compiled-in country code → validator mapping of one region.
///
/// Built once per region (typically inside a `LazyLock`) and sorted for
/// binary search. When two validators claim the same code the one listed
/// first is kept.
pub struct StaticTable {
    entries: Vec<(String, Box<dyn IdentifierValidator>)>,
}

impl StaticTable {
    pub fn new(validators: impl IntoIterator<Item = Box<dyn IdentifierValidator>>) -> Self {
        let mut entries: Vec<(String, Box<dyn IdentifierValidator>)> = validators
            .into_iter()
            .map(|v| (v.country_code().to_ascii_uppercase(), v))
            .collect();
        // stable sort keeps the first registration of a duplicate in front
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.dedup_by(|later, earlier| later.0 == earlier.0);
        Self { entries }
    }

    /// An empty table, for registries that rely on runtime registrations only.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look up an upper-case country code.
    pub fn get(&self, country_code: &str) -> Option<&dyn IdentifierValidator> {
        self.entries
            .binary_search_by(|(code, _)| code.as_str().cmp(country_code))
            .ok()
            .map(|i| self.entries[i].1.as_ref())
    }

    /// Country codes covered, sorted.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for StaticTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.country_codes()).finish()
    }
}

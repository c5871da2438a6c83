use std::collections::BTreeMap;

use serde::Serialize;

/// One registered code and the owner it was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Normalized, non-empty code.
    pub code: String,
    /// Owner label derived from the source filename.
    pub owner: String,
}

impl Entry {
    pub fn new(code: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            owner: owner.into(),
        }
    }
}

/// Per-owner entry counts, reported once after load. BTreeMap keeps the
/// summary output deterministic.
pub type OwnerStats = BTreeMap<String, usize>;

/// Immutable, ordered collection of registered codes.
///
/// Entries are held sorted by normalized-code length descending; equal
/// lengths keep the order they were encountered in during load. That
/// ordering is what makes the resolver's linear partial-match scan return
/// the most specific registered fragment first, so it is fixed at
/// construction and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Builds a registry from entries in encounter order. The stable sort
    /// preserves that order among codes of equal length.
    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.code.len()));
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

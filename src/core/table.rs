use std::collections::BTreeMap;

/// Text ids mapped to their translation, kept in code point order.
///
/// Freshly extracted ids map to an empty placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextIdTable {
    entries: BTreeMap<String, String>,
}

/// Outcome of carrying translations over from an existing table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Ids whose existing translation was kept.
    pub kept: usize,
    /// Ids present in the existing table but no longer found in sources.
    pub stale: usize,
}

impl TextIdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` with an empty placeholder. Re-inserting overwrites.
    pub fn insert(&mut self, id: &str) {
        self.entries.insert(id.to_string(), String::new());
    }

    /// Key union with `other`; entries from `other` win.
    pub fn merge(&mut self, other: TextIdTable) {
        self.entries.extend(other.entries);
    }

    /// Take translations for ids that are still in use from `existing`.
    pub fn keep_existing(&mut self, existing: TextIdTable) -> MergeStats {
        let mut stats = MergeStats::default();
        for (id, value) in existing.entries {
            match self.entries.get_mut(&id) {
                Some(slot) => {
                    *slot = value;
                    stats.kept += 1;
                }
                None => stats.stale += 1,
            }
        }
        stats
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl From<BTreeMap<String, String>> for TextIdTable {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<S: Into<String>> FromIterator<S> for TextIdTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|id| (id.into(), String::new()))
                .collect(),
        }
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::model::KeywordRecord;

/// The analyst's chosen keyword keys, as a persistent set value.
///
/// Every mutation returns a new set, so snapshots can be shared, diffed, and
/// undone freely. The set is independent of filters: a selected key that no
/// longer appears in the filtered view is inert — it contributes nothing to
/// stats or exports — but it is never removed automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    keys: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Add the key if absent, remove it if present.
    pub fn toggle(&self, key: &str) -> Self {
        let mut keys = self.keys.clone();
        if !keys.remove(key) {
            keys.insert(key.to_string());
        }
        Self { keys }
    }

    /// Add every visible key regardless of current state. This is an
    /// idempotent union, not a toggle: re-selecting already-selected rows
    /// must not deselect them.
    pub fn select_all<'a>(&self, visible: impl IntoIterator<Item = &'a str>) -> Self {
        let mut keys = self.keys.clone();
        keys.extend(visible.into_iter().map(str::to_string));
        Self { keys }
    }
}

/// Summary statistics over the selected records of the current filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStats {
    pub selected_count: usize,
    pub selected_volume: u64,
}

/// Count and total search volume of selected keys present in `filtered`.
/// Inert selections contribute zero.
pub fn selection_stats(filtered: &[&KeywordRecord], selection: &SelectionSet) -> SelectionStats {
    let mut stats = SelectionStats::default();
    for record in filtered {
        if selection.contains(&record.keyword) {
            stats.selected_count += 1;
            stats.selected_volume += record.search_volume;
        }
    }
    stats
}

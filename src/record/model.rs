use serde::{Deserialize, Serialize};

use crate::view::sort::{SortColumn, SortValue};

/// One ranked search result observed for a keyword.
///
/// `rank` is the 1-based position in the ranked results. A reserved name
/// (e.g. the analyst's own site) carries no special meaning inside the
/// engine; it is presentation-layer knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorEntry {
    pub name: String,
    pub rank: u32,
}

/// The atomic unit of the dataset: one observed keyword.
///
/// Records arrive as camelCase JSON from the upstream loader. Every field
/// except `keyword` defaults when absent — a record missing its category,
/// search volume, or competitor list degrades to the empty string / zero /
/// empty list instead of failing the whole batch.
///
/// Records are immutable once loaded; the engine never mutates an input
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRecord {
    /// Unique text key within a dataset.
    pub keyword: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub search_volume: u64,
    #[serde(default)]
    pub is_branded: bool,
    #[serde(default)]
    pub competitors: Vec<CompetitorEntry>,
}

/// Sortable columns of the filtered keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordColumn {
    Keyword,
    Category,
    SearchVolume,
    Branded,
}

impl SortColumn<KeywordRecord> for KeywordColumn {
    fn value(&self, row: &KeywordRecord) -> SortValue {
        match self {
            KeywordColumn::Keyword => SortValue::Text(row.keyword.clone()),
            KeywordColumn::Category => SortValue::Text(row.category.clone()),
            KeywordColumn::SearchVolume => SortValue::Number(row.search_volume as f64),
            // Non-branded sorts before branded ascending.
            KeywordColumn::Branded => SortValue::Number(u8::from(row.is_branded) as f64),
        }
    }
}

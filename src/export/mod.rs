//! Delimited-text export of a record subset.
//!
//! Values are joined with a fixed comma delimiter and are NOT escaped: a
//! value containing the delimiter will shift its row's columns. That is a
//! documented limitation of the format, not something the engine repairs.

use serde::{Deserialize, Serialize};

use crate::record::model::KeywordRecord;
use crate::view::selection::SelectionSet;

pub const DELIMITER: char = ',';

/// The exportable columns. The column set is caller-supplied; the engine
/// hardcodes nothing beyond each column's header and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportField {
    Keyword,
    Category,
    SearchVolume,
    Branded,
    Competitors,
}

impl ExportField {
    /// The default export: `keyword,category,search volume`.
    pub const DEFAULT: [ExportField; 3] = [
        ExportField::Keyword,
        ExportField::Category,
        ExportField::SearchVolume,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            ExportField::Keyword => "keyword",
            ExportField::Category => "category",
            ExportField::SearchVolume => "search volume",
            ExportField::Branded => "branded",
            ExportField::Competitors => "competitors",
        }
    }

    fn render(&self, record: &KeywordRecord) -> String {
        match self {
            ExportField::Keyword => record.keyword.clone(),
            ExportField::Category => record.category.clone(),
            ExportField::SearchVolume => record.search_volume.to_string(),
            ExportField::Branded => record.is_branded.to_string(),
            ExportField::Competitors => record
                .competitors
                .iter()
                .map(|comp| format!("{}:{}", comp.name, comp.rank))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Render records as delimited text: one header row, then one row per
/// record in input order, rows joined with `\n`.
pub fn to_delimited_text<'a, I>(records: I, fields: &[ExportField]) -> String
where
    I: IntoIterator<Item = &'a KeywordRecord>,
{
    let sep = DELIMITER.to_string();
    let mut lines = Vec::new();
    lines.push(
        fields
            .iter()
            .map(|f| f.header().to_string())
            .collect::<Vec<_>>()
            .join(&sep),
    );
    for record in records {
        lines.push(
            fields
                .iter()
                .map(|f| f.render(record))
                .collect::<Vec<_>>()
                .join(&sep),
        );
    }
    lines.join("\n")
}

/// The selected-only subset of the filtered set, in filtered order. Inert
/// selections (keys not present in `filtered`) are excluded.
pub fn selected_records<'a>(
    filtered: &[&'a KeywordRecord],
    selection: &SelectionSet,
) -> Vec<&'a KeywordRecord> {
    filtered
        .iter()
        .copied()
        .filter(|record| selection.contains(&record.keyword))
        .collect()
}

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::record::model::KeywordRecord;
use crate::view::sort::{SortColumn, SortValue};

/// Count/volume subtotal for one side of the branded breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandedSplit {
    pub count: usize,
    pub search_volume: u64,
}

/// Per-category totals over the current (filtered, non-excluded) view.
///
/// Percentages are relative to the sum across all included categories and
/// are recomputed for every exclusion set — they are only meaningful within
/// the output they were returned in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub count: usize,
    pub search_volume: u64,
    pub branded: BrandedSplit,
    pub non_branded: BrandedSplit,
    pub count_percentage: f64,
    pub volume_percentage: f64,
}

/// Group records by their raw category string.
///
/// Records whose category is in `excluded` are skipped entirely: they
/// contribute neither to totals nor to the percentage denominators. Output
/// order is first-occurrence order of the included categories. Zero
/// denominators yield 0.0 percentages, never NaN.
pub fn aggregate_by_category(
    records: &[&KeywordRecord],
    excluded: &BTreeSet<String>,
) -> Vec<CategoryAggregate> {
    let mut aggregates: Vec<CategoryAggregate> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if excluded.contains(&record.category) {
            continue;
        }
        let slot = match index.get(record.category.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(record.category.as_str(), aggregates.len());
                aggregates.push(CategoryAggregate {
                    category: record.category.clone(),
                    count: 0,
                    search_volume: 0,
                    branded: BrandedSplit::default(),
                    non_branded: BrandedSplit::default(),
                    count_percentage: 0.0,
                    volume_percentage: 0.0,
                });
                aggregates.len() - 1
            }
        };

        let agg = &mut aggregates[slot];
        agg.count += 1;
        agg.search_volume += record.search_volume;
        let split = if record.is_branded {
            &mut agg.branded
        } else {
            &mut agg.non_branded
        };
        split.count += 1;
        split.search_volume += record.search_volume;
    }

    let total_count: usize = aggregates.iter().map(|a| a.count).sum();
    let total_volume: u64 = aggregates.iter().map(|a| a.search_volume).sum();
    for agg in &mut aggregates {
        agg.count_percentage = percentage(agg.count as f64, total_count as f64);
        agg.volume_percentage = percentage(agg.search_volume as f64, total_volume as f64);
    }

    aggregates
}

/// Zero-guarded percentage: a zero denominator yields 0.0, never NaN.
pub(crate) fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Sortable columns of the category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryColumn {
    Category,
    Count,
    CountPercentage,
    SearchVolume,
    VolumePercentage,
}

impl SortColumn<CategoryAggregate> for CategoryColumn {
    fn value(&self, row: &CategoryAggregate) -> SortValue {
        match self {
            CategoryColumn::Category => SortValue::Text(row.category.clone()),
            CategoryColumn::Count => SortValue::Number(row.count as f64),
            CategoryColumn::CountPercentage => SortValue::Number(row.count_percentage),
            CategoryColumn::SearchVolume => SortValue::Number(row.search_volume as f64),
            CategoryColumn::VolumePercentage => SortValue::Number(row.volume_percentage),
        }
    }
}

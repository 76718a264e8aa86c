use serde::{Deserialize, Serialize};

use crate::aggregate::category::percentage;
use crate::view::sort::{SortColumn, SortValue};
use crate::voice::buckets::{Metrics, RankBucket};

/// One competitor's share of voice across all rank buckets.
///
/// Percentages are relative to the grand totals over every competitor in
/// the universe, zero-guarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorTotal {
    pub name: String,
    pub metrics: Metrics,
    pub count_percentage: f64,
    pub volume_percentage: f64,
    pub traffic_percentage: f64,
}

/// Column sums of the per-bucket competitor cells, in universe order.
///
/// A universe member with no surviving matches still appears with zero
/// values, so table columns stay stable after filtering.
pub fn compute_competitor_totals(
    buckets: &[RankBucket],
    universe: &[String],
) -> Vec<CompetitorTotal> {
    let mut totals: Vec<CompetitorTotal> = universe
        .iter()
        .map(|name| CompetitorTotal {
            name: name.clone(),
            metrics: Metrics::default(),
            count_percentage: 0.0,
            volume_percentage: 0.0,
            traffic_percentage: 0.0,
        })
        .collect();

    for total in &mut totals {
        for bucket in buckets {
            if let Some(cell) = bucket.competitors.get(&total.name) {
                total.metrics.count += cell.metrics.count;
                total.metrics.search_volume += cell.metrics.search_volume;
                total.metrics.estimated_traffic += cell.metrics.estimated_traffic;
            }
        }
    }

    let grand_count: u64 = totals.iter().map(|t| t.metrics.count).sum();
    let grand_volume: u64 = totals.iter().map(|t| t.metrics.search_volume).sum();
    let grand_traffic: f64 = totals.iter().map(|t| t.metrics.estimated_traffic).sum();

    for total in &mut totals {
        total.count_percentage = percentage(total.metrics.count as f64, grand_count as f64);
        total.volume_percentage =
            percentage(total.metrics.search_volume as f64, grand_volume as f64);
        total.traffic_percentage = percentage(total.metrics.estimated_traffic, grand_traffic);
    }

    totals
}

/// Sortable columns of the competitor totals table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitorColumn {
    Name,
    Count,
    CountPercentage,
    SearchVolume,
    VolumePercentage,
    EstimatedTraffic,
    TrafficPercentage,
}

impl SortColumn<CompetitorTotal> for CompetitorColumn {
    fn value(&self, row: &CompetitorTotal) -> SortValue {
        match self {
            CompetitorColumn::Name => SortValue::Text(row.name.clone()),
            CompetitorColumn::Count => SortValue::Number(row.metrics.count as f64),
            CompetitorColumn::CountPercentage => SortValue::Number(row.count_percentage),
            CompetitorColumn::SearchVolume => {
                SortValue::Number(row.metrics.search_volume as f64)
            }
            CompetitorColumn::VolumePercentage => SortValue::Number(row.volume_percentage),
            CompetitorColumn::EstimatedTraffic => {
                SortValue::Number(row.metrics.estimated_traffic)
            }
            CompetitorColumn::TrafficPercentage => SortValue::Number(row.traffic_percentage),
        }
    }
}

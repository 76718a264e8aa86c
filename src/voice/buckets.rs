use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::category::percentage;
use crate::record::model::KeywordRecord;
use crate::voice::ctr::{ctr_for_rank, MAX_TRACKED_RANK};

/// The three metrics every ranking table carries: keyword count, summed
/// search volume, and CTR-weighted estimated traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub count: u64,
    pub search_volume: u64,
    pub estimated_traffic: f64,
}

/// One competitor's subtotal within a rank bucket, with its share of the
/// bucket-wide totals. Zero bucket totals yield 0.0 percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitorCell {
    pub metrics: Metrics,
    pub count_percentage: f64,
    pub volume_percentage: f64,
    pub traffic_percentage: f64,
}

/// Aggregation unit for one search-result position (1..=20).
///
/// `competitors` holds a cell for every member of the caller-supplied
/// universe, including competitors with no matches at this rank — table
/// columns stay stable across filter changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankBucket {
    pub rank: u32,
    pub total: Metrics,
    pub competitors: BTreeMap<String, CompetitorCell>,
}

/// Populate the 20 rank buckets from the filtered records.
///
/// For each competitor entry with a tracked rank, the entry's keyword counts
/// once, its record's search volume accumulates, and estimated traffic adds
/// `search_volume × CTR(rank)` — for both the named competitor's cell and
/// the bucket total. Ranks outside 1..=20 are skipped.
///
/// `universe` is the authoritative competitor list; the engine never
/// re-derives it from the records it is given.
pub fn compute_rank_buckets(records: &[&KeywordRecord], universe: &[String]) -> Vec<RankBucket> {
    let empty_row: BTreeMap<String, CompetitorCell> = universe
        .iter()
        .map(|name| (name.clone(), CompetitorCell::default()))
        .collect();

    let mut buckets: Vec<RankBucket> = (1..=MAX_TRACKED_RANK)
        .map(|rank| RankBucket {
            rank,
            total: Metrics::default(),
            competitors: empty_row.clone(),
        })
        .collect();

    for record in records {
        for comp in &record.competitors {
            let Some(ctr) = ctr_for_rank(comp.rank) else {
                continue;
            };
            let bucket = &mut buckets[(comp.rank - 1) as usize];
            // Entries naming a competitor outside the universe are skipped
            // entirely, keeping cell sums equal to bucket totals.
            let Some(cell) = bucket.competitors.get_mut(&comp.name) else {
                continue;
            };
            let traffic = record.search_volume as f64 * ctr;

            bucket.total.count += 1;
            bucket.total.search_volume += record.search_volume;
            bucket.total.estimated_traffic += traffic;

            cell.metrics.count += 1;
            cell.metrics.search_volume += record.search_volume;
            cell.metrics.estimated_traffic += traffic;
        }
    }

    for bucket in &mut buckets {
        let total = bucket.total;
        for cell in bucket.competitors.values_mut() {
            cell.count_percentage =
                percentage(cell.metrics.count as f64, total.count as f64);
            cell.volume_percentage =
                percentage(cell.metrics.search_volume as f64, total.search_volume as f64);
            cell.traffic_percentage =
                percentage(cell.metrics.estimated_traffic, total.estimated_traffic);
        }
    }

    buckets
}

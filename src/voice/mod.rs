pub mod buckets;
pub mod ctr;
pub mod totals;

pub use buckets::{compute_rank_buckets, CompetitorCell, Metrics, RankBucket};
pub use ctr::{ctr_for_rank, CTR_BY_POSITION, MAX_TRACKED_RANK};
pub use totals::{compute_competitor_totals, CompetitorColumn, CompetitorTotal};

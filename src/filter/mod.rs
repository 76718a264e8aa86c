pub mod criteria;
pub mod evaluate;

pub use criteria::{parse_min_volume, FilterCriteria, KeywordQuery, RankRange};
pub use evaluate::{filter, matches};

pub mod dataset;
pub mod model;

pub use dataset::{Dataset, DatasetError};
pub use model::{CompetitorEntry, KeywordColumn, KeywordRecord};

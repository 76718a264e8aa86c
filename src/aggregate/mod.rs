pub mod category;

pub use category::{aggregate_by_category, BrandedSplit, CategoryAggregate, CategoryColumn};

pub mod page;
pub mod selection;
pub mod sort;

pub use page::{clamp_page, page_count, paginate};
pub use selection::{selection_stats, SelectionSet, SelectionStats};
pub use sort::{apply_sort, SortColumn, SortConfig, SortDirection, SortValue};

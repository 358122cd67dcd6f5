pub mod criteria;
pub mod pipeline;

pub use criteria::{BedroomBucket, FilterCriteria, PriceBucket, PropertyTypeFilter, SortKey};
pub use pipeline::{apply, matches, sort_listings};

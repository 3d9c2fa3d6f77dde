//! Pure aggregations over evaluation records.
//!
//! Every function takes a slice of records (the whole dataset or a filtered
//! subset) and returns derived values. None of them panic on empty or
//! malformed input.

pub mod facets;
pub mod grouping;
pub mod metrics;

pub use facets::{distinct_values, FacetOptions};
pub use grouping::{
    average_rating_by_concept, unique_user_count_by_area, AreaUserCounts, AreaUsers,
    ConceptAverage, ConceptAverages,
};
pub use metrics::{
    average_rating, format_average, round_to, unique_user_count, DashboardMetrics,
};

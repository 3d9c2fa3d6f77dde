//! Cybersecurity competency dashboard.
//!
//! Loads a static dataset of evaluation records and derives the summary
//! metrics, chart series and paginated table of the dashboard. Drawing is
//! left to a [`Renderer`].

pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dataset;
pub mod formatting;
pub mod io;
pub mod labels;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Error, EvaluationRecord, Facet, Gender, Result};

pub use crate::aggregation::{
    average_rating, average_rating_by_concept, distinct_values, unique_user_count,
    unique_user_count_by_area, AreaUserCounts, AreaUsers, ConceptAverage, ConceptAverages,
    DashboardMetrics, FacetOptions,
};

pub use crate::dataset::{Dataset, LoadReport};

pub use crate::io::{JsonRenderer, OutputFormat, Renderer, TerminalRenderer};

pub use crate::session::{DashboardSession, DashboardSnapshot, SessionOptions};

pub use crate::view::{
    filter, paginate, total_pages, FilterCriteria, PageSize, PageSummary, PaginationState,
    ViewEvent, ViewState,
};

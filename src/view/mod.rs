//! Filter/paginate engine and the mutable view-state driving it.

pub mod events;
pub mod filter;
pub mod pagination;
pub mod state;

pub use events::ViewEvent;
pub use filter::{filter, FilterCriteria};
pub use pagination::{clamp_page, paginate, total_pages, PageSize, PageSummary};
pub use state::{PaginationState, ViewState};

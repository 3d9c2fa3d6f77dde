//! Filter and pagination view-state.
//!
//! `ViewState` owns a handle to the dataset, the current criteria and the
//! pagination settings. The filtered subset is recomputed eagerly whenever
//! the criteria change and kept as indices into the dataset.
//!
//! Transition rules:
//! - any filter change resets the current page to 1
//! - a page size change clamps the current page into the new page range
//! - explicit page requests are clamped to `[1, total_pages]`

use serde::Serialize;
use tracing::debug;

use super::events::ViewEvent;
use super::filter::{non_empty, FilterCriteria};
use super::pagination::{clamp_page, page_range, total_pages, PageSize, PageSummary};
use crate::aggregation::DashboardMetrics;
use crate::core::{EvaluationRecord, Result};
use crate::dataset::Dataset;

/// Rows-per-page and the 1-based current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page_size: PageSize,
    pub current_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            current_page: 1,
        }
    }
}

/// Session view-state over one dataset.
#[derive(Debug, Clone)]
pub struct ViewState {
    dataset: Dataset,
    criteria: FilterCriteria,
    pagination: PaginationState,
    /// Indices into `dataset` of the records passing `criteria`
    filtered_indices: Vec<usize>,
}

impl ViewState {
    /// Start a session with empty criteria and the default page size.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_page_size(dataset, PageSize::default())
    }

    pub fn with_page_size(dataset: Dataset, page_size: PageSize) -> Self {
        let filtered_indices = (0..dataset.len()).collect();
        Self {
            dataset,
            criteria: FilterCriteria::default(),
            pagination: PaginationState {
                page_size,
                current_page: 1,
            },
            filtered_indices,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.pagination.page_size
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.apply_filter();
    }

    /// Select an area; an empty string clears the area filter.
    pub fn set_area(&mut self, area: impl Into<String>) {
        self.criteria.area = non_empty(area.into());
        self.apply_filter();
    }

    /// Select a concept; an empty string clears the concept filter.
    pub fn set_concept(&mut self, concept: impl Into<String>) {
        self.criteria.concept = non_empty(concept.into());
        self.apply_filter();
    }

    /// Replace all criteria at once. Resets to the first page like any
    /// other filter change.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.apply_filter();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pagination.page_size = page_size;
        self.pagination.current_page = clamp_page(self.pagination.current_page, self.total_pages());
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.current_page = clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.pagination.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.pagination.current_page.saturating_sub(1));
    }

    /// Apply a renderer event.
    ///
    /// Only an unsupported page size is rejected; the state is left
    /// unchanged in that case.
    pub fn apply(&mut self, event: ViewEvent) -> Result<()> {
        debug!(event = event.name(), "applying view event");
        match event {
            ViewEvent::SearchChanged(text) => self.set_search_text(text),
            ViewEvent::AreaChanged(area) => self.set_area(area),
            ViewEvent::ConceptChanged(concept) => self.set_concept(concept),
            ViewEvent::PageSizeChanged(size) => self.set_page_size(PageSize::try_from(size)?),
            ViewEvent::PageChanged(page) => self.set_page(page),
            ViewEvent::PreviousPage => self.previous_page(),
            ViewEvent::NextPage => self.next_page(),
        }
        Ok(())
    }

    fn apply_filter(&mut self) {
        self.filtered_indices = self
            .dataset
            .iter()
            .enumerate()
            .filter(|(_, record)| self.criteria.matches(record))
            .map(|(idx, _)| idx)
            .collect();
        self.pagination.current_page = 1;
        debug!(
            matched = self.filtered_indices.len(),
            total = self.dataset.len(),
            "filter applied"
        );
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.pagination.page_size.get())
    }

    /// Records passing the current criteria, in dataset order.
    pub fn filtered_records(&self) -> Vec<&EvaluationRecord> {
        self.filtered_indices
            .iter()
            .filter_map(|&idx| self.dataset.get(idx))
            .collect()
    }

    /// Records on the current page.
    pub fn visible_page(&self) -> Vec<&EvaluationRecord> {
        let range = page_range(
            self.filtered_count(),
            self.pagination.current_page,
            self.pagination.page_size.get(),
        );
        self.filtered_indices[range]
            .iter()
            .filter_map(|&idx| self.dataset.get(idx))
            .collect()
    }

    pub fn page_summary(&self) -> PageSummary {
        PageSummary::new(
            self.filtered_count(),
            self.pagination.current_page,
            self.pagination.page_size.get(),
        )
    }

    /// Summary metrics over the filtered subset.
    pub fn filtered_metrics(&self) -> DashboardMetrics {
        DashboardMetrics::compute(&self.filtered_records())
    }
}

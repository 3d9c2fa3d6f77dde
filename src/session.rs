//! A dashboard session: one dataset, one view-state, and the derived data
//! a renderer draws.
//!
//! Global metrics and facet options depend only on the dataset and are
//! computed once. Everything else is derived from the view-state on demand.

use serde::Serialize;
use tracing::debug;

use crate::aggregation::{
    average_rating_by_concept, unique_user_count_by_area, AreaUserCounts, ConceptAverages,
    DashboardMetrics, FacetOptions,
};
use crate::config::{CyberdashConfig, SummaryScope};
use crate::core::{EvaluationRecord, Result};
use crate::dataset::Dataset;
use crate::io::Renderer;
use crate::view::{FilterCriteria, PageSize, PageSummary, ViewEvent, ViewState};

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub page_size: PageSize,
    pub summary_scope: SummaryScope,
    /// Shown in place of an undefined average
    pub placeholder: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            summary_scope: SummaryScope::default(),
            placeholder: "N/A".to_string(),
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &CyberdashConfig) -> Self {
        Self {
            page_size: config.page_size(),
            summary_scope: config.summary_scope(),
            placeholder: config.placeholder(),
        }
    }
}

/// Everything needed to draw the dashboard once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot<'a> {
    /// Summary cards, over the whole dataset
    pub global_metrics: &'a DashboardMetrics,
    pub filtered_metrics: DashboardMetrics,
    pub concept_chart: ConceptAverages,
    pub area_chart: AreaUserCounts,
    pub facets: &'a FacetOptions,
    pub criteria: &'a FilterCriteria,
    pub page_size: PageSize,
    pub page: Vec<&'a EvaluationRecord>,
    pub summary: PageSummary,
}

#[derive(Debug, Clone)]
pub struct DashboardSession {
    view: ViewState,
    options: SessionOptions,
    global_metrics: DashboardMetrics,
    facets: FacetOptions,
}

impl DashboardSession {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_options(dataset, SessionOptions::default())
    }

    pub fn with_options(dataset: Dataset, options: SessionOptions) -> Self {
        let global_metrics = DashboardMetrics::compute(dataset.records());
        let facets = FacetOptions::from_records(dataset.records());
        debug!(
            records = dataset.len(),
            users = global_metrics.unique_users,
            areas = facets.areas.len(),
            concepts = facets.concepts.len(),
            "session started"
        );
        Self {
            view: ViewState::with_page_size(dataset, options.page_size),
            options,
            global_metrics,
            facets,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn global_metrics(&self) -> &DashboardMetrics {
        &self.global_metrics
    }

    pub fn facets(&self) -> &FacetOptions {
        &self.facets
    }

    /// Apply a renderer event to the view-state.
    pub fn dispatch(&mut self, event: ViewEvent) -> Result<()> {
        self.view.apply(event)
    }

    /// Apply events in order, stopping at the first rejected one.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = ViewEvent>) -> Result<()> {
        events.into_iter().try_for_each(|event| self.dispatch(event))
    }

    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        let filtered = self.view.filtered_records();
        let (concept_chart, area_chart) = match self.options.summary_scope {
            SummaryScope::Dataset => {
                let records = self.view.dataset().records();
                (
                    average_rating_by_concept(records),
                    unique_user_count_by_area(records),
                )
            }
            SummaryScope::Filtered => (
                average_rating_by_concept(&filtered),
                unique_user_count_by_area(&filtered),
            ),
        };

        DashboardSnapshot {
            global_metrics: &self.global_metrics,
            filtered_metrics: self.view.filtered_metrics(),
            concept_chart,
            area_chart,
            facets: &self.facets,
            criteria: self.view.criteria(),
            page_size: self.view.page_size(),
            page: self.view.visible_page(),
            summary: self.view.page_summary(),
        }
    }

    /// Draw the current state, panel by panel.
    pub fn render(&self, renderer: &mut dyn Renderer) -> anyhow::Result<()> {
        let snapshot = self.snapshot();
        let metrics = snapshot.global_metrics;

        renderer.render_header(metrics.total_records)?;
        renderer.render_metrics(
            metrics.unique_users,
            &metrics.average_display(&self.options.placeholder),
            metrics.total_concepts,
        )?;
        renderer.render_concept_chart(snapshot.concept_chart.entries())?;
        renderer.render_area_chart(snapshot.area_chart.entries())?;
        renderer.render_filters(snapshot.criteria, snapshot.facets, snapshot.page_size)?;
        let filtered = &snapshot.filtered_metrics;
        renderer.render_filtered_metrics(
            filtered.unique_users,
            &filtered.average_display(&self.options.placeholder),
            filtered.total_records,
        )?;
        renderer.render_table(&snapshot.page)?;
        renderer.render_pager(&snapshot.summary)?;
        renderer.finish()
    }
}

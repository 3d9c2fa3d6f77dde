use std::io::Write;

use crate::aggregation::{AreaUsers, ConceptAverage, FacetOptions};
use crate::core::EvaluationRecord;
use crate::formatting::Palette;
use crate::view::{FilterCriteria, PageSize, PageSummary};

use super::writers::{JsonRenderer, TerminalRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Drawing capability the dashboard pushes computed data through.
///
/// The four `render_*` calls mirror the dashboard's panels. The remaining
/// hooks have no-op defaults so a renderer only draws what it cares about.
/// Calls arrive in panel order and `finish` is always called last.
pub trait Renderer {
    fn render_header(&mut self, _total_records: usize) -> anyhow::Result<()> {
        Ok(())
    }

    fn render_metrics(
        &mut self,
        unique_users: usize,
        avg_rating: &str,
        total_concepts: usize,
    ) -> anyhow::Result<()>;

    fn render_concept_chart(&mut self, entries: &[ConceptAverage]) -> anyhow::Result<()>;

    fn render_area_chart(&mut self, entries: &[AreaUsers]) -> anyhow::Result<()>;

    /// Current filter selections and the option lists they were picked from.
    fn render_filters(
        &mut self,
        _criteria: &FilterCriteria,
        _options: &FacetOptions,
        _page_size: PageSize,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Size of the filtered subset the table pages through.
    fn render_filtered_metrics(
        &mut self,
        _unique_users: usize,
        _avg_rating: &str,
        _total_records: usize,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    fn render_table(&mut self, page: &[&EvaluationRecord]) -> anyhow::Result<()>;

    fn render_pager(&mut self, _summary: &PageSummary) -> anyhow::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Renderer for `format` writing to `writer`.
pub fn create_renderer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    palette: Palette,
) -> Box<dyn Renderer + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalRenderer::new(writer, palette)),
    }
}

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

use crate::dataset::Dataset;
use crate::formatting::{ColorMode, Palette};
use crate::io::{create_renderer, OutputFormat};
use crate::session::{DashboardSession, SessionOptions};
use crate::view::{PageSize, ViewEvent};

#[derive(Debug, Clone)]
pub struct ShowConfig {
    pub data: PathBuf,
    pub search: Option<String>,
    pub area: Option<String>,
    pub concept: Option<String>,
    pub page: Option<usize>,
    /// Overrides `options.page_size` when set
    pub page_size: Option<PageSize>,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub options: SessionOptions,
}

/// Events equivalent to the requested selections, in the order a user would
/// make them. The page request comes last since filter changes reset it.
pub fn initial_events(config: &ShowConfig) -> Vec<ViewEvent> {
    let filters = [
        config.search.clone().map(ViewEvent::SearchChanged),
        config.area.clone().map(ViewEvent::AreaChanged),
        config.concept.clone().map(ViewEvent::ConceptChanged),
        config.page.map(ViewEvent::PageChanged),
    ];
    filters.into_iter().flatten().collect()
}

pub fn show_dashboard<W: Write>(config: ShowConfig, writer: W) -> Result<()> {
    let (dataset, report) = Dataset::load(&config.data)?;
    if !report.is_clean() {
        warn!(
            malformed = report.malformed,
            "dataset contains malformed records; run `cyberdash validate` for details"
        );
    }

    let mut options = config.options.clone();
    if let Some(page_size) = config.page_size {
        options.page_size = page_size;
    }

    let mut session = DashboardSession::with_options(dataset, options);
    session
        .dispatch_all(initial_events(&config))
        .context("Failed to apply view selections")?;

    let palette = match config.format {
        OutputFormat::Terminal => Palette::new(config.color),
        OutputFormat::Json => Palette::plain(),
    };
    let mut renderer = create_renderer(config.format, writer, palette);
    session.render(renderer.as_mut())
}

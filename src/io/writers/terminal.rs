use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::Write;

use crate::aggregation::{AreaUsers, ConceptAverage, FacetOptions};
use crate::core::EvaluationRecord;
use crate::formatting::Palette;
use crate::io::output::Renderer;
use crate::labels;
use crate::view::{FilterCriteria, PageSize, PageSummary};

const BAR_WIDTH: usize = 30;
const SEPARATOR: &str = "───────────────────────────────────────────";

/// Human-readable dashboard for a terminal.
pub struct TerminalRenderer<W: Write> {
    writer: W,
    palette: Palette,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(writer: W, palette: Palette) -> Self {
        Self { writer, palette }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn section(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.palette.header(title))?;
        writeln!(self.writer, "{}", self.palette.dim(SEPARATOR))?;
        Ok(())
    }

    fn write_bars(&mut self, rows: &[(String, usize, String)]) -> anyhow::Result<()> {
        let label_width = rows
            .iter()
            .map(|(name, _, _)| name.chars().count())
            .max()
            .unwrap_or(0);
        for (name, width, value) in rows {
            let padding = " ".repeat(label_width - name.chars().count());
            writeln!(
                self.writer,
                "  {name}{padding} {} {value}",
                self.palette.success(&"█".repeat(*width))
            )?;
        }
        Ok(())
    }
}

/// Bar length for `value` on a scale where `max` fills the whole width.
/// Non-finite or non-positive values draw no bar.
pub(crate) fn bar_width(value: f64, max: f64) -> usize {
    if !value.is_finite() || value <= 0.0 || !max.is_finite() || max <= 0.0 {
        return 0;
    }
    ((value / max).min(1.0) * BAR_WIDTH as f64).round() as usize
}

fn rating_text(rating: f64) -> String {
    format!("● {rating}")
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_header(&mut self, total_records: usize) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.palette.header(labels::TITLE))?;
        writeln!(
            self.writer,
            "{}",
            self.palette.dim(&labels::subtitle(total_records))
        )?;
        Ok(())
    }

    fn render_metrics(
        &mut self,
        unique_users: usize,
        avg_rating: &str,
        total_concepts: usize,
    ) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        let cards = [
            (labels::UNIQUE_USERS, unique_users.to_string()),
            (labels::AVERAGE_RATING, avg_rating.to_string()),
            (labels::CONCEPTS_EVALUATED, total_concepts.to_string()),
        ];
        for (title, value) in cards {
            writeln!(
                self.writer,
                "  {}: {}",
                self.palette.bold(title),
                self.palette.warning(&value)
            )?;
        }
        Ok(())
    }

    fn render_concept_chart(&mut self, entries: &[ConceptAverage]) -> anyhow::Result<()> {
        self.section(labels::CONCEPT_CHART)?;
        // Ratings live in [0, 1]; larger values still scale to the largest one
        let max = entries
            .iter()
            .map(|e| e.avg_rating)
            .filter(|v| v.is_finite())
            .fold(1.0_f64, f64::max);
        let rows: Vec<_> = entries
            .iter()
            .map(|e| {
                (
                    e.name.clone(),
                    bar_width(e.avg_rating, max),
                    format!("{:.2}", e.avg_rating),
                )
            })
            .collect();
        self.write_bars(&rows)
    }

    fn render_area_chart(&mut self, entries: &[AreaUsers]) -> anyhow::Result<()> {
        self.section(labels::AREA_CHART)?;
        let max = entries.iter().map(|e| e.users).max().unwrap_or(0) as f64;
        let rows: Vec<_> = entries
            .iter()
            .map(|e| {
                (
                    e.name.clone(),
                    bar_width(e.users as f64, max),
                    e.users.to_string(),
                )
            })
            .collect();
        self.write_bars(&rows)
    }

    fn render_filters(
        &mut self,
        criteria: &FilterCriteria,
        options: &FacetOptions,
        page_size: PageSize,
    ) -> anyhow::Result<()> {
        self.section(labels::TABLE_TITLE)?;
        let search = if criteria.search_text.is_empty() {
            self.palette.dim(labels::SEARCH_PLACEHOLDER)
        } else {
            format!("\"{}\"", criteria.search_text)
        };
        let area = criteria.area.as_deref().unwrap_or(labels::ALL_AREAS);
        let concept = criteria.concept.as_deref().unwrap_or(labels::ALL_CONCEPTS);
        writeln!(
            self.writer,
            "  {search} | {area} ({}) | {concept} ({}) | {}",
            options.areas.len(),
            options.concepts.len(),
            labels::page_size_option(page_size.get())
        )?;
        Ok(())
    }

    fn render_filtered_metrics(
        &mut self,
        unique_users: usize,
        avg_rating: &str,
        total_records: usize,
    ) -> anyhow::Result<()> {
        let line = labels::filtered_summary(total_records, unique_users, avg_rating);
        writeln!(self.writer, "  {}", self.palette.dim(&line))?;
        Ok(())
    }

    fn render_table(&mut self, page: &[&EvaluationRecord]) -> anyhow::Result<()> {
        let mut table = Table::new();
        if self.palette.uses_color() {
            table.load_preset(UTF8_FULL).enforce_styling();
        } else {
            table.load_preset(ASCII_FULL).force_no_tty();
        }
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(labels::TABLE_HEADERS.to_vec());

        for record in page {
            let indicator = if record.is_passing() {
                Color::Green
            } else {
                Color::Red
            };
            table.add_row(vec![
                Cell::new(&record.name),
                Cell::new(&record.email),
                Cell::new(record.age),
                Cell::new(record.gender.display_label()),
                Cell::new(&record.area),
                Cell::new(&record.concept),
                Cell::new(rating_text(record.rating)).fg(indicator),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn render_pager(&mut self, summary: &PageSummary) -> anyhow::Result<()> {
        let button = |label: &str, enabled: bool| {
            let text = format!("[{label}]");
            if enabled {
                self.palette.bold(&text)
            } else {
                self.palette.dim(&text)
            }
        };
        let previous = button(labels::PREVIOUS, summary.has_previous);
        let next = button(labels::NEXT, summary.has_next);
        writeln!(
            self.writer,
            "  {}    {previous} {} {next}",
            labels::showing(summary.showing, summary.total),
            labels::page_of(summary.current_page, summary.total_pages)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

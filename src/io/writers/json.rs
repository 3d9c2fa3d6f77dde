use serde_json::{json, Map, Value};
use std::io::Write;

use crate::aggregation::{AreaUsers, ConceptAverage, FacetOptions};
use crate::core::EvaluationRecord;
use crate::io::output::Renderer;
use crate::labels;
use crate::view::{FilterCriteria, PageSize, PageSummary};

/// Collects every panel into one JSON object, written out on `finish`.
pub struct JsonRenderer<W: Write> {
    writer: W,
    document: Map<String, Value>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document: Map::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.document.insert(key.to_string(), value);
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render_header(&mut self, total_records: usize) -> anyhow::Result<()> {
        self.insert("title", json!(labels::TITLE));
        self.insert("totalRecords", json!(total_records));
        Ok(())
    }

    fn render_metrics(
        &mut self,
        unique_users: usize,
        avg_rating: &str,
        total_concepts: usize,
    ) -> anyhow::Result<()> {
        self.insert(
            "metrics",
            json!({
                "uniqueUsers": unique_users,
                "averageRating": avg_rating,
                "totalConcepts": total_concepts,
            }),
        );
        Ok(())
    }

    fn render_concept_chart(&mut self, entries: &[ConceptAverage]) -> anyhow::Result<()> {
        self.insert("conceptChart", serde_json::to_value(entries)?);
        Ok(())
    }

    fn render_area_chart(&mut self, entries: &[AreaUsers]) -> anyhow::Result<()> {
        self.insert("areaChart", serde_json::to_value(entries)?);
        Ok(())
    }

    fn render_filters(
        &mut self,
        criteria: &FilterCriteria,
        options: &FacetOptions,
        page_size: PageSize,
    ) -> anyhow::Result<()> {
        self.insert(
            "filters",
            json!({
                "search": criteria.search_text,
                "area": criteria.area,
                "concept": criteria.concept,
                "pageSize": page_size.get(),
                "areas": options.areas,
                "concepts": options.concepts,
            }),
        );
        Ok(())
    }

    fn render_filtered_metrics(
        &mut self,
        unique_users: usize,
        avg_rating: &str,
        total_records: usize,
    ) -> anyhow::Result<()> {
        self.insert(
            "filteredMetrics",
            json!({
                "uniqueUsers": unique_users,
                "averageRating": avg_rating,
                "totalRecords": total_records,
            }),
        );
        Ok(())
    }

    fn render_table(&mut self, page: &[&EvaluationRecord]) -> anyhow::Result<()> {
        self.insert("records", serde_json::to_value(page)?);
        Ok(())
    }

    fn render_pager(&mut self, summary: &PageSummary) -> anyhow::Result<()> {
        self.insert(
            "pager",
            json!({
                "showing": summary.showing,
                "total": summary.total,
                "currentPage": summary.current_page,
                "totalPages": summary.total_pages,
                "hasPrevious": summary.has_previous,
                "hasNext": summary.has_next,
            }),
        );
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        let document = Value::Object(std::mem::take(&mut self.document));
        let json = serde_json::to_string_pretty(&document)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

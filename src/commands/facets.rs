use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::aggregation::FacetOptions;
use crate::dataset::Dataset;
use crate::formatting::Palette;
use crate::io::OutputFormat;
use crate::labels;

/// Print the area and concept option lists for a dataset.
pub fn list_facets<W: Write>(
    data: &Path,
    format: OutputFormat,
    palette: Palette,
    mut writer: W,
) -> Result<()> {
    let (dataset, _) = Dataset::load(data)?;
    let options = FacetOptions::from_records(dataset.records());

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&options)?;
            writeln!(writer, "{json}")?;
        }
        OutputFormat::Terminal => {
            for (title, values) in [
                (labels::AREAS, &options.areas),
                (labels::CONCEPTS, &options.concepts),
            ] {
                writeln!(writer, "{} ({})", palette.header(title), values.len())?;
                for value in values {
                    writeln!(writer, "  {value}")?;
                }
            }
        }
    }
    Ok(())
}

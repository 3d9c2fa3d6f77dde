use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::dataset::{Dataset, LoadReport};
use crate::formatting::Palette;
use crate::io::OutputFormat;

/// Load a dataset and report its malformed records.
///
/// Fails when any record had a missing or mistyped field.
pub fn validate_dataset<W: Write>(
    data: &Path,
    format: OutputFormat,
    palette: Palette,
    mut writer: W,
) -> Result<()> {
    let (_, report) = Dataset::load(data)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            writeln!(writer, "{json}")?;
        }
        OutputFormat::Terminal => print_report(&report, palette, &mut writer)?,
    }

    if report.is_clean() {
        Ok(())
    } else {
        anyhow::bail!(
            "Validation failed: {} of {} records are malformed",
            report.malformed,
            report.records
        )
    }
}

fn print_report<W: Write>(report: &LoadReport, palette: Palette, writer: &mut W) -> Result<()> {
    let status = if report.is_clean() {
        palette.success("OK")
    } else {
        palette.error("FAILED")
    };
    writeln!(
        writer,
        "{status}: {} records, {} malformed",
        report.records, report.malformed
    )?;
    for issue in &report.issues {
        writeln!(writer, "  {}", palette.warning(&issue.to_string()))?;
    }
    Ok(())
}

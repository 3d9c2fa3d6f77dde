use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::formatting::ColorMode;
use crate::view::PageSize;

/// Root configuration structure for cyberdash
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CyberdashConfig {
    /// Dataset location
    #[serde(default)]
    pub data: Option<DataConfig>,

    /// Initial view-state settings
    #[serde(default)]
    pub view: Option<ViewConfig>,

    /// Display configuration for output formatting
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DataConfig {
    /// Path to the JSON evaluations file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// Rows per page at session start (5, 10 or 20)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    PageSize::default().get()
}

/// Which records feed the concept and area charts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SummaryScope {
    /// Whole dataset, independent of the table filters
    Dataset,
    /// Only the records passing the current filters
    #[default]
    Filtered,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Color output: auto, always or never
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub summary_scope: SummaryScope,

    /// Shown instead of an average when there are no records
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            summary_scope: SummaryScope::default(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_placeholder() -> String {
    "N/A".to_string()
}

impl CyberdashConfig {
    pub fn data_path(&self) -> Option<&PathBuf> {
        self.data.as_ref().and_then(|d| d.path.as_ref())
    }

    /// Configured page size, falling back to the default for unsupported values.
    pub fn page_size(&self) -> PageSize {
        self.view
            .as_ref()
            .and_then(|v| PageSize::try_from(v.page_size).ok())
            .unwrap_or_default()
    }

    pub fn summary_scope(&self) -> SummaryScope {
        self.display
            .as_ref()
            .map(|d| d.summary_scope)
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> String {
        self.display
            .as_ref()
            .map(|d| d.placeholder.clone())
            .unwrap_or_else(default_placeholder)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.display
            .as_ref()
            .map(|d| d.color)
            .unwrap_or_default()
    }
}

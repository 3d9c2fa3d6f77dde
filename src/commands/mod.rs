//! CLI command implementations.
//!
//! Available commands:
//! - **show**: render the dashboard for a dataset
//! - **facets**: list the distinct areas and concepts
//! - **validate**: report malformed records
//! - **init**: write a default configuration file
//!
//! Commands write to any `io::Write` so they can be exercised without a
//! terminal.

pub mod facets;
pub mod init;
pub mod show;
pub mod validate;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::CyberdashConfig;

pub use facets::list_facets;
pub use init::init_config;
pub use show::{show_dashboard, ShowConfig};
pub use validate::validate_dataset;

/// Dataset path from the command line (or `CYBERDASH_DATA`), falling back to
/// the configured one.
pub fn resolve_data_path(arg: Option<PathBuf>, config: &CyberdashConfig) -> Result<PathBuf> {
    arg.or_else(|| config.data_path().cloned()).ok_or_else(|| {
        anyhow::anyhow!(
            "No dataset given. Pass a path, set CYBERDASH_DATA, or set [data] path in .cyberdash.toml"
        )
    })
}

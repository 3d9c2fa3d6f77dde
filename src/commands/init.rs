use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::loader::CONFIG_FILE_NAME;

const DEFAULT_CONFIG: &str = r#"# cyberdash configuration

[data]
# path = "data/evaluations.json"

[view]
# 5, 10 or 20
page_size = 10

[display]
# auto, always or never
color = "auto"
# dataset or filtered
summary_scope = "filtered"
placeholder = "N/A"
"#;

/// Write the default configuration into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

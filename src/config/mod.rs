//! Configuration loaded from `.cyberdash.toml`.

pub mod core;
pub mod loader;

pub use self::core::{CyberdashConfig, DataConfig, DisplayConfig, SummaryScope, ViewConfig};
pub use loader::{load_config, load_config_file, load_config_from, parse_and_validate_config};

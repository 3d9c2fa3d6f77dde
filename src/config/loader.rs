use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CyberdashConfig;
use crate::core::{Error, Result, ResultExt};
use crate::view::PageSize;

/// File name searched for in the current directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".cyberdash.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<CyberdashConfig> {
    let config = toml::from_str::<CyberdashConfig>(contents)?;

    if let Some(view) = &config.view {
        PageSize::try_from(view.page_size)?;
    }

    Ok(config)
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CyberdashConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> CyberdashConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CyberdashConfig::default()
        })
}

/// Load config starting from the current directory.
pub fn load_config() -> CyberdashConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CyberdashConfig::default()
        }
    }
}

/// Load config from an explicit file; errors are returned, not swallowed.
pub fn load_config_file(path: &Path) -> Result<CyberdashConfig> {
    let context = format!("Failed to load {}", path.display());
    read_config_file(path)
        .map_err(Error::from)
        .and_then(|contents| parse_and_validate_config(&contents))
        .context(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::SummaryScope;
    use crate::formatting::ColorMode;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [data]
            path = "data/book.json"

            [view]
            page_size = 20

            [display]
            color = "never"
            summary_scope = "dataset"
            placeholder = "-"
        "#})
        .unwrap();
        assert_eq!(config.data_path(), Some(&PathBuf::from("data/book.json")));
        assert_eq!(config.page_size(), PageSize::Twenty);
        assert_eq!(config.summary_scope(), SummaryScope::Dataset);
        assert_eq!(config.placeholder(), "-");
        assert_eq!(config.color_mode(), ColorMode::Never);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, CyberdashConfig::default());
        assert_eq!(config.page_size(), PageSize::Ten);
        assert_eq!(config.summary_scope(), SummaryScope::Filtered);
        assert_eq!(config.placeholder(), "N/A");
    }

    #[test]
    fn test_rejects_unsupported_page_size() {
        let err = parse_and_validate_config("[view]\npage_size = 15\n").unwrap_err();
        assert!(matches!(err, Error::InvalidPageSize { requested: 15, .. }));
    }

    #[test]
    fn test_rejects_unknown_color() {
        let err = parse_and_validate_config("[display]\ncolor = \"rainbow\"\n").unwrap_err();
        assert!(err.to_string().contains("rainbow"));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        assert!(matches!(
            parse_and_validate_config("[view\n"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_directory_ancestors() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/")
            ]
        );
        assert_eq!(directory_ancestors(PathBuf::from("/a/b/c"), 2).count(), 2);
    }

    #[test]
    fn test_load_config_from_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[view]\npage_size = 5\n").unwrap();
        let nested = temp.path().join("reports").join("2024");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.page_size(), PageSize::Five);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[view]\npage_size = 3\n").unwrap();
        let config = load_config_from(temp.path().to_path_buf());
        assert_eq!(config.page_size(), PageSize::Ten);
    }

    #[test]
    fn test_load_config_file_errors_name_the_file() {
        let err = load_config_file(Path::new("/nonexistent/.cyberdash.toml")).unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        assert!(err
            .to_string()
            .starts_with("Failed to load /nonexistent/.cyberdash.toml: "));

        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[view]\npage_size = 7\n").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported page size 7"));
    }
}

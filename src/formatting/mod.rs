use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;
use std::str::FromStr;

use crate::core::Error;

/// Whether dashboard output is styled. Read from `[display] color`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal that is not `dumb`
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(Error::Configuration(format!(
                "unknown color mode '{other}' (expected auto, always or never)"
            ))),
        }
    }
}

impl ColorMode {
    /// Apply environment conventions on top of this mode.
    ///
    /// `NO_COLOR` and `CLICOLOR=0` turn colors off; `CLICOLOR_FORCE=1` turns
    /// them on and wins over both.
    pub fn with_env_overrides(self) -> Self {
        let mut mode = self;
        if env::var("NO_COLOR").is_ok() {
            mode = Self::Never;
        }
        if env::var("CLICOLOR").is_ok_and(|val| val == "0") {
            mode = Self::Never;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|val| val == "1") {
            mode = Self::Always;
        }
        mode
    }

    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                env::var("TERM").map_or(true, |term| term != "dumb")
                    && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Styles terminal output, or leaves it plain when colors are disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        let color = mode.enabled();
        colored::control::set_override(color);
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn uses_color(&self) -> bool {
        self.color
    }

    pub fn header(&self, text: &str) -> String {
        self.styled(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.styled(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.styled(text, |t| t.dimmed())
    }

    pub fn success(&self, text: &str) -> String {
        self.styled(text, |t| t.green())
    }

    pub fn error(&self, text: &str) -> String {
        self.styled(text, |t| t.red())
    }

    pub fn warning(&self, text: &str) -> String {
        self.styled(text, |t| t.yellow())
    }

    fn styled(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::formatting::ColorMode;
use crate::view::PageSize;

#[derive(Parser, Debug)]
#[command(name = "cyberdash")]
#[command(about = "Cybersecurity competency dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .cyberdash.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output: auto, always or never (overrides the config file)
    #[arg(long, global = true, value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the dashboard for a dataset
    Show {
        /// JSON file with the evaluation records
        #[arg(env = "CYBERDASH_DATA")]
        data: Option<PathBuf>,

        /// Case-insensitive search on name or email
        #[arg(short, long)]
        search: Option<String>,

        /// Only show records from this area
        #[arg(long)]
        area: Option<String>,

        /// Only show records for this concept
        #[arg(long)]
        concept: Option<String>,

        /// Page to show (clamped to the available pages)
        #[arg(short, long)]
        page: Option<usize>,

        /// Rows per page: 5, 10 or 20
        #[arg(long = "page-size", value_parser = parse_page_size)]
        page_size: Option<PageSize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// List the distinct areas and concepts in a dataset
    Facets {
        #[arg(env = "CYBERDASH_DATA")]
        data: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Check a dataset for malformed records
    Validate {
        #[arg(env = "CYBERDASH_DATA")]
        data: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Write a default .cyberdash.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    s.parse::<PageSize>().map_err(|e| e.to_string())
}

fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    s.parse::<ColorMode>().map_err(|e| e.to_string())
}

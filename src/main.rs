use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cyberdash::cli::{Cli, Commands};
use cyberdash::commands::{self, ShowConfig};
use cyberdash::config::{self, CyberdashConfig};
use cyberdash::formatting::{ColorMode, Palette};
use cyberdash::session::SessionOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let config = match &cli.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show {
            data,
            search,
            area,
            concept,
            page,
            page_size,
            format,
            plain,
        } => {
            let show_config = ShowConfig {
                data: commands::resolve_data_path(data, &config)?,
                search,
                area,
                concept,
                page,
                page_size,
                format: format.into(),
                color: color_mode(&config, cli.color, plain),
                options: SessionOptions::from_config(&config),
            };
            commands::show_dashboard(show_config, &mut out)?;
        }
        Commands::Facets { data, format } => {
            let data = commands::resolve_data_path(data, &config)?;
            commands::list_facets(&data, format.into(), palette(&config, cli.color), &mut out)?;
        }
        Commands::Validate { data, format } => {
            let data = commands::resolve_data_path(data, &config)?;
            commands::validate_dataset(&data, format.into(), palette(&config, cli.color), &mut out)?;
        }
        Commands::Init { force } => {
            let path = commands::init_config(&std::env::current_dir()?, force)?;
            writeln!(out, "Created {}", path.display())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn color_mode(config: &CyberdashConfig, requested: Option<ColorMode>, plain: bool) -> ColorMode {
    if plain {
        ColorMode::Never
    } else {
        requested
            .unwrap_or_else(|| config.color_mode())
            .with_env_overrides()
    }
}

fn palette(config: &CyberdashConfig, requested: Option<ColorMode>) -> Palette {
    Palette::new(color_mode(config, requested, false))
}

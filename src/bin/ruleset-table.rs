//! Render the sample ruleset catalog as HTML or JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cgt_ruleset_table::rulesets::sample_catalog;
use cgt_ruleset_table::{
    render_catalog, HtmlSerializer, JsonSerializer, TableConfig, TableSerializer,
};

/// Output formats
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ruleset-table", version, about = "Render the combinatorial game ruleset table")]
struct Cli {
    /// JSON table config; defaults are used for missing fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<TableConfig> {
    let Some(path) = path else {
        return Ok(TableConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = TableConfig::from_json_str(&json)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    debug!(path = %path.display(), "Loaded table config");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = load_config(cli.config.as_ref())?;
    let catalog = sample_catalog().context("sample catalog is invalid")?;
    let table = render_catalog(&catalog, &config);

    let serializer: Box<dyn TableSerializer> = match cli.format {
        Format::Html => Box::new(HtmlSerializer::new()),
        Format::Json => Box::new(JsonSerializer::pretty()),
    };
    let output = serializer.serialize(&table)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), format = serializer.name(), "Wrote table");
        }
        None => {
            io::stdout()
                .write_all(output.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

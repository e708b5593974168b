//! `mjson`: check, pretty-print and load JSON files from the command line.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use minijson::{JsonValue, ParseOptions, ProjectConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mjson", about = "Check, format and load JSON documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a JSON file and print it back out
    Format {
        path: PathBuf,
        /// Spaces per nesting level; 0 prints everything on one line
        #[arg(long, default_value_t = 0)]
        indent: usize,
        /// Ignore anything after the first value
        #[arg(long)]
        lenient: bool,
        #[arg(long, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Report whether a JSON file parses
    Check { path: PathBuf },

    /// Load a project configuration file and print its fields
    Config { path: PathBuf },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_document(
    path: &Path,
    options: &ParseOptions,
) -> Result<JsonValue, Box<dyn Error + Send + Sync>> {
    let source = fs::read_to_string(path)
        .map_err(|err| format!("could not read {}: {err}", path.display()))?;

    let value = minijson::Parser::parse_with_options(&source, options)
        .map_err(|err| format!("{}: {err}", path.display()))?;

    Ok(value)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error + Send + Sync>> {
    match cli.command {
        Command::Format {
            path,
            indent,
            lenient,
            max_depth,
        } => {
            let options = ParseOptions::default()
                .with_max_depth(max_depth)
                .allow_trailing(lenient);
            let value = read_document(&path, &options)?;
            println!("{}", value.to_string_indented(indent));
        }
        Command::Check { path } => {
            let value = read_document(&path, &ParseOptions::default())?;
            info!(path = %path.display(), kind = %value.kind(), "valid JSON");
        }
        Command::Config { path } => {
            let config = ProjectConfig::load(&path)?;
            println!("name: {}", config.name.as_deref().unwrap_or("-"));
            println!("sources: {}", config.sources.unwrap_or_default().join(", "));
            println!("resources: {}", config.resources.unwrap_or_default().join(", "));
            println!("output_dir: {}", config.output_dir.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

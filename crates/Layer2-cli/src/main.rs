//! Visitor registry CLI - Main entry point

mod cli;
mod notice;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use visitor_foundation::{DeletePolicy, ThemeName, VisitorConfig, VisitorRegistry};

/// Visitor registry - register, list, search and delete visitors from the terminal
#[derive(Parser, Debug)]
#[command(name = "visitors")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Delete policy for duplicate names (all, first)
    #[arg(long, global = true)]
    delete_policy: Option<DeletePolicy>,

    /// TUI theme (dark, light)
    #[arg(long, global = true)]
    theme: Option<ThemeName>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive registration form (default)
    Tui,
    /// Run commands line by line from a file or stdin
    Batch {
        /// Command file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to ./.visitors/config.json
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration (global + project)
    let (mut config, config_warning) = match VisitorConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (
            VisitorConfig::default(),
            Some(format!("Failed to load config: {}", e)),
        ),
    };
    if let Some(policy) = args.delete_policy {
        config.delete_policy = Some(policy);
    }
    if let Some(theme) = args.theme {
        config.theme = Some(theme);
    }

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let log_file = config.log_file()?;
            init_logging(args.debug, Some(&log_file))?;
            if let Some(warning) = &config_warning {
                tracing::warn!("{}", warning);
            }
            tui::run(&config, config_warning).await?;
        }
        Command::Batch { file } => {
            init_logging(args.debug, None)?;
            if let Some(warning) = &config_warning {
                tracing::warn!("{}", warning);
            }
            run_batch_cmd(&config, file.as_deref())?;
        }
        Command::Config { init } => {
            init_logging(args.debug, None)?;
            if let Some(warning) = &config_warning {
                tracing::warn!("{}", warning);
            }
            config_cmd(&config, init)?;
        }
    }

    Ok(())
}

/// Initialize logging
///
/// TUI 모드는 화면을 깨뜨리지 않도록 파일에, 그 외에는 stderr에 기록한다.
fn init_logging(debug: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let log_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
    Ok(())
}

/// Run batch commands
fn run_batch_cmd(config: &VisitorConfig, file: Option<&Path>) -> anyhow::Result<()> {
    let mut registry = VisitorRegistry::new().with_delete_policy(config.delete_policy());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match file {
        Some(path) => {
            let input = std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            cli::run_batch(BufReader::new(input), &mut registry, &mut out)?;
        }
        None => {
            let stdin = std::io::stdin();
            cli::run_batch(stdin.lock(), &mut registry, &mut out)?;
        }
    }

    tracing::debug!(visitors = registry.len(), "Batch finished");
    Ok(())
}

/// Show (and optionally save) the effective configuration
fn config_cmd(config: &VisitorConfig, init: bool) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();

    let mut effective = config.clone();
    effective.delete_policy = Some(config.delete_policy());
    effective.theme = Some(config.theme());
    writeln!(out, "{}", serde_json::to_string_pretty(&effective)?)?;

    if init {
        effective.save_project()?;
        writeln!(out, "\n✓ Saved to ./.visitors/config.json")?;
    }
    Ok(())
}

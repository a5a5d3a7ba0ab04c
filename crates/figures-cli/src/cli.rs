//! Command-line interface for the figures utility
//!
//! Provides an interactive shell for building figures plus a few
//! non-interactive helpers.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::FiguresApp;
use figures::core::logging::init_logging;
use figures::prelude::*;

/// Figures - create, inspect and save geometric figures
#[derive(Parser)]
#[command(name = "figures")]
#[command(about = "Create triangles, circles and rectangles from random, stdin or file input")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load figures and open the interactive menu (default)
    Run {
        /// Input method, skipping the prompt: random | stdin | file <PATH>
        #[arg(short, long, num_args = 1.., value_name = "METHOD")]
        input: Vec<String>,

        /// Number of figures to create, skipping the prompt
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the random source (falls back to FIGURES_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show supported figure kinds
    Kinds {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Validate a file of figure descriptions
    Validate {
        /// File to validate
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Serialize)]
struct KindInfo {
    name: &'static str,
    keyword: &'static str,
    arity: usize,
}

/// Main CLI application
#[derive(Default)]
pub struct FiguresCli;

impl FiguresCli {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("FIGURES_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format_str = std::env::var("FIGURES_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Figures v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Some(Commands::Run { input, count, seed }) => {
                self.run_command(&input, count, seed, cli.verbose)
            }
            None => self.run_command(&[], None, None, cli.verbose),
            Some(Commands::Kinds { json }) => self.kinds_command(json, &mut io::stdout().lock()),
            Some(Commands::Validate { input }) => {
                self.validate_command(input, &mut io::stdout().lock())
            }
        }
    }

    /// Handle the run command
    fn run_command(
        &self,
        input: &[String],
        count: Option<usize>,
        seed: Option<u64>,
        verbose: bool,
    ) -> Result<()> {
        let seed = match seed {
            Some(seed) => Some(seed),
            None => Self::env_seed()?,
        };

        let prompts = verbose || crossterm::tty::IsTty::is_tty(&io::stdin());
        let mut app = FiguresApp::new(io::stdin().lock(), io::stdout().lock())
            .with_prompts(prompts)
            .with_seed(seed);

        app.run(input, count)
    }

    fn env_seed() -> Result<Option<u64>> {
        match std::env::var("FIGURES_SEED") {
            Ok(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| anyhow!("Invalid FIGURES_SEED '{}': {}", value, e)),
            Err(_) => Ok(None),
        }
    }

    /// Handle the kinds command
    fn kinds_command<W: Write>(&self, json: bool, out: &mut W) -> Result<()> {
        let kinds: Vec<KindInfo> = FigureKind::ALL
            .iter()
            .map(|kind| KindInfo {
                name: kind.name(),
                keyword: kind.keyword(),
                arity: kind.arity(),
            })
            .collect();

        if json {
            let listing = serde_json::json!({
                "supported_kinds": kinds,
                "total": kinds.len(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        } else {
            writeln!(out, "Supported figure kinds:")?;
            for kind in &kinds {
                writeln!(
                    out,
                    "  {:<10} - {} parameter(s)",
                    kind.keyword, kind.arity
                )?;
            }
            writeln!(out)?;
            writeln!(out, "Total: {} figure kinds supported", kinds.len())?;
        }

        Ok(())
    }

    /// Handle the validate command
    fn validate_command<W: Write>(&self, input: PathBuf, out: &mut W) -> Result<()> {
        let mut source = InputMethod::File(input).into_source(io::empty(), None)?;

        let mut count = 0;
        loop {
            match source.create() {
                Ok(Some(figure)) => {
                    writeln!(out, "{}", figure)?;
                    count += 1;
                }
                Ok(None) => break,
                Err(e) => {
                    writeln!(out, "✗ Invalid figure #{}: {}", count, e)?;
                    return Err(e.into());
                }
            }
        }

        writeln!(out, "✓ {} valid figures", count)?;
        Ok(())
    }
}

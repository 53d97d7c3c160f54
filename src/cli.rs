// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - truncate <message> <k>: word-aware truncation
// - majority <n> <ints>: element occurring more than n times
// - strict-majority <ints>: element occurring in more than half the list
// - config --show|--path|--reset|--edit: configuration management

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use drills::config::{Config, OutputFormat, VERSION};
use drills::majority::{parse_numbers, strict_majority, try_majority_element, TieBreak};
use drills::truncate::truncate_with_outcome;
use drills::{error, logging};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing_appender::non_blocking::WorkerGuard;

/// Word-aware message truncation and threshold element counting
#[derive(Parser)]
#[command(name = "drills")]
#[command(version = VERSION)]
#[command(about = "Word-aware truncation and majority counting", long_about = None)]
pub struct Cli {
    /// Print results as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.config/drills/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Truncate MESSAGE to at most K characters, cutting on a word boundary
    Truncate {
        /// Message to truncate
        #[arg(allow_hyphen_values = true)]
        message: String,

        /// Maximum number of characters to keep
        #[arg(allow_negative_numbers = true)]
        k: i64,
    },

    /// Print an element occurring more than N times, or `none`
    Majority {
        /// Exclusive minimum occurrence count
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Comma-separated integers, e.g. 1,1,2
        #[arg(allow_hyphen_values = true)]
        numbers: String,

        /// Which element wins when several qualify (overrides config)
        #[arg(long, value_parser = ["smallest", "first-seen"])]
        tie_break: Option<String>,
    },

    /// Print an element occurring in more than half of the list, or `none`
    StrictMajority {
        /// Comma-separated integers, e.g. 1,1,2
        #[arg(allow_hyphen_values = true)]
        numbers: String,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Skip the overwrite confirmation for --reset
        #[arg(long, requires = "reset")]
        force: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let explicit = cli.config.as_deref();

    match cli.command {
        Commands::Truncate { message, k } => {
            let (_, format, _log_guard) = prepare(explicit, cli.json)?;
            handle_truncate(&message, k, format)
        }
        Commands::Majority {
            n,
            numbers,
            tie_break,
        } => {
            let (config, format, _log_guard) = prepare(explicit, cli.json)?;
            let tie_break = tie_break
                .map(|s| TieBreak::from_str(&s))
                .unwrap_or(config.majority.tie_break);
            handle_majority(n, &numbers, tie_break, format)
        }
        Commands::StrictMajority { numbers } => {
            let (_, format, _log_guard) = prepare(explicit, cli.json)?;
            handle_strict_majority(&numbers, format)
        }
        // Config management must work even when the current file is broken,
        // so it does not go through prepare()
        Commands::Config {
            show,
            reset,
            force,
            edit,
            path,
        } => {
            let config_path = resolve_config_path(explicit)?;
            if path {
                println!("{}", config_path.display());
                Ok(())
            } else if show {
                handle_config_show(explicit, &config_path)
            } else if reset {
                handle_config_reset(&config_path, force)
            } else if edit {
                handle_config_edit(&config_path)
            } else {
                // No flag provided, show help
                println!("Usage: drills config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults (--force skips the prompt)");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    }
}

/// Load configuration and start logging for a drill command.
///
/// The returned guard flushes file logs when dropped, so callers hold it
/// until the command finishes.
fn prepare(
    explicit: Option<&Path>,
    json: bool,
) -> Result<(Config, OutputFormat, Option<WorkerGuard>)> {
    let config = Config::load(explicit)?;
    let guard = logging::init(&config.logging);
    tracing::debug!(?config, "configuration loaded");

    let format = if json {
        OutputFormat::Json
    } else {
        config.output
    };
    Ok((config, format, guard))
}

/// Exit code for a failed run: 2 for invalid arguments, 1 otherwise
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<drills::Error>())
        .map(drills::Error::exit_code)
        .unwrap_or(1)
}

fn handle_truncate(message: &str, k: i64, format: OutputFormat) -> Result<()> {
    let budget = error::non_negative("k", k)?;
    let truncation = truncate_with_outcome(message, budget);

    match format {
        OutputFormat::Plain => println!("{}", truncation.text),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "message": message,
                "k": budget,
                "result": truncation.text,
                "cut": truncation.cut,
            })
        ),
    }
    Ok(())
}

fn handle_majority(
    n: i64,
    numbers: &str,
    tie_break: TieBreak,
    format: OutputFormat,
) -> Result<()> {
    let numbers = parse_numbers(numbers)?;
    let element = try_majority_element(&numbers, n, tie_break)?;

    match format {
        OutputFormat::Plain => print_element(element),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "threshold": n,
                "tie_break": tie_break,
                "element": element,
            })
        ),
    }
    Ok(())
}

fn handle_strict_majority(numbers: &str, format: OutputFormat) -> Result<()> {
    let numbers = parse_numbers(numbers)?;
    let element = strict_majority(&numbers);

    match format {
        OutputFormat::Plain => print_element(element),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "threshold": numbers.len() / 2,
                "element": element,
            })
        ),
    }
    Ok(())
}

fn print_element(element: Option<i64>) {
    match element {
        Some(value) => println!("{}", value),
        None => println!("none"),
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path().context("could not determine config path"),
    }
}

fn handle_config_show(explicit: Option<&Path>, config_path: &Path) -> Result<()> {
    let config = Config::load(explicit)?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if config_path.exists() {
        println!("# Source: {}", config_path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset(path: &Path, force: bool) -> Result<()> {
    // Confirm if file exists
    if path.exists() && !force {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default().save_to(path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit(path: &Path) -> Result<()> {
    if Config::ensure_config_exists(path)? {
        println!("Created new config file: {}", path.display());
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .with_context(|| {
            format!(
                "failed to launch editor '{}' (set $EDITOR to your preferred editor)",
                editor
            )
        })?;

    if !status.success() {
        anyhow::bail!("editor exited with status: {}", status);
    }
    Ok(())
}

//! scicalc - command-line host for the sci-calc engine
//!
//! Runs single operations, lists the operation catalog, or starts an
//! interactive session with a persistent memory register.

mod config;
mod format;
mod repl;
mod session;

use crate::config::Settings;
use crate::session::Session;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sci_calc::{Category, Operation, Outcome};
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scicalc")]
#[command(about = "Scientific calculator engine host")]
#[command(long_about = "Scientific calculator engine host

Commands:
  run     Invoke one operation on a fresh engine
  list    Show the operation catalog
  repl    Interactive session (memory and last result persist)

Examples:
  scicalc run add 2 3                   # 5
  scicalc run sqrt -- -1                # Error (NaN)
  scicalc --degrees run sin 30          # 0.5
  scicalc run factorial 171 --raw       # inf
  scicalc list --category memory

Domain errors are never failures: they print as 'Error' (or NaN/inf with --raw).")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Interpret trig inputs and inverse-trig outputs in degrees
    #[arg(short, long, global = true)]
    degrees: bool,

    /// Decimal places shown after the point (0-17)
    #[arg(short, long, global = true)]
    precision: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke one operation on a fresh engine
    Run {
        /// Operation name or alias (e.g. add, squareRoot, sqrt, m+)
        operation: String,

        /// Numeric arguments
        #[arg(allow_negative_numbers = true)]
        args: Vec<f64>,

        /// Print a JSON object with the result and engine state
        #[arg(long)]
        json: bool,

        /// Show NaN/inf instead of 'Error'
        #[arg(long)]
        raw: bool,
    },

    /// Show the operation catalog
    List {
        /// Only show one category
        #[arg(long)]
        category: Option<Category>,
    },

    /// Interactive session
    Repl,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply_overrides(cli.degrees, cli.no_color, cli.precision)?;
    debug!(?settings, "settings loaded");

    if !settings.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Run {
            operation,
            args,
            json,
            raw,
        } => run_once(Session::new(settings), &operation, &args, json, raw),
        Commands::List { category } => {
            print_catalog(category);
            Ok(())
        },
        Commands::Repl => repl::run_repl(Session::new(settings)),
    }
}

fn run_once(mut session: Session, name: &str, args: &[f64], json: bool, raw: bool) -> Result<()> {
    let op: Operation = name.parse()?;
    let outcome = session
        .invoke(op, args)
        .with_context(|| format!("Failed to run '{}'", name))?;

    if json {
        let snapshot = session.calculator().snapshot();
        let result = outcome.value().map(|v| json_number(v, raw));
        let report = json!({
            "operation": op,
            "args": args,
            "result": result,
            "last_result": json_number(snapshot.last_result, raw),
            "memory": json_number(snapshot.memory, raw),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        Outcome::Value(v) => println!("{}", session.format(v, raw)),
        Outcome::Unit => {
            let memory = session.calculator().memory_recall();
            println!("memory = {}", session.format(memory, raw));
        },
    }
    Ok(())
}

/// JSON has no NaN/inf; sentinels become their label string
fn json_number(value: f64, raw: bool) -> serde_json::Value {
    if value.is_finite() {
        json!(value)
    } else {
        json!(format::sentinel_label(value, raw))
    }
}

pub(crate) fn print_catalog(category: Option<Category>) {
    println!(
        "{:<20} {:<6} {:<14} {}",
        "OPERATION".bold(),
        "ARGS".bold(),
        "CATEGORY".bold(),
        "ALIASES".bold()
    );
    for op in Operation::ALL
        .into_iter()
        .filter(|op| category.map_or(true, |c| op.category() == c))
    {
        println!(
            "{:<20} {:<6} {:<14} {}",
            op.name().bright_cyan(),
            op.arity(),
            op.category(),
            op.aliases().join(", ")
        );
    }
}

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "formgate")]
#[command(version, about = "Validate form records against declarative field rules", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record file
    Check {
        /// Path to a JSON object of field -> value
        record: PathBuf,

        /// Rule override file (defaults to ./formgate.toml when present)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the effective rule table
    Rules {
        /// Rule override file (defaults to ./formgate.toml when present)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Run a single checker against one value
    Value {
        /// Rule name (email, phone, password, date, postalCode, creditCard, json)
        rule: String,

        /// Value to check
        value: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored
    Text,
    /// Machine-readable JSON
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Execute command
    let passed = match cli.command {
        Commands::Check {
            record,
            rules,
            format,
        } => commands::check::execute(&record, rules.as_deref(), format)?,
        Commands::Rules { rules, format } => {
            commands::rules::execute(rules.as_deref(), format)?;
            true
        }
        Commands::Value { rule, value } => commands::value::execute(&rule, &value)?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

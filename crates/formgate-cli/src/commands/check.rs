use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use formgate::{InputRecord, ValidationResult, Validator};
use tracing::info;

use super::load_overrides;
use crate::OutputFormat;

/// Validate the record stored at `record_path`; returns whether it passed
pub fn execute(record_path: &Path, rules: Option<&Path>, format: OutputFormat) -> Result<bool> {
    let overrides = load_overrides(rules)?;

    let content = fs::read_to_string(record_path)
        .with_context(|| format!("Failed to read record file: {:?}", record_path))?;
    let record = InputRecord::from_json(&content)
        .with_context(|| format!("Failed to parse record file: {:?}", record_path))?;
    info!(fields = record.len(), "record loaded from {:?}", record_path);

    let overrides = (!overrides.is_empty()).then_some(&overrides);
    let result = Validator::builtin()
        .evaluate(&record, overrides)
        .context("Rule configuration cannot be dispatched")?;

    match format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }

    Ok(result.is_valid())
}

fn print_text(result: &ValidationResult) {
    if result.is_valid() {
        println!("{} {}", "✓".green().bold(), "All fields are valid".green());
        return;
    }

    let count = result.field_errors().len();
    let noun = if count == 1 { "error" } else { "errors" };
    println!("{} {}", "✗".red().bold(), format!("{count} {noun}").red());

    for error in result.field_errors() {
        println!("  {} {}: {}", "•".red(), error.field.bold(), error.message);
    }
}

fn render_json(result: &ValidationResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize validation result")
}

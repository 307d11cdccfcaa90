use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use formgate::{RuleTable, Validator};

use super::load_overrides;
use crate::OutputFormat;

/// Print the default rule table merged with any overrides
pub fn execute(rules: Option<&Path>, format: OutputFormat) -> Result<()> {
    let overrides = load_overrides(rules)?;
    let table = Validator::builtin().effective_rules(Some(&overrides));

    match format {
        OutputFormat::Text => print_text(&table),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&*table).context("Failed to serialize rule table")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn print_text(table: &RuleTable) {
    println!("{}", "Effective rules:".bold());

    for (field, rule) in table.iter() {
        let policy = if rule.required {
            "required".yellow()
        } else {
            "optional".dimmed()
        };
        println!(
            "  {:<16} {:<12} {:<10} label: {}",
            field.cyan(),
            rule.rule.to_string(),
            policy,
            rule.display_label(field)
        );
        if let Some(message) = rule.message.as_deref() {
            println!("  {:<16} message: {}", "", message);
        }
    }
}

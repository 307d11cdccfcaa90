use anyhow::{Context, Result};
use colored::Colorize;
use formgate::{default_message, RuleId, RuleRegistry};

/// Run the checker for `rule` on `value`; returns whether it passed
pub fn execute(rule: &str, value: &str) -> Result<bool> {
    let rule: RuleId = rule.parse().context("Cannot check value")?;
    let checker = RuleRegistry::shared().resolve(rule)?;

    let passed = checker(value);
    if passed {
        println!("{} {:?} is a valid {}", "✓".green().bold(), value, rule);
    } else {
        println!("{} {}", "✗".red().bold(), default_message(rule));
    }

    Ok(passed)
}

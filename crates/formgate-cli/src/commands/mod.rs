pub mod check;
pub mod rules;
pub mod value;

use std::path::Path;

use anyhow::{Context, Result};
use formgate::{Config, RuleTable};
use tracing::info;

/// Override table from `path`, or from ./formgate.toml when no path is given
///
/// An explicitly named file has to exist; the default file is optional.
pub fn load_overrides(path: Option<&Path>) -> Result<RuleTable> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Rule file not found: {:?}", path);
            }
            info!("loading rule overrides from {:?}", path);
            Config::load(path)?
        }
        None => Config::load_default()?,
    };

    let table = config
        .rule_table()
        .context("Invalid rule override configuration")?;
    info!(fields = table.len(), "rule overrides loaded");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_rule_file_must_exist() {
        let err = load_overrides(Some(Path::new("does/not/exist/rules.toml"))).unwrap_err();
        assert!(err.to_string().contains("Rule file not found"));
    }

    #[test]
    fn test_without_rule_file_overrides_are_empty() {
        // no formgate.toml next to the crate manifest
        let table = load_overrides(None).unwrap();
        assert!(table.is_empty());
    }
}

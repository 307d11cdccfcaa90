// File: src/config.rs
// Purpose: Rule override configuration parsed from formgate.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::rule::{FieldRule, RuleId};
use crate::table::RuleTable;

/// File read by [`Config::load_default`]
pub const DEFAULT_CONFIG_FILE: &str = "formgate.toml";

/// Override configuration
///
/// ```toml
/// [[fields]]
/// name = "nickname"
/// rule = "email"
/// required = true
/// label = "Contact address"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// One `[[fields]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,

    /// Rule name, camelCase or snake_case
    pub rule: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub label: Option<String>,
}

impl FieldConfig {
    fn to_field_rule(&self) -> Result<FieldRule, ConfigError> {
        let rule: RuleId = self.rule.parse()?;
        Ok(FieldRule {
            required: self.required,
            rule,
            message: self.message.clone(),
            label: self.label.clone(),
        })
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, there is nothing to override
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./formgate.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text; blank text is the default config
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Override table described by this configuration, in file order
    pub fn rule_table(&self) -> Result<RuleTable, ConfigError> {
        let mut seen = HashSet::new();
        let mut table = RuleTable::new();

        for field in &self.fields {
            if field.name.is_empty() {
                return Err(ConfigError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::DuplicateField(field.name.clone()));
            }
            table.insert(field.name.clone(), field.to_field_rule()?);
        }

        Ok(table)
    }
}

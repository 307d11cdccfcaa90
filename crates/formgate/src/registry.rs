// File: src/registry.rs
// Purpose: Rule -> checker bindings and the default rule table

use std::collections::BTreeMap;
use std::fmt;

use formgate_checks::{
    is_valid_credit_card, is_valid_date, is_valid_email, is_valid_json, is_valid_password,
    is_valid_phone, is_valid_postal_code, Checker,
};
use once_cell::sync::Lazy;

use crate::error::ConfigError;
use crate::rule::{FieldRule, RuleId};
use crate::table::RuleTable;

static SHARED: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::builtin);

/// Binds every [`RuleId`] to a checker and owns the default rule table
///
/// A registry is read-only once built and can be shared freely between
/// threads.
#[derive(Clone)]
pub struct RuleRegistry {
    checkers: BTreeMap<RuleId, Checker>,
    defaults: RuleTable,
}

impl RuleRegistry {
    /// Registry with every built-in checker and the user form default table
    pub fn builtin() -> Self {
        let checkers = RuleId::ALL
            .iter()
            .map(|rule| (*rule, builtin_checker(*rule)))
            .collect();

        Self {
            checkers,
            defaults: user_form_rules(),
        }
    }

    /// Process-wide built-in registry, built on first use
    pub fn shared() -> &'static RuleRegistry {
        &SHARED
    }

    /// Registry with no bindings and an empty default table
    pub fn empty() -> Self {
        Self {
            checkers: BTreeMap::new(),
            defaults: RuleTable::new(),
        }
    }

    /// Bind (or rebind) the checker used for `rule`
    pub fn bind(mut self, rule: RuleId, checker: Checker) -> Self {
        self.checkers.insert(rule, checker);
        self
    }

    /// Replace the default rule table
    pub fn with_default_table(mut self, defaults: RuleTable) -> Self {
        self.defaults = defaults;
        self
    }

    /// Checker bound to `rule`
    pub fn resolve(&self, rule: RuleId) -> Result<Checker, ConfigError> {
        self.checkers
            .get(&rule)
            .copied()
            .ok_or(ConfigError::UnboundRule(rule))
    }

    /// Checker for a rule given by name
    pub fn resolve_name(&self, name: &str) -> Result<Checker, ConfigError> {
        self.resolve(name.parse()?)
    }

    /// Borrow the default rule table
    pub fn default_rules(&self) -> &RuleTable {
        &self.defaults
    }

    /// Copy of the default rule table; changing it does not affect the registry
    pub fn default_rule_table(&self) -> RuleTable {
        self.defaults.clone()
    }

    /// Rules that have a checker bound
    pub fn bound_rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.checkers.keys().copied()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.checkers.keys().collect::<Vec<_>>())
            .field("defaults", &self.defaults)
            .finish()
    }
}

fn builtin_checker(rule: RuleId) -> Checker {
    match rule {
        RuleId::Email => is_valid_email,
        RuleId::Phone => is_valid_phone,
        RuleId::Password => is_valid_password,
        RuleId::Date => is_valid_date,
        RuleId::PostalCode => is_valid_postal_code,
        RuleId::CreditCard => is_valid_credit_card,
        RuleId::Json => is_valid_json,
    }
}

/// Default table for user registration / profile forms
fn user_form_rules() -> RuleTable {
    RuleTable::new()
        .with("email", FieldRule::required(RuleId::Email))
        .with("phone", FieldRule::optional(RuleId::Phone))
        .with("password", FieldRule::required(RuleId::Password))
        .with("birthDate", FieldRule::optional(RuleId::Date))
        .with("postalCode", FieldRule::optional(RuleId::PostalCode))
}

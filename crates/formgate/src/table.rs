// File: src/table.rs
// Purpose: Ordered field -> rule mapping and override merging

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::rule::FieldRule;

/// Ordered mapping from field name to [`FieldRule`]
///
/// Declaration order is evaluation order, and therefore error order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    entries: Vec<(String, FieldRule)>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.insert(field, rule);
        self
    }

    /// Set the rule for `field`
    ///
    /// An existing entry is replaced in place and returned; a new field is
    /// appended at the end.
    pub fn insert(&mut self, field: impl Into<String>, rule: FieldRule) -> Option<FieldRule> {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => Some(std::mem::replace(existing, rule)),
            None => {
                self.entries.push((field, rule));
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.entries.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// This table with `overrides` applied
    ///
    /// Same-named entries are replaced whole and keep their position;
    /// override-only fields follow in the order they were supplied.
    pub fn merged(&self, overrides: &RuleTable) -> RuleTable {
        let mut merged = self.clone();
        for (field, rule) in overrides.iter() {
            merged.insert(field, rule.clone());
        }
        merged
    }
}

impl<K: Into<String>> FromIterator<(K, FieldRule)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (K, FieldRule)>>(iter: I) -> Self {
        let mut table = RuleTable::new();
        for (field, rule) in iter {
            table.insert(field, rule);
        }
        table
    }
}

impl Serialize for RuleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, rule) in &self.entries {
            map.serialize_entry(field, rule)?;
        }
        map.end()
    }
}

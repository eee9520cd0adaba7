use crate::error::StyleError;
use indexmap::IndexMap;

/// Ordered property name to rendered value mapping.
///
/// Re-setting a name keeps its original position; new names are appended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyStore {
    entries: IndexMap<String, String>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Result<&str, StyleError> {
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| StyleError::UndefinedAttribute(name.to_string()))
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.entries.get(name).map(String::as_str).unwrap_or(default)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(name.to_string(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

//! Tag snapshot input model.
//!
//! A snapshot is the point-in-time view of PLC tags the caller supplies
//! before each run: raw textual values plus declared types, optionally an
//! address and a quality marker. The analyzer never talks to the PLC; this
//! is its only window into live data.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::value::DataType;

/// One tag's known state.
#[derive(Debug, Clone, Deserialize)]
pub struct TagState {
    /// Raw value text as reported by the backend.
    pub value: String,
    /// Declared type name, decoded into [`DataType`].
    #[serde(deserialize_with = "data_type_from_name")]
    pub data_type: DataType,
    /// Optional PLC address (`%DB1.DBX0.0` and the like).
    #[serde(default)]
    pub address: Option<String>,
    /// Optional quality marker (`GOOD`, `STALE`, ...).
    #[serde(default)]
    pub quality: Option<String>,
}

fn data_type_from_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DataType, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(DataType::parse(&name))
}

/// Point-in-time mapping tag name -> state, in backend order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TagSnapshot {
    entries: IndexMap<String, TagState>,
}

impl TagSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a tag entry.
    pub fn insert(&mut self, name: impl Into<String>, state: TagState) {
        self.entries.insert(name.into(), state);
    }

    /// Number of tags in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the snapshot has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in backend order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagState)> {
        self.entries.iter().map(|(name, state)| (name.as_str(), state))
    }

    /// Resolves a candidate name: exact match first, then the lower-case
    /// form, then the upper-case form. Returns the snapshot's own spelling
    /// of the name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<(&str, &TagState)> {
        if let Some((key, state)) = self.entries.get_key_value(name) {
            return Some((key.as_str(), state));
        }
        let lower = name.to_lowercase();
        if let Some((key, state)) = self.entries.get_key_value(lower.as_str()) {
            return Some((key.as_str(), state));
        }
        let upper = name.to_uppercase();
        if let Some((key, state)) = self.entries.get_key_value(upper.as_str()) {
            return Some((key.as_str(), state));
        }
        None
    }
}

/// Convenience constructor used by tests and the CLI examples.
impl TagState {
    /// Builds a state from raw value text and a declared type name.
    #[must_use]
    pub fn of(value: &str, data_type: &str) -> Self {
        Self {
            value: value.to_owned(),
            data_type: DataType::parse(data_type),
            address: None,
            quality: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_exact_then_lower_then_upper() {
        let mut snapshot = TagSnapshot::new();
        snapshot.insert("motor", TagState::of("TRUE", "BOOL"));
        snapshot.insert("MOTOR", TagState::of("FALSE", "BOOL"));

        let (name, state) = snapshot.resolve("motor").unwrap();
        assert_eq!(name, "motor");
        assert_eq!(state.value, "TRUE");

        // No exact match for "Motor": lower-case form wins over upper-case.
        let (name, _) = snapshot.resolve("Motor").unwrap();
        assert_eq!(name, "motor");

        assert!(snapshot.resolve("bomba").is_none());
    }

    #[test]
    fn deserializes_from_json_map() {
        let json = r#"{
            "Sensor_1": { "value": "TRUE", "data_type": "BOOL", "quality": "GOOD" },
            "Nivel": { "value": "7.5", "data_type": "REAL", "address": "%DB3.DBD12" }
        }"#;
        let snapshot: TagSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.len(), 2);
        let (_, state) = snapshot.resolve("Nivel").unwrap();
        assert_eq!(state.data_type, DataType::Real);
        assert_eq!(state.address.as_deref(), Some("%DB3.DBD12"));
        // The ladder tries exact, lower-case, and upper-case spellings
        // only; an all-caps candidate cannot reach "Nivel".
        assert!(snapshot.resolve("NIVEL").is_none());
    }
}

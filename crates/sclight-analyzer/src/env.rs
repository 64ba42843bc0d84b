//! Local variable environment for one analysis run.
//!
//! Bindings are seeded from the tag snapshot (origin `Cache`) and
//! overwritten or created as assignments execute (origin `Computed`).
//! Names are unique case-insensitively; last write wins. The environment
//! lives inside the per-call run context and is discarded when the run
//! ends, so two concurrent runs never share state.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::snapshot::TagSnapshot;
use crate::value::{decode_raw, DataType, InferredType, Value};

/// Where a binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingOrigin {
    /// Seeded from the tag snapshot.
    Cache,
    /// Produced by an executed assignment.
    Computed,
}

/// Type information carried by a binding.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingType {
    /// Declared PLC type (cache bindings).
    Declared(DataType),
    /// Type inferred from a computed value.
    Inferred(InferredType),
}

impl BindingType {
    /// Label used in the narrative results block.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            BindingType::Declared(ty) => ty.name(),
            BindingType::Inferred(ty) => ty.label(),
        }
    }
}

/// One name resolvable during evaluation.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Binding name as first written.
    pub name: SmolStr,
    /// Current value.
    pub value: Value,
    /// Declared or inferred type.
    pub ty: BindingType,
    /// Cache or computed.
    pub origin: BindingOrigin,
}

/// Name -> binding map with case-insensitive lookup.
#[derive(Debug, Default)]
pub struct LocalEnv {
    bindings: IndexMap<SmolStr, Binding>,
    folded: FxHashMap<String, SmolStr>,
}

impl LocalEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one binding per snapshot entry, decoding the raw value by its
    /// declared type.
    #[must_use]
    pub fn seeded(snapshot: &TagSnapshot) -> Self {
        let mut env = Self::new();
        for (name, state) in snapshot.iter() {
            let value = decode_raw(&state.value, &state.data_type);
            env.insert(
                name,
                value,
                BindingType::Declared(state.data_type.clone()),
                BindingOrigin::Cache,
            );
        }
        env
    }

    /// Creates or overwrites a binding. Names collide case-insensitively;
    /// an overwrite keeps the map position and spelling of the first write.
    pub fn insert(&mut self, name: &str, value: Value, ty: BindingType, origin: BindingOrigin) {
        if let Some(key) = self.resolve_key(name) {
            if let Some(binding) = self.bindings.get_mut(&key) {
                binding.value = value;
                binding.ty = ty;
                binding.origin = origin;
            }
            return;
        }
        let key = SmolStr::new(name);
        self.folded.insert(name.to_lowercase(), key.clone());
        self.bindings.insert(
            key.clone(),
            Binding {
                name: key,
                value,
                ty,
                origin,
            },
        );
    }

    fn resolve_key(&self, name: &str) -> Option<SmolStr> {
        if self.bindings.contains_key(name) {
            return Some(SmolStr::new(name));
        }
        self.folded.get(&name.to_lowercase()).cloned()
    }

    /// Looks a name up, case-insensitively with exact-match preference.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding);
        }
        let key = self.folded.get(&name.to_lowercase())?;
        self.bindings.get(key)
    }

    /// Value of a name during evaluation.
    ///
    /// An unresolved name evaluates to numeric 0 without raising a
    /// diagnostic. This mirrors the reference behavior and keeps
    /// half-populated snapshots usable; it is a deliberate default, not an
    /// error path.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Value {
        self.lookup(name)
            .map_or(Value::Number(0.0), |binding| binding.value.clone())
    }

    /// Bindings produced by assignments, in first-write order.
    pub fn computed(&self) -> impl Iterator<Item = &Binding> {
        self.bindings
            .values()
            .filter(|binding| binding.origin == BindingOrigin::Computed)
    }

    /// All bindings, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::TagState;

    fn snapshot() -> TagSnapshot {
        let mut snapshot = TagSnapshot::new();
        snapshot.insert("Sensor_1", TagState::of("TRUE", "BOOL"));
        snapshot.insert("Contagem", TagState::of("12", "INT"));
        snapshot
    }

    #[test]
    fn seeding_decodes_by_declared_type() {
        let env = LocalEnv::seeded(&snapshot());
        assert_eq!(env.value_of("Sensor_1"), Value::Bool(true));
        assert_eq!(env.value_of("Contagem"), Value::Number(12.0));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let env = LocalEnv::seeded(&snapshot());
        assert_eq!(env.value_of("sensor_1"), Value::Bool(true));
        assert_eq!(env.value_of("SENSOR_1"), Value::Bool(true));
    }

    #[test]
    fn unresolved_name_defaults_to_zero() {
        let env = LocalEnv::new();
        assert_eq!(env.value_of("fantasma"), Value::Number(0.0));
    }

    #[test]
    fn computed_overwrites_cache_binding() {
        let mut env = LocalEnv::seeded(&snapshot());
        env.insert(
            "CONTAGEM",
            Value::Number(99.0),
            BindingType::Inferred(InferredType::Int),
            BindingOrigin::Computed,
        );
        assert_eq!(env.value_of("Contagem"), Value::Number(99.0));
        let computed: Vec<_> = env.computed().collect();
        assert_eq!(computed.len(), 1);
        // Spelling of the first write is kept.
        assert_eq!(computed[0].name, "Contagem");
    }
}

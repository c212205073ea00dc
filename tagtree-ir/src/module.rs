//! Module specifications describing one import.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One import: a module path with an optional default binding and a set of
/// named bindings.
///
/// Named bindings live in a [`BTreeSet`] so they always iterate in sorted
/// order, whatever order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSpec {
    /// The module path, e.g. `react` or `$/utils/state`.
    pub lib: String,
    /// The default-imported binding. An empty string counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Named bindings.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub rest: BTreeSet<String>,
}

impl ModuleSpec {
    pub fn new(lib: impl Into<String>) -> Self {
        Self {
            lib: lib.into(),
            ..Self::default()
        }
    }

    /// Set the default binding.
    pub fn default_binding(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Add a named binding.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.rest.insert(name.into());
        self
    }

    /// The default binding, if present and non-empty.
    pub fn default_name(&self) -> Option<&str> {
        self.default.as_deref().filter(|name| !name.is_empty())
    }
}

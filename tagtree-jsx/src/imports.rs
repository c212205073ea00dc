//! Import statement formatting and collection.

use indexmap::IndexMap;
use tagtree_ir::ModuleSpec;

/// Format a module specification as a single import statement.
///
/// Exactly one of four shapes is produced, depending on whether the spec
/// has a default binding and named bindings. Named bindings are always
/// sorted. No semicolon or trailing newline is added.
///
/// ```
/// use tagtree_ir::ModuleSpec;
/// use tagtree_jsx::format_import;
///
/// let spec = ModuleSpec::new("x").default_binding("Foo").named("b").named("a");
/// assert_eq!(format_import(&spec), "import Foo, { a, b } from \"x\"");
/// ```
pub fn format_import(spec: &ModuleSpec) -> String {
    let named = spec
        .rest
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    match (spec.default_name(), spec.rest.is_empty()) {
        (Some(default), false) => {
            format!("import {}, {{ {} }} from \"{}\"", default, named, spec.lib)
        }
        (Some(default), true) => format!("import {} from \"{}\"", default, spec.lib),
        (None, false) => format!("import {{ {} }} from \"{}\"", named, spec.lib),
        (None, true) => format!("import \"{}\"", spec.lib),
    }
}

/// Tracks imports and merges them per module.
///
/// Modules keep their first-seen order for deterministic output. Named
/// bindings for the same module are unioned. A module imported with two
/// different default bindings keeps one statement per default.
///
/// # Example
///
/// ```
/// use tagtree_ir::ModuleSpec;
/// use tagtree_jsx::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add(ModuleSpec::new("react").named("useState"));
/// imports.add(ModuleSpec::new("react").default_binding("React").named("useEffect"));
/// imports.add(ModuleSpec::new("./styles.css"));
///
/// assert_eq!(
///     imports.render_lines(),
///     [
///         "import React, { useEffect, useState } from \"react\"",
///         "import \"./styles.css\"",
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> merged specs (more than one only for conflicting defaults)
    modules: IndexMap<String, Vec<ModuleSpec>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module specification, merging it with earlier ones for the
    /// same module.
    pub fn add(&mut self, spec: ModuleSpec) {
        let spec = ModuleSpec {
            default: spec.default_name().map(str::to_string),
            ..spec
        };
        let entries = self.modules.entry(spec.lib.clone()).or_default();

        let compatible = entries.iter_mut().find(|existing| {
            match (existing.default_name(), spec.default_name()) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
        });

        match compatible {
            Some(existing) => {
                if existing.default.is_none() {
                    existing.default = spec.default;
                }
                existing.rest.extend(spec.rest);
            }
            None => entries.push(spec),
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for spec in other.modules.values().flatten() {
            self.add(spec.clone());
        }
    }

    /// Iterate over the merged specs in first-seen module order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleSpec> {
        self.modules.values().flatten()
    }

    /// Render one import statement per merged spec.
    pub fn render_lines(&self) -> Vec<String> {
        self.iter().map(format_import).collect()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }
}

impl Extend<ModuleSpec> for ImportCollector {
    fn extend<T: IntoIterator<Item = ModuleSpec>>(&mut self, iter: T) {
        for spec in iter {
            self.add(spec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_named_import_sorted() {
        let spec = ModuleSpec::new("x")
            .default_binding("Foo")
            .named("b")
            .named("a");
        assert_eq!(format_import(&spec), "import Foo, { a, b } from \"x\"");
    }

    #[test]
    fn test_default_only_import() {
        let spec = ModuleSpec::new("./Button").default_binding("Button");
        assert_eq!(format_import(&spec), "import Button from \"./Button\"");
    }

    #[test]
    fn test_named_only_import() {
        let spec = ModuleSpec::new("react").named("useRef").named("useEffect");
        assert_eq!(
            format_import(&spec),
            "import { useEffect, useRef } from \"react\""
        );
    }

    #[test]
    fn test_side_effect_import() {
        let spec = ModuleSpec::new("./polyfill");
        assert_eq!(format_import(&spec), "import \"./polyfill\"");
    }

    #[test]
    fn test_empty_default_is_ignored() {
        let spec = ModuleSpec::new("x").default_binding("").named("a");
        assert_eq!(format_import(&spec), "import { a } from \"x\"");
    }

    #[test]
    fn test_collector_merges_named_bindings() {
        let mut imports = ImportCollector::new();
        imports.add(ModuleSpec::new("react").named("useRef"));
        imports.add(ModuleSpec::new("react").named("useEffect"));
        imports.add(ModuleSpec::new("react").named("useRef"));

        assert_eq!(imports.len(), 1);
        assert_eq!(
            imports.render_lines(),
            ["import { useEffect, useRef } from \"react\""]
        );
    }

    #[test]
    fn test_collector_keeps_conflicting_defaults_apart() {
        let mut imports = ImportCollector::new();
        imports.add(ModuleSpec::new("lib").default_binding("A"));
        imports.add(ModuleSpec::new("lib").default_binding("B").named("x"));
        imports.add(ModuleSpec::new("lib").named("y"));

        assert_eq!(
            imports.render_lines(),
            [
                "import A, { y } from \"lib\"",
                "import B, { x } from \"lib\"",
            ]
        );
    }

    #[test]
    fn test_collector_preserves_module_order() {
        let mut imports = ImportCollector::new();
        imports.extend([
            ModuleSpec::new("zeta").named("z"),
            ModuleSpec::new("alpha").named("a"),
        ]);

        let libs: Vec<&str> = imports.iter().map(|spec| spec.lib.as_str()).collect();
        assert_eq!(libs, ["zeta", "alpha"]);
    }

    #[test]
    fn test_merge() {
        let mut a = ImportCollector::new();
        a.add(ModuleSpec::new("react").named("useState"));
        let mut b = ImportCollector::new();
        b.add(ModuleSpec::new("react").named("useMemo"));
        b.add(ModuleSpec::new("./x.css"));

        a.merge(&b);
        assert_eq!(
            a.render_lines(),
            [
                "import { useMemo, useState } from \"react\"",
                "import \"./x.css\"",
            ]
        );
    }
}

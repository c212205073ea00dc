//! Page composition: a rendered tree wrapped in a component module.
//!
//! A page is laid out in three sections, separated by blank lines:
//! imports, hooks, and the `return` of the rendered tree, all inside an
//! `export default function`.

use serde::Deserialize;
use serde_json::Value;
use tagtree_codegen::{CodeBuilder, naming::is_identifier};
use tagtree_ir::{ModuleSpec, Node};
use tracing::debug;

use crate::{ImportCollector, NodePath, RenderError, Renderer, Result, classify};

/// The module hooks used by the autofocus binding come from.
const REACT: &str = "react";

/// A component module built around one node tree.
///
/// # Example
///
/// ```
/// use tagtree_ir::{ModuleSpec, Tag};
/// use tagtree_jsx::{Page, Renderer};
///
/// let page = Page::new("Hello", Tag::new("h1").child("Hello"))
///     .import(ModuleSpec::new("./hello.css"));
///
/// let source = page.render(&Renderer::default())?;
/// assert_eq!(
///     source,
///     "import \"./hello.css\"\n\
///      \n\
///      export default function Hello() {\n\
///      \x20 return (\n\
///      \x20   <h1>\n\
///      \x20     Hello\n\
///      \x20   </h1>\n\
///      \x20 )\n\
///      }\n"
/// );
/// # Ok::<(), tagtree_jsx::RenderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Page {
    name: String,
    imports: ImportCollector,
    hooks: Vec<String>,
    root: Node,
}

impl Page {
    pub const DEFAULT_NAME: &'static str = "Page";

    pub fn new(name: impl Into<String>, root: impl Into<Node>) -> Self {
        Self {
            name: name.into(),
            imports: ImportCollector::new(),
            hooks: Vec::new(),
            root: root.into(),
        }
    }

    /// Add an import.
    pub fn import(mut self, spec: ModuleSpec) -> Self {
        self.imports.add(spec);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, specs: impl IntoIterator<Item = ModuleSpec>) -> Self {
        self.imports.extend(specs);
        self
    }

    /// Add a hook line, emitted verbatim at the top of the function body.
    pub fn hook(mut self, hook: impl Into<String>) -> Self {
        self.hooks.push(hook.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the page. The output ends with a newline.
    pub fn render(&self, renderer: &Renderer) -> Result<String> {
        if !is_identifier(&self.name) {
            return Err(RenderError::malformed(
                &NodePath::root(),
                format!("`{}` is not a valid component name", self.name),
            ));
        }

        // Render first: it enforces the depth limit the tree queries rely on.
        let body = renderer.render(&self.root, 0)?;
        let autofocus = self.root.uses_autofocus();
        let mut imports = ImportCollector::new();
        if autofocus {
            imports.add(ModuleSpec::new(REACT).named("useEffect").named("useRef"));
        }
        imports.merge(&self.imports);

        debug!(
            name = %self.name,
            imports = imports.len(),
            hooks = self.hooks.len(),
            autofocus,
            "composing page"
        );

        let has_hooks = autofocus || !self.hooks.is_empty();

        let source = renderer
            .builder()
            .each(imports.render_lines(), |b, line| b.line(&line))
            .when(!imports.is_empty(), CodeBuilder::blank)
            .block_with_close(
                &format!("export default function {}() {{", self.name),
                "}",
                |b| {
                    b.when(autofocus, |b| b.text(&focus_hook(renderer)))
                        .each(&self.hooks, |b, hook| b.text(hook))
                        .when(has_hooks, CodeBuilder::blank)
                        .block_with_close("return (", ")", |b| b.text(&body))
                },
            )
            .build();
        Ok(source)
    }
}

/// The ref declaration and effect that focus the autofocus element.
fn focus_hook(renderer: &Renderer) -> String {
    let focus_ref = &renderer.options().focus_ref;
    renderer
        .builder()
        .line(&format!("const {} = useRef(null)", focus_ref))
        .block_with_close("useEffect(() => {", "})", |b| {
            b.block_with_close(&format!("if ({}.current) {{", focus_ref), "}", |b| {
                b.line(&format!("{}.current.focus();", focus_ref))
            })
        })
        .finish()
}

/// A page as it appears in a JSON document.
///
/// ```json
/// {
///   "name": "Counter",
///   "imports": [{"lib": "react", "rest": ["useState"]}],
///   "hooks": ["const [count, setCount] = useState(0)"],
///   "root": {"name": "p", "children": ["{count}"]}
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub imports: Vec<ModuleSpec>,
    #[serde(default)]
    pub hooks: Vec<String>,
    pub root: Value,
}

impl PageSpec {
    /// Classify the root and build the page. `fallback_name` is used when
    /// the document does not name the component.
    pub fn into_page(self, fallback_name: &str, max_depth: usize) -> Result<Page> {
        let root = classify(&self.root, max_depth)?;
        let name = self.name.unwrap_or_else(|| fallback_name.to_string());
        let page = self
            .hooks
            .into_iter()
            .fold(Page::new(name, root).imports(self.imports), Page::hook);
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tagtree_ir::Tag;

    use super::*;
    use crate::RenderOptions;

    #[test]
    fn test_page_without_imports_or_hooks() {
        let page = Page::new("Empty", Tag::new("br"));
        let out = page.render(&Renderer::default()).unwrap();
        assert_eq!(
            out,
            "export default function Empty() {\n  return (\n    <br/>\n  )\n}\n"
        );
    }

    #[test]
    fn test_autofocus_adds_hook_and_imports() {
        let page = Page::new("Search", Tag::new("input").autofocus())
            .import(ModuleSpec::new("react").named("useState"));
        let out = page.render(&Renderer::default()).unwrap();
        let expected = [
            "import { useEffect, useRef, useState } from \"react\"",
            "",
            "export default function Search() {",
            "  const focusRef = useRef(null)",
            "  useEffect(() => {",
            "    if (focusRef.current) {",
            "      focusRef.current.focus();",
            "    }",
            "  })",
            "",
            "  return (",
            "    <input ref={focusRef}/>",
            "  )",
            "}",
            "",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_focus_hook_uses_configured_ref() {
        let renderer = Renderer::new(RenderOptions::default().focus_ref("inputRef"));
        let out = Page::new("P", Tag::new("input").autofocus())
            .render(&renderer)
            .unwrap();
        assert!(out.contains("const inputRef = useRef(null)"));
        assert!(out.contains("<input ref={inputRef}/>"));
    }

    #[test]
    fn test_hooks_follow_focus_hook() {
        let page = Page::new("P", Tag::new("input").autofocus())
            .hook("const [v, setV] = useState(\"\")");
        let out = page.render(&Renderer::default()).unwrap();
        let focus = out.find("const focusRef").unwrap();
        let user = out.find("const [v, setV]").unwrap();
        assert!(focus < user);
        assert!(out.contains("  const [v, setV] = useState(\"\")\n\n  return (\n"));
    }

    #[test]
    fn test_no_react_import_without_autofocus() {
        let out = Page::new("P", Tag::new("p").child("x"))
            .render(&Renderer::default())
            .unwrap();
        assert!(!out.contains("import"));
        assert!(!out.contains("useRef"));
    }

    #[test]
    fn test_invalid_component_name() {
        let err = Page::new("my page", Tag::new("p"))
            .render(&Renderer::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::MalformedNode { .. }));
    }

    #[test]
    fn test_render_errors_propagate() {
        let err = Page::new("P", Tag::new("bad name"))
            .render(&Renderer::default())
            .unwrap_err();
        assert_eq!(err.path().to_string(), "$");
    }

    #[test]
    fn test_deep_tree_fails_with_depth_error() {
        let root = (0..64).fold(Node::from(Tag::new("input").autofocus()), |node, _| {
            Tag::new("div").child(node).into()
        });
        let renderer = Renderer::new(RenderOptions::default().max_depth(16));
        let err = Page::new("P", root).render(&renderer).unwrap_err();
        assert!(matches!(err, RenderError::DepthExceeded { limit: 16, .. }));
    }

    #[test]
    fn test_page_spec_from_json() {
        let spec: PageSpec = serde_json::from_value(json!({
            "imports": [{"lib": "react", "rest": ["useState"]}],
            "hooks": ["const [n, setN] = useState(0)"],
            "root": {"name": "p", "children": ["{n}"]}
        }))
        .unwrap();
        let page = spec.into_page(Page::DEFAULT_NAME, 64).unwrap();
        assert_eq!(page.name(), "Page");

        let out = page.render(&Renderer::default()).unwrap();
        assert!(out.starts_with("import { useState } from \"react\"\n\n"));
        assert!(out.contains("  const [n, setN] = useState(0)\n"));
    }

    #[test]
    fn test_page_spec_rejects_unknown_fields() {
        let result: std::result::Result<PageSpec, _> =
            serde_json::from_value(json!({"root": "x", "title": "nope"}));
        assert!(result.is_err());
    }
}

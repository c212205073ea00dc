//! The recursive JSX renderer.
//!
//! [`Renderer::render`] dispatches on the node variant; each node kind has
//! its own renderer which calls back into the dispatcher for its children
//! and branches. Sub-nodes are always rendered at indentation zero and then
//! shifted into place by the parent, so a node's text never depends on how
//! deep it sits in the tree.

mod conditional;
mod iterable;
mod switch;
mod tag;

use serde_json::Value;
use tagtree_codegen::{CodeBuilder, Indent};
use tagtree_ir::Node;
use tracing::{debug, instrument, trace};

use crate::{NodePath, RenderError, Result, classify};

/// Options controlling how nodes are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// One indentation level.
    pub indent: Indent,
    /// The binding autofocus tags attach to (`ref={focusRef}`).
    pub focus_ref: String,
    /// Maximum nesting depth below the root node.
    pub max_depth: usize,
}

impl RenderOptions {
    pub const DEFAULT_FOCUS_REF: &'static str = "focusRef";
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn focus_ref(mut self, focus_ref: impl Into<String>) -> Self {
        self.focus_ref = focus_ref.into();
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Indent::JSX,
            focus_ref: Self::DEFAULT_FOCUS_REF.to_string(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Where a node's text ends up, which decides how expressions are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    /// A JavaScript expression: the root, a branch, a return value or a
    /// mapped template.
    Expression,
    /// Directly among a tag's children, where expressions need braces.
    Child,
}

/// Renders node trees to JSX.
///
/// A renderer holds only its options, so one instance can be shared across
/// threads and reused for any number of trees.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a node and its subtree, indented by `indent_width` levels.
    ///
    /// The result has no trailing newline.
    #[instrument(level = "debug", skip_all, fields(indent_width = indent_width))]
    pub fn render(&self, node: &Node, indent_width: usize) -> Result<String> {
        let text = self
            .render_node(node, &NodePath::root(), Position::Expression)
            .inspect_err(|err| debug!(%err, "render failed"))?;
        Ok(self.options.indent.apply(&text, indent_width))
    }

    /// Classify a JSON value (see [`classify`]) and render it.
    pub fn render_value(&self, value: &Value, indent_width: usize) -> Result<String> {
        let node = classify(value, self.options.max_depth)
            .inspect_err(|err| debug!(%err, "classification failed"))?;
        self.render(&node, indent_width)
    }

    pub(crate) fn render_node(
        &self,
        node: &Node,
        path: &NodePath,
        position: Position,
    ) -> Result<String> {
        trace!(%path, kind = %node.kind(), "rendering node");
        match node {
            Node::Leaf(text) => Ok(text.clone()),
            Node::Iterable(iterable) => self.render_iterable(iterable, path),
            Node::Match(node) => self.render_match(node, path, position),
            Node::Conditional(node) => self.render_conditional(node, path, position),
            Node::Tag(tag) => self.render_tag(tag, path),
            Node::SelfClosingTag(tag) => self.render_self_closing(tag, path),
        }
    }

    /// The path of a sub-node, checked against the depth limit.
    pub(crate) fn descend(&self, path: &NodePath, segment: impl Into<String>) -> Result<NodePath> {
        let child = path.child(segment);
        if child.depth() > self.options.max_depth {
            return Err(RenderError::DepthExceeded {
                path: child,
                limit: self.options.max_depth,
            });
        }
        Ok(child)
    }

    pub(crate) fn builder(&self) -> CodeBuilder {
        CodeBuilder::new(self.options.indent)
    }
}

/// Text usable where an expression is required; empty output becomes `null`.
pub(crate) fn expression_or_null(text: &str) -> &str {
    if text.is_empty() { "null" } else { text }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tagtree_ir::Tag;

    use super::*;

    #[test]
    fn test_leaf_is_verbatim() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render(&Node::leaf("hi"), 0).unwrap(), "hi");
        assert_eq!(renderer.render(&Node::leaf(""), 0).unwrap(), "");
    }

    #[test]
    fn test_leaf_is_indented() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render(&Node::leaf("hi"), 2).unwrap(), "    hi");
        assert_eq!(
            renderer.render(&Node::leaf("a\nb"), 1).unwrap(),
            "  a\n  b"
        );
    }

    #[test]
    fn test_tab_indent_option() {
        let renderer = Renderer::new(RenderOptions::default().indent(Indent::Tab));
        let node: Node = Tag::new("p").child("x").into();
        assert_eq!(renderer.render(&node, 1).unwrap(), "\t<p>\n\t\tx\n\t</p>");
    }

    #[test]
    fn test_render_value() {
        let renderer = Renderer::default();
        let out = renderer
            .render_value(
                &json!({"name": "div", "props": ["className=\"a\""], "children": ["hi"]}),
                0,
            )
            .unwrap();
        assert_eq!(out, "<div className=\"a\">\n  hi\n</div>");
    }

    #[test]
    fn test_render_value_scalar() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render_value(&json!(7), 1).unwrap(), "  7");
    }

    #[test]
    fn test_depth_limit_applies_to_typed_trees() {
        let renderer = Renderer::new(RenderOptions::default().max_depth(1));
        let shallow: Node = Tag::new("a").child("x").into();
        let deep: Node = Tag::new("a").child(Tag::new("b").child("x")).into();

        assert!(renderer.render(&shallow, 0).is_ok());
        let err = renderer.render(&deep, 0).unwrap_err();
        assert!(matches!(err, RenderError::DepthExceeded { limit: 1, .. }));
        assert_eq!(err.path().to_string(), "$.children[0].children[0]");
    }

    #[test]
    fn test_expression_or_null() {
        assert_eq!(expression_or_null(""), "null");
        assert_eq!(expression_or_null("<a/>"), "<a/>");
    }
}

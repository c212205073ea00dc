//! `.map(...)` rendering for iterable nodes.

use tagtree_ir::{IterableKind, IterableNode};
use tracing::trace;

use super::{Position, Renderer};
use crate::{NodePath, Result};

impl Renderer {
    pub(crate) fn render_iterable(&self, node: &IterableNode, path: &NodePath) -> Result<String> {
        let source = match node.kind {
            IterableKind::Mapping => format!("Object.entries({})", node.state),
            IterableKind::Sequence => node.state.clone(),
        };

        trace!(%path, collection = node.kind.as_str(), "mapping iterable");

        let mut builder = self.builder();
        builder
            .push_text(&format!(
                "<>{{{}.map(({}, {}) => (",
                source, node.arg_name, node.arg_index
            ))
            .push_indent();
        if node.children.is_empty() {
            builder.push_line("null");
        }
        for (i, child) in node.children.iter().enumerate() {
            let child_path = self.descend(path, format!("children[{}]", i))?;
            let text = self.render_node(child, &child_path, Position::Expression)?;
            builder.push_text(&text);
        }
        builder.push_dedent().push_line("))}</>");
        Ok(builder.finish())
    }
}

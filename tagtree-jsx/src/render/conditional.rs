//! Ternary rendering for conditional nodes.

use tagtree_ir::ConditionalNode;

use super::{Position, Renderer, expression_or_null};
use crate::{NodePath, Result};

impl Renderer {
    pub(crate) fn render_conditional(
        &self,
        node: &ConditionalNode,
        path: &NodePath,
        position: Position,
    ) -> Result<String> {
        let (open, close) = match position {
            Position::Expression => ("(", ")"),
            Position::Child => ("{", "}"),
        };

        let true_path = self.descend(path, "true_value")?;
        let true_text = self.render_node(&node.true_value, &true_path, Position::Expression)?;
        let false_path = self.descend(path, "false_value")?;
        let false_text = self.render_node(&node.false_value, &false_path, Position::Expression)?;

        let mut builder = self.builder();
        builder
            .push_text(&format!("{}{} ? (", open, node.cond))
            .push_indent()
            .push_text(expression_or_null(&true_text))
            .push_dedent()
            .push_line(") : (")
            .push_indent()
            .push_text(expression_or_null(&false_text))
            .push_dedent()
            .push_line(&format!("){}", close));
        Ok(builder.finish())
    }
}

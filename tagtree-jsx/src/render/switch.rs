//! Switch rendering for match nodes.
//!
//! A match becomes an immediately-invoked arrow function that switches over
//! `JSON.stringify(cond)`. Every case label is a `JSON.stringify(...)` call
//! too, with literal keys written out as JavaScript literals, so both sides
//! of each comparison go through the same serializer at runtime.

use tagtree_ir::{MatchKey, MatchNode};

use super::{Position, Renderer, expression_or_null};
use crate::{NodePath, RenderError, Result};

impl Renderer {
    pub(crate) fn render_match(
        &self,
        node: &MatchNode,
        path: &NodePath,
        position: Position,
    ) -> Result<String> {
        if node.cases.is_empty() && node.default.is_none() {
            return Err(RenderError::EmptyMatch { path: path.clone() });
        }
        let (open, close) = match position {
            Position::Expression => ("", ""),
            Position::Child => ("{", "}"),
        };

        let mut builder = self.builder();
        builder
            .push_line(&format!("{}(() => {{", open))
            .push_indent()
            .push_text(&format!("switch (JSON.stringify({})) {{", node.cond))
            .push_indent();

        for (i, case) in node.cases.iter().enumerate() {
            let case_path = self.descend(path, format!("match_cases[{}]", i))?;
            if case.keys.is_empty() {
                return Err(RenderError::malformed(
                    &case_path,
                    "a case needs at least one key",
                ));
            }
            for key in &case.keys {
                builder.push_text(&format!("case {}:", case_label(key, &case_path)?));
            }
            let body = self.render_node(&case.body, &case_path, Position::Expression)?;
            builder
                .push_indent()
                .push_text(&self.return_statement(&body))
                .push_dedent();
        }

        builder.push_line("default:").push_indent();
        match &node.default {
            Some(default) => {
                let default_path = self.descend(path, "default")?;
                let body = self.render_node(default, &default_path, Position::Expression)?;
                builder.push_text(&self.return_statement(&body));
            }
            None => {
                builder.push_line("return <></>;");
            }
        }
        builder
            .push_dedent()
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line(&format!("}})(){}", close));
        Ok(builder.finish())
    }

    /// `return X;` for single-line bodies, `return (` / body / `);` otherwise.
    fn return_statement(&self, body: &str) -> String {
        let body = expression_or_null(body);
        if !body.contains('\n') {
            return format!("return {};", body);
        }
        let mut builder = self.builder();
        builder
            .push_line("return (")
            .push_indent()
            .push_text(body)
            .push_dedent()
            .push_line(");");
        builder.finish()
    }
}

/// The `case` label for a key: `JSON.stringify(...)` over the key's
/// expression, or over its JSON text for literals. Object literals keep
/// their key order, matching how the discriminant object was built.
fn case_label(key: &MatchKey, path: &NodePath) -> Result<String> {
    let expr = match key {
        MatchKey::Literal(value) => serde_json::to_string(value).map_err(|err| {
            RenderError::malformed(path, format!("unserializable key: {}", err))
        })?,
        MatchKey::Expr(expr) => expr.clone(),
    };
    Ok(format!("JSON.stringify({})", expr))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tagtree_ir::{Node, Tag};

    use super::*;

    fn render(node: MatchNode) -> String {
        Renderer::default().render(&node.into(), 0).unwrap()
    }

    #[test]
    fn test_groups_fall_through_to_one_return() {
        let node = MatchNode::new("state.value")
            .case([MatchKey::literal(1), MatchKey::literal(2)], "A")
            .case([MatchKey::literal(3)], "B")
            .default("C");
        let expected = [
            "(() => {",
            "  switch (JSON.stringify(state.value)) {",
            "    case JSON.stringify(1):",
            "    case JSON.stringify(2):",
            "      return A;",
            "    case JSON.stringify(3):",
            "      return B;",
            "    default:",
            "      return C;",
            "  }",
            "})()",
        ]
        .join("\n");
        assert_eq!(render(node), expected);
    }

    #[test]
    fn test_one_return_per_group() {
        let node = MatchNode::new("x")
            .case(
                [MatchKey::literal("a"), MatchKey::literal("b"), MatchKey::literal("c")],
                "1",
            )
            .case([MatchKey::literal("d")], "2");
        let out = render(node);
        assert_eq!(out.matches("case ").count(), 4);
        assert_eq!(out.matches("return ").count(), 3);
        assert!(out.find("return 1;").unwrap() < out.find("case JSON.stringify(\"d\")").unwrap());
    }

    #[test]
    fn test_string_key_is_a_js_literal() {
        let node = MatchNode::new("x").case([MatchKey::literal("a \"b\"")], "1");
        assert!(render(node).contains(r#"case JSON.stringify("a \"b\""):"#));
    }

    #[test]
    fn test_structured_keys() {
        let node = MatchNode::new("x")
            .case([MatchKey::literal(json!(null))], "n")
            .case([MatchKey::literal(json!(true))], "t")
            .case([MatchKey::literal(json!([1, "a"]))], "l");
        let out = render(node);
        assert!(out.contains("case JSON.stringify(null):"));
        assert!(out.contains("case JSON.stringify(true):"));
        assert!(out.contains(r#"case JSON.stringify([1,"a"]):"#));
    }

    #[test]
    fn test_float_key_is_serialized_at_runtime() {
        let node = MatchNode::new("state.n").case([MatchKey::literal(1.0)], "one");
        assert!(render(node).contains("case JSON.stringify(1.0):"));
    }

    #[test]
    fn test_object_key_keeps_insertion_order() {
        let key: serde_json::Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
        let node = MatchNode::new("state.pos").case([MatchKey::literal(key)], "obj");
        assert!(render(node).contains(r#"case JSON.stringify({"b":1,"a":2}):"#));
    }

    #[test]
    fn test_multiline_discriminant_keeps_indentation() {
        let node = MatchNode::new("pick(\n  a,\n  b\n)").default("D");
        let out = render(node);
        assert!(out.starts_with("(() => {\n  switch (JSON.stringify(pick(\n    a,\n    b\n  ))) {\n"));
    }

    #[test]
    fn test_expression_key() {
        let node = MatchNode::new("x").case([MatchKey::expr("state.other")], "1");
        assert!(render(node).contains("case JSON.stringify(state.other):"));
    }

    #[test]
    fn test_default_is_last() {
        let node = MatchNode::new("x")
            .default("D")
            .case([MatchKey::literal(1)], "A");
        let out = render(node);
        assert!(out.find("case ").unwrap() < out.find("default:").unwrap());
    }

    #[test]
    fn test_missing_default_returns_empty_fragment() {
        let node = MatchNode::new("x").case([MatchKey::literal(1)], "A");
        assert!(render(node).contains("    default:\n      return <></>;\n"));
    }

    #[test]
    fn test_default_only() {
        let node = MatchNode::new("x").default(Tag::new("p"));
        assert_eq!(
            render(node),
            "(() => {\n  switch (JSON.stringify(x)) {\n    default:\n      return <p/>;\n  }\n})()"
        );
    }

    #[test]
    fn test_multiline_body_is_parenthesized() {
        let node = MatchNode::new("x").case([MatchKey::literal(1)], Tag::new("p").child("hi"));
        let out = render(node);
        assert!(out.contains(
            "    case JSON.stringify(1):\n      return (\n        <p>\n          hi\n        </p>\n      );\n"
        ));
    }

    #[test]
    fn test_empty_body_returns_null() {
        let node = MatchNode::new("x").case([MatchKey::literal(1)], "");
        assert!(render(node).contains("return null;"));
    }

    #[test]
    fn test_child_position_wraps_in_braces() {
        let node: Node = Tag::new("div")
            .child(MatchNode::new("x").default("D"))
            .into();
        let out = Renderer::default().render(&node, 0).unwrap();
        assert!(out.starts_with("<div>\n  {(() => {\n"));
        assert!(out.ends_with("\n  })()}\n</div>"));
    }

    #[test]
    fn test_empty_match() {
        let node: Node = Tag::new("div").child(MatchNode::new("x")).into();
        let err = Renderer::default().render(&node, 0).unwrap_err();
        assert!(matches!(err, RenderError::EmptyMatch { .. }));
        assert_eq!(err.path().to_string(), "$.children[0]");
    }

    #[test]
    fn test_case_without_keys_is_malformed() {
        let node: Node = MatchNode::new("x").case(Vec::<MatchKey>::new(), "A").into();
        let err = Renderer::default().render(&node, 0).unwrap_err();
        assert!(matches!(err, RenderError::MalformedNode { .. }));
        assert_eq!(err.path().to_string(), "$.match_cases[0]");
    }
}

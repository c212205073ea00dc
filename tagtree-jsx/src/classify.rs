//! Building nodes from JSON mappings.
//!
//! Component trees arrive as loosely-typed mappings whose kind is implied by
//! which fields are present. Classification checks the markers in a fixed
//! order, first match wins:
//!
//! 1. a scalar (string, number, bool, null) is a [`Node::Leaf`]
//! 2. `iterable_state` present: [`Node::Iterable`]
//! 3. `name == "match"`: [`Node::Match`]
//! 4. `cond_state` present: [`Node::Conditional`]
//! 5. non-empty `children`: [`Node::Tag`]
//! 6. anything else: [`Node::SelfClosingTag`]
//!
//! Match keys are literal values, except `{"$expr": "..."}` which marks a
//! runtime expression.

use serde_json::{Map, Value};
use tagtree_ir::{
    ConditionalNode, IterableKind, IterableNode, MatchCase, MatchKey, MatchNode, Node, Tag,
};

use crate::{NodePath, RenderError, Result};

/// The `name` that marks a match node.
pub const MATCH_NAME: &str = "match";

/// The single field of an expression match key.
pub const EXPR_KEY: &str = "$expr";

/// Build a node tree from a JSON value.
///
/// Fails with [`RenderError::MalformedNode`] for values of the wrong shape,
/// [`RenderError::MissingBranch`] for conditionals lacking a branch, and
/// [`RenderError::DepthExceeded`] for trees nested deeper than `max_depth`.
///
/// ```
/// use serde_json::json;
/// use tagtree_ir::NodeKind;
/// use tagtree_jsx::classify;
///
/// let node = classify(&json!({"name": "br"}), 64)?;
/// assert_eq!(node.kind(), NodeKind::SelfClosingTag);
/// # Ok::<(), tagtree_jsx::RenderError>(())
/// ```
pub fn classify(value: &Value, max_depth: usize) -> Result<Node> {
    Classifier { max_depth }.node(value, &NodePath::root())
}

struct Classifier {
    max_depth: usize,
}

impl Classifier {
    fn node(&self, value: &Value, path: &NodePath) -> Result<Node> {
        match value {
            Value::Null => Ok(Node::leaf("")),
            Value::Bool(b) => Ok(Node::leaf(b.to_string())),
            Value::Number(n) => Ok(Node::leaf(n.to_string())),
            Value::String(s) => Ok(Node::leaf(s.as_str())),
            Value::Array(_) => Err(RenderError::malformed(
                path,
                "expected a node, found an array",
            )),
            Value::Object(map) => self.mapping(map, path),
        }
    }

    fn descend(&self, path: &NodePath, segment: impl Into<String>) -> Result<NodePath> {
        let child = path.child(segment);
        if child.depth() > self.max_depth {
            return Err(RenderError::DepthExceeded {
                path: child,
                limit: self.max_depth,
            });
        }
        Ok(child)
    }

    fn mapping(&self, map: &Map<String, Value>, path: &NodePath) -> Result<Node> {
        if map.contains_key("iterable_state") {
            return self.iterable(map, path).map(Node::Iterable);
        }

        let name = optional_string(map, "name", path)?.unwrap_or_default();
        if name == MATCH_NAME {
            return self.match_node(map, path).map(Node::Match);
        }
        if map.contains_key("cond_state") {
            return self.conditional(map, path).map(Node::Conditional);
        }

        let tag = Tag {
            name,
            props: string_list(map, "props", path)?,
            contents: optional_string(map, "contents", path)?.unwrap_or_default(),
            children: self.children(map, path)?,
            autofocus: optional_bool(map, "autofocus", path)?,
        };
        Ok(tag.into())
    }

    fn children(&self, map: &Map<String, Value>, path: &NodePath) -> Result<Vec<Node>> {
        match map.get("children") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let child_path = self.descend(path, format!("children[{}]", i))?;
                    self.node(item, &child_path)
                })
                .collect(),
            Some(_) => Err(RenderError::malformed(path, "`children` must be an array")),
        }
    }

    fn iterable(&self, map: &Map<String, Value>, path: &NodePath) -> Result<IterableNode> {
        let kind = match optional_string(map, "iterable_type", path)? {
            None => IterableKind::Sequence,
            Some(name) => IterableKind::from_type_name(&name).ok_or_else(|| {
                RenderError::malformed(path, format!("unknown `iterable_type` `{}`", name))
            })?,
        };

        Ok(IterableNode {
            state: required_string(map, "iterable_state", path)?,
            kind,
            arg_name: required_string(map, "arg_name", path)?,
            arg_index: required_string(map, "arg_index", path)?,
            children: self.children(map, path)?,
        })
    }

    fn match_node(&self, map: &Map<String, Value>, path: &NodePath) -> Result<MatchNode> {
        let cases = match map.get("match_cases") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(groups)) => groups
                .iter()
                .enumerate()
                .map(|(i, group)| {
                    let case_path = self.descend(path, format!("match_cases[{}]", i))?;
                    self.match_case(group, &case_path)
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => {
                return Err(RenderError::malformed(
                    path,
                    "`match_cases` must be an array",
                ));
            }
        };

        let default = match map.get("default") {
            None | Some(Value::Null) => None,
            Some(value) => {
                let default_path = self.descend(path, "default")?;
                Some(Box::new(self.node(value, &default_path)?))
            }
        };

        Ok(MatchNode {
            cond: required_string(map, "cond", path)?,
            cases,
            default,
        })
    }

    /// A case group is `[key, ..., body]` with at least one key.
    fn match_case(&self, group: &Value, path: &NodePath) -> Result<MatchCase> {
        let items = match group {
            Value::Array(items) if items.len() >= 2 => items,
            _ => {
                return Err(RenderError::malformed(
                    path,
                    "a case group must be an array of one or more keys followed by a body",
                ));
            }
        };

        let (body, keys) = items
            .split_last()
            .ok_or_else(|| RenderError::malformed(path, "empty case group"))?;
        Ok(MatchCase {
            keys: keys.iter().map(match_key).collect(),
            body: self.node(body, path)?,
        })
    }

    fn conditional(&self, map: &Map<String, Value>, path: &NodePath) -> Result<ConditionalNode> {
        let cond = required_string(map, "cond_state", path)?;
        let true_value = self.branch(map, "true_value", path)?;
        let false_value = self.branch(map, "false_value", path)?;
        Ok(ConditionalNode {
            cond,
            true_value: Box::new(true_value),
            false_value: Box::new(false_value),
        })
    }

    fn branch(
        &self,
        map: &Map<String, Value>,
        branch: &'static str,
        path: &NodePath,
    ) -> Result<Node> {
        match map.get(branch) {
            None | Some(Value::Null) => Err(RenderError::MissingBranch {
                path: path.clone(),
                branch,
            }),
            Some(value) => {
                let branch_path = self.descend(path, branch)?;
                self.node(value, &branch_path)
            }
        }
    }
}

fn match_key(value: &Value) -> MatchKey {
    if let Value::Object(map) = value {
        if map.len() == 1 {
            if let Some(Value::String(expr)) = map.get(EXPR_KEY) {
                return MatchKey::Expr(expr.clone());
            }
        }
    }
    MatchKey::Literal(value.clone())
}

fn optional_string(map: &Map<String, Value>, key: &str, path: &NodePath) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(RenderError::malformed(
            path,
            format!("`{}` must be a string, found {}", key, type_name(other)),
        )),
    }
}

fn required_string(map: &Map<String, Value>, key: &str, path: &NodePath) -> Result<String> {
    optional_string(map, key, path)?
        .ok_or_else(|| RenderError::malformed(path, format!("missing `{}`", key)))
}

fn optional_bool(map: &Map<String, Value>, key: &str, path: &NodePath) -> Result<bool> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(RenderError::malformed(
            path,
            format!("`{}` must be a bool, found {}", key, type_name(other)),
        )),
    }
}

fn string_list(map: &Map<String, Value>, key: &str, path: &NodePath) -> Result<Vec<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(RenderError::malformed(
                    path,
                    format!("`{}[{}]` must be a string, found {}", key, i, type_name(other)),
                )),
            })
            .collect(),
        Some(other) => Err(RenderError::malformed(
            path,
            format!("`{}` must be an array, found {}", key, type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Location of a node inside the tree being rendered.
///
/// Displayed as `$` for the root followed by one segment per step, e.g.
/// `$.children[1].true_value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// The path of the root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// The path of a sub-node reached through `segment`.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Number of steps below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

/// Errors raised while building or rendering a node tree.
///
/// All of them mean the tree handed to the renderer is invalid; none are
/// transient.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("malformed node at {path}: {reason}")]
    #[diagnostic(
        code(tagtree::malformed_node),
        help("check the node's fields against the expected shape")
    )]
    MalformedNode { path: NodePath, reason: String },

    #[error("conditional at {path} is missing its `{branch}` branch")]
    #[diagnostic(
        code(tagtree::missing_branch),
        help("conditionals need both a `true_value` and a `false_value`")
    )]
    MissingBranch {
        path: NodePath,
        branch: &'static str,
    },

    #[error("match at {path} has no cases and no default")]
    #[diagnostic(
        code(tagtree::empty_match),
        help("add at least one case group or a `default` node")
    )]
    EmptyMatch { path: NodePath },

    #[error("node at {path} is nested deeper than the limit of {limit}")]
    #[diagnostic(
        code(tagtree::depth_exceeded),
        help("raise `max_depth` in tagtree.toml or flatten the tree")
    )]
    DepthExceeded { path: NodePath, limit: usize },
}

impl RenderError {
    pub(crate) fn malformed(path: &NodePath, reason: impl Into<String>) -> Self {
        RenderError::MalformedNode {
            path: path.clone(),
            reason: reason.into(),
        }
    }

    /// The path of the offending node.
    pub fn path(&self) -> &NodePath {
        match self {
            RenderError::MalformedNode { path, .. }
            | RenderError::MissingBranch { path, .. }
            | RenderError::EmptyMatch { path }
            | RenderError::DepthExceeded { path, .. } => path,
        }
    }
}

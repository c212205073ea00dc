//! Component node definitions.

use std::fmt;

use serde_json::Value;

/// The kind of a [`Node`], used for diagnostics and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Leaf,
    Iterable,
    Match,
    Conditional,
    Tag,
    SelfClosingTag,
}

impl NodeKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Leaf => "leaf",
            NodeKind::Iterable => "iterable",
            NodeKind::Match => "match",
            NodeKind::Conditional => "conditional",
            NodeKind::Tag => "tag",
            NodeKind::SelfClosingTag => "self-closing tag",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One renderable unit of a component tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Plain text emitted verbatim.
    Leaf(String),
    /// A collection mapped over a per-item template.
    Iterable(IterableNode),
    /// A multi-way branch over a discriminant expression.
    Match(MatchNode),
    /// A two-way branch over a boolean expression.
    Conditional(ConditionalNode),
    /// A tag with an opening and closing marker around its children.
    Tag(Tag),
    /// A tag without children (`<name/>`), or raw text when the name is empty.
    SelfClosingTag(Tag),
}

impl Node {
    /// Create a text leaf.
    pub fn leaf(text: impl Into<String>) -> Self {
        Node::Leaf(text.into())
    }

    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Leaf(_) => NodeKind::Leaf,
            Node::Iterable(_) => NodeKind::Iterable,
            Node::Match(_) => NodeKind::Match,
            Node::Conditional(_) => NodeKind::Conditional,
            Node::Tag(_) => NodeKind::Tag,
            Node::SelfClosingTag(_) => NodeKind::SelfClosingTag,
        }
    }

    /// Direct sub-nodes in render order: children, branches, case bodies
    /// and the match default.
    pub fn subnodes(&self) -> Vec<&Node> {
        match self {
            Node::Leaf(_) => Vec::new(),
            Node::Iterable(iterable) => iterable.children.iter().collect(),
            Node::Match(m) => m
                .cases
                .iter()
                .map(|case| &case.body)
                .chain(m.default.as_deref())
                .collect(),
            Node::Conditional(cond) => vec![&*cond.true_value, &*cond.false_value],
            Node::Tag(tag) | Node::SelfClosingTag(tag) => tag.children.iter().collect(),
        }
    }

    /// Returns true if this node or any named tag below it requests autofocus.
    pub fn uses_autofocus(&self) -> bool {
        match self {
            Node::Tag(tag) | Node::SelfClosingTag(tag) if tag.autofocus && !tag.is_raw() => {
                true
            }
            _ => self.subnodes().into_iter().any(Node::uses_autofocus),
        }
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .subnodes()
            .into_iter()
            .map(Node::node_count)
            .sum::<usize>()
    }

    /// Depth of this subtree; a node without sub-nodes has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .subnodes()
            .into_iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }
}

impl From<Tag> for Node {
    /// Tags with children become [`Node::Tag`], all others [`Node::SelfClosingTag`].
    fn from(tag: Tag) -> Self {
        if tag.children.is_empty() {
            Node::SelfClosingTag(tag)
        } else {
            Node::Tag(tag)
        }
    }
}

impl From<IterableNode> for Node {
    fn from(node: IterableNode) -> Self {
        Node::Iterable(node)
    }
}

impl From<MatchNode> for Node {
    fn from(node: MatchNode) -> Self {
        Node::Match(node)
    }
}

impl From<ConditionalNode> for Node {
    fn from(node: ConditionalNode) -> Self {
        Node::Conditional(node)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::leaf(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Leaf(text)
    }
}

/// A named tag with attributes, inline contents and children.
///
/// # Example
///
/// ```
/// use tagtree_ir::{Node, Tag};
///
/// let node: Node = Tag::new("div")
///     .prop("className=\"a\"")
///     .child(Node::leaf("hi"))
///     .into();
/// assert!(matches!(node, Node::Tag(_)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub name: String,
    /// Pre-formatted attribute tokens, e.g. `className="a"`.
    pub props: Vec<String>,
    /// Inline text placed before the children.
    pub contents: String,
    pub children: Vec<Node>,
    pub autofocus: bool,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A nameless tag that renders its contents verbatim.
    pub fn raw(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// Add a pre-formatted attribute token.
    pub fn prop(mut self, prop: impl Into<String>) -> Self {
        self.props.push(prop.into());
        self
    }

    /// Add several pre-formatted attribute tokens.
    pub fn props(mut self, props: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.props.extend(props.into_iter().map(Into::into));
        self
    }

    pub fn contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Bind this tag to the shared focus reference.
    pub fn autofocus(mut self) -> Self {
        self.autofocus = true;
        self
    }

    /// Returns true if this tag has no name and renders as raw text.
    pub fn is_raw(&self) -> bool {
        self.name.is_empty()
    }
}

/// How an iterable's collection is traversed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IterableKind {
    /// Arrays and other sequences, mapped directly.
    #[default]
    Sequence,
    /// Key/value objects, turned into `[key, value]` entries first.
    Mapping,
}

impl IterableKind {
    /// Parse a collection type name.
    ///
    /// Accepts `list`, `tuple`, `set`, `array` and `sequence` for
    /// [`IterableKind::Sequence`], and `dict`, `mapping`, `object` and
    /// `record` for [`IterableKind::Mapping`].
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "list" | "tuple" | "set" | "array" | "sequence" => Some(Self::Sequence),
            "dict" | "mapping" | "object" | "record" => Some(Self::Mapping),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequence => "list",
            Self::Mapping => "dict",
        }
    }
}

/// A collection expression mapped over a per-item template.
#[derive(Debug, Clone, PartialEq)]
pub struct IterableNode {
    /// The collection expression, e.g. `state.items`.
    pub state: String,
    pub kind: IterableKind,
    /// Binding name for the current item.
    pub arg_name: String,
    /// Binding name for the current index.
    pub arg_index: String,
    /// Template applied to each item.
    pub children: Vec<Node>,
}

impl IterableNode {
    pub fn new(
        state: impl Into<String>,
        arg_name: impl Into<String>,
        arg_index: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            kind: IterableKind::Sequence,
            arg_name: arg_name.into(),
            arg_index: arg_index.into(),
            children: Vec::new(),
        }
    }

    /// Iterate over key/value entries instead of the collection itself.
    pub fn mapping(mut self) -> Self {
        self.kind = IterableKind::Mapping;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// A key of a match case.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchKey {
    /// A constant value, compared through its canonical JSON form.
    Literal(Value),
    /// A runtime expression, serialized when the match runs.
    Expr(String),
}

impl MatchKey {
    pub fn literal(value: impl Into<Value>) -> Self {
        MatchKey::Literal(value.into())
    }

    pub fn expr(expr: impl Into<String>) -> Self {
        MatchKey::Expr(expr.into())
    }
}

/// One case group: alternative keys sharing a body.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    pub keys: Vec<MatchKey>,
    pub body: Node,
}

impl MatchCase {
    pub fn new(keys: impl IntoIterator<Item = MatchKey>, body: impl Into<Node>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            body: body.into(),
        }
    }
}

/// A multi-way branch over a discriminant expression.
///
/// # Example
///
/// ```
/// use tagtree_ir::{MatchKey, MatchNode, Node};
///
/// let node = MatchNode::new("state.color")
///     .case([MatchKey::literal("red"), MatchKey::literal("pink")], "warm")
///     .case([MatchKey::literal("blue")], "cold")
///     .default("unknown");
/// assert_eq!(node.cases.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatchNode {
    /// The discriminant expression.
    pub cond: String,
    pub cases: Vec<MatchCase>,
    pub default: Option<Box<Node>>,
}

impl MatchNode {
    pub fn new(cond: impl Into<String>) -> Self {
        Self {
            cond: cond.into(),
            cases: Vec::new(),
            default: None,
        }
    }

    /// Add a case group.
    pub fn case(
        mut self,
        keys: impl IntoIterator<Item = MatchKey>,
        body: impl Into<Node>,
    ) -> Self {
        self.cases.push(MatchCase::new(keys, body));
        self
    }

    pub fn default(mut self, node: impl Into<Node>) -> Self {
        self.default = Some(Box::new(node.into()));
        self
    }
}

/// A two-way branch over a boolean expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalNode {
    /// Boolean expression text, opaque to the renderer.
    pub cond: String,
    pub true_value: Box<Node>,
    pub false_value: Box<Node>,
}

impl ConditionalNode {
    pub fn new(
        cond: impl Into<String>,
        true_value: impl Into<Node>,
        false_value: impl Into<Node>,
    ) -> Self {
        Self {
            cond: cond.into(),
            true_value: Box::new(true_value.into()),
            false_value: Box::new(false_value.into()),
        }
    }
}

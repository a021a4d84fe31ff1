//! Tree types produced by the parser and consumed by the renderers.
//!
//! The grammar only knows four tags. Three of them (`div`, `p`, `b`) are
//! containers that own an ordered list of children; `img` is a self-closing leaf.
//! A leaf has no children field at all, so "empty container" (`P([])`) and
//! "leaf" (`IMG({})`) can never be confused.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four tag identifiers the grammar allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagName {
    Div,
    P,
    B,
    Img,
}

impl TagName {
    /// The raw tag name as it appears in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            TagName::Div => "div",
            TagName::P => "p",
            TagName::B => "b",
            TagName::Img => "img",
        }
    }

    /// The uppercase name used in Luna call notation.
    pub fn mnemonic(self) -> &'static str {
        match self {
            TagName::Div => "DIV",
            TagName::P => "P",
            TagName::B => "B",
            TagName::Img => "IMG",
        }
    }

    /// `None` for `img`, which can never hold children.
    pub fn as_container(self) -> Option<ContainerTag> {
        match self {
            TagName::Div => Some(ContainerTag::Div),
            TagName::P => Some(ContainerTag::P),
            TagName::B => Some(ContainerTag::B),
            TagName::Img => None,
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the four known tag names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tag name '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for TagName {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "div" => Ok(TagName::Div),
            "p" => Ok(TagName::P),
            "b" => Ok(TagName::B),
            "img" => Ok(TagName::Img),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

/// The subset of [`TagName`] that owns children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerTag {
    Div,
    P,
    B,
}

impl From<ContainerTag> for TagName {
    fn from(tag: ContainerTag) -> Self {
        match tag {
            ContainerTag::Div => TagName::Div,
            ContainerTag::P => TagName::P,
            ContainerTag::B => TagName::B,
        }
    }
}

impl fmt::Display for ContainerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&TagName::from(*self), f)
    }
}

/// One parsed element. Children are kept in document order and each node is
/// owned by exactly one parent (or by the [`Forest`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Container {
        tag: ContainerTag,
        children: Vec<Node>,
    },
    Leaf,
}

impl Node {
    pub fn container(tag: ContainerTag, children: Vec<Node>) -> Self {
        Node::Container { tag, children }
    }

    pub fn tag_name(&self) -> TagName {
        match self {
            Node::Container { tag, .. } => (*tag).into(),
            Node::Leaf => TagName::Img,
        }
    }

    /// Children of a container; `None` for a leaf.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Container { children, .. } => Some(children.as_slice()),
            Node::Leaf => None,
        }
    }

    /// Preorder walk over this subtree, yielding each node with its depth
    /// relative to `self` (which is at depth 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(self, 0)],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Depth of this subtree; a lone node has depth 1.
    pub fn depth(&self) -> usize {
        self.walk().map(|(_, depth)| depth + 1).max().unwrap_or(1)
    }
}

// Dropping a deeply nested tree through the compiler's drop glue recurses once
// per level. Unlink descendants onto a heap stack first.
impl Drop for Node {
    fn drop(&mut self) {
        let Node::Container { children, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Node::Container { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

/// Preorder iterator returned by [`Node::walk`] and [`Forest::walk`].
///
/// Siblings come out in document order. The traversal keeps its own stack, so it
/// is safe on arbitrarily deep trees.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev().map(|child| (child, depth + 1)));
        }
        Some((node, depth))
    }
}

/// Ordered list of top-level nodes. Markup may have several siblings at the top
/// level with no enclosing tag, so the parse result is a forest, not a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<Node>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.roots.iter()
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.roots.push(node);
    }

    /// Preorder walk over every node, roots at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.roots.iter().rev().map(|root| (root, 0)).collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    pub fn leaf_count(&self) -> usize {
        self.walk().filter(|(node, _)| matches!(node, Node::Leaf)).count()
    }

    pub fn container_count(&self) -> usize {
        self.node_count() - self.leaf_count()
    }

    /// Deepest nesting level in the forest; 0 when empty.
    pub fn max_depth(&self) -> usize {
        self.walk().map(|(_, depth)| depth + 1).max().unwrap_or(0)
    }
}

impl From<Vec<Node>> for Forest {
    fn from(roots: Vec<Node>) -> Self {
        Self { roots }
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

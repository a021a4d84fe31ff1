//! Renderers — turn a [`Forest`] back into text.
//!
//! Three independent, side-effect-free traversals:
//!
//! - [`render_target`] — Luna call notation, `DIV([P([]), IMG({})])`
//! - [`render_outline`] — one tag per line, indented by depth (or compressed)
//! - [`render_pretty`] — a tree-drawing debug view of tag names
//!
//! The walks keep an explicit stack instead of recursing, so a forest nested
//! as deep as the input allows renders on any thread's stack.

use crate::types::{Forest, Node};

/// Indentation unit for [`render_outline`].
const OUTLINE_INDENT: &str = "   ";

/// Indentation unit for [`render_pretty`].
const PRETTY_INDENT: &str = "  ";

/// Branch marker drawn before every non-root line of [`render_pretty`].
const BRANCH: &str = "└── ";

/// Render the forest in Luna call notation.
///
/// Containers become `NAME([child, child])`, leaves become `IMG({})`. Top-level
/// nodes are concatenated with no separator.
pub fn render_target(forest: &Forest) -> String {
    let mut out = String::new();

    // (node, preceded by a sibling, children already emitted)
    let mut stack: Vec<(&Node, bool, bool)> =
        forest.iter().rev().map(|node| (node, false, false)).collect();

    while let Some((node, separated, visited)) = stack.pop() {
        if visited {
            out.push_str("])");
            continue;
        }
        if separated {
            out.push_str(", ");
        }
        out.push_str(node.tag_name().mnemonic());
        match node {
            Node::Container { children, .. } => {
                out.push_str("([");
                stack.push((node, false, true));
                for (i, child) in children.iter().enumerate().rev() {
                    stack.push((child, i > 0, false));
                }
            }
            Node::Leaf => out.push_str("({})"),
        }
    }
    out
}

/// Render the forest as markup, one tag per line and indented by nesting depth.
///
/// With `compress`, indentation and newlines are dropped and the tags are simply
/// concatenated. Trailing newlines are trimmed either way.
pub fn render_outline(forest: &Forest, compress: bool) -> String {
    let mut out = String::new();

    // (node, depth, children already emitted)
    let mut stack: Vec<(&Node, usize, bool)> =
        forest.iter().rev().map(|node| (node, 0, false)).collect();

    while let Some((node, depth, visited)) = stack.pop() {
        let name = node.tag_name();
        if visited {
            outline_line(&format!("</{name}>"), depth, compress, &mut out);
            continue;
        }
        match node {
            Node::Container { children, .. } => {
                outline_line(&format!("<{name}>"), depth, compress, &mut out);
                stack.push((node, depth, true));
                stack.extend(children.iter().rev().map(|child| (child, depth + 1, false)));
            }
            Node::Leaf => outline_line(&format!("<{name} />"), depth, compress, &mut out),
        }
    }
    out.trim_end_matches('\n').to_string()
}

fn outline_line(tag: &str, depth: usize, compress: bool, out: &mut String) {
    if compress {
        out.push_str(tag);
        return;
    }
    out.push_str(&OUTLINE_INDENT.repeat(depth));
    out.push_str(tag);
    out.push('\n');
}

/// Render the forest as an indented tree of tag names, for debugging.
///
/// ```text
/// div
///   └── p
///     └── img
///   └── b
/// ```
pub fn render_pretty(forest: &Forest) -> String {
    let mut out = String::new();
    for (node, depth) in forest.walk() {
        if depth > 0 {
            out.push_str(&PRETTY_INDENT.repeat(depth));
            out.push_str(BRANCH);
        }
        out.push_str(node.tag_name().as_str());
        out.push('\n');
    }
    out.trim_end_matches('\n').to_string()
}

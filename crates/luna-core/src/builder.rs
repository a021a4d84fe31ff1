//! Tree builder — turns the token stream into a [`Forest`].
//!
//! The builder keeps a pairing stack of open containers, innermost on top. Each
//! entry remembers the closing lexeme it is waiting for, so the well-formedness
//! check is a single comparison against the top of the stack.
//!
//! A node is attached to its parent (or to the forest) at the moment it is
//! finished: leaves immediately, containers when their closing tag is consumed.
//! Since nodes finish in properly nested order, sibling order always equals
//! document order.

use crate::error::{ParseError, Result};
use crate::options::ParseOptions;
use crate::tokenizer::{Lexeme, Token, Tokenizer};
use crate::types::{ContainerTag, Forest, Node};
use log::{debug, trace};

/// Parse a complete markup string into a forest, with no limits.
///
/// An empty (or whitespace-only) input yields an empty forest.
pub fn parse(text: &str) -> Result<Forest> {
    parse_with(text, &ParseOptions::default())
}

/// Parse a complete markup string, enforcing the limits in `options`.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Forest> {
    if let Some(limit) = options.max_input_len {
        if text.len() > limit {
            return Err(ParseError::InputTooLarge {
                len: text.len(),
                limit,
            });
        }
    }

    let mut builder = TreeBuilder::with_max_depth(options.max_depth);
    for token in Tokenizer::new(text) {
        builder.push(token?)?;
    }
    let forest = builder.finish()?;

    debug!(
        target: "luna.builder",
        "parsed {} bytes into {} root(s), {} node(s)",
        text.len(),
        forest.len(),
        forest.node_count()
    );
    Ok(forest)
}

/// A container whose closing tag has not been seen yet.
#[derive(Debug)]
struct OpenContainer {
    tag: ContainerTag,
    expected: Lexeme,
    offset: usize,
    children: Vec<Node>,
}

/// Incremental forest construction from tokens.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<OpenContainer>,
    forest: Forest,
    max_depth: Option<usize>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Number of containers currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply one token.
    pub fn push(&mut self, token: Token) -> Result<()> {
        let Token { lexeme, offset } = token;
        match lexeme {
            Lexeme::Opening(name) => {
                let tag = name.as_container().ok_or_else(|| ParseError::Malformed {
                    offset,
                    expected: "<img />".to_string(),
                    found: lexeme.to_string(),
                })?;
                if let Some(limit) = self.max_depth {
                    if self.stack.len() >= limit {
                        return Err(ParseError::TooDeep { limit, offset });
                    }
                }
                trace!(target: "luna.builder", "open {lexeme} at {offset}");
                self.stack.push(OpenContainer {
                    tag,
                    expected: Lexeme::Closing(name),
                    offset,
                    children: Vec::new(),
                });
            }
            Lexeme::SelfClosing(name) => {
                if name.as_container().is_some() {
                    return Err(ParseError::Malformed {
                        offset,
                        expected: format!("<{name}>"),
                        found: lexeme.to_string(),
                    });
                }
                self.attach(Node::Leaf);
            }
            Lexeme::Closing(_) => {
                let open = match self.stack.pop() {
                    Some(open) if open.expected == lexeme => open,
                    Some(open) => {
                        let err = ParseError::Malformed {
                            offset,
                            expected: open.expected.to_string(),
                            found: lexeme.to_string(),
                        };
                        self.stack.push(open);
                        return Err(err);
                    }
                    None => {
                        return Err(ParseError::Malformed {
                            offset,
                            expected: "an opening tag or end of input".to_string(),
                            found: lexeme.to_string(),
                        })
                    }
                };
                trace!(
                    target: "luna.builder",
                    "close {lexeme} at {offset} with {} child(ren)",
                    open.children.len()
                );
                self.attach(Node::container(open.tag, open.children));
            }
        }
        Ok(())
    }

    /// Finish building. Fails if any container is still open, reporting the
    /// innermost one.
    pub fn finish(self) -> Result<Forest> {
        match self.stack.last() {
            Some(open) => Err(ParseError::Unterminated {
                tag: open.tag.into(),
                offset: open.offset,
            }),
            None => Ok(self.forest),
        }
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.forest.push(node),
        }
    }
}

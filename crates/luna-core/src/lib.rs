//! # luna-core
//!
//! Parser and renderer for a tiny HTML subset (`div`, `p`, `b`, `img`) that
//! converts markup into **Luna** call notation.
//!
//! Containers map to `NAME([children])` and the self-closing `<img />` maps to
//! `IMG({})`. Markup with several top-level siblings parses into a forest whose
//! roots are rendered back to back.
//!
//! ## Quick start
//!
//! ```rust
//! use luna_core::{parse, render_outline, render_target};
//!
//! let forest = parse("<div><p><img /></p><b></b></div>").unwrap();
//! assert_eq!(render_target(&forest), "DIV([P([IMG({})]), B([])])");
//! assert_eq!(
//!     render_outline(&forest, true),
//!     "<div><p><img /></p><b></b></div>"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] — markup string → tag lexemes
//! - [`builder`] — lexemes → [`Forest`], with well-formedness checks
//! - [`render`] — [`Forest`] → Luna notation, tag outline, or debug tree
//! - [`options`] — input size and nesting limits
//! - [`error`] — error types for parse failures
//! - [`types`] — tag names, nodes, and the forest

pub mod builder;
pub mod error;
pub mod options;
pub mod render;
pub mod tokenizer;
pub mod types;

pub use builder::{parse, parse_with, TreeBuilder};
pub use error::{ErrorKind, ParseError};
pub use options::{ParseOptions, MAX_INPUT_LEN};
pub use render::{render_outline, render_pretty, render_target};
pub use tokenizer::{next_tag, Lexeme, Token, Tokenizer};
pub use types::{ContainerTag, Forest, Node, TagName, Walk};

/// Parse `html` and render it in Luna call notation in one step.
///
/// ```rust
/// assert_eq!(
///     luna_core::html_to_luna("<div><img /></div>").unwrap(),
///     "DIV([IMG({})])"
/// );
/// ```
pub fn html_to_luna(html: &str) -> error::Result<String> {
    let forest = parse(html)?;
    Ok(render_target(&forest))
}

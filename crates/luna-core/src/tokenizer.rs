//! Tokenizer — splits markup into tag lexemes.
//!
//! The grammar has no text content, so a tag always runs from the current
//! position up to and including the next `>`. Whitespace between tags is
//! incidental and skipped. Each raw tag is classified exactly once, here, into a
//! [`Lexeme`]; later stages never look at tag strings again.
//!
//! ```text
//! "<div><img /></div>"  →  Opening(div), SelfClosing(img), Closing(div)
//! ```

use crate::error::{ParseError, Result};
use crate::types::TagName;
use log::trace;
use std::fmt;
use std::iter::FusedIterator;

/// A classified tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    Opening(TagName),
    Closing(TagName),
    SelfClosing(TagName),
}

impl Lexeme {
    pub fn tag(self) -> TagName {
        match self {
            Lexeme::Opening(tag) | Lexeme::Closing(tag) | Lexeme::SelfClosing(tag) => tag,
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::Opening(tag) => write!(f, "<{tag}>"),
            Lexeme::Closing(tag) => write!(f, "</{tag}>"),
            Lexeme::SelfClosing(tag) => write!(f, "<{tag} />"),
        }
    }
}

/// A lexeme together with the byte offset of its opening `<` in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub lexeme: Lexeme,
    pub offset: usize,
}

/// Scan the next tag from `rest`.
///
/// Returns the lexeme and the text remaining after its `>`, or `None` once only
/// whitespace is left. Error offsets are relative to `rest`.
pub fn next_tag(rest: &str) -> Result<Option<(Lexeme, &str)>> {
    Ok(scan_tag(rest, 0)?.map(|(token, end)| (token.lexeme, &rest[end..])))
}

/// Scan one tag starting at byte `pos` of `input`. On success returns the token
/// and the byte position just past its `>`.
fn scan_tag(input: &str, pos: usize) -> Result<Option<(Token, usize)>> {
    let rest = &input[pos..];
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let start = pos + (rest.len() - trimmed.len());

    let close = trimmed.find('>').ok_or_else(|| ParseError::Tokenize {
        offset: start,
        message: "truncated tag: no closing '>' before end of input".to_string(),
    })?;

    let lexeme = classify(&trimmed[..=close]).map_err(|message| ParseError::Tokenize {
        offset: start,
        message,
    })?;

    Ok(Some((
        Token {
            lexeme,
            offset: start,
        },
        start + close + 1,
    )))
}

/// Classify a raw tag such as `<div>`, `</p>` or `<img />`.
///
/// `raw` always ends with `>`. Whitespace inside the delimiters is tolerated, so
/// `<img/>`, `<img />` and `< /div >` are all accepted.
fn classify(raw: &str) -> std::result::Result<Lexeme, String> {
    let inner = raw
        .strip_prefix('<')
        .ok_or_else(|| format!("unexpected text before tag: {raw:?}"))?;
    let inner = inner.strip_suffix('>').unwrap_or(inner).trim();

    if let Some(name) = inner.strip_prefix('/') {
        return parse_name(name, raw).map(Lexeme::Closing);
    }
    if let Some(name) = inner.strip_suffix('/') {
        return parse_name(name, raw).map(Lexeme::SelfClosing);
    }
    parse_name(inner, raw).map(Lexeme::Opening)
}

fn parse_name(name: &str, raw: &str) -> std::result::Result<TagName, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty tag name in {raw:?}"));
    }
    name.parse::<TagName>().map_err(|e| format!("{e} in {raw:?}"))
}

/// Iterator over the tokens of a complete input.
///
/// Yields at most one error; after that (or after end-of-input) it is exhausted.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            done: false,
        }
    }

    /// The input not yet consumed.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match scan_tag(self.input, self.pos) {
            Ok(Some((token, end))) => {
                trace!(target: "luna.tokenizer", "{} at {}", token.lexeme, token.offset);
                self.pos = end;
                Some(Ok(token))
            }
            Ok(None) => {
                self.pos = self.input.len();
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}


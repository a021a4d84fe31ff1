//! Parse limits.
//!
//! The default options impose no limits. [`ParseOptions::strict`] applies the
//! documented input domain of 60 000 bytes.

/// Largest input the converter is documented to accept.
pub const MAX_INPUT_LEN: usize = 60_000;

/// Limits applied by [`parse_with`](crate::parse_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject inputs longer than this many bytes.
    pub max_input_len: Option<usize>,
    /// Reject inputs whose containers nest deeper than this.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::default().max_input_len(MAX_INPUT_LEN)
    }

    pub fn max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }

    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

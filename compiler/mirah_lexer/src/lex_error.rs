//! Lexer and session errors.
//!
//! Two families, kept apart:
//! - [`LexError`]: the source text cannot be tokenized.
//! - [`SessionError::InvalidReuse`]: the caller asked for a position the
//!   session has already passed without a cached token for it.

use std::sync::Arc;

use thiserror::Error;

/// A fatal lexical error. No token is produced for the failing request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A `/*` comment runs to the end of input.
    #[error("unterminated comment starting at offset {offset}: expected `{expected}`")]
    UnterminatedComment {
        /// Terminator the lexer was looking for.
        expected: &'static str,
        /// Offset of the opening `/*`.
        offset: u32,
        /// Full source text, for rendering context.
        text: Arc<str>,
    },
}

impl LexError {
    /// Offset the error points at.
    pub fn offset(&self) -> u32 {
        match self {
            LexError::UnterminatedComment { offset, .. } => *offset,
        }
    }

    /// Terminator text the lexer expected.
    pub fn expected(&self) -> &'static str {
        match self {
            LexError::UnterminatedComment { expected, .. } => expected,
        }
    }
}

/// Failure of a session request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// `requested` lies behind the cursor and no logged token covers it.
    #[error("offset {requested} is behind the lexer (at {cursor}) and was never lexed")]
    InvalidReuse { requested: u32, cursor: u32 },
}

//! Callbacks from the lexer to its consumer.
//!
//! A parser or editor layer implements [`TokenSink`] to keep a line map and
//! to observe every token the session builds. [`NullSink`] ignores
//! everything; [`LineTable`] keeps the line map.

use crate::token::Token;

/// Receiver of lexer notifications.
///
/// All methods default to doing nothing.
pub trait TokenSink {
    /// A newline was consumed; `offset` is the first byte of the next line.
    ///
    /// Newlines inside strings, regexes, heredoc bodies, comments and line
    /// continuations are reported as well as the ones that become
    /// [`NewLine`](crate::TokenKind::NewLine) tokens.
    fn note_newline(&mut self, offset: u32) {
        let _ = offset;
    }

    /// A token was freshly scanned. Not called for cache hits.
    fn token_built(&mut self, token: &Token) {
        let _ = token;
    }

    /// The session was restored to `offset`; anything learned past it will
    /// be reported again.
    fn rewind(&mut self, offset: u32) {
        let _ = offset;
    }
}

impl<S: TokenSink + ?Sized> TokenSink for &mut S {
    fn note_newline(&mut self, offset: u32) {
        (**self).note_newline(offset);
    }

    fn token_built(&mut self, token: &Token) {
        (**self).token_built(token);
    }

    fn rewind(&mut self, offset: u32) {
        (**self).rewind(offset);
    }
}

/// Sink that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TokenSink for NullSink {}

/// Line-start table built from newline notifications.
///
/// Lookups binary-search the recorded line starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTable {
    /// Byte offset of each line start; `starts[0] == 0`.
    starts: Vec<u32>,
}

impl Default for LineTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LineTable {
    pub fn new() -> Self {
        Self { starts: vec![0] }
    }

    /// Number of lines seen so far.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Byte offsets of the known line starts.
    pub fn line_starts(&self) -> &[u32] {
        &self.starts
    }

    /// 1-based line containing `offset`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 source length"
    )]
    pub fn line_of(&self, offset: u32) -> u32 {
        let index = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        index as u32 + 1
    }

    /// 1-based `(line, column)` of `offset`; the column counts characters.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_of(offset);
        let line_start = self.starts[(line - 1) as usize] as usize;
        let end = (offset as usize).min(source.len());
        let chars = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(chars).unwrap_or(u32::MAX) + 1)
    }
}

impl TokenSink for LineTable {
    fn note_newline(&mut self, offset: u32) {
        if self.starts.last().is_some_and(|&last| offset > last) {
            self.starts.push(offset);
        }
    }

    fn rewind(&mut self, offset: u32) {
        let keep = self.starts.partition_point(|&start| start <= offset);
        self.starts.truncate(keep.max(1));
    }
}

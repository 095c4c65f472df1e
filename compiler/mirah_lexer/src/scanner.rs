//! Token classifier.
//!
//! [`Scanner::scan`] produces exactly one token kind from the current
//! position, dispatching on the active [`Mode`]:
//!
//! | Mode | Handler |
//! |------|---------|
//! | `Code`, `CodeOnce` | [`trivia`] then [`code`] |
//! | `SingleQuoted`, `DoubleQuoted`, `Regex` | [`string`] |
//! | `Heredoc` | [`heredoc`] |
//!
//! The scanner owns the cursor, the [`ScanState`] (mode stack plus context
//! flags) and the sink. Offsets and the token log belong to the session.

mod code;
mod heredoc;
mod number;
mod string;
mod trivia;

use crate::context::Context;
use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::mode::{Mode, ModeStack};
use crate::sink::TokenSink;
use crate::token::TokenKind;

/// Everything the classifier carries from one token to the next.
///
/// A value type: snapshotting the lexer is cloning this.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanState {
    pub(crate) modes: ModeStack,
    pub(crate) context: Context,
}

impl ScanState {
    pub fn modes(&self) -> &ModeStack {
        &self.modes
    }

    pub fn context(&self) -> Context {
        self.context
    }
}

pub(crate) struct Scanner<'a, S> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) state: ScanState,
    pub(crate) sink: S,
}

impl<'a, S: TokenSink> Scanner<'a, S> {
    pub(crate) fn new(source: &'a str, sink: S) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: ScanState::default(),
            sink,
        }
    }

    /// Scan one token.
    ///
    /// Whitespace and comments only mark the context as space-seen. Any
    /// other token recomputes the context flags, and a one-shot code frame
    /// is closed once its token is done.
    pub(crate) fn scan(&mut self) -> Result<TokenKind, LexError> {
        let mode = self.state.modes.mode().clone();
        let index = self.state.modes.depth() - 1;
        let one_shot = mode == Mode::CodeOnce;

        if mode.is_code() {
            if let Some(kind) = self.trivia()? {
                self.state.context = self.state.context.after_trivia();
                return Ok(kind);
            }
        }

        let kind = match mode {
            Mode::Code | Mode::CodeOnce => self.code(),
            Mode::SingleQuoted => self.single_quoted(),
            Mode::DoubleQuoted => self.double_quoted(b'"'),
            Mode::Regex => self.double_quoted(b'/'),
            Mode::Heredoc(heredoc) => self.heredoc(&heredoc),
        };

        if one_shot {
            self.state.modes.finish_one_shot(index);
        }
        self.state.context = Context::after_token(kind);
        Ok(kind)
    }

    /// Kind reported when no input remains: one zero-width heredoc start per
    /// heredoc still queued, then end of input.
    pub(crate) fn end_of_input(&mut self) -> TokenKind {
        if self.state.modes.take_heredoc().is_some() {
            TokenKind::HeredocBegin
        } else {
            TokenKind::Eof
        }
    }

    /// Report the newline just consumed.
    #[inline]
    fn newline(&mut self) {
        self.sink.note_newline(self.cursor.pos());
    }

    /// Skip `n` characters, reporting any newline among them.
    fn skip_reporting_newlines(&mut self, n: u32) {
        for _ in 0..n {
            match self.cursor.peek() {
                None => break,
                Some(b'\n') => {
                    self.cursor.skip(1);
                    self.newline();
                }
                Some(_) => self.cursor.skip(1),
            }
        }
    }
}

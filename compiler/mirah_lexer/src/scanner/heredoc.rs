//! Heredoc markers and bodies.
//!
//! `<<EOS` only queues the heredoc; its body starts after the next newline
//! lexed in code mode. The body is scanned line by line until a line that
//! is exactly the marker (after optional blanks for `<<-`). The newline
//! after the terminator is left for the code frame, so heredocs queued on
//! the same line follow one another.

use std::sync::Arc;

use crate::cursor::is_blank;
use crate::mode::Heredoc;
use crate::sink::TokenSink;
use crate::token::TokenKind;

use super::Scanner;

impl<S: TokenSink> Scanner<'_, S> {
    /// `<<` was read. Queue a heredoc if a marker follows and the context
    /// allows one, otherwise it is a shift.
    ///
    /// No heredoc directly after a value (`a<<b`, `x <<y` after a literal)
    /// or after a name without a space (`foo<<EOS`).
    pub(super) fn heredoc_or_shift(&mut self) -> TokenKind {
        let ctx = self.state.context;
        if !self.cursor.has_next() || ctx.is_end() || (ctx.is_arg() && !ctx.space_seen()) {
            return TokenKind::LShift;
        }
        let start = self.cursor.pos();
        let indented = self.cursor.consume(b'-');
        let quote = [b'"', b'\''].into_iter().find(|&q| self.cursor.consume(q));

        let len = self.cursor.eat_ident_chars();
        if len == 0 {
            self.cursor.seek(start);
            return TokenKind::LShift;
        }
        let marker: Arc<str> = Arc::from(self.cursor.read_back(len));
        if let Some(quote) = quote {
            if !self.cursor.consume(quote) {
                self.cursor.seek(start);
                return TokenKind::LShift;
            }
        }
        self.state.modes.queue_heredoc(Heredoc {
            marker,
            indented,
            interpolate: quote != Some(b'\''),
        });
        TokenKind::HeredocId
    }

    /// One token of a heredoc body.
    pub(super) fn heredoc(&mut self, heredoc: &Heredoc) -> TokenKind {
        if !self.cursor.has_next() {
            return TokenKind::Eof;
        }
        if self.cursor.at_line_start() && self.terminator(heredoc) {
            self.state.modes.pop();
            return TokenKind::HeredocEnd;
        }
        if heredoc.interpolate && self.cursor.peek() == Some(b'#') {
            if let Some(kind) = self.interpolation() {
                return kind;
            }
        }
        loop {
            match self.cursor.peek() {
                None => break,
                Some(b'\n') => {
                    self.content_byte();
                    if self.terminator_ahead(heredoc) {
                        break;
                    }
                }
                Some(b'#')
                    if heredoc.interpolate
                        && matches!(self.cursor.peek_nth(1), Some(b'{' | b'@')) =>
                {
                    break;
                }
                Some(_) => self.content_byte(),
            }
        }
        TokenKind::StringContent
    }

    /// Consume the terminator line if the cursor is at one. The newline
    /// after it is not consumed.
    fn terminator(&mut self, heredoc: &Heredoc) -> bool {
        let start = self.cursor.pos();
        if heredoc.indented {
            self.cursor.eat_while(is_blank);
        }
        if self.cursor.consume_str(&heredoc.marker)
            && matches!(self.cursor.peek(), None | Some(b'\n'))
        {
            return true;
        }
        self.cursor.seek(start);
        false
    }

    fn terminator_ahead(&mut self, heredoc: &Heredoc) -> bool {
        let start = self.cursor.pos();
        let found = self.terminator(heredoc);
        self.cursor.seek(start);
        found
    }
}

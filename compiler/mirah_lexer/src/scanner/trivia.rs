//! Whitespace, line continuations and comments.

use std::sync::Arc;

use crate::cursor::is_blank;
use crate::lex_error::LexError;
use crate::sink::TokenSink;
use crate::token::TokenKind;

use super::Scanner;

impl<S: TokenSink> Scanner<'_, S> {
    /// Scan one trivia token, or `None` if the next token is not trivia.
    ///
    /// Blanks and `\`-newline continuations merge into one whitespace token.
    /// A `#` or `/*` right after blanks ends the whitespace token and starts
    /// the next one.
    pub(super) fn trivia(&mut self) -> Result<Option<TokenKind>, LexError> {
        let start = self.cursor.pos();
        let mut blanks = false;
        loop {
            match self.cursor.peek() {
                Some(byte) if is_blank(byte) => {
                    self.cursor.consume(byte);
                    blanks = true;
                }
                Some(b'\\') if self.cursor.peek_nth(1) == Some(b'\n') => {
                    self.cursor.consume_str("\\\n");
                    self.newline();
                    blanks = true;
                }
                Some(b'#') if !blanks => {
                    self.cursor.consume_line();
                    return Ok(Some(TokenKind::Comment));
                }
                Some(b'/') if !blanks && self.cursor.peek_nth(1) == Some(b'*') => {
                    return self.block_comment(start).map(Some);
                }
                _ => break,
            }
        }
        Ok(blanks.then_some(TokenKind::Whitespace))
    }

    /// `/* ... */`, nesting. `/**` opens a doc comment.
    fn block_comment(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.cursor.consume_str("/*");
        let doc = self.cursor.peek() == Some(b'*');
        let mut depth = 1u32;
        loop {
            match self.cursor.read() {
                None => {
                    self.cursor.backup(1);
                    return Err(LexError::UnterminatedComment {
                        expected: "*/",
                        offset: start,
                        text: Arc::from(self.cursor.source()),
                    });
                }
                Some(b'\n') => self.newline(),
                Some(b'*') if self.cursor.consume(b'/') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(if doc {
                            TokenKind::DocComment
                        } else {
                            TokenKind::Comment
                        });
                    }
                }
                Some(b'/') if self.cursor.consume(b'*') => depth += 1,
                Some(_) => {}
            }
        }
    }
}

//! Single-quoted strings, double-quoted strings and regexes.
//!
//! A string body comes out as a run of content chunks, escape tokens and
//! interpolations, closed by the same quote kind that opened it.

use crate::mode::Mode;
use crate::sink::TokenSink;
use crate::token::TokenKind;

use super::Scanner;

impl<S: TokenSink> Scanner<'_, S> {
    /// Inside `'...'`. Only `\\` and `\'` are escapes.
    pub(super) fn single_quoted(&mut self) -> TokenKind {
        match self.cursor.peek() {
            None => return TokenKind::Eof,
            Some(b'\'') => {
                self.cursor.skip(1);
                self.state.modes.pop();
                return TokenKind::SQuote;
            }
            Some(b'\\') if matches!(self.cursor.peek_nth(1), Some(b'\'' | b'\\')) => {
                self.cursor.skip(2);
                return TokenKind::Escape;
            }
            Some(_) => {}
        }
        // The first byte is content even if it is a lone backslash.
        self.content_byte();
        loop {
            match self.cursor.peek() {
                None | Some(b'\'') => break,
                Some(b'\\') if matches!(self.cursor.peek_nth(1), Some(b'\'' | b'\\')) => break,
                Some(_) => self.content_byte(),
            }
        }
        TokenKind::StringContent
    }

    /// Inside `"..."` (`end` is `"`) or `/.../` (`end` is `/`).
    pub(super) fn double_quoted(&mut self, end: u8) -> TokenKind {
        match self.cursor.peek() {
            None => return TokenKind::Eof,
            Some(byte) if byte == end => {
                self.cursor.skip(1);
                self.state.modes.pop();
                if end == b'/' {
                    self.cursor.eat_while(|b| b.is_ascii_alphabetic());
                    return TokenKind::RegexEnd;
                }
                return TokenKind::DQuote;
            }
            Some(b'\\') => {
                self.cursor.skip(1);
                self.escape();
                return TokenKind::Escape;
            }
            Some(b'#') => {
                if let Some(kind) = self.interpolation() {
                    return kind;
                }
            }
            Some(_) => {}
        }
        self.content_byte();
        loop {
            match self.cursor.peek() {
                None | Some(b'\\') => break,
                Some(byte) if byte == end => break,
                Some(b'#') if matches!(self.cursor.peek_nth(1), Some(b'{' | b'@')) => break,
                Some(_) => self.content_byte(),
            }
        }
        TokenKind::StringContent
    }

    /// `#{` opens a code frame closed by its unbalanced `}`. `#@` opens a
    /// one-shot code frame for the variable that follows; only the `#` is
    /// part of the interpolation token.
    pub(super) fn interpolation(&mut self) -> Option<TokenKind> {
        match self.cursor.peek_nth(1) {
            Some(b'{') => {
                self.cursor.skip(2);
                self.state.modes.push(Mode::Code);
                Some(TokenKind::StrEvBegin)
            }
            Some(b'@') => {
                self.cursor.skip(1);
                self.state.modes.push(Mode::CodeOnce);
                Some(TokenKind::StrEvBegin)
            }
            _ => None,
        }
    }

    /// The escape after a `\` in a double-quoted string or regex.
    ///
    /// `\x` takes two more characters, `\u` four, `\U` eight, and an octal
    /// escape up to two more octal digits. Anything else is the single
    /// escaped character.
    fn escape(&mut self) {
        let Some(byte) = self.cursor.peek() else {
            return;
        };
        self.cursor.skip(1);
        match byte {
            b'x' => self.skip_reporting_newlines(2),
            b'u' => self.skip_reporting_newlines(4),
            b'U' => self.skip_reporting_newlines(8),
            b'0'..=b'7' => {
                for _ in 0..2 {
                    if !self.cursor.consume_if(|b| matches!(b, b'0'..=b'7')) {
                        break;
                    }
                }
            }
            b'\n' => self.newline(),
            _ => {}
        }
    }

    /// Consume one byte of string content, reporting newlines.
    pub(super) fn content_byte(&mut self) {
        if self.cursor.read() == Some(b'\n') {
            self.newline();
        }
    }
}

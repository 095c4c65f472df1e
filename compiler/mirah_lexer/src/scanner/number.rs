//! Numeric and character literals.
//!
//! Digits are only delimited here; values are left to the parser.

use crate::cursor::{is_ident_char, is_whitespace};
use crate::sink::TokenSink;
use crate::token::TokenKind;

use super::Scanner;

/// Digit classes accepted after the radix prefix. `0`, `1` and `_` are
/// always accepted.
#[derive(Clone, Copy)]
struct Digits {
    octal: bool,
    decimal: bool,
    hex: bool,
}

impl Digits {
    const DECIMAL: Self = Self {
        octal: true,
        decimal: true,
        hex: false,
    };

    fn accepts(self, byte: u8) -> bool {
        match byte {
            b'0' | b'1' | b'_' => true,
            b'2'..=b'7' => self.octal,
            b'8' | b'9' => self.decimal,
            b'a'..=b'f' | b'A'..=b'F' => self.hex,
            _ => false,
        }
    }
}

impl<S: TokenSink> Scanner<'_, S> {
    /// A number whose first digit was read.
    ///
    /// | After `0` | Digits | May be float |
    /// |-----------|--------|--------------|
    /// | `d`/`D` | decimal | no |
    /// | `b`/`B` | binary | no |
    /// | `x`/`X` | hex | no |
    /// | `o`/`O` | octal | yes |
    /// | `.`, `e`, `E` | decimal | yes |
    /// | anything else | octal | no |
    ///
    /// Numbers not starting with `0` are decimal and may be floats.
    pub(super) fn number(&mut self, first: u8) -> TokenKind {
        let mut digits = Digits::DECIMAL;
        let mut maybe_float = true;
        if first == b'0' {
            match self.cursor.peek() {
                Some(b'd' | b'D') => {
                    self.cursor.skip(1);
                    maybe_float = false;
                }
                Some(b'b' | b'B') => {
                    self.cursor.skip(1);
                    digits.octal = false;
                    digits.decimal = false;
                    maybe_float = false;
                }
                Some(b'x' | b'X') => {
                    self.cursor.skip(1);
                    digits.hex = true;
                    maybe_float = false;
                }
                Some(b'o' | b'O') => {
                    self.cursor.skip(1);
                    digits.decimal = false;
                }
                Some(b'.' | b'e' | b'E') => {}
                _ => {
                    digits.decimal = false;
                    maybe_float = false;
                }
            }
        }
        self.digits(digits);

        if maybe_float {
            if self.cursor.consume(b'.') {
                if self.fraction() {
                    return TokenKind::Float;
                }
                self.cursor.backup(1);
            } else if self.exponent_marker() {
                self.exponent();
                return TokenKind::Float;
            }
        }
        TokenKind::Integer
    }

    fn digits(&mut self, digits: Digits) {
        self.cursor.eat_while(|byte| digits.accepts(byte));
    }

    /// Digits after a `.`; `false` (nothing consumed) if there are none.
    fn fraction(&mut self) -> bool {
        let start = self.cursor.pos();
        self.digits(Digits::DECIMAL);
        if self.cursor.pos() == start {
            return false;
        }
        if self.exponent_marker() {
            self.exponent();
        }
        true
    }

    fn exponent_marker(&mut self) -> bool {
        self.cursor.consume(b'e') || self.cursor.consume(b'E')
    }

    fn exponent(&mut self) {
        self.cursor.consume(b'-');
        self.digits(Digits::DECIMAL);
    }

    /// `?` was read: a character literal, or a plain `?`.
    ///
    /// `?` stays an operator before whitespace or the end of input, and
    /// before a character that starts a longer name (`x ?ab : c`).
    pub(super) fn character(&mut self) -> TokenKind {
        let Some(byte) = self.cursor.read() else {
            self.cursor.backup(1);
            return TokenKind::Question;
        };
        if is_whitespace(byte) {
            self.cursor.backup(1);
            return TokenKind::Question;
        }
        if byte == b'\\' {
            self.character_escape();
            return TokenKind::Character;
        }
        let ch = if byte.is_ascii() {
            char::from(byte)
        } else {
            self.cursor.finish_codepoint()
        };
        if is_ident_char(ch) && self.cursor.peek_char().is_some_and(is_ident_char) {
            self.cursor.backup(u32::try_from(ch.len_utf8()).unwrap_or(1));
            return TokenKind::Question;
        }
        TokenKind::Character
    }

    /// Escape after `?\`: one escape character, and for numeric forms
    /// (`\x41`, `\u00e9`, `\101`, `\e`) the hex digits after it. Validity is
    /// left to the parser.
    fn character_escape(&mut self) {
        match self.cursor.peek() {
            None => {}
            Some(byte) if is_whitespace(byte) => {}
            Some(byte) => {
                self.cursor.skip(1);
                if matches!(byte, b'x' | b'u' | b'U') || byte.is_ascii_hexdigit() {
                    self.cursor.eat_while(|b| b.is_ascii_hexdigit());
                }
            }
        }
    }
}

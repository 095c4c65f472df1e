//! Plain-code dispatch: names, keywords, punctuation and operators.

use crate::cursor::{is_ident_char, is_whitespace};
use crate::keywords;
use crate::mode::Mode;
use crate::sink::TokenSink;
use crate::token::TokenKind;

use super::Scanner;

impl<S: TokenSink> Scanner<'_, S> {
    /// Classify one token in code mode. Trivia has already been skipped.
    pub(super) fn code(&mut self) -> TokenKind {
        let Some(first) = self.cursor.read() else {
            self.cursor.backup(1);
            return self.end_of_input();
        };
        match first {
            b'\n' => self.line_end(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.word(first),
            b'0'..=b'9' => self.number(first),
            b'@' => self.at_sign(),
            b'$' => self.name(TokenKind::Global),
            b'?' => self.character(),
            b'/' => self.slash(),
            b'\'' => self.open(Mode::SingleQuoted, TokenKind::SQuote),
            b'"' => self.open(Mode::DoubleQuoted, TokenKind::DQuote),
            b'{' => {
                self.state.modes.lbrace();
                TokenKind::LBrace
            }
            b'}' => {
                if self.state.modes.rbrace() {
                    TokenKind::StrEvEnd
                } else {
                    TokenKind::RBrace
                }
            }
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBrack,
            b']' => TokenKind::RBrack,
            b';' => TokenKind::Semi,
            b',' => TokenKind::Comma,
            b'~' => TokenKind::Tilde,
            b'`' => TokenKind::Backtick,
            b':' => self.pick(b':', TokenKind::Colons, TokenKind::Colon),
            b'.' => self.pick(b'.', TokenKind::Dots, TokenKind::Dot),
            b'+' => self.pick(b'=', TokenKind::OpAssign, TokenKind::Plus),
            b'-' => self.pick(b'=', TokenKind::OpAssign, TokenKind::Minus),
            b'%' => self.pick(b'=', TokenKind::OpAssign, TokenKind::Percent),
            b'^' => self.pick(b'=', TokenKind::OpAssign, TokenKind::Caret),
            b'!' => self.bang(),
            b'<' => self.less(),
            b'>' => self.greater(),
            b'=' => self.equal(),
            b'&' => self.doubled(b'&', TokenKind::AndEq, TokenKind::Ampers, TokenKind::Amper),
            b'|' => self.doubled(b'|', TokenKind::OrEq, TokenKind::Pipes, TokenKind::Pipe),
            b'*' => self.doubled(b'*', TokenKind::OpAssign, TokenKind::Stars, TokenKind::Star),
            0x80..=0xFF => self.non_ascii(),
            _ => TokenKind::Unknown,
        }
    }

    // ─── Lines & modes ──────────────────────────────────────────────────

    /// A newline either ends the line or starts the next queued heredoc.
    fn line_end(&mut self) -> TokenKind {
        self.newline();
        match self.state.modes.take_heredoc() {
            Some(heredoc) => {
                self.state.modes.push(Mode::Heredoc(heredoc));
                TokenKind::HeredocBegin
            }
            None => TokenKind::NewLine,
        }
    }

    fn open(&mut self, mode: Mode, kind: TokenKind) -> TokenKind {
        self.state.modes.push(mode);
        kind
    }

    /// `/` starts a regex at the beginning of an expression, or in argument
    /// position after a space when no space follows (`puts /x/`).
    fn slash(&mut self) -> TokenKind {
        let ctx = self.state.context;
        if ctx.is_beg() {
            return self.open(Mode::Regex, TokenKind::RegexBegin);
        }
        if !self.cursor.has_next() {
            return TokenKind::Slash;
        }
        if self.cursor.consume(b'=') {
            return TokenKind::OpAssign;
        }
        let spaced_arg = ctx.is_arg() && ctx.space_seen();
        if spaced_arg && !self.cursor.peek().is_some_and(is_whitespace) {
            return self.open(Mode::Regex, TokenKind::RegexBegin);
        }
        TokenKind::Slash
    }

    // ─── Names ──────────────────────────────────────────────────────────

    /// A word starting with an ASCII letter or `_`.
    ///
    /// Keyword spellings for the first byte are tried in table order. A
    /// keyword directly followed by another identifier character is not a
    /// keyword after all.
    fn word(&mut self, first: u8) -> TokenKind {
        let mut kind = keywords::candidates(first)
            .iter()
            .find(|(rest, _)| self.cursor.consume_str(rest))
            .map_or_else(|| word_fallback(first), |&(_, kind)| kind);

        if kind.is_keyword() && self.cursor.peek_char().is_some_and(is_ident_char) {
            kind = match kind {
                TokenKind::BeginBlock | TokenKind::EndBlock => TokenKind::Constant,
                _ => TokenKind::Identifier,
            };
        }
        self.name(kind)
    }

    /// A word starting with a non-ASCII character. Its lead byte was read.
    fn non_ascii(&mut self) -> TokenKind {
        let ch = self.cursor.finish_codepoint();
        if ch.is_uppercase() {
            self.name(TokenKind::Constant)
        } else if ch.is_alphabetic() || u32::from(ch) > 0xFFFF {
            self.name(TokenKind::Identifier)
        } else {
            TokenKind::Unknown
        }
    }

    /// `@@name`, `@name`, and the backtick prefixes `` @@` `` and `` @` ``.
    fn at_sign(&mut self) -> TokenKind {
        if self.cursor.consume_str("@`") {
            TokenKind::ClassVarBacktick
        } else if self.cursor.consume(b'@') {
            self.name(TokenKind::ClassVar)
        } else if self.cursor.consume(b'`') {
            TokenKind::InstVarBacktick
        } else {
            self.name(TokenKind::InstVar)
        }
    }

    /// Rest of a name-like token: identifier characters, then an optional
    /// `?` or `!` that is not the start of `?=`/`!=`.
    ///
    /// A sigil with no name after it is a bare `@` or `$`.
    fn name(&mut self, kind: TokenKind) -> TokenKind {
        debug_assert!(kind.is_name_like(), "{kind:?} is not name-like");
        let eaten = self.cursor.eat_ident_chars();
        if eaten == 0 {
            match kind {
                TokenKind::InstVar => return TokenKind::At,
                TokenKind::Global => return TokenKind::Dollar,
                _ => {}
            }
        }
        if matches!(self.cursor.peek(), Some(b'?' | b'!')) && self.cursor.peek_nth(1) != Some(b'=')
        {
            self.cursor.skip(1);
            return TokenKind::Fid;
        }
        kind
    }

    // ─── Operators ──────────────────────────────────────────────────────

    /// `yes` if `next` follows, else `no`.
    #[inline]
    fn pick(&mut self, next: u8, yes: TokenKind, no: TokenKind) -> TokenKind {
        if self.cursor.consume(next) {
            yes
        } else {
            no
        }
    }

    /// `&&=`/`&&`/`&=`/`&` and the `|` and `*` families.
    fn doubled(
        &mut self,
        op: u8,
        doubled_assign: TokenKind,
        doubled: TokenKind,
        single: TokenKind,
    ) -> TokenKind {
        if self.cursor.consume(op) {
            self.pick(b'=', doubled_assign, doubled)
        } else {
            self.pick(b'=', TokenKind::OpAssign, single)
        }
    }

    fn bang(&mut self) -> TokenKind {
        if self.cursor.consume(b'=') {
            self.pick(b'=', TokenKind::Nee, TokenKind::Ne)
        } else {
            self.pick(b'~', TokenKind::NMatch, TokenKind::Bang)
        }
    }

    fn less(&mut self) -> TokenKind {
        if self.cursor.consume(b'=') {
            return self.pick(b'>', TokenKind::Leg, TokenKind::Le);
        }
        if !self.cursor.consume(b'<') {
            return TokenKind::Lt;
        }
        if self.cursor.consume_str("<=") || self.cursor.consume(b'=') {
            return TokenKind::OpAssign;
        }
        if self.cursor.peek() == Some(b'<') {
            // `<<<` without `=`: a shift followed by `<`.
            return TokenKind::LShift;
        }
        self.heredoc_or_shift()
    }

    fn greater(&mut self) -> TokenKind {
        if self.cursor.consume(b'=') {
            TokenKind::Ge
        } else if self.cursor.consume(b'>') {
            if self.cursor.consume(b'=') {
                TokenKind::OpAssign
            } else {
                self.pick(b'>', TokenKind::RRShift, TokenKind::RShift)
            }
        } else {
            TokenKind::Gt
        }
    }

    fn equal(&mut self) -> TokenKind {
        if self.cursor.consume(b'>') {
            TokenKind::Rocket
        } else if self.cursor.consume(b'~') {
            TokenKind::Match
        } else if self.cursor.consume(b'=') {
            self.pick(b'=', TokenKind::EEEq, TokenKind::EEq)
        } else {
            TokenKind::Eq
        }
    }
}

/// Kind of a word that matched no keyword.
fn word_fallback(first: u8) -> TokenKind {
    if first.is_ascii_uppercase() {
        TokenKind::Constant
    } else {
        TokenKind::Identifier
    }
}

//! Read position over the source text.
//!
//! The cursor walks the UTF-8 bytes of the source. Every byte the lexer
//! branches on is ASCII, so byte-level dispatch is exact; non-ASCII text is
//! only ever classified through [`Cursor::finish_codepoint`] or
//! [`Cursor::peek_char`], which decode the whole character.
//!
//! # End of input
//!
//! [`Cursor::read`] at the end of input returns `None` *and still advances*
//! one position past the end. This keeps "read one, then `backup(1)` if it
//! was not wanted" uniform whether or not the read hit the end. Every scan
//! step that reads past the end backs up before the token is built, so token
//! offsets never exceed the source length.

/// Blank characters inside a line: space, tab, CR, form feed, vertical tab.
#[inline]
pub(crate) fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0C | 0x0B)
}

/// Whitespace that ends a character literal or a regex-start lookahead.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    is_blank(byte) || byte == b'\n'
}

/// Identifier-continuation characters.
///
/// Supplementary-plane characters (astral code points) are accepted
/// wholesale, whatever their Unicode category.
#[inline]
pub(crate) fn is_ident_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric() || u32::from(ch) > 0xFFFF
}

/// Cursor over a borrowed source string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: u32,
    len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    ///
    /// Offsets are `u32`; sources beyond 4 GiB are only visible up to
    /// `u32::MAX` bytes.
    pub(crate) fn new(src: &'a str) -> Self {
        let len = u32::try_from(src.len()).unwrap_or(u32::MAX);
        Self { src, pos: 0, len }
    }

    /// The whole source text.
    #[inline]
    pub(crate) fn source(&self) -> &'a str {
        self.src
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Source length in bytes.
    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` while unread input remains.
    #[inline]
    pub(crate) fn has_next(&self) -> bool {
        self.pos < self.len
    }

    #[inline]
    fn byte_at(&self, at: u32) -> Option<u8> {
        if at < self.len {
            self.src.as_bytes().get(at as usize).copied()
        } else {
            None
        }
    }

    /// Consume and return the next byte, or `None` at the end of input.
    ///
    /// See the module docs: the end-of-input read still advances.
    #[inline]
    pub(crate) fn read(&mut self) -> Option<u8> {
        match self.byte_at(self.pos) {
            Some(byte) => {
                self.pos += 1;
                Some(byte)
            }
            None => {
                self.pos = self.len.saturating_add(1);
                None
            }
        }
    }

    /// Unread bytes.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        let bytes = self.src.as_bytes();
        bytes
            .get(self.pos.min(self.len) as usize..self.len as usize)
            .unwrap_or_default()
    }

    /// The next byte without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    /// The byte `n` positions past the next one.
    #[inline]
    pub(crate) fn peek_nth(&self, n: u32) -> Option<u8> {
        self.byte_at(self.pos.saturating_add(n))
    }

    /// The next full character without consuming it.
    pub(crate) fn peek_char(&self) -> Option<char> {
        if self.pos >= self.len {
            return None;
        }
        self.src.get(self.pos as usize..)?.chars().next()
    }

    /// Consume `byte` if it is next.
    #[inline]
    pub(crate) fn consume(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next byte if `pred` accepts it.
    #[inline]
    pub(crate) fn consume_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        if self.peek().is_some_and(pred) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `text` if the input continues with it.
    pub(crate) fn consume_str(&mut self, text: &str) -> bool {
        if self.at(text) {
            self.advance(text.len());
            true
        } else {
            false
        }
    }

    /// Returns `true` if the input continues with `text`, consuming nothing.
    pub(crate) fn at(&self, text: &str) -> bool {
        self.rest().starts_with(text.as_bytes())
    }

    /// Unread `n` bytes.
    #[inline]
    pub(crate) fn backup(&mut self, n: u32) {
        debug_assert!(n <= self.pos, "backup({n}) past start at {}", self.pos);
        self.pos = self.pos.saturating_sub(n);
    }

    /// Skip `n` characters, stopping at the end of input.
    pub(crate) fn skip(&mut self, n: u32) {
        for _ in 0..n {
            match self.peek_char() {
                Some(ch) => self.advance(ch.len_utf8()),
                None => break,
            }
        }
    }

    /// Returns `true` at the start of a line.
    pub(crate) fn at_line_start(&self) -> bool {
        self.pos == 0 || self.byte_at(self.pos - 1) == Some(b'\n')
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "advances are bounded by the source length, which fits in u32"
    )]
    #[inline]
    fn advance(&mut self, n: usize) {
        self.pos += n as u32;
    }

    /// Move to an absolute offset, clamped to the end of input.
    #[inline]
    pub(crate) fn seek(&mut self, pos: u32) {
        self.pos = pos.min(self.len);
    }

    /// Advance to the next `\n` (not consumed) or the end of input.
    pub(crate) fn consume_line(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.advance(offset),
            None => self.pos = self.len,
        }
    }

    /// Complete the character whose lead byte was just read.
    ///
    /// Moves the cursor to the end of that character and returns it. A lead
    /// byte that does not start a valid character yields U+FFFD and leaves the
    /// cursor after the single byte.
    pub(crate) fn finish_codepoint(&mut self) -> char {
        let lead = self.pos.saturating_sub(1);
        let decoded = self
            .src
            .get(lead as usize..)
            .and_then(|rest| rest.chars().next());
        match decoded {
            Some(ch) => {
                self.pos = lead;
                self.advance(ch.len_utf8());
                ch
            }
            None => char::REPLACEMENT_CHARACTER,
        }
    }

    /// Consume identifier-continuation characters, returning how many bytes
    /// were eaten.
    pub(crate) fn eat_ident_chars(&mut self) -> u32 {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if !is_ident_char(ch) {
                break;
            }
            self.advance(ch.len_utf8());
        }
        self.pos - start
    }

    /// Consume bytes while `pred` holds.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// The last `len` consumed bytes.
    pub(crate) fn read_back(&self, len: u32) -> &'a str {
        self.slice(self.pos.saturating_sub(len), self.pos)
    }

    /// Source text between two offsets; empty if they do not fall on
    /// character boundaries.
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        let end = end.min(self.len);
        self.src.get(start.min(end) as usize..end as usize).unwrap_or("")
    }
}

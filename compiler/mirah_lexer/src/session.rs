//! Incremental lexing session.
//!
//! A [`Lexer`] owns the scanner and an append-only log of the tokens it has
//! produced. Callers ask for "the token at offset P":
//!
//! - at or past the live cursor, the session scans forward;
//! - behind it, the log is searched for a token whose leading-trivia range
//!   covers P and that token is returned unchanged.
//!
//! [`Lexer::state`] and [`Lexer::restore`] let an editor resume lexing at a
//! line it re-lexes without replaying the file from the start.

use tracing::{debug, trace};

use crate::context::Context;
use crate::lex_error::{LexError, SessionError};
use crate::mode::ModeStack;
use crate::scanner::{ScanState, Scanner};
use crate::sink::{NullSink, TokenSink};
use crate::token::{Token, TokenKind};

/// Whether whitespace and comment tokens are returned to the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trivia {
    /// Skip them; the returned token's `pos` still covers them.
    #[default]
    Skip,
    /// Return them as tokens of their own.
    Keep,
}

// ─── Snapshots ──────────────────────────────────────────────────────────

/// Brace depths at or above this need a full snapshot.
const MAX_COMPACT_DEPTH: u32 = 0x20;

/// Contexts a compact snapshot can hold, indexed by their code.
const COMPACT_CONTEXTS: [Context; 5] = [
    Context::empty(),
    Context::BEG,
    Context::END,
    Context::ARG,
    Context::ARG.union(Context::SPACE_SEEN),
];

/// Snapshot of everything the scanner carries between tokens.
///
/// The common case (plain code, no pending heredocs, shallow braces, a
/// simple context) packs into one integer: the context code in the low
/// three bits and the brace depth above them. Anything else is a full copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexerState {
    Compact(u32),
    Full(Box<ScanState>),
}

impl LexerState {
    fn capture(state: &ScanState) -> Self {
        if state.modes.is_trivial(MAX_COMPACT_DEPTH) {
            let code = COMPACT_CONTEXTS
                .iter()
                .position(|&ctx| ctx == state.context)
                .and_then(|index| u32::try_from(index).ok());
            if let Some(code) = code {
                return LexerState::Compact(code | (state.modes.top().brace_depth << 3));
            }
        }
        LexerState::Full(Box::new(state.clone()))
    }

    fn to_scan_state(&self) -> ScanState {
        match self {
            LexerState::Compact(packed) => ScanState {
                modes: ModeStack::with_brace_depth((packed >> 3) & (MAX_COMPACT_DEPTH - 1)),
                context: COMPACT_CONTEXTS
                    .get((packed & 0x7) as usize)
                    .copied()
                    .unwrap_or_default(),
            },
            LexerState::Full(state) => (**state).clone(),
        }
    }

    /// Returns `true` for the packed form.
    pub fn is_compact(&self) -> bool {
        matches!(self, LexerState::Compact(_))
    }
}

// ─── Session ────────────────────────────────────────────────────────────

/// Incremental lexer over one source text.
pub struct Lexer<'a, S = NullSink> {
    scanner: Scanner<'a, S>,
    /// Non-empty tokens in scan order; `end` offsets strictly increase.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// A session with no sink.
    pub fn new(source: &'a str) -> Self {
        Self::with_sink(source, NullSink)
    }
}

impl<'a, S: TokenSink> Lexer<'a, S> {
    pub fn with_sink(source: &'a str, sink: S) -> Self {
        Self {
            scanner: Scanner::new(source, sink),
            tokens: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.scanner.cursor.source()
    }

    /// Offset of the live cursor.
    pub fn position(&self) -> u32 {
        self.scanner.cursor.pos()
    }

    /// Every token scanned so far (trivia only if it was kept).
    pub fn history(&self) -> &[Token] {
        &self.tokens
    }

    /// Mode stack and context at the live cursor.
    pub fn scan_state(&self) -> &ScanState {
        &self.scanner.state
    }

    pub fn sink(&self) -> &S {
        &self.scanner.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.scanner.sink
    }

    pub fn into_sink(self) -> S {
        self.scanner.sink
    }

    /// The token at `pos`, skipping trivia.
    ///
    /// # Errors
    ///
    /// See [`Lexer::lex_with`].
    pub fn lex(&mut self, pos: u32) -> Result<Token, SessionError> {
        self.lex_with(pos, Trivia::Skip)
    }

    /// The token at `pos`.
    ///
    /// At or past the cursor this scans forward from the cursor. Behind it,
    /// the logged token whose `pos..=start` range covers `pos` is returned
    /// as it was first built.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidReuse`] if `pos` is behind the cursor and no
    /// logged token covers it; [`SessionError::Lex`] if scanning fails.
    pub fn lex_with(&mut self, pos: u32, trivia: Trivia) -> Result<Token, SessionError> {
        let cursor = self.position();
        if pos < cursor {
            let cached = self
                .tokens
                .iter()
                .rev()
                .find(|token| token.pos <= pos && pos <= token.start);
            return match cached {
                Some(&token) => {
                    debug!(requested = pos, cursor, token = ?token.kind, "reusing logged token");
                    Ok(token)
                }
                None => Err(SessionError::InvalidReuse {
                    requested: pos,
                    cursor,
                }),
            };
        }
        if pos > cursor {
            debug!(
                requested = pos,
                cursor,
                len = self.scanner.cursor.len(),
                "request ahead of the cursor; scanning from the cursor"
            );
        }
        self.scan_forward(trivia).map_err(SessionError::from)
    }

    /// The next token after the cursor, skipping trivia.
    ///
    /// # Errors
    ///
    /// Returns the [`LexError`] if the source cannot be tokenized here.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.scan_forward(Trivia::Skip)
    }

    /// The next token after the cursor.
    ///
    /// # Errors
    ///
    /// Returns the [`LexError`] if the source cannot be tokenized here.
    pub fn next_token_with(&mut self, trivia: Trivia) -> Result<Token, LexError> {
        self.scan_forward(trivia)
    }

    fn scan_forward(&mut self, trivia: Trivia) -> Result<Token, LexError> {
        let pos = self.position();
        let (kind, start) = loop {
            let start = self.position();
            if !self.scanner.cursor.has_next() {
                break (self.scanner.end_of_input(), start);
            }
            let kind = self.scanner.scan()?;
            if trivia == Trivia::Keep || !kind.is_trivia() {
                break (kind, start);
            }
        };
        let token = Token::new(kind, pos, start, self.position());
        trace!(kind = ?token.kind, pos, start, end = token.end, "token");

        // Zero-width end-of-input tokens are rebuilt on every request.
        if !token.is_empty() {
            self.tokens.push(token);
        }
        self.scanner.sink.token_built(&token);
        Ok(token)
    }

    /// Snapshot of the scanner state at the cursor.
    pub fn state(&self) -> LexerState {
        LexerState::capture(&self.scanner.state)
    }

    /// Resume at `offset` with a snapshot taken there.
    ///
    /// Logged tokens ending after `offset` are dropped and the sink is
    /// rewound, since everything past it will be scanned again.
    pub fn restore(&mut self, offset: u32, state: &LexerState) {
        self.scanner.cursor.seek(offset);
        let offset = self.position();
        self.scanner.state = state.to_scan_state();
        let keep = self.tokens.partition_point(|token| token.end <= offset);
        self.tokens.truncate(keep);
        self.scanner.sink.rewind(offset);
        debug!(offset, kept = keep, compact = state.is_compact(), "restored lexer state");
    }
}

// ─── Whole-file helpers ─────────────────────────────────────────────────

/// Lex all of `source`, skipping trivia. The last token is [`TokenKind::Eof`].
///
/// # Errors
///
/// Returns the first [`LexError`].
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    collect(source, Trivia::Skip)
}

/// Lex all of `source`, including whitespace and comment tokens.
///
/// # Errors
///
/// Returns the first [`LexError`].
pub fn tokenize_with_trivia(source: &str) -> Result<Vec<Token>, LexError> {
    collect(source, Trivia::Keep)
}

fn collect(source: &str, trivia: Trivia) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::with_capacity(source.len() / 4 + 1);
    loop {
        let token = lexer.next_token_with(trivia)?;
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            return Ok(tokens);
        }
    }
}

//! Incremental, context-sensitive lexer for Mirah.
//!
//! Mirah has Ruby syntax, so several characters mean different things
//! depending on what came before them:
//! - `/` starts a regex at the beginning of an expression, and divides after
//!   a value (`(/x/` versus `a/2`).
//! - `<<` queues a heredoc in argument position, and shifts after a value.
//! - `?` starts a character literal unless whitespace or a longer name
//!   follows it.
//!
//! The lexer tracks that through a stack of sub-modes (code, strings,
//! regexes, heredoc bodies, interpolations) and a small set of context
//! flags describing the previous token.
//!
//! # Incremental use
//!
//! [`Lexer`] is built for editors that re-lex as the user types. It keeps a
//! log of the tokens it has produced, returns logged tokens for offsets it
//! has already passed, and can snapshot its state ([`Lexer::state`]) so a
//! later [`Lexer::restore`] resumes mid-file.
//!
//! ```text
//! let mut lexer = Lexer::new("class X; end");
//! let class = lexer.lex(0)?;            // <Token Class: 'class'>
//! let name = lexer.lex(class.end)?;     // <Token Constant: 'X'>
//! ```
//!
//! For whole files, [`tokenize`] returns every token up to and including
//! [`TokenKind::Eof`].

mod context;
mod cursor;
pub mod keywords;
mod lex_error;
mod mode;
mod scanner;
mod session;
mod sink;
mod token;

pub use context::Context;
pub use lex_error::{LexError, SessionError};
pub use mode::{Frame, Heredoc, Mode, ModeStack};
pub use scanner::ScanState;
pub use session::{tokenize, tokenize_with_trivia, Lexer, LexerState, Trivia};
pub use sink::{LineTable, NullSink, TokenSink};
pub use token::{Token, TokenKind};

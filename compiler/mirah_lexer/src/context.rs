//! Grammatical context of the previous token.
//!
//! Three fixed membership tables classify each non-trivia token:
//!
//! - **BEG**: an expression may start next (`(`, operators, `if`, ...).
//! - **ARG**: a name just ended in a position where it may take an argument.
//! - **END**: a value just ended; a binary operator is expected.
//!
//! The classifier consults the flags only for `/` (regex or division) and
//! `<<` (heredoc or shift).

use bitflags::bitflags;

use crate::token::TokenKind;

bitflags! {
    /// Context flags carried between tokens.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Context: u8 {
        const BEG = 1 << 0;
        const ARG = 1 << 1;
        const END = 1 << 2;
        /// Whitespace or a comment preceded the upcoming token.
        const SPACE_SEEN = 1 << 3;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::BEG
    }
}

impl Context {
    /// Context after a whitespace or comment token: flags from the last real
    /// token are kept, and space is noted.
    #[must_use]
    pub fn after_trivia(self) -> Self {
        self | Self::SPACE_SEEN
    }

    /// Context after a non-trivia token.
    pub fn after_token(kind: TokenKind) -> Self {
        let mut ctx = Self::empty();
        ctx.set(Self::BEG, begins_expression(kind));
        ctx.set(Self::ARG, takes_argument(kind));
        ctx.set(Self::END, ends_value(kind));
        ctx
    }

    #[inline]
    pub fn is_beg(self) -> bool {
        self.contains(Self::BEG)
    }

    #[inline]
    pub fn is_arg(self) -> bool {
        self.contains(Self::ARG)
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self.contains(Self::END)
    }

    #[inline]
    pub fn space_seen(self) -> bool {
        self.contains(Self::SPACE_SEEN)
    }
}

/// BEG membership: operators, openers, separators and the keywords that
/// introduce an expression.
pub(crate) fn begins_expression(kind: TokenKind) -> bool {
    use TokenKind as K;
    matches!(
        kind,
        K::Bang
            | K::Ne
            | K::Nee
            | K::NMatch
            | K::Lt
            | K::Le
            | K::Leg
            | K::LShift
            | K::Gt
            | K::Ge
            | K::RShift
            | K::RRShift
            | K::Eq
            | K::EEq
            | K::EEEq
            | K::Match
            | K::Rocket
            | K::Amper
            | K::Ampers
            | K::AndEq
            | K::Pipe
            | K::Pipes
            | K::OrEq
            | K::Star
            | K::Stars
            | K::Plus
            | K::Minus
            | K::Percent
            | K::Caret
            | K::Tilde
            | K::Slash
            | K::OpAssign
            | K::Question
            | K::Comma
            | K::Semi
            | K::Colon
            | K::Dots
            | K::LParen
            | K::LBrack
            | K::LBrace
            | K::NewLine
            | K::StrEvBegin
            | K::Else
            | K::Case
            | K::Ensure
            | K::Elsif
            | K::Not
            | K::Then
            | K::For
            | K::Return
            | K::If
            | K::In
            | K::Do
            | K::Until
            | K::Unless
            | K::Or
            | K::When
            | K::And
            | K::Begin
            | K::While
    )
}

/// ARG membership: names that may be method calls taking an argument.
pub(crate) fn takes_argument(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Super
            | TokenKind::Yield
            | TokenKind::Identifier
            | TokenKind::Constant
            | TokenKind::Fid
    )
}

/// END membership: literals, variables, closers and value keywords.
pub(crate) fn ends_value(kind: TokenKind) -> bool {
    use TokenKind as K;
    matches!(
        kind,
        K::Dot
            | K::Character
            | K::SQuote
            | K::DQuote
            | K::RParen
            | K::RBrace
            | K::RBrack
            | K::RegexEnd
            | K::StrEvEnd
            | K::HeredocId
            | K::HeredocEnd
            | K::Integer
            | K::Float
            | K::InstVar
            | K::ClassVar
            | K::Global
            | K::End
            | K::SelfKw
            | K::False
            | K::True
            | K::Retry
            | K::Break
            | K::Nil
            | K::Next
            | K::Redo
            | K::Class
            | K::Def
    )
}

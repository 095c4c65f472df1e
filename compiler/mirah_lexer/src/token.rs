//! Token kinds and positioned tokens.
//!
//! [`TokenKind`] is a closed, one-byte enumeration. Declaration order carries
//! no meaning: the groupings the lexer relies on are the explicit predicates
//! [`TokenKind::is_keyword`], [`TokenKind::is_name_like`] and
//! [`TokenKind::is_trivia`].

use std::fmt;

/// Classification of a scanned token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === End of input & trivia ===
    Eof,
    Whitespace,
    Comment,
    /// Block comment opened with `/**`.
    DocComment,

    // === Keywords ===
    /// `BEGIN`
    BeginBlock,
    /// `END`
    EndBlock,
    /// `__ENCODING__`
    Encoding,
    /// `__FILE__`
    File,
    /// `__LINE__`
    Line,
    Alias,
    And,
    Begin,
    Break,
    Case,
    Class,
    Def,
    Defined,
    Defmacro,
    Do,
    Else,
    Elsif,
    End,
    Ensure,
    False,
    For,
    If,
    Implements,
    Import,
    In,
    Interface,
    Macro,
    Module,
    Next,
    Nil,
    Not,
    Or,
    Package,
    Raise,
    Redo,
    Rescue,
    Retry,
    Return,
    /// `self`
    SelfKw,
    Super,
    Then,
    True,
    Undef,
    Unless,
    Until,
    When,
    While,
    Yield,

    // === Names ===
    /// `@@name`
    ClassVar,
    /// `@name`
    InstVar,
    /// `$name`
    Global,
    Constant,
    Identifier,
    /// Identifier ending in `?` or `!`.
    Fid,
    /// `` @@` ``
    ClassVarBacktick,
    /// `` @` ``
    InstVarBacktick,
    /// `@` not followed by a name.
    At,
    /// `$` not followed by a name.
    Dollar,

    // === Literals ===
    Integer,
    Float,
    /// `?a`, `?\n`
    Character,

    // === String, regex & heredoc markers ===
    SQuote,
    DQuote,
    StringContent,
    Escape,
    /// `#{`, or the `#` of `#@`.
    StrEvBegin,
    /// `}` closing an interpolation.
    StrEvEnd,
    RegexBegin,
    /// Closing `/` plus trailing flags.
    RegexEnd,
    /// `<<EOS`, `<<-EOS`, `<<'EOS'`, `<<"EOS"`
    HeredocId,
    /// Newline that starts a queued heredoc body.
    HeredocBegin,
    /// The terminator line of a heredoc.
    HeredocEnd,

    // === Operators ===
    /// `!`
    Bang,
    /// `!=`
    Ne,
    /// `!==`
    Nee,
    /// `!~`
    NMatch,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `<=>`
    Leg,
    /// `<<`
    LShift,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `>>`
    RShift,
    /// `>>>`
    RRShift,
    /// `=`
    Eq,
    /// `==`
    EEq,
    /// `===`
    EEEq,
    /// `=~`
    Match,
    /// `=>`
    Rocket,
    /// `&`
    Amper,
    /// `&&`
    Ampers,
    /// `&&=`
    AndEq,
    /// `|`
    Pipe,
    /// `||`
    Pipes,
    /// `||=`
    OrEq,
    /// `*`
    Star,
    /// `**`
    Stars,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `` ` ``
    Backtick,
    /// `/`
    Slash,
    /// Compound assignment: `+=`, `<<=`, `**=`, ...
    OpAssign,
    /// `?`
    Question,

    // === Punctuation ===
    Comma,
    Semi,
    Colon,
    /// `::`
    Colons,
    Dot,
    /// `..`
    Dots,
    LParen,
    RParen,
    LBrack,
    RBrack,
    LBrace,
    RBrace,
    NewLine,

    /// Anything the lexer cannot classify.
    Unknown,
}

impl TokenKind {
    /// Keywords.
    ///
    /// A keyword match followed by another identifier character is rejected
    /// and rescanned as an identifier (`definedx`).
    pub fn is_keyword(self) -> bool {
        use TokenKind::{
            Alias, And, Begin, BeginBlock, Break, Case, Class, Def, Defined, Defmacro, Do, Else,
            Elsif, Encoding, End, EndBlock, Ensure, False, File, For, If, Implements, Import, In,
            Interface, Line, Macro, Module, Next, Nil, Not, Or, Package, Raise, Redo, Rescue,
            Retry, Return, SelfKw, Super, Then, True, Undef, Unless, Until, When, While, Yield,
        };
        matches!(
            self,
            BeginBlock
                | EndBlock
                | Encoding
                | File
                | Line
                | Alias
                | And
                | Begin
                | Break
                | Case
                | Class
                | Def
                | Defined
                | Defmacro
                | Do
                | Else
                | Elsif
                | End
                | Ensure
                | False
                | For
                | If
                | Implements
                | Import
                | In
                | Interface
                | Macro
                | Module
                | Next
                | Nil
                | Not
                | Or
                | Package
                | Raise
                | Redo
                | Rescue
                | Retry
                | Return
                | SelfKw
                | Super
                | Then
                | True
                | Undef
                | Unless
                | Until
                | When
                | While
                | Yield
        )
    }

    /// Kinds that continue through identifier characters and may end in a
    /// `?`/`!` suffix.
    pub fn is_name_like(self) -> bool {
        self.is_keyword()
            || matches!(
                self,
                TokenKind::ClassVar
                    | TokenKind::InstVar
                    | TokenKind::Global
                    | TokenKind::Constant
                    | TokenKind::Identifier
                    | TokenKind::Fid
            )
    }

    /// Whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Fixed source text of this kind, if it has one.
    pub fn lexeme(self) -> Option<&'static str> {
        use TokenKind as K;
        let text = match self {
            K::BeginBlock => "BEGIN",
            K::EndBlock => "END",
            K::Encoding => "__ENCODING__",
            K::File => "__FILE__",
            K::Line => "__LINE__",
            K::Alias => "alias",
            K::And => "and",
            K::Begin => "begin",
            K::Break => "break",
            K::Case => "case",
            K::Class => "class",
            K::Def => "def",
            K::Defined => "defined",
            K::Defmacro => "defmacro",
            K::Do => "do",
            K::Else => "else",
            K::Elsif => "elsif",
            K::End => "end",
            K::Ensure => "ensure",
            K::False => "false",
            K::For => "for",
            K::If => "if",
            K::Implements => "implements",
            K::Import => "import",
            K::In => "in",
            K::Interface => "interface",
            K::Macro => "macro",
            K::Module => "module",
            K::Next => "next",
            K::Nil => "nil",
            K::Not => "not",
            K::Or => "or",
            K::Package => "package",
            K::Raise => "raise",
            K::Redo => "redo",
            K::Rescue => "rescue",
            K::Retry => "retry",
            K::Return => "return",
            K::SelfKw => "self",
            K::Super => "super",
            K::Then => "then",
            K::True => "true",
            K::Undef => "undef",
            K::Unless => "unless",
            K::Until => "until",
            K::When => "when",
            K::While => "while",
            K::Yield => "yield",
            K::ClassVarBacktick => "@@`",
            K::InstVarBacktick => "@`",
            K::At => "@",
            K::Dollar => "$",
            K::SQuote => "'",
            K::DQuote => "\"",
            K::RegexBegin => "/",
            K::Bang => "!",
            K::Ne => "!=",
            K::Nee => "!==",
            K::NMatch => "!~",
            K::Lt => "<",
            K::Le => "<=",
            K::Leg => "<=>",
            K::LShift => "<<",
            K::Gt => ">",
            K::Ge => ">=",
            K::RShift => ">>",
            K::RRShift => ">>>",
            K::Eq => "=",
            K::EEq => "==",
            K::EEEq => "===",
            K::Match => "=~",
            K::Rocket => "=>",
            K::Amper => "&",
            K::Ampers => "&&",
            K::AndEq => "&&=",
            K::Pipe => "|",
            K::Pipes => "||",
            K::OrEq => "||=",
            K::Star => "*",
            K::Stars => "**",
            K::Plus => "+",
            K::Minus => "-",
            K::Percent => "%",
            K::Caret => "^",
            K::Tilde => "~",
            K::Backtick => "`",
            K::Slash => "/",
            K::Question => "?",
            K::Comma => ",",
            K::Semi => ";",
            K::Colon => ":",
            K::Colons => "::",
            K::Dot => ".",
            K::Dots => "..",
            K::LParen => "(",
            K::RParen => ")",
            K::LBrack => "[",
            K::RBrack => "]",
            K::LBrace => "{",
            K::RBrace | K::StrEvEnd => "}",
            K::NewLine => "\n",
            K::Eof
            | K::Whitespace
            | K::Comment
            | K::DocComment
            | K::ClassVar
            | K::InstVar
            | K::Global
            | K::Constant
            | K::Identifier
            | K::Fid
            | K::Integer
            | K::Float
            | K::Character
            | K::StringContent
            | K::Escape
            | K::StrEvBegin
            | K::RegexEnd
            | K::HeredocId
            | K::HeredocBegin
            | K::HeredocEnd
            | K::OpAssign
            | K::Unknown => return None,
        };
        Some(text)
    }

    /// Human-readable name for messages: the fixed text in backticks when
    /// there is one, otherwise a short description.
    pub fn display_name(self) -> String {
        use TokenKind as K;
        let name = match self {
            K::Eof => "end of input",
            K::Whitespace => "whitespace",
            K::Comment => "comment",
            K::DocComment => "doc comment",
            K::ClassVar => "class variable",
            K::InstVar => "instance variable",
            K::Global => "global variable",
            K::Constant => "constant",
            K::Identifier => "identifier",
            K::Fid => "method name",
            K::Integer => "integer literal",
            K::Float => "float literal",
            K::Character => "character literal",
            K::StringContent => "string content",
            K::Escape => "escape sequence",
            K::StrEvBegin => "interpolation",
            K::RegexEnd => "end of regex",
            K::HeredocId => "heredoc marker",
            K::HeredocBegin => "heredoc body",
            K::HeredocEnd => "heredoc terminator",
            K::OpAssign => "assignment operator",
            K::NewLine => "newline",
            K::Unknown => "unknown token",
            K::BeginBlock
            | K::EndBlock
            | K::Encoding
            | K::File
            | K::Line
            | K::Alias
            | K::And
            | K::Begin
            | K::Break
            | K::Case
            | K::Class
            | K::Def
            | K::Defined
            | K::Defmacro
            | K::Do
            | K::Else
            | K::Elsif
            | K::End
            | K::Ensure
            | K::False
            | K::For
            | K::If
            | K::Implements
            | K::Import
            | K::In
            | K::Interface
            | K::Macro
            | K::Module
            | K::Next
            | K::Nil
            | K::Not
            | K::Or
            | K::Package
            | K::Raise
            | K::Redo
            | K::Rescue
            | K::Retry
            | K::Return
            | K::SelfKw
            | K::Super
            | K::Then
            | K::True
            | K::Undef
            | K::Unless
            | K::Until
            | K::When
            | K::While
            | K::Yield
            | K::ClassVarBacktick
            | K::InstVarBacktick
            | K::At
            | K::Dollar
            | K::SQuote
            | K::DQuote
            | K::RegexBegin
            | K::Bang
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
            | K::Backtick
            | K::Slash
            | K::Question
            | K::Comma
            | K::Semi
            | K::Colon
            | K::Colons
            | K::Dot
            | K::Dots
            | K::LParen
            | K::RParen
            | K::LBrack
            | K::RBrack
            | K::LBrace
            | K::RBrace
            | K::StrEvEnd => {
                return format!("`{}`", self.lexeme().unwrap_or_default());
            }
        };
        name.to_owned()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// A classified span of source.
///
/// `pos` is where the request began (before any skipped whitespace or
/// comments), `start` where the token itself begins, `end` one past its last
/// byte. All offsets are byte offsets into the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub pos: u32,
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
const _: () = assert!(std::mem::size_of::<Token>() == 16);

impl Token {
    pub const fn new(kind: TokenKind, pos: u32, start: u32, end: u32) -> Self {
        Self {
            kind,
            pos,
            start,
            end,
        }
    }

    /// Length of the token itself, excluding leading trivia.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// The token's text.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }

    /// The token's text including the whitespace and comments skipped
    /// before it.
    pub fn full_text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.pos as usize..self.end as usize).unwrap_or("")
    }

    /// Debug dump in the form `<Token Class: 'class'>`.
    pub fn describe(&self, source: &str) -> String {
        format!("<Token {:?}: '{}'>", self.kind, self.text(source))
    }
}

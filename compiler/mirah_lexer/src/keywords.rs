//! Keyword table.
//!
//! Keywords are grouped by their first byte. Each group is an ordered list
//! of `(rest, kind)` alternatives, tried in order against the text after the
//! first byte; the first one the input continues with wins. Order matters
//! where one alternative is a prefix of another (`defined`, `defmacro` and
//! `def` all start with `d`+`ef`), so longer spellings come first.
//!
//! A match is only a *candidate*: the scanner rejects it when another
//! identifier character follows.

use crate::token::TokenKind;

type Group = &'static [(&'static str, TokenKind)];

/// Keyword alternatives for words starting with `first`.
pub(crate) fn candidates(first: u8) -> Group {
    use TokenKind as K;
    match first {
        b'_' => &[
            ("_ENCODING__", K::Encoding),
            ("_FILE__", K::File),
            ("_LINE__", K::Line),
        ],
        b'B' => &[("EGIN", K::BeginBlock)],
        b'E' => &[("ND", K::EndBlock)],
        b'a' => &[("lias", K::Alias), ("nd", K::And)],
        b'b' => &[("egin", K::Begin), ("reak", K::Break)],
        b'c' => &[("ase", K::Case), ("lass", K::Class)],
        b'd' => &[
            ("efined", K::Defined),
            ("efmacro", K::Defmacro),
            ("ef", K::Def),
            ("o", K::Do),
        ],
        b'e' => &[
            ("lse", K::Else),
            ("lsif", K::Elsif),
            ("nd", K::End),
            ("nsure", K::Ensure),
        ],
        b'f' => &[("alse", K::False), ("or", K::For)],
        b'i' => &[
            ("f", K::If),
            ("mplements", K::Implements),
            ("mport", K::Import),
            ("nterface", K::Interface),
            ("n", K::In),
        ],
        b'm' => &[("acro", K::Macro), ("odule", K::Module)],
        b'n' => &[("ext", K::Next), ("il", K::Nil), ("ot", K::Not)],
        b'o' => &[("r", K::Or)],
        b'p' => &[("ackage", K::Package)],
        b'r' => &[
            ("aise", K::Raise),
            ("edo", K::Redo),
            ("escue", K::Rescue),
            ("etry", K::Retry),
            ("eturn", K::Return),
        ],
        b's' => &[("elf", K::SelfKw), ("uper", K::Super)],
        b't' => &[("hen", K::Then), ("rue", K::True)],
        b'u' => &[("ndef", K::Undef), ("nless", K::Unless), ("ntil", K::Until)],
        b'w' => &[("hen", K::When), ("hile", K::While)],
        b'y' => &[("ield", K::Yield)],
        _ => &[],
    }
}

/// Look up a whole word.
///
/// Returns `None` for anything that is not exactly a keyword, including
/// words that merely start with one.
pub fn lookup(word: &str) -> Option<TokenKind> {
    let (&first, rest) = word.as_bytes().split_first()?;
    candidates(first)
        .iter()
        .find(|(tail, _)| tail.as_bytes() == rest)
        .map(|&(_, kind)| kind)
}

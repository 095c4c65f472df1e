//! End-to-end tests through the public API.

#![allow(clippy::unwrap_used, reason = "tests can panic")]

use mirah_lexer::{
    keywords, tokenize, LexError, Lexer, LineTable, SessionError, Token, TokenKind,
};
use pretty_assertions::assert_eq;

/// Route lexer traces to the test output; `RUST_LOG=mirah_lexer=trace`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn dump(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .iter()
        .map(|token| token.describe(source))
        .collect()
}

#[test]
fn class_declaration_dump() {
    init_tracing();
    assert_eq!(
        dump("class X; end"),
        [
            "<Token Class: 'class'>",
            "<Token Constant: 'X'>",
            "<Token Semi: ';'>",
            "<Token End: 'end'>",
            "<Token Eof: ''>",
        ]
    );
}

#[test]
fn method_with_interpolated_string() {
    init_tracing();
    let source = "def greet(name:String)\n  puts \"Hi #{name}\"\nend\n";
    assert_eq!(
        kinds(source),
        [
            TokenKind::Def,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Constant,
            TokenKind::RParen,
            TokenKind::NewLine,
            TokenKind::Identifier,
            TokenKind::DQuote,
            TokenKind::StringContent,
            TokenKind::StrEvBegin,
            TokenKind::Identifier,
            TokenKind::StrEvEnd,
            TokenKind::DQuote,
            TokenKind::NewLine,
            TokenKind::End,
            TokenKind::NewLine,
            TokenKind::Eof,
        ]
    );
    let content = tokenize(source)
        .unwrap()
        .into_iter()
        .find(|token| token.kind == TokenKind::StringContent)
        .unwrap();
    assert_eq!(content.text(source), "Hi ");
}

#[test]
fn interpolation_yields_nine_tokens() {
    assert_eq!(
        kinds("\"a#{1+1}b\""),
        [
            TokenKind::DQuote,
            TokenKind::StringContent,
            TokenKind::StrEvBegin,
            TokenKind::Integer,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::StrEvEnd,
            TokenKind::StringContent,
            TokenKind::DQuote,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn regex_or_division() {
    assert_eq!(
        kinds("(/x/"),
        [
            TokenKind::LParen,
            TokenKind::RegexBegin,
            TokenKind::StringContent,
            TokenKind::RegexEnd,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("a/2"),
        [TokenKind::Identifier, TokenKind::Slash, TokenKind::Integer, TokenKind::Eof]
    );
}

#[test]
fn indented_heredoc() {
    let source = "<<-EOS\n  hi\n  EOS\n";
    let tokens = tokenize(source).unwrap();
    let texts: Vec<_> = tokens
        .iter()
        .map(|token| (token.kind, token.text(source)))
        .collect();
    assert_eq!(
        texts,
        [
            (TokenKind::HeredocId, "<<-EOS"),
            (TokenKind::HeredocBegin, "\n"),
            (TokenKind::StringContent, "  hi\n"),
            (TokenKind::HeredocEnd, "  EOS"),
            (TokenKind::NewLine, "\n"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn keyword_prefixes() {
    assert_eq!(kinds("defined"), [TokenKind::Defined, TokenKind::Eof]);
    assert_eq!(kinds("definedx"), [TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(keywords::lookup("defmacro"), Some(TokenKind::Defmacro));
    assert_eq!(keywords::lookup("definedx"), None);
    assert_eq!(keywords::lookup(""), None);
}

#[test]
fn numbers() {
    assert_eq!(kinds("0x1A"), [TokenKind::Integer, TokenKind::Eof]);
    assert_eq!(kinds("3.14"), [TokenKind::Float, TokenKind::Eof]);
    assert_eq!(kinds("3."), [TokenKind::Integer, TokenKind::Dot, TokenKind::Eof]);
}

#[test]
fn unterminated_comment_is_an_error() {
    let err = tokenize("x = 1 /* never closed").unwrap_err();
    assert_eq!(err.offset(), 6);
    assert_eq!(
        err.to_string(),
        "unterminated comment starting at offset 6: expected `*/`"
    );
    let LexError::UnterminatedComment { text, .. } = err;
    assert_eq!(&*text, "x = 1 /* never closed");
}

#[test]
fn unknown_characters_do_not_stop_lexing() {
    assert_eq!(
        kinds("a \u{2603} b"),
        [TokenKind::Identifier, TokenKind::Unknown, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn editor_session() {
    init_tracing();
    let source = "xs = 1\ny = xs + 2\n";
    let mut lexer = Lexer::with_sink(source, LineTable::new());

    let mut pos = 0;
    let mut seen = Vec::new();
    loop {
        let token = lexer.lex(pos).unwrap();
        if token.kind == TokenKind::Eof {
            break;
        }
        seen.push(token);
        pos = token.end;
    }
    assert_eq!(seen.len(), 10);

    // Going back returns the logged token.
    let y = seen[4];
    assert_eq!(y.text(source), "y");
    assert_eq!(lexer.lex(y.pos).unwrap(), y);

    let lines = lexer.sink();
    assert_eq!(lines.line_count(), 3);
    assert_eq!(lines.line_col(source, y.start), (2, 1));
    assert_eq!(seen[6].text(source), "xs");
    assert_eq!(lines.line_col(source, seen[6].start), (2, 5));

    assert!(matches!(
        lexer.lex(1),
        Err(SessionError::InvalidReuse { requested: 1, .. })
    ));
}

#[test]
fn token_display_names() {
    assert_eq!(TokenKind::Def.to_string(), "`def`");
    assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    assert_eq!(TokenKind::NewLine.to_string(), "newline");
    assert_eq!(
        Token::new(TokenKind::Identifier, 0, 1, 4).describe(" foo"),
        "<Token Identifier: 'foo'>"
    );
}

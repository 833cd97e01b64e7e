use logos::Logos;
use std::fmt;

use crate::Span;

/// Token grammar for the reader.
///
/// Whitespace and commas are interchangeable separators and are skipped, as
/// are comments (`;` to end of line), so neither ever reaches the parser.
/// Everything that is not a structural token is lexed as a raw `Atom` and
/// classified later by the reader; that includes string literals, which are
/// kept verbatim (quotes and all) so an unterminated literal degrades to an
/// odd atom instead of a lexer failure.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[\s,]+")] // Whitespace and commas are both separators
#[logos(skip r";[^\n\r]*")] // Comments run to end of line
pub enum TokenKind {
    #[token("~@")]
    SpliceUnquote,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("'")]
    Quote,
    #[token("`")]
    Quasiquote,
    #[token("~")]
    Unquote,
    #[token("@")]
    Deref,
    // `{`, `}` and `^` tokenize alone but have no structural meaning here;
    // the reader classifies them as symbols.
    #[token("{", |lex| lex.slice().to_string())]
    #[token("}", |lex| lex.slice().to_string())]
    #[token("^", |lex| lex.slice().to_string())]
    // A string literal: escaped pairs or plain characters, with an OPTIONAL
    // closing quote so an unterminated literal captures the rest of the
    // input as one token rather than erroring.
    #[regex(r#""(?:\\.|[^\\"])*"?"#, |lex| lex.slice().to_string())]
    // A bare atom. The first character additionally excludes `~ @ ^`: at a
    // token boundary those lex as their own tokens, but they may appear
    // inside an atom (`a~b` is one atom, `~b` is two tokens).
    #[regex(r#"[^\s\[\]{}()'"`,;~@^][^\s\[\]{}()'"`,;]*"#, |lex| lex.slice().to_string())]
    Atom(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

// Display renders the exact source text of the token.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::SpliceUnquote => write!(f, "~@"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::Quote => write!(f, "'"),
            TokenKind::Quasiquote => write!(f, "`"),
            TokenKind::Unquote => write!(f, "~"),
            TokenKind::Deref => write!(f, "@"),
            TokenKind::Atom(s) => write!(f, "{}", s),
        }
    }
}

/// Tokenize a line of source. Pure and infallible: every character either
/// belongs to a skip pattern or to some token rule, so the lexer's error
/// variant is unreachable and malformed input degrades to odd atoms.
pub fn tokenize(input: &str) -> Vec<Token> {
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, range)| {
            result.ok().map(|kind| Token {
                kind,
                span: Span {
                    start: range.start,
                    end: range.end,
                },
            })
        })
        .collect()
}

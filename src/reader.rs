use thiserror::Error;

use crate::Span;
use crate::lexer::{Token, TokenKind, tokenize};
use crate::types::Value;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadError {
    /// The token stream ended before a list or vector was closed. Carries
    /// the delimiter that was expected and the span of the opening token.
    #[error("expected '{expected}', got EOF")]
    UnterminatedForm { expected: TokenKind, open_span: Span },
}

// Result type alias for convenience
pub type ReadResult<T> = Result<T, ReadError>;

/// A forward-only cursor over the token stream. One position counter, no
/// rewinding, no random access: the recursion in `read_form` is the only
/// source of structure. Each parse invocation gets its own `Reader`; they
/// are never shared or reused.
pub struct Reader {
    tokens: Vec<Token>,
    pos: usize,
}

impl Reader {
    pub fn new(tokens: Vec<Token>) -> Self {
        Reader { tokens, pos: 0 }
    }

    /// The token at the current position, or `None` at end of input.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// What `peek` would return, advancing past it if it was a real token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}

/// Tokenize a line of source and read one form from it.
pub fn read_str(input: &str) -> ReadResult<Value> {
    let mut reader = Reader::new(tokenize(input));
    read_form(&mut reader)
}

/// Consume exactly one complete form (including any nested sub-forms) from
/// the cursor and return it. End of input at the top level is not an error;
/// it reads as `Nil`.
pub fn read_form(r: &mut Reader) -> ReadResult<Value> {
    let Some(token) = r.next() else {
        return Ok(Value::Nil);
    };
    match token.kind {
        TokenKind::LParen => read_seq(r, token.span, TokenKind::RParen, Value::List),
        TokenKind::LBracket => read_seq(r, token.span, TokenKind::RBracket, Value::Vector),
        TokenKind::Quote => read_wrapped(r, "quote"),
        TokenKind::Quasiquote => read_wrapped(r, "quasiquote"),
        TokenKind::Unquote => read_wrapped(r, "unquote"),
        TokenKind::SpliceUnquote => read_wrapped(r, "splice-unquote"),
        TokenKind::Deref => read_wrapped(r, "deref"),
        // A stray closing delimiter has no structural case; like any other
        // unrecognized token it falls through to classification.
        TokenKind::RParen | TokenKind::RBracket => Ok(read_atom(&token.kind.to_string())),
        TokenKind::Atom(text) => Ok(read_atom(&text)),
    }
}

/// Shared collection routine for lists and vectors. The two differ only in
/// closing delimiter and final constructor, so both are parameters.
fn read_seq(
    r: &mut Reader,
    open_span: Span,
    close: TokenKind,
    build: fn(Vec<Value>) -> Value,
) -> ReadResult<Value> {
    let mut items = Vec::new();
    loop {
        let at_close = match r.peek() {
            None => {
                return Err(ReadError::UnterminatedForm {
                    expected: close,
                    open_span,
                });
            }
            Some(token) => token.kind == close,
        };
        if at_close {
            r.next();
            return Ok(build(items));
        }
        items.push(read_form(r)?);
    }
}

/// Desugar a reader-macro prefix into `(<name> <form>)`. The recursive read
/// result is carried as-is, including `Nil` when the prefix is the last
/// token, and errors propagate unmasked.
fn read_wrapped(r: &mut Reader, name: &str) -> ReadResult<Value> {
    let form = read_form(r)?;
    Ok(Value::List(vec![Value::symbol(name), form]))
}

/// Classify a non-structural token. Pure, total: the fallback chain is
/// bool literal, then string literal, then i64, then f64, and everything
/// else is a symbol.
pub fn read_atom(token: &str) -> Value {
    match token {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    // At least two characters, so a single stray quote stays a symbol.
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        return Value::Str(token[1..token.len() - 1].to_string());
    }
    if let Ok(n) = token.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(x) = token.parse::<f64>() {
        return Value::Float(x);
    }
    Value::Symbol(token.to_string())
}

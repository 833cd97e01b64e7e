// Declare modules publicly so they are part of the library interface
pub mod lexer;
pub mod pretty_print;
pub mod reader;
pub mod source;
pub mod types;

pub use lexer::{Token, TokenKind, tokenize};
pub use reader::{ReadError, Reader, read_atom, read_form, read_str};
pub use source::Span;
pub use types::{Value, pr_str};

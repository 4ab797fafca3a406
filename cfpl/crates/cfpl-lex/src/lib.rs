//! cfpl-lex - Lexical analyzer for CFPL source text.
//!
//! The lexer turns source text into a linear stream of [`Token`]s, each
//! tagged with the 1-based line it was scanned on. Newlines and comments
//! are tokens in their own right: the parser uses them as statement
//! separators rather than throwing them away here.
//!
//! The one context-sensitive rule lives in this crate: a `*` that is the
//! first non-whitespace character of a line opens a comment running to the
//! end of that line, while a `*` anywhere else is the multiplication
//! operator.

pub mod cursor;
pub mod token;

mod edge_cases;
mod lexer;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use cfpl_util::Result;

/// Tokenizes a complete source text.
///
/// Convenience wrapper around [`Lexer::tokenize`]. The returned stream
/// always ends with an EOF token. The first lexical error aborts scanning.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}

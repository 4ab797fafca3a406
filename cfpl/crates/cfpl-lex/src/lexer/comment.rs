//! Comment lexing.
//!
//! A `*` that is the first non-whitespace character of a line opens a
//! comment running to the end of that line. The comment becomes a token
//! (rather than being dropped) so the parser can treat it like a newline
//! when separating statements.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `* …` comment line.
    ///
    /// The cursor sits on the `*`. Everything up to, but not including,
    /// the next `\n` is consumed; the payload is the text after the `*`.
    pub(crate) fn lex_comment(&mut self) -> Token {
        let line = self.cursor.line();
        self.cursor.advance();

        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }

        Token::new(
            TokenKind::Comment(self.cursor.slice_from(start).to_string()),
            line,
        )
    }
}

//! Lexer module.
//!
//! The implementation is split into focused components:
//! - `mod` - the `Lexer` struct and per-character dispatch
//! - `identifier` - identifiers and keywords
//! - `number` - integer and float literals
//! - `string` - string and character literals
//! - `operator` - operators and delimiters
//! - `comment` - line comments

mod comment;
mod identifier;
mod number;
mod operator;
mod string;

use cfpl_util::Result;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for CFPL source text.
///
/// Scans tokens on demand with [`Lexer::next_token`], or all at once with
/// [`Lexer::tokenize`]. Spaces, tabs, and carriage returns are skipped;
/// newlines and comments become tokens because the parser treats them as
/// statement separators.
pub struct Lexer<'a> {
    /// Character cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// True when no token has been produced yet on the current line.
    /// Decides whether a `*` opens a comment or multiplies.
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            at_line_start: true,
        }
    }

    /// Scans the whole source, returning the token stream terminated by an
    /// EOF token. The first lexical error aborts scanning.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Returns the next token from the source.
    ///
    /// # Errors
    ///
    /// Fails on an unexpected character, an unterminated string, or an
    /// ill-formed character literal, reporting the line being scanned.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_blank();

        let token = if self.cursor.is_at_end() {
            Token::new(TokenKind::Eof, self.cursor.line())
        } else {
            match self.cursor.current_char() {
                '*' if self.at_line_start => self.lex_comment(),
                '\n' => {
                    self.cursor.advance();
                    // The newline token belongs to the line it terminates.
                    Token::new(TokenKind::Newline, self.cursor.line() - 1)
                }
                '"' => self.lex_string()?,
                '\'' => self.lex_character()?,
                c if c.is_ascii_digit() => self.lex_number()?,
                c if c.is_alphabetic() || c == '_' => self.lex_identifier(),
                _ => self.lex_operator()?,
            }
        };

        self.at_line_start = token.kind == TokenKind::Newline;
        Ok(token)
    }

    /// Skips spaces, tabs, and carriage returns, but not newlines.
    fn skip_blank(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\r') {
            self.cursor.advance();
        }
    }
}

//! String and character literal lexing.
//!
//! Both literal forms are read verbatim: CFPL strings have no lex-time
//! escapes (the `[#]` / `[[` / `]]` sequences are decoded at OUTPUT time),
//! and neither form may span lines.

use cfpl_util::{CfplError, Result};

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"…"` string literal.
    ///
    /// # Errors
    ///
    /// Fails if a newline or the end of input arrives before the closing
    /// quote.
    pub(crate) fn lex_string(&mut self) -> Result<Token> {
        let line = self.cursor.line();
        let content = self.read_quoted('"', line, "string")?;
        Ok(Token::new(TokenKind::Str(content), line))
    }

    /// Lexes a `'x'` character literal.
    ///
    /// # Errors
    ///
    /// Fails on an unterminated literal, and on contents that are not
    /// exactly one code point (`''` and `'ab'` are both rejected).
    pub(crate) fn lex_character(&mut self) -> Result<Token> {
        let line = self.cursor.line();
        let content = self.read_quoted('\'', line, "character")?;

        let mut chars = content.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Token::new(TokenKind::Character(c), line)),
            _ => Err(CfplError::lexical(
                format!("Character literal must be exactly one character, got: '{content}'"),
                line,
            )),
        }
    }

    /// Reads the contents of a quoted literal, consuming both quotes.
    fn read_quoted(&mut self, quote: char, line: u32, what: &str) -> Result<String> {
        self.cursor.advance();

        let mut content = String::new();
        loop {
            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                return Ok(content);
            }
            if self.cursor.is_at_end() || c == '\n' {
                return Err(CfplError::lexical(
                    format!("Unterminated {what} literal"),
                    line,
                ));
            }
            content.push(c);
            self.cursor.advance();
        }
    }
}

//! Operator and delimiter lexing.

use cfpl_util::{CfplError, Result};

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or delimiter.
    ///
    /// The two-character operators `>=`, `<=`, `==`, and `<>` win over
    /// their single-character prefixes. Anything that is neither a
    /// compound operator nor a single-character punctuator is a lexical
    /// error.
    pub(crate) fn lex_operator(&mut self) -> Result<Token> {
        let line = self.cursor.line();
        let c = self.cursor.current_char();

        let kind = match (c, self.cursor.peek_char(1)) {
            ('>', '=') => {
                self.cursor.advance();
                self.cursor.advance();
                TokenKind::GtEq
            }
            ('<', '=') => {
                self.cursor.advance();
                self.cursor.advance();
                TokenKind::LtEq
            }
            ('=', '=') => {
                self.cursor.advance();
                self.cursor.advance();
                TokenKind::EqEq
            }
            ('<', '>') => {
                self.cursor.advance();
                self.cursor.advance();
                TokenKind::NotEq
            }
            _ => {
                let kind = match c {
                    '=' => TokenKind::Assign,
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Multiply,
                    '/' => TokenKind::Divide,
                    '%' => TokenKind::Modulo,
                    '>' => TokenKind::Gt,
                    '<' => TokenKind::Lt,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '[' => TokenKind::LBracket,
                    ']' => TokenKind::RBracket,
                    ',' => TokenKind::Comma,
                    '&' => TokenKind::Ampersand,
                    ':' => TokenKind::Colon,
                    '#' => TokenKind::Hash,
                    _ => {
                        return Err(CfplError::lexical(
                            format!("Unexpected character: '{c}'"),
                            line,
                        ));
                    }
                };
                self.cursor.advance();
                kind
            }
        };

        Ok(Token::new(kind, line))
    }
}

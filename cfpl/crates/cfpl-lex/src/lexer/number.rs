//! Number literal lexing.

use cfpl_util::{CfplError, Result};

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal.
    ///
    /// A run of digits, optionally one `.` followed by more digits, gives
    /// INTEGER or FLOAT_NUM. The fractional digits are not required
    /// (`1.` is a valid float) and a second `.` terminates the scan.
    pub(crate) fn lex_number(&mut self) -> Result<Token> {
        let line = self.cursor.line();
        let start = self.cursor.position();
        let mut has_dot = false;

        loop {
            let c = self.cursor.current_char();
            if c.is_ascii_digit() {
                self.cursor.advance();
            } else if c == '.' && !has_dot {
                has_dot = true;
                self.cursor.advance();
            } else {
                break;
            }
        }

        let text = self.cursor.slice_from(start);
        let kind = if has_dot {
            let value = text.parse::<f64>().map_err(|_| {
                CfplError::lexical(format!("Invalid number literal: '{text}'"), line)
            })?;
            TokenKind::FloatNum(value)
        } else {
            let value = text.parse::<i64>().map_err(|_| {
                CfplError::lexical(format!("Integer literal out of range: '{text}'"), line)
            })?;
            TokenKind::Integer(value)
        };

        Ok(Token::new(kind, line))
    }
}

//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by
    /// alphanumerics or underscores. Keywords match case-insensitively;
    /// an identifier token keeps its original spelling.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let line = self.cursor.line();
        let start = self.cursor.position();

        loop {
            let c = self.cursor.current_char();
            if c.is_alphanumeric() || c == '_' {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let text = self.cursor.slice_from(start);
        let kind = keyword_from_ident(text)
            .unwrap_or_else(|| TokenKind::Identifier(text.to_string()));

        Token::new(kind, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_ident(source: &str) -> TokenKind {
        Lexer::new(source).next_token().unwrap().kind
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), TokenKind::Identifier("foo".into()));
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(
            lex_ident("foo_bar_123"),
            TokenKind::Identifier("foo_bar_123".into())
        );
    }

    #[test]
    fn test_leading_underscore() {
        assert_eq!(lex_ident("_tmp"), TokenKind::Identifier("_tmp".into()));
    }

    #[test]
    fn test_identifier_case_is_preserved() {
        assert_eq!(lex_ident("Count"), TokenKind::Identifier("Count".into()));
    }

    #[test]
    fn test_keywords_match_any_case() {
        assert_eq!(lex_ident("VAR"), TokenKind::Var);
        assert_eq!(lex_ident("var"), TokenKind::Var);
        assert_eq!(lex_ident("Start"), TokenKind::Start);
        assert_eq!(lex_ident("stop"), TokenKind::Stop);
        assert_eq!(lex_ident("While"), TokenKind::While);
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(lex_ident("TRUE"), TokenKind::Boolean(true));
        assert_eq!(lex_ident("false"), TokenKind::Boolean(false));
    }

    #[test]
    fn test_keyword_prefix_is_still_an_identifier() {
        assert_eq!(
            lex_ident("starting"),
            TokenKind::Identifier("starting".into())
        );
        assert_eq!(lex_ident("iffy"), TokenKind::Identifier("iffy".into()));
    }
}

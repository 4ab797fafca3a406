//! Edge case tests for cfpl-lex.

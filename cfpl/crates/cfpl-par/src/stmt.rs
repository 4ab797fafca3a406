//! Statement parsing.

use cfpl_lex::TokenKind;
use cfpl_util::{Result, Type};

use crate::{
    Assign, ChainAssign, DeclEntry, IfStmt, Input, Literal, Output, OutputPart, Parser, Stmt,
    VarDecl, WhileStmt,
};

impl Parser {
    /// Parses one statement. The caller decides what may follow it.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt> {
        match self.current().kind {
            TokenKind::Identifier(_) => self.parse_assignment(),
            TokenKind::Output => self.parse_output(),
            TokenKind::Input => self.parse_input(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            ref other => Err(self.error_here(format!("Unexpected token: {}", other.name()))),
        }
    }

    /// Parses `VAR declList AS type`.
    ///
    /// Initializer literals are checked against the declared type here:
    /// the kinds must agree, except that an INTEGER literal may initialize
    /// a FLOAT variable.
    pub(crate) fn parse_var_decl(&mut self) -> Result<Stmt> {
        let line = self.current().line;
        self.bump(); // VAR

        let mut entries = Vec::new();
        loop {
            let (name, _) = self.expect_identifier()?;

            let init = if self.current().kind == TokenKind::Assign {
                self.bump();
                Some(self.parse_literal()?)
            } else {
                None
            };

            entries.push(DeclEntry { name, init });

            if self.current().kind == TokenKind::Comma {
                self.bump();
            } else {
                break;
            }
        }

        self.expect(TokenKind::As)?;

        let ty = match self.current().kind {
            TokenKind::Int => Type::Int,
            TokenKind::Char => Type::Char,
            TokenKind::Bool => Type::Bool,
            TokenKind::Float => Type::Float,
            ref other => {
                return Err(self.error_here(format!("Invalid type: {}", other.name())));
            }
        };
        self.bump();

        for entry in &entries {
            if let Some(init) = &entry.init {
                let compatible = matches!(
                    (init, ty),
                    (Literal::Int(_), Type::Int)
                        | (Literal::Int(_), Type::Float)
                        | (Literal::Float(_), Type::Float)
                        | (Literal::Char(_), Type::Char)
                        | (Literal::Bool(_), Type::Bool)
                );
                if !compatible {
                    return Err(self.error_here(format!(
                        "Type-incompatible initializer for '{}': {} value for {} variable",
                        entry.name,
                        init.kind_name(),
                        ty
                    )));
                }
            }
        }

        Ok(Stmt::VarDecl(VarDecl { ty, entries, line }))
    }

    /// Parses a literal token in declaration-initializer position.
    fn parse_literal(&mut self) -> Result<Literal> {
        let literal = match &self.current().kind {
            TokenKind::Integer(n) => Literal::Int(*n),
            TokenKind::FloatNum(f) => Literal::Float(*f),
            TokenKind::Str(s) => Literal::Str(s.clone()),
            TokenKind::Character(c) => Literal::Char(*c),
            TokenKind::Boolean(b) => Literal::Bool(*b),
            other => {
                return Err(self.error_here(format!("Expected literal, got {}", other.name())));
            }
        };
        self.bump();
        Ok(literal)
    }

    /// Parses `name = expr` or the chained form `a = b = expr`.
    ///
    /// The chain is recognized when, right after `name =`, the next two
    /// tokens are an identifier and another `=`. Longer chains fall out of
    /// the expression grammar and are rejected there.
    fn parse_assignment(&mut self) -> Result<Stmt> {
        let (name, line) = self.expect_identifier()?;
        self.expect(TokenKind::Assign)?;

        if matches!(self.current().kind, TokenKind::Identifier(_))
            && self.peek(1).kind == TokenKind::Assign
        {
            let (second, _) = self.expect_identifier()?;
            self.expect(TokenKind::Assign)?;
            let value = self.parse_expression()?;
            return Ok(Stmt::ChainAssign(ChainAssign {
                names: vec![name, second],
                value,
                line,
            }));
        }

        let value = self.parse_expression()?;
        Ok(Stmt::Assign(Assign { name, value, line }))
    }

    /// Parses `OUTPUT : part (& part)*`.
    fn parse_output(&mut self) -> Result<Stmt> {
        let line = self.current().line;
        self.bump(); // OUTPUT
        self.expect(TokenKind::Colon)?;

        let mut parts = Vec::new();
        loop {
            match &self.current().kind {
                TokenKind::Str(s) => {
                    let part = OutputPart::Str(s.clone());
                    self.bump();
                    parts.push(part);
                }
                TokenKind::Hash => {
                    self.bump();
                    parts.push(OutputPart::Newline);
                }
                _ => parts.push(OutputPart::Expr(self.parse_expression()?)),
            }

            if self.current().kind == TokenKind::Ampersand {
                self.bump();
            } else {
                break;
            }
        }

        Ok(Stmt::Output(Output { parts, line }))
    }

    /// Parses `INPUT : name (, name)*`.
    fn parse_input(&mut self) -> Result<Stmt> {
        let line = self.current().line;
        self.bump(); // INPUT
        self.expect(TokenKind::Colon)?;

        let mut names = Vec::new();
        loop {
            let (name, _) = self.expect_identifier()?;
            names.push(name);

            if self.current().kind == TokenKind::Comma {
                self.bump();
            } else {
                break;
            }
        }

        Ok(Stmt::Input(Input { names, line }))
    }

    /// Parses `IF (expr) START block STOP`, optionally followed by
    /// `ELSE START block STOP`.
    fn parse_if(&mut self) -> Result<Stmt> {
        let line = self.current().line;
        self.bump(); // IF
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.skip_newlines();
        self.expect(TokenKind::Start)?;
        let then_block = self.parse_block()?;

        // Look past the separators for an ELSE; back off if there is none
        // so the statement still ends at its own line break.
        let checkpoint = self.checkpoint();
        self.skip_newlines();
        let else_block = if self.current().kind == TokenKind::Else {
            self.bump();
            self.skip_newlines();
            self.expect(TokenKind::Start)?;
            self.parse_block()?
        } else {
            self.restore(checkpoint);
            Vec::new()
        };

        Ok(Stmt::If(IfStmt {
            cond,
            then_block,
            else_block,
            line,
        }))
    }

    /// Parses `WHILE (expr) START block STOP`.
    fn parse_while(&mut self) -> Result<Stmt> {
        let line = self.current().line;
        self.bump(); // WHILE
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.skip_newlines();
        self.expect(TokenKind::Start)?;
        let body = self.parse_block()?;

        Ok(Stmt::While(WhileStmt { cond, body, line }))
    }

    /// Parses the statements of a block, consuming the closing STOP.
    fn parse_block(&mut self) -> Result<Vec<Stmt>> {
        self.skip_newlines();

        let mut stmts = Vec::new();
        while !matches!(self.current().kind, TokenKind::Stop | TokenKind::Eof) {
            stmts.push(self.parse_statement()?);
            self.end_of_statement()?;
        }

        self.expect(TokenKind::Stop)?;
        Ok(stmts)
    }
}

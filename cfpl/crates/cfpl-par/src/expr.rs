//! Expression parsing with a binding-power (Pratt) core.
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Operators            | Associativity |
//! |-------|----------------------|---------------|
//! | 1     | `OR`                 | Left          |
//! | 2     | `AND`                | Left          |
//! | 3     | `==`, `<>`           | Left          |
//! | 4     | `>`, `<`, `>=`, `<=` | Left          |
//! | 5     | `+`, `-`             | Left          |
//! | 6     | `*`, `/`, `%`        | Left          |
//! | 7     | unary `+`, `-`, NOT  | Right         |

use cfpl_lex::TokenKind;
use cfpl_util::Result;

use crate::{BinOp, BinaryExpr, Expr, Literal, Parser, UnOp, UnaryExpr};

/// Binding power levels. Higher numbers bind tighter.
mod bp {
    /// Minimum binding power (start of expression)
    pub const MIN: u8 = 0;

    /// Logical OR
    pub const OR: u8 = 2;

    /// Logical AND
    pub const AND: u8 = 4;

    /// Equality: `==`, `<>`
    pub const EQUALITY: u8 = 6;

    /// Relational: `>`, `<`, `>=`, `<=`
    pub const RELATIONAL: u8 = 8;

    /// Additive: `+`, `-`
    pub const ADDITIVE: u8 = 10;

    /// Multiplicative: `*`, `/`, `%`
    pub const MULTIPLICATIVE: u8 = 12;
}

impl Parser {
    /// Parses a complete expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr> {
        self.parse_expr_bp(bp::MIN)
    }

    /// Parses an expression whose operators all bind at least as tightly
    /// as `min_bp`.
    ///
    /// Every binary operator is left-associative, so each right binding
    /// power is one above the left: `a - b - c` parses as `(a - b) - c`.
    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let Some((op, lbp)) = binary_op(&self.current().kind) else {
                break;
            };
            if lbp < min_bp {
                break;
            }

            let line = self.current().line;
            self.bump();

            let rhs = self.parse_expr_bp(lbp + 1)?;
            lhs = Expr::Binary(BinaryExpr {
                left: Box::new(lhs),
                op,
                right: Box::new(rhs),
                line,
            });
        }

        Ok(lhs)
    }

    /// Parses a unary-operator chain or a primary expression. Unary
    /// operators recurse into themselves: `- NOT x` is `-(NOT x)`.
    fn parse_prefix(&mut self) -> Result<Expr> {
        let op = match self.current().kind {
            TokenKind::Plus => UnOp::Plus,
            TokenKind::Minus => UnOp::Neg,
            TokenKind::Not => UnOp::Not,
            _ => return self.parse_primary(),
        };

        let line = self.current().line;
        self.bump();
        let expr = self.parse_prefix()?;

        Ok(Expr::Unary(UnaryExpr {
            op,
            expr: Box::new(expr),
            line,
        }))
    }

    /// Parses a literal, a variable reference, or a parenthesized
    /// expression.
    fn parse_primary(&mut self) -> Result<Expr> {
        let line = self.current().line;

        let expr = match &self.current().kind {
            TokenKind::Integer(n) => Expr::Literal(Literal::Int(*n)),
            TokenKind::FloatNum(f) => Expr::Literal(Literal::Float(*f)),
            TokenKind::Str(s) => Expr::Literal(Literal::Str(s.clone())),
            TokenKind::Character(c) => Expr::Literal(Literal::Char(*c)),
            TokenKind::Boolean(b) => Expr::Literal(Literal::Bool(*b)),
            TokenKind::Identifier(name) => Expr::Var {
                name: name.clone(),
                line,
            },
            TokenKind::LParen => {
                self.bump();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                return Ok(expr);
            }
            other => {
                return Err(self.error_here(format!(
                    "Unexpected token in expression: {}",
                    other.name()
                )));
            }
        };

        self.bump();
        Ok(expr)
    }
}

/// The binary operator and left binding power for a token, if it is one.
fn binary_op(kind: &TokenKind) -> Option<(BinOp, u8)> {
    let entry = match kind {
        TokenKind::Or => (BinOp::Or, bp::OR),
        TokenKind::And => (BinOp::And, bp::AND),
        TokenKind::EqEq => (BinOp::Eq, bp::EQUALITY),
        TokenKind::NotEq => (BinOp::Ne, bp::EQUALITY),
        TokenKind::Gt => (BinOp::Gt, bp::RELATIONAL),
        TokenKind::Lt => (BinOp::Lt, bp::RELATIONAL),
        TokenKind::GtEq => (BinOp::Ge, bp::RELATIONAL),
        TokenKind::LtEq => (BinOp::Le, bp::RELATIONAL),
        TokenKind::Plus => (BinOp::Add, bp::ADDITIVE),
        TokenKind::Minus => (BinOp::Sub, bp::ADDITIVE),
        TokenKind::Multiply => (BinOp::Mul, bp::MULTIPLICATIVE),
        TokenKind::Divide => (BinOp::Div, bp::MULTIPLICATIVE),
        TokenKind::Modulo => (BinOp::Mod, bp::MULTIPLICATIVE),
        _ => return None,
    };
    Some(entry)
}

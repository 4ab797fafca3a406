//! cfpl-eval - Tree-walking evaluator for CFPL.
//!
//! Walks the AST from `cfpl-par` against a single global [`Environment`],
//! appending one entry to the output log per OUTPUT statement and
//! consuming an input queue parsed from a comma-separated string. The
//! evaluator is strictly single-threaded and non-suspending: a run
//! executes to completion or to the first error, and a non-terminating
//! WHILE is the program's own responsibility.

mod env;
mod ops;
mod value;

use std::collections::VecDeque;

use indexmap::IndexMap;

use cfpl_par::{
    Assign, BinOp, ChainAssign, Expr, IfStmt, Input, Literal, Output, OutputPart, Program, Stmt,
    VarDecl, WhileStmt,
};
use cfpl_util::{CfplError, Result, Type};

pub use env::{Environment, Variable};
pub use value::Value;

/// Decodes the OUTPUT escape sequences in a string part:
/// `[#]` becomes a newline, `[[` a literal `[`, `]]` a literal `]`.
/// The replacements run in that order.
pub fn decode_escapes(text: &str) -> String {
    text.replace("[#]", "\n").replace("[[", "[").replace("]]", "]")
}

/// Executes programs against a typed variable environment.
///
/// State is scoped to [`Evaluator::execute_program`]: the environment and
/// output log are cleared on entry, and the final environment stays
/// readable through [`Evaluator::variables`] until the next run or
/// [`Evaluator::reset`].
#[derive(Default)]
pub struct Evaluator {
    env: Environment,
    output: Vec<String>,
    input: VecDeque<String>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a program with the given input string and returns its output:
    /// the OUTPUT log entries joined with `\n`.
    ///
    /// The input string is split on `,` with each field trimmed; a blank
    /// input means no values are available.
    pub fn execute_program(&mut self, program: &Program, input: &str) -> Result<String> {
        self.env.clear();
        self.output.clear();
        self.input = if input.trim().is_empty() {
            VecDeque::new()
        } else {
            input.split(',').map(|field| field.trim().to_string()).collect()
        };

        for stmt in program {
            self.exec_stmt(stmt)?;
        }

        Ok(self.output.join("\n"))
    }

    /// An ordered snapshot of the environment after the last run.
    pub fn variables(&self) -> IndexMap<String, Value> {
        self.env.snapshot()
    }

    /// Clears the environment, output log, and any unconsumed input.
    pub fn reset(&mut self) {
        self.env.clear();
        self.output.clear();
        self.input.clear();
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::VarDecl(decl) => self.exec_var_decl(decl),
            Stmt::Assign(assign) => self.exec_assign(assign),
            Stmt::ChainAssign(chain) => self.exec_chain_assign(chain),
            Stmt::Output(output) => self.exec_output(output),
            Stmt::Input(input) => self.exec_input(input),
            Stmt::If(stmt) => self.exec_if(stmt),
            Stmt::While(stmt) => self.exec_while(stmt),
        }
    }

    fn exec_block(&mut self, stmts: &[Stmt]) -> Result<()> {
        for stmt in stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_var_decl(&mut self, decl: &VarDecl) -> Result<()> {
        for entry in &decl.entries {
            let value = match &entry.init {
                // The parser has already checked the literal against the
                // declared type; the one conversion left is widening an
                // INTEGER initializer into a FLOAT variable.
                Some(Literal::Int(n)) if decl.ty == Type::Float => Value::Float(*n as f64),
                Some(literal) => Value::from(literal),
                None => Value::default_for(decl.ty),
            };
            self.env.declare(&entry.name, decl.ty, value);
        }
        Ok(())
    }

    fn exec_assign(&mut self, assign: &Assign) -> Result<()> {
        if !self.env.contains(&assign.name) {
            return Err(undefined_variable(&assign.name, assign.line));
        }
        let value = self.eval_expr(&assign.value)?;
        self.env.set_value(&assign.name, value);
        Ok(())
    }

    /// Stores one evaluated value under every chain target. All targets
    /// are checked before anything is evaluated or stored, so a missing
    /// one leaves the environment untouched.
    fn exec_chain_assign(&mut self, chain: &ChainAssign) -> Result<()> {
        for name in &chain.names {
            if !self.env.contains(name) {
                return Err(undefined_variable(name, chain.line));
            }
        }
        let value = self.eval_expr(&chain.value)?;
        for name in &chain.names {
            self.env.set_value(name, value.clone());
        }
        Ok(())
    }

    fn exec_output(&mut self, output: &Output) -> Result<()> {
        let mut entry = String::new();
        for part in &output.parts {
            match part {
                OutputPart::Str(text) => entry.push_str(&decode_escapes(text)),
                OutputPart::Newline => entry.push('\n'),
                OutputPart::Expr(expr) => {
                    let value = self.eval_expr(expr)?;
                    entry.push_str(&value.to_string());
                }
            }
        }
        self.output.push(entry);
        Ok(())
    }

    fn exec_input(&mut self, input: &Input) -> Result<()> {
        for name in &input.names {
            let Some(var) = self.env.get(name) else {
                return Err(undefined_variable(name, input.line));
            };
            let ty = var.ty;

            let Some(field) = self.input.pop_front() else {
                return Err(CfplError::runtime_at(
                    format!("Not enough input values provided for variable: '{name}'"),
                    input.line,
                ));
            };

            let value = match (coerce_input(&field), ty) {
                (Value::Int(n), Type::Float) => Value::Float(n as f64),
                (value, ty) if value.conforms_to(ty) => value,
                (value, ty) => {
                    return Err(CfplError::runtime_at(
                        format!(
                            "Type mismatch for input variable '{name}': expected {ty}, got {}",
                            value.kind_name()
                        ),
                        input.line,
                    ));
                }
            };

            self.env.set_value(name, value);
        }
        Ok(())
    }

    fn exec_if(&mut self, stmt: &IfStmt) -> Result<()> {
        if self.eval_expr(&stmt.cond)?.truthy() {
            self.exec_block(&stmt.then_block)
        } else {
            self.exec_block(&stmt.else_block)
        }
    }

    fn exec_while(&mut self, stmt: &WhileStmt) -> Result<()> {
        while self.eval_expr(&stmt.cond)?.truthy() {
            self.exec_block(&stmt.body)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn eval_expr(&self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),

            Expr::Var { name, line } => self
                .env
                .get(name)
                .map(|var| var.value.clone())
                .ok_or_else(|| undefined_variable(name, *line)),

            Expr::Unary(unary) => {
                let value = self.eval_expr(&unary.expr)?;
                ops::apply_unary(unary.op, &value, unary.line)
            }

            Expr::Binary(binary) => match binary.op {
                // OR and AND evaluate the right operand only when the left
                // does not decide the result.
                BinOp::Or => {
                    let left = self.eval_expr(&binary.left)?;
                    if left.truthy() {
                        Ok(left)
                    } else {
                        self.eval_expr(&binary.right)
                    }
                }
                BinOp::And => {
                    let left = self.eval_expr(&binary.left)?;
                    if !left.truthy() {
                        Ok(left)
                    } else {
                        self.eval_expr(&binary.right)
                    }
                }
                op => {
                    let left = self.eval_expr(&binary.left)?;
                    let right = self.eval_expr(&binary.right)?;
                    ops::apply_binary(op, &left, &right, binary.line)
                }
            },
        }
    }
}

/// Coerces one trimmed input field, loosest match last: float when it
/// contains a `.` and parses, then integer, then TRUE/FALSE, then a
/// single code point, then the raw string.
fn coerce_input(field: &str) -> Value {
    if field.contains('.') {
        if let Ok(f) = field.parse::<f64>() {
            return Value::Float(f);
        }
    }

    if let Ok(n) = field.parse::<i64>() {
        return Value::Int(n);
    }

    match field.to_uppercase().as_str() {
        "TRUE" => return Value::Bool(true),
        "FALSE" => return Value::Bool(false),
        _ => {}
    }

    let mut chars = field.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Value::Char(c);
    }

    Value::Str(field.to_string())
}

fn undefined_variable(name: &str, line: u32) -> CfplError {
    CfplError::runtime_at(format!("Undefined variable: '{name}'"), line)
}

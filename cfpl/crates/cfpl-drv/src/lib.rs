//! cfpl-drv - Interpreter driver.
//!
//! Chains the pipeline phases (lex, parse, evaluate) behind one facade,
//! [`Interpreter`]. Each [`Interpreter::run`] call starts from a fresh
//! environment; the final environment of the last run stays inspectable
//! through [`Interpreter::get_variables`] until the next run or
//! [`Interpreter::reset`].
//!
//! This crate is also where the `cfpl` binary lives; see `main.rs`. Hosts
//! embedding the interpreter (a GUI shell, a test harness) talk to
//! [`Interpreter`] and never to the phases directly.

use indexmap::IndexMap;
use tracing::debug;

use cfpl_eval::{Evaluator, Value};
use cfpl_lex::tokenize;
use cfpl_par::parse;

pub use cfpl_util::{CfplError, Result};

/// The interpreter facade.
///
/// # Example
///
/// ```
/// use cfpl_drv::Interpreter;
///
/// let mut interpreter = Interpreter::new();
/// let output = interpreter
///     .run("VAR x AS INT\nSTART\nx = 2 + 3\nOUTPUT: x\nSTOP", "")
///     .unwrap();
/// assert_eq!(output, "5");
/// ```
#[derive(Default)]
pub struct Interpreter {
    evaluator: Evaluator,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes one program and returns its output.
    ///
    /// `input` supplies the INPUT queue as comma-separated fields. State
    /// is reset on entry, so repeated calls are independent.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, parse, or runtime error; output
    /// buffered before the error is discarded.
    pub fn run(&mut self, code: &str, input: &str) -> Result<String> {
        let tokens = tokenize(code)?;
        debug!(tokens = tokens.len(), "lexed source");

        let program = parse(tokens)?;
        debug!(statements = program.len(), "parsed program");

        let output = self.evaluator.execute_program(&program, input)?;
        debug!(bytes = output.len(), "program finished");

        Ok(output)
    }

    /// A snapshot of the variable environment after the last run, in
    /// declaration order.
    pub fn get_variables(&self) -> IndexMap<String, Value> {
        self.evaluator.variables()
    }

    /// Clears all interpreter state.
    pub fn reset(&mut self) {
        self.evaluator.reset();
    }
}

/// Runs a program with a one-shot interpreter.
pub fn run(code: &str, input: &str) -> Result<String> {
    Interpreter::new().run(code, input)
}

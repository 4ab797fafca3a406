//! Error types for the CFPL interpreter pipeline.
//!
//! Every phase reports through [`CfplError`]: the lexer and parser attach
//! the source line they were looking at, the evaluator attaches the line of
//! the statement being executed when one is known. The first error aborts
//! the run; nothing is recovered inside the pipeline.

use thiserror::Error;

/// Error raised by any phase of the interpreter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CfplError {
    /// Invalid source text: unknown character, unterminated string,
    /// ill-formed character literal.
    #[error("Lexical error at line {line}: {message}")]
    Lexical { message: String, line: u32 },

    /// Token mismatch, missing START/STOP, invalid type name, unexpected
    /// token in an expression.
    #[error("Parse error at line {line}: {message}")]
    Parse { message: String, line: u32 },

    /// Undefined variable, division by zero, insufficient input values,
    /// type-incompatible operator application.
    #[error("Runtime error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Runtime { message: String, line: Option<u32> },
}

impl CfplError {
    /// Creates a lexical error at the given line.
    pub fn lexical(message: impl Into<String>, line: u32) -> Self {
        Self::Lexical {
            message: message.into(),
            line,
        }
    }

    /// Creates a parse error at the given line.
    pub fn parse(message: impl Into<String>, line: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
        }
    }

    /// Creates a runtime error with no line information.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
            line: None,
        }
    }

    /// Creates a runtime error tied to a source line.
    pub fn runtime_at(message: impl Into<String>, line: u32) -> Self {
        Self::Runtime {
            message: message.into(),
            line: Some(line),
        }
    }

    /// The source line this error points at, if any.
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Lexical { line, .. } | Self::Parse { line, .. } => Some(*line),
            Self::Runtime { line, .. } => *line,
        }
    }
}

/// Result type alias used throughout the interpreter crates.
pub type Result<T> = std::result::Result<T, CfplError>;

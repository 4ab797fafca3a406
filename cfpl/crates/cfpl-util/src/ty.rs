//! Primitive type tags.

use std::fmt;

/// The four primitive types a CFPL variable can be declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// 64-bit signed integer, keyword `INT`.
    Int,

    /// 64-bit floating point, keyword `FLOAT`.
    Float,

    /// Single code point, keyword `CHAR`.
    Char,

    /// Boolean, keyword `BOOL`.
    Bool,
}

impl Type {
    /// The keyword spelling of this type, as it appears in source.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "INT",
            Type::Float => "FLOAT",
            Type::Char => "CHAR",
            Type::Bool => "BOOL",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Operator semantics.
//!
//! Mixed arithmetic promotes to the more general of the two operand
//! kinds: two INTs stay integral, anything involving a FLOAT is computed
//! in floating point. A divisor of zero is always a runtime error, for
//! both `/` and `%`.
//!
//! `OR` and `AND` are short-circuited by the evaluator before this module
//! is consulted; the eager forms here see both operands already evaluated
//! and apply the same truthiness rule.

use std::cmp::Ordering;

use cfpl_par::{BinOp, UnOp};
use cfpl_util::{CfplError, Result};

use crate::value::Value;

/// A pair of numeric operands after promotion.
enum NumPair {
    Ints(i64, i64),
    Floats(f64, f64),
}

/// Promotes two values to a common numeric kind, if both are numeric.
fn numeric_pair(lhs: &Value, rhs: &Value) -> Option<NumPair> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Some(NumPair::Ints(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Some(NumPair::Floats(*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Some(NumPair::Floats(*a, *b as f64)),
        (Value::Float(a), Value::Float(b)) => Some(NumPair::Floats(*a, *b)),
        _ => None,
    }
}

/// The textual form of a CHAR or STRING value, used so a single-character
/// string and a char compare like for like.
fn text_form(value: &Value) -> Option<String> {
    match value {
        Value::Char(c) => Some(c.to_string()),
        Value::Str(s) => Some(s.clone()),
        _ => None,
    }
}

/// Applies a binary operator to two evaluated operands.
pub(crate) fn apply_binary(op: BinOp, lhs: &Value, rhs: &Value, line: u32) -> Result<Value> {
    match op {
        BinOp::Or => Ok(if lhs.truthy() { lhs.clone() } else { rhs.clone() }),
        BinOp::And => Ok(if lhs.truthy() { rhs.clone() } else { lhs.clone() }),

        BinOp::Eq => Ok(Value::Bool(values_equal(lhs, rhs))),
        BinOp::Ne => Ok(Value::Bool(!values_equal(lhs, rhs))),

        BinOp::Gt | BinOp::Lt | BinOp::Ge | BinOp::Le => {
            let ordering = order(lhs, rhs).ok_or_else(|| type_error(op, lhs, rhs, line))?;
            let result = match op {
                BinOp::Gt => ordering == Ordering::Greater,
                BinOp::Lt => ordering == Ordering::Less,
                BinOp::Ge => ordering != Ordering::Less,
                _ => ordering != Ordering::Greater,
            };
            Ok(Value::Bool(result))
        }

        BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod => {
            arithmetic(op, lhs, rhs, line)
        }
    }
}

/// Applies a unary operator to an evaluated operand.
pub(crate) fn apply_unary(op: UnOp, value: &Value, line: u32) -> Result<Value> {
    match op {
        UnOp::Not => Ok(Value::Bool(!value.truthy())),
        UnOp::Plus => match value {
            Value::Int(_) | Value::Float(_) => Ok(value.clone()),
            other => Err(unary_type_error(op, other, line)),
        },
        UnOp::Neg => match value {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| overflow(line)),
            Value::Float(f) => Ok(Value::Float(-f)),
            other => Err(unary_type_error(op, other, line)),
        },
    }
}

/// `==` / `<>` semantics: numeric pairs compare after promotion, same-kind
/// values compare directly, chars compare with single-character strings,
/// and anything else is simply unequal.
fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    if let Some(pair) = numeric_pair(lhs, rhs) {
        return match pair {
            NumPair::Ints(a, b) => a == b,
            NumPair::Floats(a, b) => a == b,
        };
    }

    if let (Value::Bool(a), Value::Bool(b)) = (lhs, rhs) {
        return a == b;
    }

    match (text_form(lhs), text_form(rhs)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Ordering for the relational operators. Numbers order numerically,
/// chars and strings lexicographically; anything else has no ordering.
fn order(lhs: &Value, rhs: &Value) -> Option<Ordering> {
    if let Some(pair) = numeric_pair(lhs, rhs) {
        return match pair {
            NumPair::Ints(a, b) => Some(a.cmp(&b)),
            NumPair::Floats(a, b) => a.partial_cmp(&b),
        };
    }

    match (text_form(lhs), text_form(rhs)) {
        (Some(a), Some(b)) => Some(a.cmp(&b)),
        _ => None,
    }
}

/// `+ - * / %` over numeric operands.
fn arithmetic(op: BinOp, lhs: &Value, rhs: &Value, line: u32) -> Result<Value> {
    let Some(pair) = numeric_pair(lhs, rhs) else {
        return Err(type_error(op, lhs, rhs, line));
    };

    match (op, pair) {
        (BinOp::Add, NumPair::Ints(a, b)) => {
            a.checked_add(b).map(Value::Int).ok_or_else(|| overflow(line))
        }
        (BinOp::Sub, NumPair::Ints(a, b)) => {
            a.checked_sub(b).map(Value::Int).ok_or_else(|| overflow(line))
        }
        (BinOp::Mul, NumPair::Ints(a, b)) => {
            a.checked_mul(b).map(Value::Int).ok_or_else(|| overflow(line))
        }
        (BinOp::Div, NumPair::Ints(a, b)) => {
            if b == 0 {
                return Err(division_by_zero(line));
            }
            a.checked_div(b).map(Value::Int).ok_or_else(|| overflow(line))
        }
        (BinOp::Mod, NumPair::Ints(a, b)) => {
            if b == 0 {
                return Err(division_by_zero(line));
            }
            a.checked_rem(b).map(Value::Int).ok_or_else(|| overflow(line))
        }

        (BinOp::Add, NumPair::Floats(a, b)) => Ok(Value::Float(a + b)),
        (BinOp::Sub, NumPair::Floats(a, b)) => Ok(Value::Float(a - b)),
        (BinOp::Mul, NumPair::Floats(a, b)) => Ok(Value::Float(a * b)),
        (BinOp::Div, NumPair::Floats(a, b)) => {
            if b == 0.0 {
                return Err(division_by_zero(line));
            }
            Ok(Value::Float(a / b))
        }
        (BinOp::Mod, NumPair::Floats(a, b)) => {
            if b == 0.0 {
                return Err(division_by_zero(line));
            }
            Ok(Value::Float(a % b))
        }

        _ => Err(type_error(op, lhs, rhs, line)),
    }
}

fn type_error(op: BinOp, lhs: &Value, rhs: &Value, line: u32) -> CfplError {
    CfplError::runtime_at(
        format!(
            "Cannot apply '{}' to {} and {}",
            op.symbol(),
            lhs.kind_name(),
            rhs.kind_name()
        ),
        line,
    )
}

fn unary_type_error(op: UnOp, value: &Value, line: u32) -> CfplError {
    CfplError::runtime_at(
        format!("Cannot apply unary '{}' to {}", op.symbol(), value.kind_name()),
        line,
    )
}

fn division_by_zero(line: u32) -> CfplError {
    CfplError::runtime_at("Division by zero", line)
}

fn overflow(line: u32) -> CfplError {
    CfplError::runtime_at("Integer overflow", line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(op: BinOp, lhs: Value, rhs: Value) -> Result<Value> {
        apply_binary(op, &lhs, &rhs, 1)
    }

    #[test]
    fn test_int_arithmetic_stays_integral() {
        assert_eq!(
            binary(BinOp::Add, Value::Int(2), Value::Int(3)).unwrap(),
            Value::Int(5)
        );
        assert_eq!(
            binary(BinOp::Mul, Value::Int(6), Value::Int(7)).unwrap(),
            Value::Int(42)
        );
        assert_eq!(
            binary(BinOp::Mod, Value::Int(7), Value::Int(3)).unwrap(),
            Value::Int(1)
        );
    }

    #[test]
    fn test_int_division_truncates() {
        assert_eq!(
            binary(BinOp::Div, Value::Int(7), Value::Int(2)).unwrap(),
            Value::Int(3)
        );
    }

    #[test]
    fn test_mixed_arithmetic_promotes_to_float() {
        assert_eq!(
            binary(BinOp::Add, Value::Int(1), Value::Float(0.5)).unwrap(),
            Value::Float(1.5)
        );
        assert_eq!(
            binary(BinOp::Div, Value::Float(5.0), Value::Int(2)).unwrap(),
            Value::Float(2.5)
        );
    }

    #[test]
    fn test_division_by_zero_int_and_float() {
        let err = binary(BinOp::Div, Value::Int(1), Value::Int(0)).unwrap_err();
        assert!(err.to_string().contains("Division by zero"));

        let err = binary(BinOp::Div, Value::Float(1.0), Value::Float(0.0)).unwrap_err();
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn test_modulo_by_zero() {
        let err = binary(BinOp::Mod, Value::Int(5), Value::Int(0)).unwrap_err();
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn test_integer_overflow_is_reported() {
        let err = binary(BinOp::Add, Value::Int(i64::MAX), Value::Int(1)).unwrap_err();
        assert!(err.to_string().contains("Integer overflow"));
    }

    #[test]
    fn test_arithmetic_on_non_numeric_is_an_error() {
        let err = binary(BinOp::Add, Value::Str("a".into()), Value::Int(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Runtime error at line 1: Cannot apply '+' to STRING and INT"
        );
    }

    #[test]
    fn test_equality_promotes_numerics() {
        assert_eq!(
            binary(BinOp::Eq, Value::Int(3), Value::Float(3.0)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            binary(BinOp::Ne, Value::Int(3), Value::Float(3.5)).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_equality_across_kinds_is_false() {
        assert_eq!(
            binary(BinOp::Eq, Value::Int(1), Value::Bool(true)).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            binary(BinOp::Ne, Value::Str("1".into()), Value::Int(1)).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_char_compares_with_single_char_string() {
        assert_eq!(
            binary(BinOp::Eq, Value::Char('x'), Value::Str("x".into())).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_relational_operators() {
        assert_eq!(
            binary(BinOp::Gt, Value::Int(5), Value::Int(3)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            binary(BinOp::Le, Value::Float(2.5), Value::Int(3)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            binary(BinOp::Lt, Value::Char('a'), Value::Char('b')).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_ordering_across_kinds_is_an_error() {
        let err = binary(BinOp::Gt, Value::Bool(true), Value::Int(1)).unwrap_err();
        assert!(err.to_string().contains("Cannot apply '>'"));
    }

    #[test]
    fn test_eager_or_and_follow_truthiness() {
        assert_eq!(
            binary(BinOp::Or, Value::Int(0), Value::Int(7)).unwrap(),
            Value::Int(7)
        );
        assert_eq!(
            binary(BinOp::Or, Value::Bool(true), Value::Int(7)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            binary(BinOp::And, Value::Bool(true), Value::Int(7)).unwrap(),
            Value::Int(7)
        );
        assert_eq!(
            binary(BinOp::And, Value::Int(0), Value::Int(7)).unwrap(),
            Value::Int(0)
        );
    }

    #[test]
    fn test_not_inverts_truthiness() {
        assert_eq!(
            apply_unary(UnOp::Not, &Value::Bool(true), 1).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            apply_unary(UnOp::Not, &Value::Int(0), 1).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            apply_unary(UnOp::Not, &Value::Str(String::new()), 1).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(
            apply_unary(UnOp::Neg, &Value::Int(5), 1).unwrap(),
            Value::Int(-5)
        );
        assert_eq!(
            apply_unary(UnOp::Neg, &Value::Float(2.5), 1).unwrap(),
            Value::Float(-2.5)
        );
    }

    #[test]
    fn test_unary_plus_is_numeric_identity() {
        assert_eq!(
            apply_unary(UnOp::Plus, &Value::Int(5), 1).unwrap(),
            Value::Int(5)
        );
    }

    #[test]
    fn test_unary_on_non_numeric_is_an_error() {
        let err = apply_unary(UnOp::Neg, &Value::Bool(true), 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Runtime error at line 1: Cannot apply unary '-' to BOOL"
        );
    }
}

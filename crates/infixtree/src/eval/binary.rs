//! Binary operator table and operator implementations
//!
//! Every supported operator is an entry in [`OPERATORS`], a fixed table from
//! symbol to a binary function over values. Integer arithmetic is checked,
//! `/` and `%` round toward negative infinity, and an integer meeting a float
//! promotes to float. A remainder always takes the sign of the divisor.

use std::cmp::Ordering;

use crate::error::type_name;
use crate::{Result, TreeError, Value};

/// A binary operator implementation.
pub type BinaryFn = fn(Value, Value) -> Result<Value>;

/// Supported operator symbols and their implementations.
pub static OPERATORS: [(&str, BinaryFn); 11] = [
    // Arithmetic
    ("+", eval_add),
    ("-", eval_sub),
    ("*", eval_mul),
    ("/", eval_div),
    ("%", eval_rem),
    // Comparison
    ("<", eval_lt),
    ("<=", eval_le),
    (">", eval_gt),
    (">=", eval_ge),
    ("==", eval_eq),
    ("!=", eval_ne),
];

/// Find the implementation of `op`.
pub fn lookup(op: &str) -> Option<BinaryFn> {
    OPERATORS
        .iter()
        .find(|(symbol, _)| *symbol == op)
        .map(|(_, func)| *func)
}

/// Apply `op` to two evaluated operands.
pub fn apply(op: &str, left: Value, right: Value) -> Result<Value> {
    match lookup(op) {
        Some(func) => func(left, right),
        None => {
            tracing::debug!(op, "operator not in table");
            Err(TreeError::unknown_operator(op))
        }
    }
}

fn invalid_operands(op: &str, left: &Value, right: &Value) -> TreeError {
    TreeError::InvalidOperands {
        op: op.to_string(),
        left_type: type_name(left),
        right_type: type_name(right),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

fn arithmetic(
    op: &str,
    left: Value,
    right: Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value> {
    if let (Value::Int(a), Value::Int(b)) = (&left, &right) {
        return int_op(*a, *b)
            .map(Value::Int)
            .ok_or_else(|| TreeError::IntegerOverflow { op: op.to_string() });
    }
    match (left.as_float(), right.as_float()) {
        (Some(a), Some(b)) => Ok(Value::Float(float_op(a, b))),
        _ => Err(invalid_operands(op, &left, &right)),
    }
}

fn eval_add(left: Value, right: Value) -> Result<Value> {
    // String concatenation
    if let (Some(a), Some(b)) = (left.as_str(), right.as_str()) {
        return Ok(Value::string(format!("{}{}", a, b)));
    }
    arithmetic("+", left, right, i64::checked_add, |a, b| a + b)
}

fn eval_sub(left: Value, right: Value) -> Result<Value> {
    arithmetic("-", left, right, i64::checked_sub, |a, b| a - b)
}

fn eval_mul(left: Value, right: Value) -> Result<Value> {
    arithmetic("*", left, right, i64::checked_mul, |a, b| a * b)
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

/// Integer remainder with the sign of the divisor.
fn floor_rem(a: i64, b: i64) -> Option<i64> {
    let r = a.checked_rem(b)?;
    if r != 0 && (r < 0) != (b < 0) {
        r.checked_add(b)
    } else {
        Some(r)
    }
}

fn float_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

fn check_int_divisor(left: &Value, right: &Value) -> Result<()> {
    if left.is_int() && right.as_int() == Some(0) {
        return Err(TreeError::DivisionByZero);
    }
    Ok(())
}

fn eval_div(left: Value, right: Value) -> Result<Value> {
    check_int_divisor(&left, &right)?;
    arithmetic("/", left, right, floor_div, |a, b| a / b)
}

fn eval_rem(left: Value, right: Value) -> Result<Value> {
    check_int_divisor(&left, &right)?;
    arithmetic("%", left, right, floor_rem, float_rem)
}

// ═══════════════════════════════════════════════════════════════════════
// Comparison Operations
// ═══════════════════════════════════════════════════════════════════════

fn ordering(op: &str, left: &Value, right: &Value) -> Result<Option<Ordering>> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        _ => match (left.as_float(), right.as_float()) {
            // NaN is unordered
            (Some(a), Some(b)) => Ok(a.partial_cmp(&b)),
            _ => Err(invalid_operands(op, left, right)),
        },
    }
}

fn compare(op: &str, left: Value, right: Value, pred: fn(Ordering) -> bool) -> Result<Value> {
    let ord = ordering(op, &left, &right)?;
    Ok(Value::Bool(ord.is_some_and(pred)))
}

fn eval_lt(left: Value, right: Value) -> Result<Value> {
    compare("<", left, right, Ordering::is_lt)
}

fn eval_le(left: Value, right: Value) -> Result<Value> {
    compare("<=", left, right, Ordering::is_le)
}

fn eval_gt(left: Value, right: Value) -> Result<Value> {
    compare(">", left, right, Ordering::is_gt)
}

fn eval_ge(left: Value, right: Value) -> Result<Value> {
    compare(">=", left, right, Ordering::is_ge)
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        _ => match (left.as_float(), right.as_float()) {
            (Some(a), Some(b)) => a == b,
            _ => left == right,
        },
    }
}

fn eval_eq(left: Value, right: Value) -> Result<Value> {
    Ok(Value::Bool(values_equal(&left, &right)))
}

fn eval_ne(left: Value, right: Value) -> Result<Value> {
    Ok(Value::Bool(!values_equal(&left, &right)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_symbols_unique() {
        for (i, (a, _)) in OPERATORS.iter().enumerate() {
            for (b, _) in OPERATORS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("**").is_none());
        assert!(lookup("&&").is_none());
        assert!(lookup("+").is_some());
    }

    #[test]
    fn test_floor_division() {
        assert_eq!(apply("/", Value::Int(-7), Value::Int(2)), Ok(Value::Int(-4)));
        assert_eq!(apply("/", Value::Int(7), Value::Int(-2)), Ok(Value::Int(-4)));
        assert_eq!(apply("/", Value::Int(-7), Value::Int(-2)), Ok(Value::Int(3)));
        assert_eq!(apply("/", Value::Int(-8), Value::Int(2)), Ok(Value::Int(-4)));
    }

    #[test]
    fn test_remainder_takes_divisor_sign() {
        assert_eq!(apply("%", Value::Int(-7), Value::Int(2)), Ok(Value::Int(1)));
        assert_eq!(apply("%", Value::Int(7), Value::Int(-2)), Ok(Value::Int(-1)));
        assert_eq!(apply("%", Value::Int(-7), Value::Int(-2)), Ok(Value::Int(-1)));
        assert_eq!(apply("%", Value::Int(-8), Value::Int(2)), Ok(Value::Int(0)));
    }

    #[test]
    fn test_float_remainder_takes_divisor_sign() {
        assert_eq!(apply("%", Value::Float(-7.5), Value::Int(2)), Ok(Value::Float(0.5)));
        assert_eq!(apply("%", Value::Float(7.5), Value::Int(-2)), Ok(Value::Float(-0.5)));
    }

    #[test]
    fn test_floor_division_overflow() {
        assert_eq!(floor_div(i64::MIN, -1), None);
        assert_eq!(floor_rem(i64::MIN, -1), None);
    }

    #[test]
    fn test_nan_unordered() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(apply("<", nan.clone(), Value::Int(1)), Ok(Value::Bool(false)));
        assert_eq!(apply(">=", nan, Value::Int(1)), Ok(Value::Bool(false)));
    }
}

//! Operator binding strength for the infix printer
//!
//! Lower numbers bind tighter. Only the arithmetic operators have a level;
//! the printer compares levels numerically to decide on parentheses.

use crate::{Result, TreeError};

/// Level of `*`, `/` and `%`.
pub const MULTIPLICATIVE: u8 = 5;

/// Level of `+` and `-`.
pub const ADDITIVE: u8 = 6;

/// Binding strength of `op`.
///
/// Fails with [`TreeError::UnknownOperator`] for any symbol outside
/// `* / % + -`.
pub fn precedence(op: &str) -> Result<u8> {
    match op {
        "*" | "/" | "%" => Ok(MULTIPLICATIVE),
        "+" | "-" => Ok(ADDITIVE),
        _ => Err(TreeError::unknown_operator(op)),
    }
}

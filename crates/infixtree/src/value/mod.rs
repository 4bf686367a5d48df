//! Value representation for runtime values

mod display;
mod impls;

use std::sync::Arc;

/// Runtime value produced by the evaluator.
///
/// The language treats values as opaque scalars; only the operators in the
/// evaluator's table give them meaning.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Boolean, produced by comparisons
    Bool(bool),

    /// Literal text that is not a number or boolean
    Str(Arc<String>),
}

//! Error types for evaluation and rendering

use thiserror::Error;

use crate::Value;

/// Main error type for tree operations.
///
/// Every variant is reported at the point of detection; none of them are
/// retried or turned into partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Operator symbol outside the supported set
    #[error("unknown operator \"{op}\"")]
    UnknownOperator {
        /// The offending symbol
        op: String,
    },

    /// Variable name missing from the evaluation environment
    #[error("unbound variable: {name}")]
    UnboundVariable {
        /// The variable name
        name: String,
    },

    /// Node kind not handled by the invoked operation
    #[error("{operation} does not support {kind} nodes")]
    UnsupportedNode {
        /// Node kind name (see `Node::kind_name`)
        kind: &'static str,
        /// Operation that rejected the node
        operation: &'static str,
    },

    /// Operator applied to operand types it does not accept
    #[error("cannot apply '{op}' to {left_type} and {right_type}")]
    InvalidOperands {
        /// The operator symbol
        op: String,
        /// Type of the left operand
        left_type: &'static str,
        /// Type of the right operand
        right_type: &'static str,
    },

    /// Integer division or remainder by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Checked integer arithmetic overflowed
    #[error("integer overflow in '{op}'")]
    IntegerOverflow {
        /// The operator symbol
        op: String,
    },

    /// Tree nesting exceeded the configured limit
    #[error("maximum nesting depth ({max}) exceeded")]
    DepthExceeded {
        /// The configured limit
        max: usize,
    },
}

impl TreeError {
    pub(crate) fn unknown_operator(op: &str) -> Self {
        TreeError::UnknownOperator { op: op.to_string() }
    }
}

/// Result type alias for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;

/// Get a human-readable type name for a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::Bool(_) => "bool",
        Value::Str(_) => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TreeError::unknown_operator("^").to_string(),
            "unknown operator \"^\""
        );
        assert_eq!(
            TreeError::UnboundVariable {
                name: "x".to_string()
            }
            .to_string(),
            "unbound variable: x"
        );
        assert_eq!(
            TreeError::UnsupportedNode {
                kind: "Seq",
                operation: "evaluate"
            }
            .to_string(),
            "evaluate does not support Seq nodes"
        );
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&Value::Int(1)), "int");
        assert_eq!(type_name(&Value::Float(1.5)), "float");
        assert_eq!(type_name(&Value::Bool(true)), "bool");
        assert_eq!(type_name(&Value::string("x")), "string");
    }
}

// Error taxonomy coverage for evaluation and rendering
use infixtree::error::type_name;
use infixtree::*;

fn eval(node: &Node) -> std::result::Result<Value, TreeError> {
    evaluate(node, &Environment::new())
}

// ═══════════════════════════════════════════════════════════════════════
// UnknownOperator
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_unknown_operator() {
    let expr = Node::bin_op("**", Node::int(2), Node::int(3));
    assert_eq!(
        eval(&expr),
        Err(TreeError::UnknownOperator {
            op: "**".to_string()
        })
    );
}

#[test]
fn test_precedence_unknown_operator() {
    assert!(matches!(
        precedence("=="),
        Err(TreeError::UnknownOperator { .. })
    ));
}

#[test]
fn test_operands_evaluated_before_operator_check() {
    // The unbound variable is reported before the bad operator
    let expr = Node::bin_op("??", Node::var(&Var::untyped("q")), Node::int(1));
    assert!(matches!(
        eval(&expr),
        Err(TreeError::UnboundVariable { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// UnsupportedNode
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_rejects_statements() {
    let i = Var::new("i", "int");
    let statements = vec![
        Node::pre_inc(&i),
        Node::post_inc(&i),
        Node::pre_dec(&i),
        Node::post_dec(&i),
        Node::define_var(&i, Node::int(1)),
        Node::assign("=", &i, Node::int(1)),
        Node::seq(vec![]),
        Node::while_loop(Node::int(1), Node::seq(vec![])),
        Node::print(Node::int(1)),
    ];

    for stmt in statements {
        let kind = stmt.kind_name();
        assert_eq!(
            eval(&stmt),
            Err(TreeError::UnsupportedNode {
                kind,
                operation: "evaluate"
            })
        );
    }
}

#[test]
fn test_eval_rejects_statement_nested_in_expression() {
    let i = Var::new("i", "int");
    let expr = Node::bin_op("+", Node::int(1), Node::post_inc(&i));
    assert!(matches!(
        eval(&expr),
        Err(TreeError::UnsupportedNode { kind: "PostInc", .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_division_by_zero() {
    let div = Node::bin_op("/", Node::int(1), Node::int(0));
    let rem = Node::bin_op("%", Node::int(1), Node::int(0));
    assert_eq!(eval(&div), Err(TreeError::DivisionByZero));
    assert_eq!(eval(&rem), Err(TreeError::DivisionByZero));
}

#[test]
fn test_float_division_by_zero_is_infinite() {
    let div = Node::bin_op("/", Node::literal("1.0", "double"), Node::int(0));
    assert_eq!(eval(&div), Ok(Value::Float(f64::INFINITY)));
}

#[test]
fn test_integer_overflow() {
    let expr = Node::bin_op("+", Node::int(i64::MAX), Node::int(1));
    assert_eq!(
        eval(&expr),
        Err(TreeError::IntegerOverflow { op: "+".to_string() })
    );

    let expr = Node::bin_op("/", Node::int(i64::MIN), Node::int(-1));
    assert!(matches!(eval(&expr), Err(TreeError::IntegerOverflow { .. })));
}

#[test]
fn test_invalid_operands() {
    let expr = Node::bin_op(
        "-",
        Node::literal("abc", "string"),
        Node::int(1),
    );
    assert_eq!(
        eval(&expr),
        Err(TreeError::InvalidOperands {
            op: "-".to_string(),
            left_type: "string",
            right_type: "int",
        })
    );
}

#[test]
fn test_bool_arithmetic_rejected() {
    let cmp = Node::bin_op("<", Node::int(1), Node::int(2));
    let expr = Node::bin_op("+", cmp, Node::int(1));
    assert!(matches!(
        eval(&expr),
        Err(TreeError::InvalidOperands { left_type: "bool", .. })
    ));
}

#[test]
fn test_ordering_mismatched_types_rejected() {
    let expr = Node::bin_op("<", Node::literal("a", "string"), Node::int(1));
    assert!(matches!(eval(&expr), Err(TreeError::InvalidOperands { .. })));
}

#[test]
fn test_equality_mismatched_types_is_false() {
    let expr = Node::bin_op("==", Node::literal("a", "string"), Node::int(1));
    assert_eq!(eval(&expr), Ok(Value::Bool(false)));
}

// ═══════════════════════════════════════════════════════════════════════
// Messages
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_display_messages() {
    assert_eq!(TreeError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        TreeError::DepthExceeded { max: 3 }.to_string(),
        "maximum nesting depth (3) exceeded"
    );
    assert_eq!(
        TreeError::InvalidOperands {
            op: "*".to_string(),
            left_type: "bool",
            right_type: "int"
        }
        .to_string(),
        "cannot apply '*' to bool and int"
    );
}

#[test]
fn test_type_names() {
    assert_eq!(type_name(&Value::from(1)), "int");
    assert_eq!(type_name(&Value::from(1.5)), "float");
    assert_eq!(type_name(&Value::from(true)), "bool");
    assert_eq!(type_name(&Value::from("s")), "string");
}

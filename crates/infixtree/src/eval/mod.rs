//! Expression evaluation

pub mod binary;

use crate::{Environment, EvalContext, Node, Result, TreeError, Value};

/// Trait for evaluating tree nodes to values.
pub trait Evaluate {
    /// Evaluate this node against the given environment.
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Node Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Node {
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value> {
        let _depth = ctx.enter()?;
        tracing::trace!(kind = self.kind_name(), depth = ctx.depth(), "evaluating node");

        match self {
            Node::Literal(lit) => Ok(Value::from_literal(&lit.val)),

            Node::Var(vble) => {
                let name = vble.name();
                env.lookup(&name).cloned().map_err(|err| {
                    tracing::debug!(%name, "variable not bound in environment");
                    err
                })
            }

            Node::BinOp(bin) => {
                let left = bin.left.eval(env, ctx)?;
                let right = bin.right.eval(env, ctx)?;
                binary::apply(&bin.op, left, right)
            }

            // Statements have no value
            Node::PreInc(_)
            | Node::PostInc(_)
            | Node::PreDec(_)
            | Node::PostDec(_)
            | Node::DefineVar(_)
            | Node::Assign(_)
            | Node::Seq(_)
            | Node::Loop(_)
            | Node::Print(_) => Err(TreeError::UnsupportedNode {
                kind: self.kind_name(),
                operation: "evaluate",
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression with the default context.
///
/// # Example
///
/// ```
/// use infixtree::{evaluate, Environment, Node, Value, Var};
///
/// let x = Var::untyped("x");
/// let expr = Node::bin_op("+", Node::var(&x), Node::int(3));
/// let env = Environment::new().with("x", 7);
///
/// assert_eq!(evaluate(&expr, &env).unwrap(), Value::Int(10));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(kind = node.kind_name()))]
pub fn evaluate(node: &Node, env: &Environment) -> Result<Value> {
    node.eval(env, &EvalContext::default())
}

/// Evaluate an expression with an explicit context.
pub fn evaluate_with(node: &Node, env: &Environment, ctx: &EvalContext) -> Result<Value> {
    node.eval(env, ctx)
}

/// Evaluate an optional expression; an absent node has no value.
pub fn evaluate_optional(node: Option<&Node>, env: &Environment) -> Result<Option<Value>> {
    node.map(|n| evaluate(n, env)).transpose()
}

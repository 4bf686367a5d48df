//! Infix pretty-printer
//!
//! Renders any node back into the language's surface syntax. Expressions are
//! printed with single spaces around operators, and a `BinOp` operand is
//! parenthesized only when it binds more loosely than its parent.

use crate::node::{Assign, BinOp, DefineVar, Loop, Print, Seq};
use crate::{precedence, EvalContext, Node, Result};

/// Render a node as infix source text.
///
/// Fails with `UnknownOperator` when a parenthesization decision involves an
/// operator without a precedence level, and with `DepthExceeded` when the
/// tree nests deeper than the default context allows.
///
/// # Example
///
/// ```
/// use infixtree::{render, Node, Var};
///
/// let (a, b, c) = (Var::untyped("a"), Var::untyped("b"), Var::untyped("c"));
/// let sum = Node::bin_op("+", Node::var(&a), Node::var(&b));
/// let expr = Node::bin_op("*", sum, Node::var(&c));
///
/// assert_eq!(render(&expr).unwrap(), "(a + b) * c");
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(kind = node.kind_name()))]
pub fn render(node: &Node) -> Result<String> {
    render_node(node, &EvalContext::default())
}

/// Render with an explicit context bounding the nesting depth.
pub fn render_with(node: &Node, ctx: &EvalContext) -> Result<String> {
    render_node(node, ctx)
}

fn render_node(node: &Node, ctx: &EvalContext) -> Result<String> {
    let _depth = ctx.enter()?;
    match node {
        Node::Literal(lit) => Ok(lit.val.clone()),
        Node::Var(vble) => Ok(vble.name()),
        Node::BinOp(bin) => render_bin_op(bin, ctx),
        Node::PreInc(vble) => Ok(format!("++{};", vble.name())),
        Node::PostInc(vble) => Ok(format!("{}++;", vble.name())),
        Node::PreDec(vble) => Ok(format!("--{};", vble.name())),
        Node::PostDec(vble) => Ok(format!("{}--;", vble.name())),
        Node::DefineVar(def) => render_define_var(def, ctx),
        Node::Assign(assign) => render_assign(assign, ctx),
        Node::Seq(seq) => render_seq(seq, ctx),
        Node::Loop(lp) => render_loop(lp, ctx),
        Node::Print(print) => render_print(print, ctx),
    }
}

fn render_bin_op(bin: &BinOp, ctx: &EvalContext) -> Result<String> {
    let left = render_operand(&bin.op, &bin.left, ctx)?;
    let right = render_operand(&bin.op, &bin.right, ctx)?;
    Ok(format!("{} {} {}", left, bin.op, right))
}

/// Render one side of a binary expression, parenthesizing a looser child.
fn render_operand(parent_op: &str, child: &Node, ctx: &EvalContext) -> Result<String> {
    let text = render_node(child, ctx)?;
    if let Node::BinOp(inner) = child {
        if precedence(parent_op)? < precedence(&inner.op)? {
            return Ok(format!("({})", text));
        }
    }
    Ok(text)
}

fn render_define_var(def: &DefineVar, ctx: &EvalContext) -> Result<String> {
    match &def.init_expr {
        Some(init) => Ok(format!(
            "{} {} = {};",
            def.vble.kind(),
            def.vble.name(),
            render_node(init, ctx)?
        )),
        None => Ok(format!("{} {};", def.vble.kind(), def.vble.name())),
    }
}

fn render_assign(assign: &Assign, ctx: &EvalContext) -> Result<String> {
    Ok(format!(
        "{} {} {};",
        assign.vble.name(),
        assign.op,
        render_node(&assign.expr, ctx)?
    ))
}

fn render_seq(seq: &Seq, ctx: &EvalContext) -> Result<String> {
    let mut lines = Vec::with_capacity(seq.kids.len() + 1);
    if !seq.comment.is_empty() {
        lines.push(format!("// {}", seq.comment));
    }
    for kid in &seq.kids {
        lines.push(render_node(kid, ctx)?);
    }
    Ok(lines.join("\n"))
}

fn render_loop(lp: &Loop, ctx: &EvalContext) -> Result<String> {
    Ok(format!(
        "while ({}) {{\n{}\n}}\n",
        render_node(&lp.cond, ctx)?,
        render_node(&lp.body, ctx)?
    ))
}

fn render_print(print: &Print, ctx: &EvalContext) -> Result<String> {
    Ok(format!("print({});", render_node(&print.expr, ctx)?))
}

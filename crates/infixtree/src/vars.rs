//! Variable occurrence collection

use crate::Node;

/// Names of every variable occurrence in `node`, left to right.
///
/// Duplicates are kept: `i + i` yields `["i", "i"]`. Declarations,
/// assignments and the increment/decrement statements contribute the name
/// of the variable they act on.
///
/// # Example
///
/// ```
/// use infixtree::{variable_names, Node, Var};
///
/// let i = Var::new("i", "int");
/// let expr = Node::bin_op("*", Node::var(&i), Node::var(&i));
/// assert_eq!(variable_names(&expr), vec!["i", "i"]);
/// ```
pub fn variable_names(node: &Node) -> Vec<String> {
    let mut names = Vec::new();
    collect(node, &mut names);
    names
}

fn collect(node: &Node, names: &mut Vec<String>) {
    match node {
        Node::Literal(_) => {}
        Node::Var(vble)
        | Node::PreInc(vble)
        | Node::PostInc(vble)
        | Node::PreDec(vble)
        | Node::PostDec(vble) => names.push(vble.name()),
        Node::BinOp(bin) => {
            collect(&bin.left, names);
            collect(&bin.right, names);
        }
        Node::DefineVar(def) => {
            names.push(def.vble.name());
            if let Some(init) = &def.init_expr {
                collect(init, names);
            }
        }
        Node::Assign(assign) => {
            names.push(assign.vble.name());
            collect(&assign.expr, names);
        }
        Node::Seq(seq) => {
            for kid in &seq.kids {
                collect(kid, names);
            }
        }
        Node::Loop(lp) => {
            collect(&lp.cond, names);
            collect(&lp.body, names);
        }
        Node::Print(print) => collect(&print.expr, names),
    }
}

//! Constructor-call Debug representation for nodes
//!
//! Every node prints as the constructor call that would rebuild it, fully
//! parenthesized and with quoted strings, e.g.
//! `BinOp("*", Var("i", "int"), Literal("5", "int"))`.

use std::fmt;

use super::*;

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({:?}, {:?})", self.val, self.kind)
    }
}

impl fmt::Debug for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinOp({:?}, {:?}, {:?})", self.op, self.left, self.right)
    }
}

impl fmt::Debug for DefineVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.init_expr {
            Some(init) => write!(f, "DefineVar({:?}, {:?})", self.vble, init),
            None => write!(f, "DefineVar({:?}, None)", self.vble),
        }
    }
}

impl fmt::Debug for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Assign({:?}, {:?}, {:?})", self.op, self.vble, self.expr)
    }
}

impl fmt::Debug for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq([")?;
        for (i, kid) in self.kids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", kid)?;
        }
        write!(f, "]")?;
        if !self.comment.is_empty() {
            write!(f, ", {:?}", self.comment)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Loop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loop({:?}, {:?})", self.cond, self.body)
    }
}

impl fmt::Debug for Print {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Print({:?})", self.expr)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(lit) => write!(f, "{:?}", lit),
            Node::Var(vble) => write!(f, "{:?}", vble),
            Node::BinOp(bin) => write!(f, "{:?}", bin),
            Node::PreInc(vble) => write!(f, "PreInc({:?})", vble),
            Node::PostInc(vble) => write!(f, "PostInc({:?})", vble),
            Node::PreDec(vble) => write!(f, "PreDec({:?})", vble),
            Node::PostDec(vble) => write!(f, "PostDec({:?})", vble),
            Node::DefineVar(def) => write!(f, "{:?}", def),
            Node::Assign(assign) => write!(f, "{:?}", assign),
            Node::Seq(seq) => write!(f, "{:?}", seq),
            Node::Loop(lp) => write!(f, "{:?}", lp),
            Node::Print(print) => write!(f, "{:?}", print),
        }
    }
}

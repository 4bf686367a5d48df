//! The node model: one closed enum covering every expression and statement

mod display;
mod var;

pub use var::Var;

/// A constant value, stored as text with a type tag.
#[derive(Clone, PartialEq)]
pub struct Literal {
    /// Textual value, e.g. `"2"`
    pub val: String,
    /// Type tag, e.g. `"int"`
    pub kind: String,
}

impl Literal {
    /// Create a literal.
    pub fn new(val: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            val: val.into(),
            kind: kind.into(),
        }
    }

    /// Create an `int` literal from a number.
    pub fn int(n: i64) -> Self {
        Self::new(n.to_string(), "int")
    }
}

/// A binary expression.
#[derive(Clone, PartialEq)]
pub struct BinOp {
    /// Operator symbol
    pub op: String,
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
}

/// A variable declaration with an optional initializer.
#[derive(Clone, PartialEq)]
pub struct DefineVar {
    /// The declared variable
    pub vble: Var,
    /// Initializer expression
    pub init_expr: Option<Box<Node>>,
}

/// An assignment statement such as `x += 1;`.
#[derive(Clone, PartialEq)]
pub struct Assign {
    /// Assignment operator symbol (`=`, `+=`, ...)
    pub op: String,
    /// Assigned variable
    pub vble: Var,
    /// Right-hand side
    pub expr: Box<Node>,
}

/// An ordered statement block.
#[derive(Clone, PartialEq, Default)]
pub struct Seq {
    /// Statements in execution order
    pub kids: Vec<Node>,
    /// Leading comment; empty means none
    pub comment: String,
}

impl Seq {
    /// Create a block with no comment.
    pub fn new(kids: Vec<Node>) -> Self {
        Self {
            kids,
            comment: String::new(),
        }
    }

    /// Set the leading comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// A while-loop.
#[derive(Clone, PartialEq)]
pub struct Loop {
    /// Loop condition
    pub cond: Box<Node>,
    /// Loop body, typically a `Seq`
    pub body: Box<Node>,
}

/// A print statement.
#[derive(Clone, PartialEq)]
pub struct Print {
    /// Expression to print
    pub expr: Box<Node>,
}

/// A tree node.
///
/// Children are owned by their parent. The one exception is [`Var`], whose
/// handles may be shared between positions (see its docs). Cloning a node
/// copies the structure but keeps variable handles aliased.
#[derive(Clone, PartialEq)]
pub enum Node {
    /// Constant value
    Literal(Literal),
    /// Variable reference
    Var(Var),
    /// Binary expression
    BinOp(BinOp),
    /// `++name;`
    PreInc(Var),
    /// `name++;`
    PostInc(Var),
    /// `--name;`
    PreDec(Var),
    /// `name--;`
    PostDec(Var),
    /// Declaration with initializer
    DefineVar(DefineVar),
    /// Assignment statement
    Assign(Assign),
    /// Statement block
    Seq(Seq),
    /// While-loop
    Loop(Loop),
    /// Print statement
    Print(Print),
}

impl Node {
    // ═══════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════

    /// Create a literal node.
    pub fn literal(val: impl Into<String>, kind: impl Into<String>) -> Self {
        Node::Literal(Literal::new(val, kind))
    }

    /// Create an `int` literal node from a number.
    pub fn int(n: i64) -> Self {
        Node::Literal(Literal::int(n))
    }

    /// Create a variable node aliasing `vble`.
    pub fn var(vble: &Var) -> Self {
        Node::Var(vble.clone())
    }

    /// Create a binary expression node.
    pub fn bin_op(op: impl Into<String>, left: Node, right: Node) -> Self {
        Node::BinOp(BinOp {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `++vble;`
    pub fn pre_inc(vble: &Var) -> Self {
        Node::PreInc(vble.clone())
    }

    /// `vble++;`
    pub fn post_inc(vble: &Var) -> Self {
        Node::PostInc(vble.clone())
    }

    /// `--vble;`
    pub fn pre_dec(vble: &Var) -> Self {
        Node::PreDec(vble.clone())
    }

    /// `vble--;`
    pub fn post_dec(vble: &Var) -> Self {
        Node::PostDec(vble.clone())
    }

    /// Create a declaration. Pass `None` for a declaration without initializer.
    pub fn define_var(vble: &Var, init_expr: impl Into<Option<Node>>) -> Self {
        Node::DefineVar(DefineVar {
            vble: vble.clone(),
            init_expr: init_expr.into().map(Box::new),
        })
    }

    /// Create an assignment statement.
    pub fn assign(op: impl Into<String>, vble: &Var, expr: Node) -> Self {
        Node::Assign(Assign {
            op: op.into(),
            vble: vble.clone(),
            expr: Box::new(expr),
        })
    }

    /// Create a statement block with no comment.
    pub fn seq(kids: Vec<Node>) -> Self {
        Node::Seq(Seq::new(kids))
    }

    /// Create a statement block with a leading comment.
    pub fn seq_with_comment(kids: Vec<Node>, comment: impl Into<String>) -> Self {
        Node::Seq(Seq::new(kids).with_comment(comment))
    }

    /// Create a while-loop.
    pub fn while_loop(cond: Node, body: Node) -> Self {
        Node::Loop(Loop {
            cond: Box::new(cond),
            body: Box::new(body),
        })
    }

    /// Create a print statement.
    pub fn print(expr: Node) -> Self {
        Node::Print(Print {
            expr: Box::new(expr),
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Introspection
    // ═══════════════════════════════════════════════════════════════════

    /// Name of this node's variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Literal(_) => "Literal",
            Node::Var(_) => "Var",
            Node::BinOp(_) => "BinOp",
            Node::PreInc(_) => "PreInc",
            Node::PostInc(_) => "PostInc",
            Node::PreDec(_) => "PreDec",
            Node::PostDec(_) => "PostDec",
            Node::DefineVar(_) => "DefineVar",
            Node::Assign(_) => "Assign",
            Node::Seq(_) => "Seq",
            Node::Loop(_) => "Loop",
            Node::Print(_) => "Print",
        }
    }

    /// True for the pure-expression subset the evaluator accepts.
    pub fn is_expression(&self) -> bool {
        matches!(self, Node::Literal(_) | Node::Var(_) | Node::BinOp(_))
    }

    /// Mutable access to a block, e.g. to set its comment after construction.
    pub fn as_seq_mut(&mut self) -> Option<&mut Seq> {
        match self {
            Node::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// The constructor-call representation (same as `{:?}`).
    pub fn repr(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Literal(lit)
    }
}

impl From<Var> for Node {
    fn from(vble: Var) -> Self {
        Node::Var(vble)
    }
}

impl From<Seq> for Node {
    fn from(seq: Seq) -> Self {
        Node::Seq(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let v = Var::new("i", "int");
        assert_eq!(Node::int(1).kind_name(), "Literal");
        assert_eq!(Node::post_dec(&v).kind_name(), "PostDec");
        assert_eq!(Node::seq(vec![]).kind_name(), "Seq");
    }

    #[test]
    fn test_is_expression() {
        let v = Var::new("i", "int");
        assert!(Node::var(&v).is_expression());
        assert!(Node::bin_op("+", Node::int(1), Node::int(2)).is_expression());
        assert!(!Node::print(Node::int(1)).is_expression());
        assert!(!Node::pre_inc(&v).is_expression());
    }

    #[test]
    fn test_comment_mutation() {
        let mut block = Node::seq(vec![Node::int(1)]);
        if let Some(seq) = block.as_seq_mut() {
            seq.comment = "later".to_string();
        }
        assert_eq!(block, Node::seq_with_comment(vec![Node::int(1)], "later"));
    }

    #[test]
    fn test_define_var_without_init() {
        let v = Var::new("a", "int");
        match Node::define_var(&v, None) {
            Node::DefineVar(def) => assert!(def.init_expr.is_none()),
            other => panic!("expected DefineVar, got {:?}", other),
        }
    }
}

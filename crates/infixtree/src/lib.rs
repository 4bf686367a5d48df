//! # infixtree
//!
//! Expression and statement trees for a small C++-like language.
//!
//! Trees are assembled directly from [`Node`] constructors; there is no
//! parser. Two tree walks operate on them:
//!
//! - **Evaluator**: reduces `Literal`, `Var` and `BinOp` subtrees to a
//!   [`Value`] against a caller-supplied [`Environment`].
//! - **Infix printer**: renders any node back into surface syntax, adding
//!   parentheses only where operator precedence requires them.
//!
//! ## Example
//!
//! ```
//! use infixtree::{render, Node, Var};
//!
//! let i = Var::new("i", "int");
//! let prog = Node::seq(vec![
//!     Node::define_var(&i, Node::literal("1", "int")),
//!     Node::while_loop(
//!         Node::bin_op("<", Node::var(&i), Node::literal("5", "int")),
//!         Node::seq(vec![
//!             Node::print(Node::bin_op("*", Node::var(&i), Node::var(&i))),
//!             Node::post_inc(&i),
//!         ]),
//!     ),
//! ]);
//!
//! assert_eq!(
//!     render(&prog).unwrap(),
//!     "int i = 1;\nwhile (i < 5) {\nprint(i * i);\ni++;\n}\n"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod node;
pub mod precedence;
pub mod render;
pub mod value;
pub mod vars;

// Re-export main types
pub use context::EvalContext;
pub use environment::Environment;
pub use error::{Result, TreeError};
pub use eval::{evaluate, evaluate_optional, evaluate_with, Evaluate};
pub use node::{Assign, BinOp, DefineVar, Literal, Loop, Node, Print, Seq, Var};
pub use precedence::precedence;
pub use render::{render, render_with};
pub use value::Value;
pub use vars::variable_names;

/// infixtree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

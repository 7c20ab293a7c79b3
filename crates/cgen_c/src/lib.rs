//! C source model: declarators, expressions, statements and directives.
//!
//! Every node implements [`cgen_core::Code`] and can be added to a
//! [`cgen_core::Source`], usually one built with [`c_source`].

pub mod block;
pub mod cpp;
mod csource;
pub mod data;
pub mod decl;
pub mod expr;

pub use block::{Block, ForLoop, Func, Global, IfBlock, Linkage, Statement, WhileLoop};
pub use cpp::{Define, Include, IncludeFile, Includes};
pub use csource::c_source;
pub use data::{CharLiteral, IntBase, IntLiteral, Literal, StringLiteral};
pub use decl::{void_args, AggregateKind, CDecl, CType};
pub use expr::{BinaryOp, Expr, Fixity, Parentheses, UnaryOp, Variable};

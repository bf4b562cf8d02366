//! Grammar-driven parser
//!
//! This module turns a token sequence into a [`SyntaxTree`]:
//! - [`grammar`]: categories, field tags and the ordered rule table
//! - [`lookahead`]: the per-rule shift/reduce overrides
//! - [`stack`]: the bounded parse stack
//! - [`tree`]: the arena-backed syntax tree
//! - [`parse`]: the shift-reduce driver
//!
//! # Grammar
//!
//! ```text
//! Unit       → ^ Statement* $
//! Statement  → Assignment | Print | Control
//! Assignment → Name = Expr ;  |  Index = Expr ;
//! Print      → print Expr ;  |  print Str Expr ;
//! Control    → If ElseIf* [Else] | DoWhile | While
//! If         → if Expr { Statement* }
//! ElseIf     → elif Expr { Statement* }
//! Else       → else { Statement* }
//! DoWhile    → do { Statement* } while Expr ;
//! While      → while Expr { Statement* }
//! Expr       → Atom | Paren | Binary | Unary | Ternary | Index
//! Atom       → Name | Number
//! Index      → Name [ Expr ]
//! Paren      → ( Expr )
//! Binary     → Expr op Expr
//! Unary      → + Expr | - Expr | ! Expr
//! Ternary    → Expr ? Expr : Expr
//! ```
//!
//! There is no parser generator and there are no LR tables: rules are tried
//! in order against the top of the stack on every step.

pub mod grammar;
pub mod lookahead;
pub mod parse;
pub mod stack;
pub mod tree;

pub use grammar::{Category, Field};
pub use parse::{parse, Parser, ParserConfig};
pub use tree::{Edge, Node, NodeId, SyntaxTree};

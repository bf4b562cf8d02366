//! # Introduction
//!
//! shiftred is the front end of a small imperative language. It tokenizes
//! source bytes by running one automaton per token kind in lockstep, then
//! builds a syntax tree with a table-driven shift-reduce parser whose
//! conflicts are settled by per-rule lookahead policies.
//!
//! ## Pipeline
//!
//! ```text
//! Source bytes → Lexer → Tokens → Parser → SyntaxTree
//! ```
//!
//! 1. [`lexer`]: maximal-munch tokenization; every byte lands in exactly one
//!    token, whitespace and comments included.
//! 2. [`parser`]: grammar table, lookahead policies, bounded stack and the
//!    arena-backed [`parser::SyntaxTree`].
//! 3. [`render`]: colored token listings and stack traces for diagnostics.
//! 4. [`errors`]: the [`LexError`] and [`ParseError`] taxonomy.
//!
//! ## Language
//!
//! Integer variables and arrays, `print` with an optional string label,
//! `if`/`elif`/`else`, `while`, `do`/`while`, the ternary operator and the
//! usual arithmetic, comparison and logical operators. Comments are `//` and
//! `/* */`. Executing the tree is left to the caller.
//!
//! ```
//! let tree = shiftred::parse_source(b"x = 1 + 2 * 3; print \"x\" x;").unwrap();
//! assert_eq!(tree.statements().count(), 2);
//! ```

pub mod constants;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod render;

pub use errors::{LexError, ParseError};

use thiserror::Error;

/// Either stage's failure, for callers running both in one go.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Tokenize and parse `source` with the default configuration.
pub fn parse_source(source: &[u8]) -> Result<parser::SyntaxTree<'_>, Error> {
    let tokens = lexer::tokenize(source)?;
    Ok(parser::parse(&tokens)?)
}

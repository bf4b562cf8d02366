//! Tokenizer
//!
//! Converts raw source bytes into a flat [`Token`] sequence:
//! - [`token`]: token kinds, spans and the borrowed [`Token`] record
//! - [`automata`]: one small automaton per token kind
//! - [`tokenize`]: the maximal-munch driver running every automaton in lockstep
//!
//! Whitespace and comments are kept in the output so that the sequence covers
//! the source without gaps; the parser skips them.

pub mod automata;
pub mod token;
pub mod tokenize;

pub use token::{SourceLocation, Span, Token, TokenKind};
pub use tokenize::{tokenize, Lexer};

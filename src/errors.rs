//! Error types for the tokenizer and parser
//!
//! The taxonomy is closed: [`LexError`] covers everything that can go wrong
//! while tokenizing and [`ParseError`] everything that can go wrong while
//! parsing. Nothing here is retried internally and nothing terminates the
//! process; the caller decides how to report and whether to exit.

use crate::lexer::{SourceLocation, Span};
use thiserror::Error;

/// Tokenizer failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No recognizer could accept the bytes in `span`
    #[error("unknown token at {location} (bytes {span})")]
    UnknownToken {
        span: Span,
        location: SourceLocation,
    },

    /// The token buffer could not grow; partial output was discarded
    #[error("out of memory while growing the token buffer")]
    OutOfMemory,
}

/// Parser failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token sequence does not reduce to a single program node
    #[error("syntax error: input did not reduce to a program ({depth} nodes left on the stack)")]
    Rejected { depth: usize },

    /// A node or child list could not be allocated mid-reduction
    #[error("out of memory while building the syntax tree")]
    OutOfMemory,

    /// Shifting would exceed the configured stack depth
    #[error("parse stack depth of {limit} exceeded")]
    StackOverflow { limit: usize },
}

impl LexError {
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnknownToken { span, .. } => Some(*span),
            LexError::OutOfMemory => None,
        }
    }
}

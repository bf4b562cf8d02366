//! Colored diagnostics
//!
//! Plain-string renderings of token listings and parse stacks, styled with
//! crossterm. Nothing here prints; the caller decides where the text goes.

pub mod theme;

use std::fmt;

use crossterm::style::Stylize;

use crate::errors::LexError;
use crate::lexer::Token;
use crate::parser::grammar::RuleId;
use crate::parser::tree::Node;
use theme::DEFAULT_THEME;

/// One line of the parser's shift/reduce trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Shift,
    Reduce(RuleId),
    Accept,
    Reject,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Shift => write!(f, "Shift:"),
            // Rules are numbered from 1 in traces
            Step::Reduce(rule) => write!(f, "Red{:02}:", rule + 1),
            Step::Accept => write!(f, "ACCEPT"),
            Step::Reject => write!(f, "REJECT"),
        }
    }
}

pub fn step_label(step: Step) -> String {
    let color = match step {
        Step::Shift => DEFAULT_THEME.shift,
        Step::Reduce(_) => DEFAULT_THEME.reduce,
        Step::Accept => DEFAULT_THEME.accept,
        Step::Reject => DEFAULT_THEME.error,
    };
    step.to_string().with(color).to_string()
}

/// Source text reassembled from `tokens`, significant tokens alternating
/// between two colors and comments grayed out.
///
/// When `error` is an unknown-token failure, the offending bytes of `source`
/// follow in red with a `< Unknown token` note.
pub fn highlight_tokens(source: &[u8], tokens: &[Token<'_>], error: Option<&LexError>) -> String {
    let mut out = String::new();
    let mut alternate = 0usize;

    for token in tokens.iter().filter(|token| !token.kind.is_sentinel()) {
        if token.is_significant() {
            alternate += 1;
        }

        let text = token.text();
        let color = if token.kind.is_comment() {
            DEFAULT_THEME.comment
        } else if alternate % 2 == 1 {
            DEFAULT_THEME.token
        } else {
            DEFAULT_THEME.token_alt
        };
        out.push_str(&(&*text).with(color).to_string());
    }

    if let Some(span) = error.and_then(LexError::span) {
        let end = span.end.min(source.len());
        let start = span.start.min(end);
        let offending = String::from_utf8_lossy(&source[start..end]);
        out.push_str(&(&*offending).with(DEFAULT_THEME.error).to_string());
        out.push_str(&" < Unknown token".with(DEFAULT_THEME.note).to_string());
        out.push('\n');
    }

    out
}

/// One-line rendering of a parse stack, bottom first: categories by name,
/// tokens by lexeme, sentinels as `^` and `$`.
pub fn stack_line<'a, 'src: 'a>(nodes: impl IntoIterator<Item = &'a Node<'src>>) -> String {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Leaf(token) => token.to_string().with(DEFAULT_THEME.token).to_string(),
            Node::Interior { category, .. } => {
                category.to_string().with(DEFAULT_THEME.category).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

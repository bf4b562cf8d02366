//! Shift-reduce driver
//!
//! This module provides the [`Parser`] and its per-call state. The driver
//! shifts one significant token at a time, then reduces for as long as some
//! grammar rule matches the top of the stack, letting each rule's lookahead
//! policy ask for one more token first.
//!
//! # Rule matching
//!
//! A rule is matched right to left against the stack, top down. A terminal
//! matches a leaf of the same kind and a category matches an interior node
//! carrying it. A repeated term may match zero nodes, and after it has
//! matched once, further nodes it matches are absorbed while the next term
//! to the left does not match. The first rule in grammar order that reaches
//! the left end of its right-hand side wins.

use std::iter::Peekable;

use log::{debug, log_enabled, trace, Level};

use super::grammar::{Category, Rule, RuleId, Term, GRAMMAR};
use super::lookahead;
use super::stack::ParseStack;
use super::tree::{Edge, NodeId, SyntaxTree};
use crate::constants::STACK_MAX_DEPTH;
use crate::errors::ParseError;
use crate::lexer::Token;
use crate::render::{self, Step};

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Largest number of nodes the parse stack may hold
    pub max_stack_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_stack_depth: STACK_MAX_DEPTH,
        }
    }
}

/// Table-driven shift-reduce parser.
///
/// The parser itself only holds configuration. Every call to
/// [`Parser::parse`] builds its own stack and arena, so one parser can serve
/// any number of parses, concurrently or not.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a full token sequence, sentinels included.
    ///
    /// Whitespace and comment tokens are skipped. On any error every node
    /// built so far is dropped.
    pub fn parse<'src>(&self, tokens: &[Token<'src>]) -> Result<SyntaxTree<'src>, ParseError> {
        let mut state = ParseState::new(&self.config);
        let mut input = tokens
            .iter()
            .copied()
            .filter(Token::is_significant)
            .peekable();

        while let Some(token) = input.next() {
            state.shift(token)?;
            state.reduce_all(&mut input)?;
        }

        state.finish()
    }
}

/// Parse `tokens` with the default configuration.
pub fn parse<'src>(tokens: &[Token<'src>]) -> Result<SyntaxTree<'src>, ParseError> {
    Parser::new().parse(tokens)
}

struct ParseState<'src> {
    tree: SyntaxTree<'src>,
    stack: ParseStack,
    /// Edges of the last successful match, top of stack first
    matched: Vec<Edge>,
}

impl<'src> ParseState<'src> {
    fn new(config: &ParserConfig) -> Self {
        Self {
            tree: SyntaxTree::new(),
            stack: ParseStack::with_limit(config.max_stack_depth),
            matched: Vec::new(),
        }
    }

    fn shift(&mut self, token: Token<'src>) -> Result<(), ParseError> {
        let leaf = self.tree.push_leaf(token)?;
        self.stack.push(leaf)?;
        // A match never consumes more nodes than the stack holds
        self.matched
            .try_reserve(self.stack.len())
            .map_err(|_| ParseError::OutOfMemory)?;
        self.trace(Step::Shift);
        Ok(())
    }

    fn reduce_all<I>(&mut self, input: &mut Peekable<I>) -> Result<(), ParseError>
    where
        I: Iterator<Item = Token<'src>>,
    {
        while let Some((id, at)) = self.find_match() {
            let rule = &GRAMMAR[id];
            match input.next_if(|next| lookahead::should_shift(rule, next.kind)) {
                Some(next) => self.shift(next)?,
                None => self.reduce(id, at)?,
            }
        }
        Ok(())
    }

    fn find_match(&mut self) -> Option<(RuleId, usize)> {
        GRAMMAR.iter().enumerate().find_map(|(id, rule)| {
            match_rule(rule, &self.tree, self.stack.as_slice(), &mut self.matched).map(|at| (id, at))
        })
    }

    fn reduce(&mut self, id: RuleId, at: usize) -> Result<(), ParseError> {
        self.matched.reverse();
        let node = self.tree.push_interior(GRAMMAR[id].lhs, id, &self.matched)?;
        self.stack.collapse(at, node);
        self.trace(Step::Reduce(id));
        Ok(())
    }

    fn finish(self) -> Result<SyntaxTree<'src>, ParseError> {
        let root = match self.stack.as_slice() {
            [root] if self.tree.category(*root) == Some(Category::START) => Some(*root),
            _ => None,
        };

        match root {
            Some(root) => {
                self.trace(Step::Accept);
                debug!("parse accepted with {} nodes", self.tree.len());
                Ok(self.tree.with_root(root))
            }
            None => {
                self.trace(Step::Reject);
                debug!("parse rejected with {} nodes on the stack", self.stack.len());
                Err(ParseError::Rejected {
                    depth: self.stack.len(),
                })
            }
        }
    }

    fn trace(&self, step: Step) {
        if log_enabled!(Level::Trace) {
            let nodes = self.stack.as_slice().iter().map(|&id| self.tree.node(id));
            trace!("{} {}", render::step_label(step), render::stack_line(nodes));
        }
    }
}

/// Match `rule` against the top of `stack`. On success returns the stack
/// index where the match starts and leaves the consumed edges, top first,
/// in `matched`.
fn match_rule(
    rule: &Rule,
    tree: &SyntaxTree<'_>,
    stack: &[NodeId],
    matched: &mut Vec<Edge>,
) -> Option<usize> {
    matched.clear();

    let mut term = rule.rhs.len();
    let mut repeated: Option<&Term> = None;
    let mut at = stack.len();

    while term > 0 && at > 0 {
        let node = stack[at - 1];
        let current = &rule.rhs[term - 1];

        let field = if tree.node(node).matches(current.symbol) {
            repeated = current.repeated.then_some(current);
            term -= 1;
            current.field
        } else if let Some(previous) = repeated.filter(|p| tree.node(node).matches(p.symbol)) {
            previous.field
        } else if current.repeated {
            repeated = None;
            term -= 1;
            continue;
        } else {
            return None;
        };

        matched.push(Edge { node, field });
        at -= 1;
    }

    (term == 0 && at < stack.len()).then_some(at)
}

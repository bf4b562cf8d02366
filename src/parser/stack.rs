//! Bounded parse stack
//!
//! The stack holds arena indices, bottom first. Growth past the configured
//! limit fails with [`ParseError::StackOverflow`] instead of allocating more.

use super::tree::NodeId;
use crate::errors::ParseError;

#[derive(Debug, Clone)]
pub struct ParseStack {
    nodes: Vec<NodeId>,
    limit: usize,
}

impl ParseStack {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            nodes: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, node: NodeId) -> Result<(), ParseError> {
        if self.nodes.len() >= self.limit {
            return Err(ParseError::StackOverflow { limit: self.limit });
        }
        self.nodes.try_reserve(1).map_err(|_| ParseError::OutOfMemory)?;
        self.nodes.push(node);
        Ok(())
    }

    /// Replace the nodes from `at` to the top with `node`.
    ///
    /// Never grows the stack, so it cannot fail.
    pub fn collapse(&mut self, at: usize, node: NodeId) {
        debug_assert!(at < self.nodes.len());
        self.nodes.truncate(at);
        self.nodes.push(node);
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

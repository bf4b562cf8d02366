//! Syntax tree
//!
//! All nodes of one tree live in a single arena and refer to their children
//! by index. Child edges are stored contiguously per parent and carry the
//! [`Field`] of the grammar term that matched them. Dropping the tree frees
//! every node at once.

use std::fmt;
use std::ops::Range;

use super::grammar::{Category, Field, Rule, RuleId, Symbol, GRAMMAR};
use crate::errors::ParseError;
use crate::lexer::Token;

/// Index of a node in its tree's arena
pub type NodeId = usize;

/// A child reference and the role it plays in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub node: NodeId,
    pub field: Option<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'src> {
    /// Exactly one token, no children
    Leaf(Token<'src>),
    /// A reduction: at least one child
    Interior {
        category: Category,
        rule: RuleId,
        /// Range into the tree's edge list
        children: Range<usize>,
    },
}

impl<'src> Node<'src> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Node::Interior { category, .. } => Some(*category),
            Node::Leaf(_) => None,
        }
    }

    pub fn token(&self) -> Option<&Token<'src>> {
        match self {
            Node::Leaf(token) => Some(token),
            Node::Interior { .. } => None,
        }
    }

    /// A terminal matches a leaf of its kind; a category matches an interior
    /// node carrying it.
    pub fn matches(&self, symbol: Symbol) -> bool {
        match (self, symbol) {
            (Node::Leaf(token), Symbol::Token(kind)) => token.kind == kind,
            (Node::Interior { category, .. }, Symbol::Category(wanted)) => *category == wanted,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree<'src> {
    nodes: Vec<Node<'src>>,
    edges: Vec<Edge>,
    root: NodeId,
}

impl<'src> SyntaxTree<'src> {
    /// Empty arena, filled by the parser.
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            root: 0,
        }
    }

    pub(crate) fn push_leaf(&mut self, token: Token<'src>) -> Result<NodeId, ParseError> {
        self.push_node(Node::Leaf(token))
    }

    pub(crate) fn push_interior(
        &mut self,
        category: Category,
        rule: RuleId,
        children: &[Edge],
    ) -> Result<NodeId, ParseError> {
        debug_assert!(!children.is_empty());
        self.edges
            .try_reserve(children.len())
            .map_err(|_| ParseError::OutOfMemory)?;
        let start = self.edges.len();
        self.edges.extend_from_slice(children);
        let end = self.edges.len();

        self.push_node(Node::Interior {
            category,
            rule,
            children: start..end,
        })
    }

    fn push_node(&mut self, node: Node<'src>) -> Result<NodeId, ParseError> {
        self.nodes.try_reserve(1).map_err(|_| ParseError::OutOfMemory)?;
        self.nodes.push(node);
        Ok(self.nodes.len() - 1)
    }

    pub(crate) fn with_root(mut self, root: NodeId) -> Self {
        self.root = root;
        self
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &Node<'src> {
        &self.nodes[id]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<'src>> {
        self.nodes.get(id)
    }

    /// Number of nodes, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn category(&self, id: NodeId) -> Option<Category> {
        self.node(id).category()
    }

    pub fn token(&self, id: NodeId) -> Option<&Token<'src>> {
        self.node(id).token()
    }

    /// The grammar rule that produced an interior node.
    pub fn rule(&self, id: NodeId) -> Option<&'static Rule> {
        match self.node(id) {
            Node::Interior { rule, .. } => GRAMMAR.get(*rule),
            Node::Leaf(_) => None,
        }
    }

    /// Child edges in source order; empty for leaves.
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        match self.node(id) {
            Node::Interior { children, .. } => &self.edges[children.clone()],
            Node::Leaf(_) => &[],
        }
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges(id).iter().map(|edge| edge.node)
    }

    /// First child playing `field`.
    pub fn child(&self, id: NodeId, field: Field) -> Option<NodeId> {
        self.children_with(id, field).next()
    }

    /// Every child playing `field`, in source order.
    pub fn children_with(&self, id: NodeId, field: Field) -> impl Iterator<Item = NodeId> + '_ {
        self.edges(id)
            .iter()
            .filter(move |edge| edge.field == Some(field))
            .map(|edge| edge.node)
    }

    /// Top-level statements of the program.
    pub fn statements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children_with(self.root, Field::Body)
    }

    /// Leaf tokens of the whole tree in source order.
    pub fn leaves(&self) -> Vec<Token<'src>> {
        self.leaves_of(self.root)
    }

    /// Leaf tokens under `id` in source order.
    pub fn leaves_of(&self, id: NodeId) -> Vec<Token<'src>> {
        let mut leaves = Vec::new();
        let mut pending = vec![id];

        while let Some(id) = pending.pop() {
            match self.node(id) {
                Node::Leaf(token) => leaves.push(*token),
                Node::Interior { children, .. } => {
                    pending.extend(self.edges[children.clone()].iter().rev().map(|edge| edge.node));
                }
            }
        }

        leaves
    }

    /// S-expression rendering of the subtree at `id`, e.g. `(Atom x)`.
    pub fn sexpr(&self, id: NodeId) -> String {
        Sexpr { tree: self, id }.to_string()
    }

    fn write_sexpr(&self, id: NodeId, out: &mut impl fmt::Write) -> fmt::Result {
        enum Step {
            Enter(NodeId),
            Leave,
        }

        let mut pending = vec![Step::Enter(id)];
        let mut first = true;

        while let Some(step) = pending.pop() {
            match step {
                Step::Enter(id) => {
                    if !first {
                        out.write_char(' ')?;
                    }
                    first = false;

                    match self.node(id) {
                        Node::Leaf(token) => write!(out, "{}", token)?,
                        Node::Interior {
                            category, children, ..
                        } => {
                            write!(out, "({}", category)?;
                            pending.push(Step::Leave);
                            pending.extend(
                                self.edges[children.clone()]
                                    .iter()
                                    .rev()
                                    .map(|edge| Step::Enter(edge.node)),
                            );
                        }
                    }
                }
                Step::Leave => out.write_char(')')?,
            }
        }

        Ok(())
    }
}

struct Sexpr<'a, 'src> {
    tree: &'a SyntaxTree<'src>,
    id: NodeId,
}

impl fmt::Display for Sexpr<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.write_sexpr(self.id, f)
    }
}

impl fmt::Display for SyntaxTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        self.write_sexpr(self.root, f)
    }
}

// Minimal tree-walking evaluator used to check parse trees by their meaning
#![allow(dead_code)]

use rustc_hash::FxHashMap;
use shiftred::lexer::TokenKind;
use shiftred::parser::{Category, Field, NodeId, SyntaxTree};

#[derive(Default)]
pub struct Evaluator {
    vars: FxHashMap<String, i64>,
    arrays: FxHashMap<(String, i64), i64>,
    pub output: Vec<String>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(&self, name: &str) -> i64 {
        self.vars.get(name).copied().unwrap_or(0)
    }

    pub fn run(&mut self, tree: &SyntaxTree<'_>) {
        for statement in tree.statements() {
            self.statement(tree, statement);
        }
    }

    fn block(&mut self, tree: &SyntaxTree<'_>, id: NodeId) {
        let body: Vec<_> = tree.children_with(id, Field::Body).collect();
        for statement in body {
            self.statement(tree, statement);
        }
    }

    fn statement(&mut self, tree: &SyntaxTree<'_>, id: NodeId) {
        let inner = tree.children(id).next().unwrap();
        match tree.category(inner).unwrap() {
            Category::Assignment => {
                let target = tree.child(inner, Field::Target).unwrap();
                let value = self.expr(tree, tree.child(inner, Field::Value).unwrap());
                match tree.token(target) {
                    Some(name) => {
                        self.vars.insert(name.text().into_owned(), value);
                    }
                    None => {
                        let key = self.element(tree, target);
                        self.arrays.insert(key, value);
                    }
                }
            }
            Category::Print => {
                let value = self.expr(tree, tree.child(inner, Field::Value).unwrap());
                let line = match tree.child(inner, Field::Label).and_then(|id| tree.token(id)) {
                    Some(label) => {
                        let text = label.text();
                        format!("{} {}", text.trim_matches('"'), value)
                    }
                    None => value.to_string(),
                };
                self.output.push(line);
            }
            Category::Control => self.control(tree, inner),
            other => panic!("not a statement: {:?}", other),
        }
    }

    fn control(&mut self, tree: &SyntaxTree<'_>, id: NodeId) {
        let clauses: Vec<_> = tree.children_with(id, Field::Clause).collect();
        if !clauses.is_empty() {
            for clause in clauses {
                let taken = match tree.child(clause, Field::Guard) {
                    Some(guard) => self.expr(tree, guard) != 0,
                    None => true,
                };
                if taken {
                    self.block(tree, clause);
                    break;
                }
            }
            return;
        }

        let looped = tree.children(id).next().unwrap();
        let guard = tree.child(looped, Field::Guard).unwrap();
        match tree.category(looped).unwrap() {
            Category::While => {
                while self.expr(tree, guard) != 0 {
                    self.block(tree, looped);
                }
            }
            Category::DoWhile => loop {
                self.block(tree, looped);
                if self.expr(tree, guard) == 0 {
                    break;
                }
            },
            other => panic!("not a control construct: {:?}", other),
        }
    }

    fn element(&mut self, tree: &SyntaxTree<'_>, index: NodeId) -> (String, i64) {
        let name = tree.child(index, Field::Target).and_then(|id| tree.token(id)).unwrap();
        let at = self.expr(tree, tree.child(index, Field::Index).unwrap());
        (name.text().into_owned(), at)
    }

    pub fn expr(&mut self, tree: &SyntaxTree<'_>, id: NodeId) -> i64 {
        let operator = |id| {
            tree.child(id, Field::Operator)
                .and_then(|op| tree.token(op))
                .map(|token| token.kind)
                .unwrap()
        };

        match tree.category(id).unwrap() {
            Category::Expr => self.expr(tree, tree.children(id).next().unwrap()),
            Category::Paren => self.expr(tree, tree.child(id, Field::Inner).unwrap()),
            Category::Atom => {
                let token = tree.token(tree.children(id).next().unwrap()).unwrap();
                match token.kind {
                    TokenKind::Number => token.text().parse().unwrap(),
                    _ => self.var(&token.text()),
                }
            }
            Category::Index => {
                let key = self.element(tree, id);
                self.arrays.get(&key).copied().unwrap_or(0)
            }
            Category::Unary => {
                let value = self.expr(tree, tree.child(id, Field::Operand).unwrap());
                match operator(id) {
                    TokenKind::Minus => value.wrapping_neg(),
                    TokenKind::Bang => (value == 0) as i64,
                    _ => value,
                }
            }
            Category::Ternary => {
                if self.expr(tree, tree.child(id, Field::Guard).unwrap()) != 0 {
                    self.expr(tree, tree.child(id, Field::Then).unwrap())
                } else {
                    self.expr(tree, tree.child(id, Field::Otherwise).unwrap())
                }
            }
            Category::Binary => {
                let op = operator(id);
                let lhs = self.expr(tree, tree.child(id, Field::Lhs).unwrap());
                let rhs_id = tree.child(id, Field::Rhs).unwrap();
                match op {
                    TokenKind::And => (lhs != 0 && self.expr(tree, rhs_id) != 0) as i64,
                    TokenKind::Or => (lhs != 0 || self.expr(tree, rhs_id) != 0) as i64,
                    _ => {
                        let rhs = self.expr(tree, rhs_id);
                        match op {
                            TokenKind::Plus => lhs.wrapping_add(rhs),
                            TokenKind::Minus => lhs.wrapping_sub(rhs),
                            TokenKind::Star => lhs.wrapping_mul(rhs),
                            TokenKind::Slash => lhs.checked_div(rhs).unwrap_or(0),
                            TokenKind::Percent => lhs.checked_rem(rhs).unwrap_or(0),
                            TokenKind::Eq => (lhs == rhs) as i64,
                            TokenKind::NotEq => (lhs != rhs) as i64,
                            TokenKind::Lt => (lhs < rhs) as i64,
                            TokenKind::Gt => (lhs > rhs) as i64,
                            TokenKind::LtEq => (lhs <= rhs) as i64,
                            TokenKind::GtEq => (lhs >= rhs) as i64,
                            other => panic!("not a binary operator: {:?}", other),
                        }
                    }
                }
            }
            other => panic!("not an expression: {:?}", other),
        }
    }
}

/// Run a whole program and return what it printed.
pub fn run(source: &str) -> Vec<String> {
    let tree = shiftred::parse_source(source.as_bytes()).expect("program should parse");
    let mut evaluator = Evaluator::new();
    evaluator.run(&tree);
    evaluator.output
}

/// Value of a single expression.
pub fn eval(expr: &str) -> i64 {
    let source = format!("result = {};", expr);
    let tree = shiftred::parse_source(source.as_bytes()).expect("expression should parse");
    let mut evaluator = Evaluator::new();
    evaluator.run(&tree);
    evaluator.var("result")
}

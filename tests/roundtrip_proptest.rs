//! Property-based tests for the tokenizer and parser
//!
//! Expressions are generated as small trees, rendered to source and checked
//! by evaluating the parse tree:
//! - fully parenthesized renderings must evaluate like the generated tree
//! - flat operator chains must follow the binding strengths and fold left
//! - layout (whitespace and comments) never changes the tree
//! - any byte string either tokenizes with full coverage or fails with an
//!   in-bounds unknown-token span

mod common;

use proptest::prelude::*;
use shiftred::errors::LexError;
use shiftred::lexer::{tokenize, Lexer, Token};
use shiftred::parser::parse;

#[derive(Debug, Clone)]
enum Expr {
    Num(i64),
    Neg(Box<Expr>),
    Not(Box<Expr>),
    Bin(Box<Expr>, &'static str, Box<Expr>),
}

impl Expr {
    fn parenthesized(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Neg(inner) => format!("-({})", inner.parenthesized()),
            Expr::Not(inner) => format!("!({})", inner.parenthesized()),
            Expr::Bin(lhs, op, rhs) => {
                format!("({} {} {})", lhs.parenthesized(), op, rhs.parenthesized())
            }
        }
    }

    fn value(&self) -> i64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Neg(inner) => inner.value().wrapping_neg(),
            Expr::Not(inner) => (inner.value() == 0) as i64,
            Expr::Bin(lhs, op, rhs) => {
                let (l, r) = (lhs.value(), rhs.value());
                match *op {
                    "+" => l.wrapping_add(r),
                    "-" => l.wrapping_sub(r),
                    "*" => l.wrapping_mul(r),
                    "/" => l.checked_div(r).unwrap_or(0),
                    "%" => l.checked_rem(r).unwrap_or(0),
                    "==" => (l == r) as i64,
                    "!=" => (l != r) as i64,
                    "<" => (l < r) as i64,
                    ">" => (l > r) as i64,
                    "<=" => (l <= r) as i64,
                    ">=" => (l >= r) as i64,
                    "&&" => (l != 0 && r != 0) as i64,
                    "||" => (l != 0 || r != 0) as i64,
                    other => unreachable!("{}", other),
                }
            }
        }
    }
}

const BINARY_OPERATORS: [&str; 13] = [
    "+", "-", "*", "/", "%", "==", "!=", "<", ">", "<=", ">=", "&&", "||",
];

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(BINARY_OPERATORS.to_vec())
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = (0i64..100).prop_map(Expr::Num);
    leaf.prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expr::Neg(Box::new(e))),
            inner.clone().prop_map(|e| Expr::Not(Box::new(e))),
            (inner.clone(), operator_strategy(), inner)
                .prop_map(|(l, op, r)| Expr::Bin(Box::new(l), op, Box::new(r))),
        ]
    })
}

/// `n0 op n1 op n2 ...` over every binary operator
fn flat_chain_strategy() -> impl Strategy<Value = (Vec<i64>, Vec<&'static str>)> {
    (1usize..10).prop_flat_map(|len| {
        (
            prop::collection::vec(0i64..8, len + 1),
            prop::collection::vec(operator_strategy(), len),
        )
    })
}

fn strength(op: &str) -> u8 {
    match op {
        "||" => 1,
        "&&" => 2,
        "==" | "!=" => 3,
        "<" | ">" | "<=" | ">=" => 4,
        "+" | "-" => 5,
        "*" | "/" | "%" => 6,
        other => unreachable!("{}", other),
    }
}

/// Shunting-yard: an operator folds every pending one that binds at least as
/// tightly, so equal strengths associate to the left.
fn flat_chain_tree(numbers: &[i64], ops: &[&'static str]) -> Expr {
    fn fold(operands: &mut Vec<Expr>, op: &'static str) {
        let rhs = operands.pop().unwrap();
        let lhs = operands.pop().unwrap();
        operands.push(Expr::Bin(Box::new(lhs), op, Box::new(rhs)));
    }

    let mut operands = vec![Expr::Num(numbers[0])];
    let mut pending: Vec<&'static str> = Vec::new();

    for (&op, &n) in ops.iter().zip(&numbers[1..]) {
        while let Some(&top) = pending.last() {
            if strength(top) < strength(op) {
                break;
            }
            pending.pop();
            fold(&mut operands, top);
        }
        pending.push(op);
        operands.push(Expr::Num(n));
    }
    while let Some(op) = pending.pop() {
        fold(&mut operands, op);
    }

    operands.pop().unwrap()
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    // Comments open after a space so a preceding `/` cannot fuse with them
    prop::sample::select(vec![" ", "\n", "\t", " /* c */", " // c\n", " /**/ "])
}

proptest! {
    #[test]
    fn test_parenthesized_expressions_evaluate(expr in expr_strategy()) {
        let source = expr.parenthesized();
        prop_assert_eq!(common::eval(&source), expr.value(), "{}", source);
    }

    #[test]
    fn test_flat_chains_follow_precedence((numbers, ops) in flat_chain_strategy()) {
        let mut source = numbers[0].to_string();
        for (op, n) in ops.iter().zip(&numbers[1..]) {
            source.push_str(&format!(" {} {}", op, n));
        }
        let expected = flat_chain_tree(&numbers, &ops);
        prop_assert_eq!(common::eval(&source), expected.value(), "{} as {}", source, expected.parenthesized());
    }

    #[test]
    fn test_layout_does_not_change_the_tree(
        expr in expr_strategy(),
        separators in prop::collection::vec(separator_strategy(), 64),
    ) {
        let canonical = format!("x = {};", expr.parenthesized());
        let canonical_tokens = tokenize(canonical.as_bytes()).unwrap();
        let canonical_tree = parse(&canonical_tokens).unwrap();

        let words: Vec<String> = canonical_tokens
            .iter()
            .filter(|t| t.is_significant() && !t.kind.is_sentinel())
            .map(|t| t.text().into_owned())
            .collect();
        let mut spaced = String::new();
        for (i, word) in words.iter().enumerate() {
            spaced.push_str(separators[i % separators.len()]);
            spaced.push_str(word);
        }

        let spaced_tokens = tokenize(spaced.as_bytes()).unwrap();
        let spaced_tree = parse(&spaced_tokens).unwrap();
        prop_assert_eq!(spaced_tree.to_string(), canonical_tree.to_string());

        let significant: Vec<Token<'_>> =
            spaced_tokens.iter().copied().filter(Token::is_significant).collect();
        prop_assert_eq!(spaced_tree.leaves(), significant);
    }

    #[test]
    fn test_arbitrary_bytes_tokenize_or_fail_cleanly(
        source in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut lexer = Lexer::new(&source);
        let (covered, end) = match lexer.tokenize() {
            Ok(tokens) => {
                prop_assert_eq!(tokens.last().map(|t| t.kind.is_sentinel()), Some(true));
                (tokens, source.len())
            }
            Err(LexError::UnknownToken { span, .. }) => {
                prop_assert!(span.start < span.end);
                prop_assert!(span.end <= source.len());
                (lexer.partial_tokens().to_vec(), span.start)
            }
            Err(LexError::OutOfMemory) => {
                return Err(TestCaseError::fail("unexpected out of memory"));
            }
        };

        let mut offset = 0;
        for token in covered.iter().filter(|t| !t.kind.is_sentinel()) {
            let span = token.span.unwrap();
            prop_assert_eq!(span.start, offset);
            prop_assert!(span.end > span.start);
            offset = span.end;
        }
        prop_assert_eq!(offset, end);
    }
}

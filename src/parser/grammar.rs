//! Grammar table
//!
//! The grammar is a static, ordered list of [`Rule`]s. Each rule names the
//! category it produces, the right-hand-side [`Term`]s it matches against the
//! top of the parse stack, and the [`Lookahead`] policy that may postpone it.
//! When several rules match the same stack suffix the first one wins.
//!
//! Terms can carry a [`Field`] tag. The tag travels onto the child edge of
//! the reduced node so consumers find a child by its role (the guard of a
//! `do`/`while`, the target of an assignment) instead of by position.

use std::fmt;

use crate::lexer::TokenKind;

/// Syntax categories (non-terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Unit,
    Statement,
    Assignment,
    Print,
    Control,
    If,
    ElseIf,
    Else,
    DoWhile,
    While,
    Atom,
    Expr,
    Paren,
    Binary,
    Unary,
    Ternary,
    Index,
}

impl Category {
    /// The start symbol: a successful parse reduces to exactly one of these.
    pub const START: Category = Category::Unit;
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Role of a child within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Statements of a block or of the whole unit
    Body,
    /// Condition of `if`, `elif`, `while`, `do`/`while` and `?:`
    Guard,
    /// Clauses of a control construct, in source order
    Clause,
    /// Assigned name or indexed name; array name of an index
    Target,
    /// Assigned or printed expression
    Value,
    /// String label of a print
    Label,
    /// Subscript of an index
    Index,
    Lhs,
    Rhs,
    Operator,
    Operand,
    /// Parenthesized expression
    Inner,
    Then,
    Otherwise,
}

/// What a term matches: a token kind (leaf) or a category (interior node).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Token(TokenKind),
    Category(Category),
}

/// One position of a rule's right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub symbol: Symbol,
    /// Matches zero or more consecutive nodes.
    pub repeated: bool,
    pub field: Option<Field>,
}

/// Shift/reduce override attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    /// Always reduce.
    Reduce,
    /// Binary expression: shift while the next operator binds tighter.
    Precedence,
    /// Ternary: shift while any binary operator or `?` follows.
    Operator,
    /// Name or indexed name: shift before `=` or `[`.
    Target,
    /// Open `if`/`elif` chain: shift before `elif` or `else`.
    Clause,
}

/// Index of a rule in [`GRAMMAR`].
pub type RuleId = usize;

/// A production: `lhs → rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub lhs: Category,
    pub rhs: &'static [Term],
    pub lookahead: Lookahead,
}

impl Rule {
    /// Operator token of a binary, unary or ternary rule.
    pub fn operator(&self) -> Option<TokenKind> {
        self.rhs.iter().find_map(|term| match (term.field, term.symbol) {
            (Some(Field::Operator), Symbol::Token(kind)) => Some(kind),
            _ => None,
        })
    }
}

macro_rules! t {
    ($kind:ident) => {
        Term { symbol: Symbol::Token(TokenKind::$kind), repeated: false, field: None }
    };
    ($kind:ident : $field:ident) => {
        Term { symbol: Symbol::Token(TokenKind::$kind), repeated: false, field: Some(Field::$field) }
    };
}

macro_rules! n {
    ($cat:ident) => {
        Term { symbol: Symbol::Category(Category::$cat), repeated: false, field: None }
    };
    ($cat:ident : $field:ident) => {
        Term { symbol: Symbol::Category(Category::$cat), repeated: false, field: Some(Field::$field) }
    };
}

macro_rules! m {
    ($cat:ident : $field:ident) => {
        Term { symbol: Symbol::Category(Category::$cat), repeated: true, field: Some(Field::$field) }
    };
}

macro_rules! rule {
    ($lhs:ident => $($term:expr),+ ; $look:ident) => {
        Rule { lhs: Category::$lhs, rhs: &[$($term),+], lookahead: Lookahead::$look }
    };
    ($lhs:ident => $($term:expr),+) => {
        Rule { lhs: Category::$lhs, rhs: &[$($term),+], lookahead: Lookahead::Reduce }
    };
}

macro_rules! binary {
    ($op:ident) => {
        rule!(Binary => n!(Expr: Lhs), t!($op: Operator), n!(Expr: Rhs); Precedence)
    };
}

/// The grammar, in match-priority order.
pub static GRAMMAR: &[Rule] = &[
    rule!(Unit => t!(FileStart), m!(Statement: Body), t!(FileEnd)),

    rule!(Statement => n!(Assignment)),
    rule!(Statement => n!(Print)),
    rule!(Statement => n!(Control)),

    rule!(Assignment => t!(Name: Target), t!(Assign), n!(Expr: Value), t!(Semicolon)),
    rule!(Assignment => n!(Index: Target), t!(Assign), n!(Expr: Value), t!(Semicolon)),

    rule!(Print => t!(Print), n!(Expr: Value), t!(Semicolon)),
    rule!(Print => t!(Print), t!(Str: Label), n!(Expr: Value), t!(Semicolon)),

    rule!(Control => n!(If: Clause), m!(ElseIf: Clause); Clause),
    rule!(Control => n!(If: Clause), m!(ElseIf: Clause), n!(Else: Clause)),
    rule!(Control => n!(DoWhile)),
    rule!(Control => n!(While)),

    rule!(If => t!(If), n!(Expr: Guard), t!(LBrace), m!(Statement: Body), t!(RBrace)),
    rule!(ElseIf => t!(Elif), n!(Expr: Guard), t!(LBrace), m!(Statement: Body), t!(RBrace)),
    rule!(Else => t!(Else), t!(LBrace), m!(Statement: Body), t!(RBrace)),

    rule!(DoWhile => t!(Do), t!(LBrace), m!(Statement: Body), t!(RBrace), t!(While), n!(Expr: Guard), t!(Semicolon)),
    rule!(While => t!(While), n!(Expr: Guard), t!(LBrace), m!(Statement: Body), t!(RBrace)),

    rule!(Atom => t!(Name); Target),
    rule!(Atom => t!(Number)),

    rule!(Index => t!(Name: Target), t!(LBracket), n!(Expr: Index), t!(RBracket)),

    rule!(Expr => n!(Atom)),
    rule!(Expr => n!(Paren)),
    rule!(Expr => n!(Binary)),
    rule!(Expr => n!(Unary)),
    rule!(Expr => n!(Ternary)),
    rule!(Expr => n!(Index); Target),

    rule!(Paren => t!(LParen), n!(Expr: Inner), t!(RParen)),

    binary!(Eq),
    binary!(NotEq),
    binary!(Lt),
    binary!(Gt),
    binary!(LtEq),
    binary!(GtEq),
    binary!(And),
    binary!(Or),
    binary!(Plus),
    binary!(Minus),
    binary!(Star),
    binary!(Slash),
    binary!(Percent),

    rule!(Unary => t!(Plus: Operator), n!(Expr: Operand)),
    rule!(Unary => t!(Minus: Operator), n!(Expr: Operand)),
    rule!(Unary => t!(Bang: Operator), n!(Expr: Operand)),

    rule!(Ternary => n!(Expr: Guard), t!(Question), n!(Expr: Then), t!(Colon), n!(Expr: Otherwise); Operator),
];

//! Shift/reduce overrides
//!
//! A rule that matches the top of the stack is normally reduced at once.
//! Its [`Lookahead`] policy can instead ask the driver to shift the next
//! significant token first. That is how operator precedence, assignment
//! targets and `if`/`elif`/`else` chains are resolved without LR tables.

use super::grammar::{Lookahead, Rule};
use crate::lexer::TokenKind;

/// Binding strength of a binary operator; higher binds tighter.
pub fn binding_strength(kind: TokenKind) -> Option<u8> {
    let strength = match kind {
        TokenKind::Or => 1,
        TokenKind::And => 2,
        TokenKind::Eq | TokenKind::NotEq => 3,
        TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => 4,
        TokenKind::Plus | TokenKind::Minus => 5,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => 6,
        _ => return None,
    };
    Some(strength)
}

/// Whether `rule`, already matched, should wait for `next` to be shifted.
pub fn should_shift(rule: &Rule, next: TokenKind) -> bool {
    match rule.lookahead {
        Lookahead::Reduce => false,
        Lookahead::Precedence => {
            let current = rule.operator().and_then(binding_strength);
            match (current, binding_strength(next)) {
                // Equal strength reduces: left associativity
                (Some(current), Some(incoming)) => incoming > current,
                _ => false,
            }
        }
        Lookahead::Operator => next.is_binary_operator() || next == TokenKind::Question,
        Lookahead::Target => matches!(next, TokenKind::Assign | TokenKind::LBracket),
        Lookahead::Clause => matches!(next, TokenKind::Elif | TokenKind::Else),
    }
}

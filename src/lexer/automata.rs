//! Recognizer automata
//!
//! Each token kind owns a tiny automaton. All automata are driven in lockstep
//! over the same bytes; every step answers one [`Status`]:
//!
//! - [`Status::Accept`]: the prefix seen so far is a complete token,
//! - [`Status::Hungry`]: the prefix could still become a token,
//! - [`Status::Reject`]: no extension of the prefix is a token.
//!
//! Transitions are pure: `step(state, byte) -> (state, status)`. The caller
//! owns the state, so any number of tokenizers can run at once.

use super::token::TokenKind;

/// Answer of one automaton after consuming one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Accept,
    Reject,
    Hungry,
}

/// The automaton family behind a token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Automaton {
    /// Fixed spelling: punctuation and keywords.
    Literal(&'static [u8]),
    Identifier,
    Integer,
    StringLiteral,
    Whitespace,
    LineComment,
    BlockComment,
}

/// Automaton state. Variants are grouped by the automaton that uses them;
/// every automaton starts in [`State::Start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Start,

    /// Literal: number of bytes matched so far.
    Matched(usize),

    /// Identifier, integer and whitespace runs.
    Run,

    /// String literal: inside the quotes / after the closing quote.
    StringBody,
    StringClosed,

    /// Comments: after the first `/`.
    Slash,
    /// Line comment: after `//` / after the terminating newline.
    LineBody,
    LineClosed,
    /// Block comment: after `/*`, after a `*` inside, after the closing `*/`.
    BlockBody,
    BlockStar,
    BlockClosed,
}

fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_newline(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

const REJECT: (State, Status) = (State::Start, Status::Reject);

impl Automaton {
    /// Automaton recognizing `kind`; `None` for the sentinels.
    pub fn for_kind(kind: TokenKind) -> Option<Self> {
        let automaton = match kind {
            TokenKind::Name => Automaton::Identifier,
            TokenKind::Number => Automaton::Integer,
            TokenKind::Str => Automaton::StringLiteral,
            TokenKind::Whitespace => Automaton::Whitespace,
            TokenKind::LineComment => Automaton::LineComment,
            TokenKind::BlockComment => Automaton::BlockComment,
            other => Automaton::Literal(other.literal()?),
        };
        Some(automaton)
    }

    /// Feed one byte. A rejecting step always returns to [`State::Start`].
    pub fn step(self, state: State, byte: u8) -> (State, Status) {
        match self {
            Automaton::Literal(text) => literal(text, state, byte),
            Automaton::Identifier => match state {
                State::Start if is_name_start(byte) => (State::Run, Status::Accept),
                State::Run if is_name_continue(byte) => (State::Run, Status::Accept),
                _ => REJECT,
            },
            Automaton::Integer => match state {
                State::Start | State::Run if byte.is_ascii_digit() => {
                    (State::Run, Status::Accept)
                }
                _ => REJECT,
            },
            Automaton::Whitespace => match state {
                State::Start | State::Run if is_whitespace(byte) => (State::Run, Status::Accept),
                _ => REJECT,
            },
            Automaton::StringLiteral => match state {
                State::Start if byte == b'"' => (State::StringBody, Status::Hungry),
                State::StringBody if byte == b'"' => (State::StringClosed, Status::Accept),
                State::StringBody => (State::StringBody, Status::Hungry),
                _ => REJECT,
            },
            Automaton::LineComment => match state {
                State::Start if byte == b'/' => (State::Slash, Status::Hungry),
                State::Slash if byte == b'/' => (State::LineBody, Status::Accept),
                State::LineBody if is_newline(byte) => (State::LineClosed, Status::Accept),
                State::LineBody => (State::LineBody, Status::Accept),
                _ => REJECT,
            },
            Automaton::BlockComment => match state {
                State::Start if byte == b'/' => (State::Slash, Status::Hungry),
                State::Slash if byte == b'*' => (State::BlockBody, Status::Hungry),
                State::BlockBody | State::BlockStar if byte == b'*' => {
                    (State::BlockStar, Status::Hungry)
                }
                State::BlockStar if byte == b'/' => (State::BlockClosed, Status::Accept),
                State::BlockBody | State::BlockStar => (State::BlockBody, Status::Hungry),
                _ => REJECT,
            },
        }
    }
}

fn literal(text: &'static [u8], state: State, byte: u8) -> (State, Status) {
    let matched = match state {
        State::Start => 0,
        State::Matched(n) => n,
        _ => return REJECT,
    };

    match text.get(matched) {
        Some(&expected) if expected == byte => {
            let matched = matched + 1;
            let status = if matched == text.len() {
                Status::Accept
            } else {
                Status::Hungry
            };
            (State::Matched(matched), status)
        }
        _ => REJECT,
    }
}

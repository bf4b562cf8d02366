//! The maximal-munch driver
//!
//! [`Lexer`] runs one recognizer slot per token kind over the source. A slot
//! remembers its automaton state plus two statuses: `prev`, after the bytes
//! already committed to the current token, and `curr`, after speculatively
//! feeding the byte under the cursor. While any slot is still alive the byte
//! is committed; once every slot rejects, the token ends and the kind whose
//! `prev` status was [`Status::Accept`] wins.

use super::automata::{Automaton, State, Status};
use super::token::{SourceLocation, Span, Token, TokenKind};
use crate::errors::LexError;

/// Per-kind recognizer slot.
#[derive(Debug, Clone, Copy)]
struct Slot {
    kind: TokenKind,
    automaton: Automaton,
    state: State,
    prev: Status,
    curr: Status,
}

impl Slot {
    fn new(kind: TokenKind, automaton: Automaton) -> Self {
        Slot {
            kind,
            automaton,
            state: State::Start,
            prev: Status::Hungry,
            curr: Status::Reject,
        }
    }

    fn reset(&mut self) {
        self.state = State::Start;
        self.prev = Status::Hungry;
        self.curr = Status::Reject;
    }
}

/// Tokenizer over one source buffer.
///
/// A lexer owns all of its automaton state; separate lexers never share
/// anything and can run on separate threads.
pub struct Lexer<'src> {
    source: &'src [u8],
    slots: Vec<Slot>,
    tokens: Vec<Token<'src>>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source bytes.
    pub fn new(source: &'src [u8]) -> Self {
        let slots = TokenKind::RECOGNIZABLE
            .iter()
            .filter_map(|&kind| Automaton::for_kind(kind).map(|automaton| Slot::new(kind, automaton)))
            .collect();

        Self {
            source,
            slots,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// On success the returned sequence starts with [`TokenKind::FileStart`],
    /// ends with [`TokenKind::FileEnd`] and covers every source byte exactly
    /// once in between. After [`LexError::UnknownToken`] the tokens preceding
    /// the offending bytes stay available through [`Lexer::partial_tokens`].
    pub fn tokenize(&mut self) -> Result<Vec<Token<'src>>, LexError> {
        self.tokens.clear();
        self.reset_slots();
        self.push(Token::file_start())?;

        let mut start = 0;
        let mut cursor = 0;

        while cursor < self.source.len() {
            if self.feed(self.source[cursor]) {
                self.commit();
                cursor += 1;
                continue;
            }

            // Maximal-munch boundary: the byte under the cursor is retried as
            // the first byte of the next token.
            self.emit(start, cursor)?;
            start = cursor;
        }

        if start < cursor {
            self.emit(start, cursor)?;
        }

        self.push(Token::file_end())?;
        log::debug!("tokenized {} bytes into {} tokens", self.source.len(), self.tokens.len());
        Ok(std::mem::take(&mut self.tokens))
    }

    /// Tokens produced before the last failure (empty after out-of-memory).
    pub fn partial_tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Feed `byte` to every slot still alive. Returns whether any slot
    /// accepts or is hungry afterwards.
    fn feed(&mut self, byte: u8) -> bool {
        let mut alive = false;

        for slot in &mut self.slots {
            if slot.prev != Status::Reject {
                let (state, status) = slot.automaton.step(slot.state, byte);
                slot.state = state;
                slot.curr = status;
            }

            if slot.curr != Status::Reject {
                alive = true;
            }
        }

        alive
    }

    fn commit(&mut self) {
        for slot in &mut self.slots {
            slot.prev = slot.curr;
        }
    }

    fn reset_slots(&mut self) {
        for slot in &mut self.slots {
            slot.reset();
        }
    }

    /// Close the token spanning `[start, end)` and reset every slot.
    fn emit(&mut self, start: usize, end: usize) -> Result<(), LexError> {
        // Later kinds win ties, so keywords beat identifiers.
        let winner = self
            .slots
            .iter()
            .rev()
            .find(|slot| slot.prev == Status::Accept)
            .map(|slot| slot.kind);
        self.reset_slots();

        match winner {
            Some(kind) => self.push(Token::new(kind, self.source, Span::new(start, end))),
            None => {
                // Nothing consumed yet means the byte under the cursor is the culprit.
                let span = if start == end {
                    Span::new(start, (end + 1).min(self.source.len()))
                } else {
                    Span::new(start, end)
                };
                let location = SourceLocation::of(self.source, span.start);
                log::debug!("unknown token at {}", location);
                Err(LexError::UnknownToken { span, location })
            }
        }
    }

    fn push(&mut self, token: Token<'src>) -> Result<(), LexError> {
        if self.tokens.try_reserve(1).is_err() {
            self.tokens = Vec::new();
            return Err(LexError::OutOfMemory);
        }
        self.tokens.push(token);
        Ok(())
    }
}

/// Tokenize `source` with a fresh [`Lexer`].
pub fn tokenize(source: &[u8]) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source).tokenize()
}

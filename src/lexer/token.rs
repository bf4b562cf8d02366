//! Token records produced by the tokenizer
//!
//! A [`Token`] is a borrowed view into the source buffer: it carries its
//! [`TokenKind`], the half-open byte [`Span`] it covers and the lexeme slice
//! itself. The two sentinel kinds ([`TokenKind::FileStart`] and
//! [`TokenKind::FileEnd`]) bracket every sequence and carry no span.

use std::borrow::Cow;
use std::fmt;

/// Every kind of token the tokenizer can produce.
///
/// The order of the recognizable kinds (everything before the sentinels) is
/// the recognizer table order; when two kinds accept the same prefix the one
/// declared later wins, which is what makes `if` a keyword and not a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Variable-length lexemes
    Name,
    Number,
    Str,

    // Insignificant
    Whitespace,
    LineComment,
    BlockComment,

    // Brackets
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    // Keywords
    If,
    Elif,
    Else,
    Do,
    While,

    // Assignment and comparison
    Assign, // =
    Eq,     // ==
    NotEq,  // !=
    Lt,     // <
    Gt,     // >
    LtEq,   // <=
    GtEq,   // >=

    // Logical
    And, // &&
    Or,  // ||

    // Arithmetic
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Bang,    // !

    Print,
    Semicolon, // ;
    Question,  // ?
    Colon,     // :

    // Sentinels
    FileStart,
    FileEnd,
}

impl TokenKind {
    /// Recognizable kinds in recognizer table order (sentinels excluded).
    pub const RECOGNIZABLE: [TokenKind; 36] = [
        TokenKind::Name,
        TokenKind::Number,
        TokenKind::Str,
        TokenKind::Whitespace,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::If,
        TokenKind::Elif,
        TokenKind::Else,
        TokenKind::Do,
        TokenKind::While,
        TokenKind::Assign,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::LtEq,
        TokenKind::GtEq,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Bang,
        TokenKind::Print,
        TokenKind::Semicolon,
        TokenKind::Question,
        TokenKind::Colon,
    ];

    /// Fixed spelling of punctuation and keyword kinds.
    pub fn literal(self) -> Option<&'static [u8]> {
        let text: &'static [u8] = match self {
            TokenKind::LParen => b"(",
            TokenKind::RParen => b")",
            TokenKind::LBracket => b"[",
            TokenKind::RBracket => b"]",
            TokenKind::LBrace => b"{",
            TokenKind::RBrace => b"}",
            TokenKind::If => b"if",
            TokenKind::Elif => b"elif",
            TokenKind::Else => b"else",
            TokenKind::Do => b"do",
            TokenKind::While => b"while",
            TokenKind::Assign => b"=",
            TokenKind::Eq => b"==",
            TokenKind::NotEq => b"!=",
            TokenKind::Lt => b"<",
            TokenKind::Gt => b">",
            TokenKind::LtEq => b"<=",
            TokenKind::GtEq => b">=",
            TokenKind::And => b"&&",
            TokenKind::Or => b"||",
            TokenKind::Plus => b"+",
            TokenKind::Minus => b"-",
            TokenKind::Star => b"*",
            TokenKind::Slash => b"/",
            TokenKind::Percent => b"%",
            TokenKind::Bang => b"!",
            TokenKind::Print => b"print",
            TokenKind::Semicolon => b";",
            TokenKind::Question => b"?",
            TokenKind::Colon => b":",
            _ => return None,
        };
        Some(text)
    }

    /// Whitespace and comments never reach the parser.
    pub fn is_significant(self) -> bool {
        !matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_sentinel(self) -> bool {
        matches!(self, TokenKind::FileStart | TokenKind::FileEnd)
    }

    /// Operators that can sit between two expressions.
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtEq
                | TokenKind::GtEq
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name => write!(f, "identifier"),
            TokenKind::Number => write!(f, "integer literal"),
            TokenKind::Str => write!(f, "string literal"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::LineComment => write!(f, "line comment"),
            TokenKind::BlockComment => write!(f, "block comment"),
            TokenKind::FileStart => write!(f, "start of file"),
            TokenKind::FileEnd => write!(f, "end of file"),
            other => match other.literal() {
                Some(text) => write!(f, "'{}'", String::from_utf8_lossy(text)),
                None => write!(f, "{:?}", other),
            },
        }
    }
}

/// Half-open byte range `[start, end)` into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Line and column (both 1-based) of a byte offset, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Locate `offset` within `source`. Offsets past the end clamp to it.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn of(source: &[u8], offset: usize) -> Self {
        let end = offset.min(source.len());
        let mut line = 1;
        let mut line_start = 0;

        for (at, &byte) in source[..end].iter().enumerate() {
            let breaks = match byte {
                b'\n' => true,
                b'\r' => source.get(at + 1) != Some(&b'\n'),
                _ => false,
            };
            if breaks {
                line += 1;
                line_start = at + 1;
            }
        }

        Self {
            line,
            column: end - line_start + 1,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// One maximal lexical unit, borrowed from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// `None` only for the two sentinels.
    pub span: Option<Span>,
    /// The covered bytes; empty for the sentinels.
    pub lexeme: &'src [u8],
}

impl<'src> Token<'src> {
    /// Token of `kind` covering `span` of `source`.
    pub fn new(kind: TokenKind, source: &'src [u8], span: Span) -> Self {
        Self {
            kind,
            span: Some(span),
            lexeme: &source[span.start..span.end],
        }
    }

    pub fn file_start() -> Self {
        Self::sentinel(TokenKind::FileStart)
    }

    pub fn file_end() -> Self {
        Self::sentinel(TokenKind::FileEnd)
    }

    fn sentinel(kind: TokenKind) -> Self {
        Self {
            kind,
            span: None,
            lexeme: &[],
        }
    }

    pub fn is_significant(&self) -> bool {
        self.kind.is_significant()
    }

    /// The lexeme as text; invalid UTF-8 (only possible inside strings and
    /// comments) is replaced.
    pub fn text(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.lexeme)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::FileStart => write!(f, "^"),
            TokenKind::FileEnd => write!(f, "$"),
            _ => write!(f, "{}", self.text()),
        }
    }
}

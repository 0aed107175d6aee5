use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseKindError;

/// A region of source text.
///
/// `start` and `end` are byte offsets into the scanned input, so the token text
/// is always `&source[start..end]`. `line` and `column` locate the first
/// character (both 1-based, column counted in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token classification for CSS source.
///
/// The kinds carry no data: a token's text is recovered from its span.
/// Declaration order is the order used for legends and tie-breaking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TokenKind {
    Whitespace,
    Comment,
    String,
    Hash,
    AtKeyword,
    Percentage,
    Dimension,
    Number,
    Function,
    Identifier,

    // Punctuation
    Colon,
    Semicolon,
    LeftBrace,
    RightBrace,
    Comma,
    LeftParen,
    RightParen,

    // Anything no other rule claims
    Delimiter,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 18] = [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Hash,
        TokenKind::AtKeyword,
        TokenKind::Percentage,
        TokenKind::Dimension,
        TokenKind::Number,
        TokenKind::Function,
        TokenKind::Identifier,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Delimiter,
    ];

    /// The kind's name as written in this enum, e.g. `AtKeyword`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Comment => "Comment",
            TokenKind::String => "String",
            TokenKind::Hash => "Hash",
            TokenKind::AtKeyword => "AtKeyword",
            TokenKind::Percentage => "Percentage",
            TokenKind::Dimension => "Dimension",
            TokenKind::Number => "Number",
            TokenKind::Function => "Function",
            TokenKind::Identifier => "Identifier",
            TokenKind::Colon => "Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Comma => "Comma",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::Delimiter => "Delimiter",
        }
    }

    /// Kebab-case form used for CSS class names, e.g. `at-keyword`.
    pub fn slug(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Hash => "hash",
            TokenKind::AtKeyword => "at-keyword",
            TokenKind::Percentage => "percentage",
            TokenKind::Dimension => "dimension",
            TokenKind::Number => "number",
            TokenKind::Function => "function",
            TokenKind::Identifier => "identifier",
            TokenKind::Colon => "colon",
            TokenKind::Semicolon => "semicolon",
            TokenKind::LeftBrace => "left-brace",
            TokenKind::RightBrace => "right-brace",
            TokenKind::Comma => "comma",
            TokenKind::LeftParen => "left-paren",
            TokenKind::RightParen => "right-paren",
            TokenKind::Delimiter => "delimiter",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = ParseKindError;

    /// Accepts either the enum name or the slug, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(s) || kind.slug().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ParseKindError {
                name: s.to_string(),
            })
    }
}

/// A token produced by the CSS scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The slice of `source` this token covers.
    ///
    /// `source` must be the string the token was scanned from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

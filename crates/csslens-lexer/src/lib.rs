//! csslens Lexer
//!
//! Tokenizes CSS text into a flat, lossless stream of classified tokens for
//! visualization. The scanner is tolerant: it accepts any input, never fails,
//! and degrades unrecognized characters into single-character `Delimiter`
//! tokens. Concatenating the text of every token reproduces the input.
//!
//! # Example
//!
//! ```
//! use csslens_lexer::{tokenize, TokenKind};
//!
//! let source = "width: 12px";
//! let tokens = tokenize(source);
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens[3].kind, TokenKind::Dimension);
//! assert_eq!(tokens[3].text(source), "12px");
//! ```

pub mod scanner;
pub mod token;

pub use scanner::{split_numeric, tokenize, Scanner};
pub use token::{Span, Token, TokenKind};

/// Error returned when a string does not name a [`TokenKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown token kind: '{name}'")]
pub struct ParseKindError {
    pub name: String,
}

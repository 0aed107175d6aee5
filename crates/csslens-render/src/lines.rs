//! Split a token stream into display lines.

use csslens_lexer::{Span, Token};

/// The tokens on one display line, without the line break.
pub type Line = Vec<Token>;

/// Partition tokens into lines.
///
/// Only `Whitespace` tokens are split: each `\n` inside one ends the current
/// line, and the whitespace on either side of it becomes a separate fragment.
/// A comment or string that spans several lines stays whole on the line where
/// it starts. There is always at least one line, so `"a\n"` gives two lines
/// and `""` gives one empty line.
pub fn lines(source: &str, tokens: &[Token]) -> Vec<Line> {
    let mut out = Vec::new();
    let mut current = Line::new();

    for token in tokens {
        if !token.is_whitespace() || !token.text(source).contains('\n') {
            current.push(*token);
            continue;
        }

        let mut start = token.span.start;
        let mut line = token.span.line;
        let mut column = token.span.column;
        let mut pieces = token.text(source).split('\n').peekable();

        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                let span = Span::new(start, start + piece.len(), line, column);
                current.push(Token::new(token.kind, span));
            }
            if pieces.peek().is_some() {
                out.push(std::mem::take(&mut current));
                start += piece.len() + 1;
                line += 1;
                column = 1;
            }
        }
    }

    out.push(current);
    out
}

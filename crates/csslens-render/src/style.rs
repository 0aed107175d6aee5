//! Display style per token kind.
//!
//! The table is fixed: every kind always maps to the same label, color and CSS
//! class, so legends and highlighted code agree across renders.

use csslens_lexer::TokenKind;

/// How a token kind is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStyle {
    /// Human-readable name for legends.
    pub label: &'static str,
    /// Foreground color as a CSS hex color.
    pub color: &'static str,
    pub bold: bool,
    pub italic: bool,
}

impl TokenStyle {
    const fn new(label: &'static str, color: &'static str) -> Self {
        Self {
            label,
            color,
            bold: false,
            italic: false,
        }
    }

    const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Inline CSS declarations for this style, e.g. `color:#c678dd;font-weight:bold`.
    pub fn declarations(&self) -> String {
        let mut css = format!("color:{}", self.color);
        if self.bold {
            css.push_str(";font-weight:bold");
        }
        if self.italic {
            css.push_str(";font-style:italic");
        }
        css
    }
}

/// Style for a token kind.
pub fn style(kind: TokenKind) -> TokenStyle {
    match kind {
        TokenKind::Whitespace => TokenStyle::new("whitespace", "#9ca3af"),
        TokenKind::Comment => TokenStyle::new("comment", "#6b7280").italic(),
        TokenKind::String => TokenStyle::new("string", "#16a34a"),
        TokenKind::Hash => TokenStyle::new("hash", "#db2777"),
        TokenKind::AtKeyword => TokenStyle::new("at-keyword", "#7c3aed").bold(),
        TokenKind::Percentage => TokenStyle::new("percentage", "#ea580c"),
        TokenKind::Dimension => TokenStyle::new("dimension", "#d97706"),
        TokenKind::Number => TokenStyle::new("number", "#ca8a04"),
        TokenKind::Function => TokenStyle::new("function", "#0891b2"),
        TokenKind::Identifier => TokenStyle::new("identifier", "#2563eb"),
        TokenKind::Colon => TokenStyle::new("colon", "#475569"),
        TokenKind::Semicolon => TokenStyle::new("semicolon", "#475569"),
        TokenKind::LeftBrace => TokenStyle::new("left brace", "#0f172a").bold(),
        TokenKind::RightBrace => TokenStyle::new("right brace", "#0f172a").bold(),
        TokenKind::Comma => TokenStyle::new("comma", "#475569"),
        TokenKind::LeftParen => TokenStyle::new("left paren", "#334155"),
        TokenKind::RightParen => TokenStyle::new("right paren", "#334155"),
        TokenKind::Delimiter => TokenStyle::new("delimiter", "#dc2626"),
    }
}

/// CSS class for a token kind, e.g. `tok-at-keyword`.
pub fn class_name(kind: TokenKind) -> String {
    format!("tok-{}", kind.slug())
}

/// A stylesheet with one rule per token kind, for pages that render
/// highlighted code with classes instead of inline styles.
pub fn stylesheet() -> String {
    TokenKind::ALL
        .into_iter()
        .map(|kind| format!(".{} {{ {} }}\n", class_name(kind), style(kind).declarations()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_declarations() {
        assert_eq!(style(TokenKind::Number).declarations(), "color:#ca8a04");
        assert_eq!(
            style(TokenKind::AtKeyword).declarations(),
            "color:#7c3aed;font-weight:bold"
        );
        assert_eq!(
            style(TokenKind::Comment).declarations(),
            "color:#6b7280;font-style:italic"
        );
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = TokenKind::ALL.into_iter().map(|k| style(k).label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_stylesheet_covers_every_kind() {
        let css = stylesheet();
        assert_eq!(css.lines().count(), TokenKind::ALL.len());
        assert!(css.contains(".tok-left-brace { color:#0f172a;font-weight:bold }"));
    }

    #[test]
    fn test_stylesheet_tokenizes_cleanly() {
        // The generated rules contain nothing the scanner has to fall back on
        // except the `.` of each class selector.
        let css = stylesheet();
        let delimiters: Vec<_> = csslens_lexer::tokenize(&css)
            .into_iter()
            .filter(|t| t.kind == TokenKind::Delimiter)
            .map(|t| t.text(&css).to_string())
            .collect();
        assert!(delimiters.iter().all(|d| d == "."));
        assert_eq!(delimiters.len(), TokenKind::ALL.len());
    }
}

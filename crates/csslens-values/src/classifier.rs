//! Token-driven CSS value classifier.
//!
//! Walks the token stream of a declaration value and assigns a [`ValueType`] to
//! each top-level component. Components are separated by whitespace, commas and
//! `/`. A function call, together with everything up to its matching `)`, is a
//! single component classified by the function's name.

use csslens_lexer::{split_numeric, tokenize, Token, TokenKind};

use crate::keywords::{self, contains};
use crate::value_type::ValueType;

/// Classify a whole value: one component yields its type, several yield
/// [`ValueType::List`], none yields [`ValueType::Empty`].
pub fn classify(value: &str) -> ValueType {
    let parts = components(value);
    let ty = match parts.as_slice() {
        [] => ValueType::Empty,
        [single] => *single,
        _ => ValueType::List,
    };
    log::trace!("classified {value:?} as {ty:?}");
    ty
}

/// Classify each top-level component of a value.
pub fn components(value: &str) -> Vec<ValueType> {
    Classifier::new(value).components()
}

/// Value classifier over a whitespace- and comment-free token stream.
pub struct Classifier<'s> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'s> Classifier<'s> {
    pub fn new(source: &'s str) -> Self {
        let tokens = tokenize(source)
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Comment))
            .collect();
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    /// Classify every remaining component.
    pub fn components(&mut self) -> Vec<ValueType> {
        let mut out = Vec::new();
        while let Some(ty) = self.next_component() {
            out.push(ty);
        }
        out
    }

    fn next_component(&mut self) -> Option<ValueType> {
        self.skip_separators();
        let token = self.advance()?;
        let text = token.text(self.source);

        let ty = match token.kind {
            TokenKind::Function => {
                self.skip_group();
                classify_function(text.trim_end_matches('('))
            }
            TokenKind::LeftParen => {
                self.skip_group();
                ValueType::Unknown
            }
            // `--name` scans as `-` followed by the identifier `-name`
            TokenKind::Delimiter if text == "-" && self.custom_property_follows(&token) => {
                self.pos += 1;
                ValueType::CustomProperty
            }
            _ => classify_token(token.kind, text),
        };
        Some(ty)
    }

    fn custom_property_follows(&self, dash: &Token) -> bool {
        self.tokens.get(self.pos).is_some_and(|next| {
            next.kind == TokenKind::Identifier
                && next.span.start == dash.span.end
                && next.text(self.source).starts_with('-')
        })
    }

    /// Skip to just past the `)` closing the group whose opener was consumed.
    /// An unclosed group runs to the end.
    fn skip_group(&mut self) {
        let mut depth = 1usize;
        while depth > 0 {
            let Some(token) = self.advance() else {
                return;
            };
            match token.kind {
                TokenKind::Function | TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth -= 1,
                _ => {}
            }
        }
    }

    fn skip_separators(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            let separator = token.kind == TokenKind::Comma
                || (token.kind == TokenKind::Delimiter && token.text(self.source) == "/");
            if !separator {
                break;
            }
            self.pos += 1;
        }
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }
}

/// Classify a single token that is not part of a function call.
fn classify_token(kind: TokenKind, text: &str) -> ValueType {
    match kind {
        TokenKind::Dimension => {
            let unit = split_numeric(text).map_or("", |(_, unit)| unit);
            classify_unit(unit)
        }
        TokenKind::Percentage => ValueType::Percentage,
        TokenKind::Number => {
            if text.contains(['.', 'e', 'E']) {
                ValueType::Number
            } else {
                ValueType::Integer
            }
        }
        TokenKind::Hash => {
            let digits = &text[1..];
            let hex = digits.chars().all(|c| c.is_ascii_hexdigit());
            if hex && matches!(digits.len(), 3 | 4 | 6 | 8) {
                ValueType::Color
            } else {
                ValueType::Unknown
            }
        }
        TokenKind::Identifier => {
            if contains(keywords::GLOBAL_KEYWORDS, text) {
                ValueType::GlobalKeyword
            } else if contains(keywords::NAMED_COLORS, text) {
                ValueType::Color
            } else {
                ValueType::Keyword
            }
        }
        TokenKind::String => ValueType::String,
        _ => ValueType::Unknown,
    }
}

fn classify_unit(unit: &str) -> ValueType {
    let tables = [
        (keywords::LENGTH_UNITS, ValueType::Length),
        (keywords::ANGLE_UNITS, ValueType::Angle),
        (keywords::TIME_UNITS, ValueType::Time),
        (keywords::FREQUENCY_UNITS, ValueType::Frequency),
        (keywords::RESOLUTION_UNITS, ValueType::Resolution),
        (keywords::FLEX_UNITS, ValueType::Flex),
    ];
    tables
        .into_iter()
        .find(|(table, _)| contains(table, unit))
        .map_or(ValueType::Dimension, |(_, ty)| ty)
}

fn classify_function(name: &str) -> ValueType {
    if contains(keywords::COLOR_FUNCTIONS, name) {
        ValueType::Color
    } else if name.eq_ignore_ascii_case("url") {
        ValueType::Url
    } else if name.eq_ignore_ascii_case("var") {
        ValueType::Variable
    } else if contains(keywords::MATH_FUNCTIONS, name) {
        ValueType::Calculation
    } else if contains(keywords::IMAGE_FUNCTIONS, name) {
        ValueType::Image
    } else {
        ValueType::Function
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Single components
    // =========================================================================

    #[test]
    fn test_empty() {
        assert_eq!(classify(""), ValueType::Empty);
        assert_eq!(classify("  /* nothing */ "), ValueType::Empty);
    }

    #[test]
    fn test_lengths() {
        assert_eq!(classify("12px"), ValueType::Length);
        assert_eq!(classify("1.5em"), ValueType::Length);
        assert_eq!(classify("-0.25REM"), ValueType::Length);
        assert_eq!(classify("100dvh"), ValueType::Length);
    }

    #[test]
    fn test_other_units() {
        assert_eq!(classify("45deg"), ValueType::Angle);
        assert_eq!(classify("0.5turn"), ValueType::Angle);
        assert_eq!(classify("200ms"), ValueType::Time);
        assert_eq!(classify("2s"), ValueType::Time);
        assert_eq!(classify("44khz"), ValueType::Frequency);
        assert_eq!(classify("2dppx"), ValueType::Resolution);
        assert_eq!(classify("1fr"), ValueType::Flex);
        assert_eq!(classify("3parsecs"), ValueType::Dimension);
    }

    #[test]
    fn test_exponent_dimension_uses_real_unit() {
        assert_eq!(classify("1e3px"), ValueType::Length);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(classify("50%"), ValueType::Percentage);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(classify("0"), ValueType::Integer);
        assert_eq!(classify("-3"), ValueType::Integer);
        assert_eq!(classify("1.5"), ValueType::Number);
        assert_eq!(classify("2e3"), ValueType::Number);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(classify("#fff"), ValueType::Color);
        assert_eq!(classify("#ffff"), ValueType::Color);
        assert_eq!(classify("#ff0000"), ValueType::Color);
        assert_eq!(classify("#ff000080"), ValueType::Color);
    }

    #[test]
    fn test_hash_that_is_not_a_color() {
        assert_eq!(classify("#main"), ValueType::Unknown);
        assert_eq!(classify("#12345"), ValueType::Unknown);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(classify("auto"), ValueType::Keyword);
        assert_eq!(classify("flex-start"), ValueType::Keyword);
        assert_eq!(classify("inherit"), ValueType::GlobalKeyword);
        assert_eq!(classify("revert-layer"), ValueType::GlobalKeyword);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(classify("red"), ValueType::Color);
        assert_eq!(classify("RebeccaPurple"), ValueType::Color);
        assert_eq!(classify("currentColor"), ValueType::Color);
        assert_eq!(classify("transparent"), ValueType::Color);
    }

    #[test]
    fn test_strings() {
        assert_eq!(classify("'Helvetica Neue'"), ValueType::String);
        assert_eq!(classify("\"unterminated"), ValueType::String);
    }

    // =========================================================================
    // Functions
    // =========================================================================

    #[test]
    fn test_color_functions() {
        assert_eq!(classify("rgba(0, 0, 0, 0.5)"), ValueType::Color);
        assert_eq!(classify("oklch(70% 0.1 200)"), ValueType::Color);
        assert_eq!(classify("HSL(120deg 50% 50%)"), ValueType::Color);
    }

    #[test]
    fn test_url() {
        assert_eq!(classify("url(img/bg.png)"), ValueType::Url);
    }

    #[test]
    fn test_var() {
        assert_eq!(classify("var(--accent, red)"), ValueType::Variable);
    }

    #[test]
    fn test_calculation_with_nested_functions() {
        assert_eq!(
            classify("calc(100% - var(--gap) * (2 + 1))"),
            ValueType::Calculation
        );
        assert_eq!(classify("clamp(1rem, 2.5vw, 2rem)"), ValueType::Calculation);
    }

    #[test]
    fn test_gradient() {
        assert_eq!(
            classify("linear-gradient(to right, red, blue)"),
            ValueType::Image
        );
    }

    #[test]
    fn test_other_function() {
        assert_eq!(classify("translateX(10px)"), ValueType::Function);
    }

    #[test]
    fn test_unclosed_function_is_one_component() {
        assert_eq!(classify("rgb(1, 2, 3"), ValueType::Color);
    }

    // =========================================================================
    // Custom properties
    // =========================================================================

    #[test]
    fn test_custom_property() {
        assert_eq!(classify("--main-color"), ValueType::CustomProperty);
    }

    #[test]
    fn test_separated_dash_is_not_custom_property() {
        assert_eq!(
            components("- -x"),
            vec![ValueType::Unknown, ValueType::Keyword]
        );
    }

    // =========================================================================
    // Lists
    // =========================================================================

    #[test]
    fn test_shorthand_is_list() {
        assert_eq!(classify("1px solid red"), ValueType::List);
        assert_eq!(
            components("1px solid red"),
            vec![ValueType::Length, ValueType::Keyword, ValueType::Color]
        );
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            components("'Inter', sans-serif"),
            vec![ValueType::String, ValueType::Keyword]
        );
    }

    #[test]
    fn test_slash_separated() {
        assert_eq!(
            components("12px/1.5 serif"),
            vec![ValueType::Length, ValueType::Number, ValueType::Keyword]
        );
    }

    #[test]
    fn test_functions_in_list() {
        assert_eq!(
            components("url(a.png) no-repeat, linear-gradient(red, blue)"),
            vec![ValueType::Url, ValueType::Keyword, ValueType::Image]
        );
    }

    #[test]
    fn test_stray_punctuation_is_unknown() {
        assert_eq!(
            components("a; }"),
            vec![ValueType::Keyword, ValueType::Unknown, ValueType::Unknown]
        );
    }

    #[test]
    fn test_bare_parens_group() {
        assert_eq!(
            components("(a b) c"),
            vec![ValueType::Unknown, ValueType::Keyword]
        );
    }
}

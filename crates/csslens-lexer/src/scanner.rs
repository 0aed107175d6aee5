use crate::token::{Span, Token, TokenKind};

/// A recognizer tries to consume one token at the cursor.
///
/// On a match it advances past the token and returns its kind. On no match it
/// returns `None` and leaves the cursor untouched.
type Rule = fn(&mut Scanner) -> Option<TokenKind>;

/// Recognizers in priority order. The first match wins, so the order decides
/// every ambiguity (`12px` is numeric before it can be an identifier, `rgba(`
/// is a function before `(` can be punctuation).
const RULES: &[Rule] = &[
    Scanner::scan_whitespace,
    Scanner::scan_comment,
    Scanner::scan_string,
    Scanner::scan_hash,
    Scanner::scan_at_keyword,
    Scanner::scan_numeric,
    Scanner::scan_identifier,
    Scanner::scan_punctuation,
];

/// Tokenize CSS source into a lossless token stream.
///
/// Never fails. See [`Scanner`] for the recognition rules.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::tokenize(source)
}

/// Split a numeric token's text into its number and its unit.
///
/// Uses the same numeric grammar as the scanner, so `1e3px` splits into
/// `("1e3", "px")` and `1em` into `("1", "em")`. Returns `None` when `text`
/// does not start with a number.
pub fn split_numeric(text: &str) -> Option<(&str, &str)> {
    let len = Scanner::new(text).numeric_len()?;
    // The numeric prefix is ASCII, so its char count is its byte length
    Some(text.split_at(len))
}

/// CSS source scanner.
///
/// A maximal-munch scanner over a tolerant, simplified CSS lexical grammar.
/// It is not a conformant CSS Syntax tokenizer: it exists to show how a lexer
/// walks arbitrary text, so malformed input degrades instead of failing:
/// - unterminated comments and strings run to the end of input
/// - a character no rule claims becomes a one-character `Delimiter`
///
/// Every step consumes at least one character, so scanning always terminates.
/// The scanner yields tokens lazily through its `Iterator` impl.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let tokens: Vec<Token> = Scanner::new(source).collect();
        log::trace!(
            "scanned {} tokens from {} bytes",
            tokens.len(),
            source.len()
        );
        tokens
    }

    /// Scan the next token. The cursor must not be at the end.
    fn scan_token(&mut self) -> Token {
        let start = self.offset;
        let line = self.line;
        let column = self.column;

        let kind = RULES
            .iter()
            .find_map(|rule| rule(self))
            .unwrap_or_else(|| {
                self.advance();
                TokenKind::Delimiter
            });

        Token::new(kind, Span::new(start, self.offset, line, column))
    }

    // --- Recognizers ---

    /// Space, tab, carriage return, newline and form feed, as one run.
    fn scan_whitespace(&mut self) -> Option<TokenKind> {
        if !is_whitespace(self.peek()) {
            return None;
        }
        while !self.is_at_end() && is_whitespace(self.peek()) {
            self.advance();
        }
        Some(TokenKind::Whitespace)
    }

    /// `/* ... */`, or `/*` to end of input when unterminated.
    fn scan_comment(&mut self) -> Option<TokenKind> {
        if self.peek() != '/' || self.peek_at(1) != '*' {
            return None;
        }
        self.advance_by(2);

        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_at(1) == '/' {
                self.advance_by(2);
                break;
            }
            self.advance();
        }
        Some(TokenKind::Comment)
    }

    /// Single- or double-quoted string. A backslash makes the next character
    /// literal. Unterminated strings run to end of input.
    fn scan_string(&mut self) -> Option<TokenKind> {
        let quote = self.peek();
        if quote != '"' && quote != '\'' {
            return None;
        }
        self.advance(); // opening quote

        while !self.is_at_end() {
            let c = self.peek();
            self.advance();
            if c == '\\' {
                // Escaped character, if any, is taken verbatim
                self.advance();
            } else if c == quote {
                break;
            }
        }
        Some(TokenKind::String)
    }

    /// `#` followed by at least one name character.
    fn scan_hash(&mut self) -> Option<TokenKind> {
        if self.peek() != '#' || !is_name_char(self.peek_at(1)) {
            return None;
        }
        self.advance();
        self.skip_name_chars();
        Some(TokenKind::Hash)
    }

    /// `@` followed by a letter, `_` or `-`, then name characters.
    fn scan_at_keyword(&mut self) -> Option<TokenKind> {
        let next = self.peek_at(1);
        if self.peek() != '@' || !(is_name_start(next) || next == '-') {
            return None;
        }
        self.advance_by(2);
        self.skip_name_chars();
        Some(TokenKind::AtKeyword)
    }

    /// Number, then `%` for a percentage or an identifier for a dimension.
    fn scan_numeric(&mut self) -> Option<TokenKind> {
        let len = self.numeric_len()?;
        self.advance_by(len);

        if self.peek() == '%' {
            self.advance();
            return Some(TokenKind::Percentage);
        }
        if let Some(unit) = self.identifier_len_at(0) {
            self.advance_by(unit);
            return Some(TokenKind::Dimension);
        }
        Some(TokenKind::Number)
    }

    /// Identifier, or a function when directly followed by `(`.
    fn scan_identifier(&mut self) -> Option<TokenKind> {
        let len = self.identifier_len_at(0)?;
        self.advance_by(len);

        if self.peek() == '(' {
            self.advance();
            return Some(TokenKind::Function);
        }
        Some(TokenKind::Identifier)
    }

    fn scan_punctuation(&mut self) -> Option<TokenKind> {
        let kind = match self.peek() {
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            _ => return None,
        };
        self.advance();
        Some(kind)
    }

    // --- Lookahead ---

    /// Length in characters of the numeric literal at the cursor:
    /// `[+-]? (digits ('.' digits)? | '.' digits) ([eE] [+-]? digits)?`
    ///
    /// A `.` or exponent marker is only part of the number when digits follow,
    /// so `1.` is `1` then `.`, and `1em` is `1` with unit `em`.
    fn numeric_len(&self) -> Option<usize> {
        let mut i = 0;
        if matches!(self.peek_at(i), '+' | '-') {
            i += 1;
        }

        if self.peek_at(i).is_ascii_digit() {
            i = self.digits_end(i);
            if self.peek_at(i) == '.' && self.peek_at(i + 1).is_ascii_digit() {
                i = self.digits_end(i + 1);
            }
        } else if self.peek_at(i) == '.' && self.peek_at(i + 1).is_ascii_digit() {
            i = self.digits_end(i + 1);
        } else {
            return None;
        }

        if matches!(self.peek_at(i), 'e' | 'E') {
            let mut j = i + 1;
            if matches!(self.peek_at(j), '+' | '-') {
                j += 1;
            }
            if self.peek_at(j).is_ascii_digit() {
                i = self.digits_end(j);
            }
        }

        Some(i)
    }

    /// Length in characters of an identifier starting `ahead` characters past
    /// the cursor: `-? [A-Za-z_] [A-Za-z0-9_-]*`.
    fn identifier_len_at(&self, ahead: usize) -> Option<usize> {
        let mut i = ahead;
        if self.peek_at(i) == '-' {
            i += 1;
        }
        if !is_name_start(self.peek_at(i)) {
            return None;
        }
        i += 1;
        while is_name_char(self.peek_at(i)) {
            i += 1;
        }
        Some(i - ahead)
    }

    /// Index just past the run of ASCII digits starting at `i`.
    fn digits_end(&self, mut i: usize) -> usize {
        while self.peek_at(i).is_ascii_digit() {
            i += 1;
        }
        i
    }

    // --- Helpers ---

    fn skip_name_chars(&mut self) {
        while !self.is_at_end() && is_name_char(self.peek()) {
            self.advance();
        }
    }

    fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// Character `n` places past the cursor, or `'\0'` past the end.
    fn peek_at(&self, n: usize) -> char {
        self.chars.get(self.pos + n).copied().unwrap_or('\0')
    }

    fn advance(&mut self) {
        if let Some(&c) = self.chars.get(self.pos) {
            self.pos += 1;
            self.offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.is_at_end() {
            None
        } else {
            Some(self.scan_token())
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

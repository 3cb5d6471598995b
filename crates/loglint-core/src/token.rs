//! Token model for lexed PHP source.

use serde::{Deserialize, Serialize};

/// Classification of a lexed token.
///
/// Rules only need a coarse classification: string literals, the `.`
/// concatenation operator, trivia, identifiers. Everything else (operators,
/// punctuation, numbers, variables) is [`TokenKind::Other`] and is matched
/// by content where needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A single- or double-quoted string literal, quotes included.
    StringLiteral,
    /// The `.` string concatenation operator.
    Concat,
    /// A run of whitespace.
    Whitespace,
    /// A `//`, `#` or `/* ... */` comment.
    Comment,
    /// An identifier or keyword.
    Identifier,
    /// Any other token (variables, numbers, operators, punctuation).
    Other,
}

/// One lexed token.
///
/// Tokens are produced by the tokenizer and never mutated afterwards. The
/// position of a token within the stream is its index into the token slice;
/// line and column are carried for diagnostic anchoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Raw source text of the token. String literals keep their quotes.
    pub content: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        content: impl Into<String>,
        line: usize,
        column: usize,
        offset: usize,
    ) -> Self {
        Self {
            kind,
            content: content.into(),
            line,
            column,
            offset,
        }
    }

    /// Returns true for whitespace and comment tokens.
    #[must_use]
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Returns true for `(`, `[` and `{` tokens.
    #[must_use]
    pub fn is_open_bracket(&self) -> bool {
        self.kind == TokenKind::Other && matches!(self.content.as_str(), "(" | "[" | "{")
    }

    /// Returns true for `)`, `]` and `}` tokens.
    #[must_use]
    pub fn is_close_bracket(&self) -> bool {
        self.kind == TokenKind::Other && matches!(self.content.as_str(), ")" | "]" | "}")
    }

    /// Returns true if this is an "other" token with exactly this content.
    #[must_use]
    pub fn is_punct(&self, content: &str) -> bool {
        self.kind == TokenKind::Other && self.content == content
    }
}

/// Finds the next non-trivia token at or after `from`.
#[must_use]
pub fn find_next_significant(tokens: &[Token], from: usize) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, t)| !t.is_trivia())
        .map(|(i, _)| i)
}

/// Finds the previous non-trivia token at or before `from`.
#[must_use]
pub fn find_prev_significant(tokens: &[Token], from: usize) -> Option<usize> {
    if tokens.is_empty() {
        return None;
    }
    tokens[..=from.min(tokens.len() - 1)]
        .iter()
        .enumerate()
        .rev()
        .find(|(_, t)| !t.is_trivia())
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, content: &str) -> Token {
        Token::new(kind, content, 1, 1, 0)
    }

    #[test]
    fn trivia_classification() {
        assert!(tok(TokenKind::Whitespace, " ").is_trivia());
        assert!(tok(TokenKind::Comment, "// hi").is_trivia());
        assert!(!tok(TokenKind::Identifier, "error").is_trivia());
    }

    #[test]
    fn bracket_classification() {
        assert!(tok(TokenKind::Other, "(").is_open_bracket());
        assert!(tok(TokenKind::Other, "]").is_close_bracket());
        assert!(!tok(TokenKind::StringLiteral, "'('").is_open_bracket());
    }

    #[test]
    fn next_significant_skips_trivia() {
        let tokens = vec![
            tok(TokenKind::Identifier, "error"),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::Comment, "/* x */"),
            tok(TokenKind::Other, "("),
        ];
        assert_eq!(find_next_significant(&tokens, 1), Some(3));
        assert_eq!(find_next_significant(&tokens, 4), None);
    }

    #[test]
    fn prev_significant_skips_trivia() {
        let tokens = vec![
            tok(TokenKind::Other, "->"),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::Identifier, "error"),
        ];
        assert_eq!(find_prev_significant(&tokens, 1), Some(0));
        assert_eq!(find_prev_significant(&tokens, 2), Some(2));
    }
}

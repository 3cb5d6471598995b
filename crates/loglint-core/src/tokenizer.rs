//! PHP-subset tokenizer.
//!
//! Lexes just enough of PHP to drive call-site rules: comments, whitespace,
//! quoted strings with backslash escapes, numbers, identifiers, variables,
//! the `.` concatenation operator and common multi-char operators. String
//! literals keep their original quotes so rules can inspect the quoting
//! style. Heredoc/nowdoc syntax is not supported.

use crate::token::{Token, TokenKind};
use thiserror::Error;

/// Errors produced while tokenizing a source file.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// A string literal was opened but never closed.
    #[error("unterminated string literal starting at line {line}")]
    UnterminatedString {
        /// Line where the literal starts (1-indexed).
        line: usize,
    },

    /// A block comment was opened but never closed.
    #[error("unterminated block comment starting at line {line}")]
    UnterminatedComment {
        /// Line where the comment starts (1-indexed).
        line: usize,
    },
}

/// Multi-character operator tokens, longest first.
const OPERATORS: &[&str] = &["<?php", "?>", "...", "->", "::", "=>", ".="];

struct Cursor<'a> {
    src: &'a str,
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.src[self.offset..].starts_with(s)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
    }
}

/// Tokenizes a PHP source file.
///
/// # Errors
///
/// Returns an error for unterminated string literals or block comments.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    while let Some(c) = cursor.peek() {
        let line = cursor.line;
        let column = cursor.column;
        let start = cursor.offset;

        let kind = if c.is_whitespace() {
            cursor.bump_while(char::is_whitespace);
            TokenKind::Whitespace
        } else if cursor.starts_with("/*") {
            lex_block_comment(&mut cursor)?
        } else if cursor.starts_with("//") || c == '#' {
            cursor.bump_while(|c| c != '\n');
            TokenKind::Comment
        } else if c == '\'' || c == '"' {
            lex_string(&mut cursor)?
        } else if c.is_ascii_digit() {
            lex_number(&mut cursor)
        } else if c == '.' && cursor.peek_at(1).is_some_and(|n| n.is_ascii_digit()) {
            // Fractional literal like `.5`, not a concat operator.
            lex_number(&mut cursor)
        } else if let Some(op) = OPERATORS.iter().find(|op| cursor.starts_with(op)) {
            for _ in 0..op.chars().count() {
                cursor.bump();
            }
            TokenKind::Other
        } else if c == '.' {
            cursor.bump();
            TokenKind::Concat
        } else if c == '_' || c.is_alphabetic() {
            cursor.bump_while(|c| c == '_' || c.is_alphanumeric());
            TokenKind::Identifier
        } else if c == '$' {
            cursor.bump();
            cursor.bump_while(|c| c == '_' || c.is_alphanumeric());
            TokenKind::Other
        } else {
            cursor.bump();
            TokenKind::Other
        };

        tokens.push(Token::new(
            kind,
            &source[start..cursor.offset],
            line,
            column,
            start,
        ));
    }

    Ok(tokens)
}

fn lex_block_comment(cursor: &mut Cursor<'_>) -> Result<TokenKind, TokenizeError> {
    let line = cursor.line;
    cursor.bump();
    cursor.bump();
    loop {
        if cursor.starts_with("*/") {
            cursor.bump();
            cursor.bump();
            return Ok(TokenKind::Comment);
        }
        if cursor.bump().is_none() {
            return Err(TokenizeError::UnterminatedComment { line });
        }
    }
}

fn lex_string(cursor: &mut Cursor<'_>) -> Result<TokenKind, TokenizeError> {
    let line = cursor.line;
    let quote = cursor.bump().unwrap_or('\'');
    loop {
        match cursor.bump() {
            Some('\\') => {
                // Consume the escaped character, whatever it is.
                cursor.bump();
            }
            Some(c) if c == quote => return Ok(TokenKind::StringLiteral),
            Some(_) => {}
            None => return Err(TokenizeError::UnterminatedString { line }),
        }
    }
}

fn lex_number(cursor: &mut Cursor<'_>) -> TokenKind {
    cursor.bump_while(|c| c.is_ascii_digit());
    if cursor.peek() == Some('.') && cursor.peek_at(1).is_some_and(|n| n.is_ascii_digit()) {
        cursor.bump();
        cursor.bump_while(|c| c.is_ascii_digit());
    }
    if matches!(cursor.peek(), Some('e' | 'E')) {
        let mut ahead = 1;
        if matches!(cursor.peek_at(1), Some('+' | '-')) {
            ahead = 2;
        }
        if cursor.peek_at(ahead).is_some_and(|n| n.is_ascii_digit()) {
            for _ in 0..ahead {
                cursor.bump();
            }
            cursor.bump_while(|c| c.is_ascii_digit());
        }
    }
    TokenKind::Other
}

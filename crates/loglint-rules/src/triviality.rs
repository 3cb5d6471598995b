//! Triviality predicate for adjacent concatenated literals.

/// Decides whether a string literal concatenated next to a logged message is
/// too trivial to warrant a warning.
///
/// The predicate receives the raw literal content, quotes included. It is an
/// injected capability of [`MethodLog`](crate::MethodLog) so hosts with
/// different conventions can supply their own.
pub trait ConcatTriviality: Send + Sync {
    /// Returns true if the literal does not warrant a `ConcatString` warning.
    fn is_trivial(&self, raw_literal: &str) -> bool;
}

/// Default predicate: markup and punctuation fragments are trivial.
///
/// A literal is trivial when, after stripping the outer quotes and trimming,
/// it is empty, contains no alphanumeric character, or is a single HTML tag.
/// Separators like `"."` or closing tags like `"</a>"` carry no translatable
/// text, so concatenating them is harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupTriviality;

impl ConcatTriviality for MarkupTriviality {
    fn is_trivial(&self, raw_literal: &str) -> bool {
        let inner = strip_quotes(raw_literal).trim();
        if !inner.chars().any(char::is_alphanumeric) {
            return true;
        }
        is_single_tag(inner)
    }
}

/// Returns true for exactly one HTML tag, e.g. `</a>` or `<br />`.
fn is_single_tag(s: &str) -> bool {
    let Some(body) = s.strip_prefix('<').and_then(|r| r.strip_suffix('>')) else {
        return false;
    };
    !body.is_empty() && !body.contains('<') && !body.contains('>')
}

/// Strips one matching pair of outer quotes, if present.
fn strip_quotes(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'\'' || first == b'"') && bytes[bytes.len() - 1] == first {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

//! Call-site locator.
//!
//! Scans a token stream for invocations of registered method names and
//! resolves the bracket pair delimiting each call's argument list. Rules
//! receive only well-formed call sites: the open bracket directly follows
//! the name (modulo trivia) and the close bracket is its balanced match.

use crate::rule::CallSite;
use crate::token::{find_next_significant, find_prev_significant, Token, TokenKind};

/// Locates all call sites of the given method names.
///
/// Matching is case-insensitive (PHP method names are case-insensitive).
/// Function declarations (`function error(...)`) are not call sites, and an
/// occurrence with no matching close parenthesis is skipped entirely; an
/// unbalanced file is a tokenizer-level concern.
#[must_use]
pub fn locate_calls(tokens: &[Token], names: &[&str]) -> Vec<CallSite> {
    let mut sites = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Identifier {
            continue;
        }
        if !names.iter().any(|n| n.eq_ignore_ascii_case(&token.content)) {
            continue;
        }

        // Declarations are not call sites.
        if i > 0 {
            if let Some(prev) = find_prev_significant(tokens, i - 1) {
                if tokens[prev].kind == TokenKind::Identifier
                    && tokens[prev].content.eq_ignore_ascii_case("function")
                {
                    continue;
                }
            }
        }

        let Some(open) = find_next_significant(tokens, i + 1) else {
            continue;
        };
        if !tokens[open].is_punct("(") {
            continue;
        }

        if let Some(close) = find_matching_paren(tokens, open) {
            sites.push(CallSite {
                call: i,
                open,
                close,
            });
        }
    }

    sites
}

/// Finds the `)` matching the `(` at `open`, or `None` if unbalanced.
fn find_matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (i, token) in tokens.iter().enumerate().skip(open + 1) {
        if token.is_punct("(") {
            depth += 1;
        } else if token.is_punct(")") {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    const LOG_NAMES: &[&str] = &["log", "error", "warning"];

    fn locate(source: &str) -> (Vec<Token>, Vec<CallSite>) {
        let tokens = tokenize(source).expect("tokenize failed");
        let sites = locate_calls(&tokens, LOG_NAMES);
        (tokens, sites)
    }

    #[test]
    fn finds_method_call() {
        let (tokens, sites) = locate("$logger->error('oops');");
        assert_eq!(sites.len(), 1);
        assert_eq!(tokens[sites[0].call].content, "error");
        assert!(tokens[sites[0].open].is_punct("("));
        assert!(tokens[sites[0].close].is_punct(")"));
    }

    #[test]
    fn finds_static_and_bare_calls() {
        let (_, sites) = locate("Logger::error('a'); error('b');");
        assert_eq!(sites.len(), 2);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let (_, sites) = locate("$logger->Error('oops');");
        assert_eq!(sites.len(), 1);
    }

    #[test]
    fn ignores_unregistered_names() {
        let (_, sites) = locate("$logger->trace('oops');");
        assert!(sites.is_empty());
    }

    #[test]
    fn ignores_name_without_call() {
        let (_, sites) = locate("$x = $this->error;");
        assert!(sites.is_empty());
    }

    #[test]
    fn ignores_function_declarations() {
        let (_, sites) = locate("function error($message) { return $message; }");
        assert!(sites.is_empty());
    }

    #[test]
    fn close_bracket_skips_nested_parens() {
        let (tokens, sites) = locate("$logger->error(fmt('a'), $ctx);");
        assert_eq!(sites.len(), 1);
        let close = sites[0].close;
        // The match is the outer close, not fmt's.
        assert!(tokens[close + 1].is_punct(";"));
    }

    #[test]
    fn unbalanced_call_is_skipped() {
        let (_, sites) = locate("$logger->error('oops'");
        assert!(sites.is_empty());
    }

    #[test]
    fn name_inside_string_is_not_a_call() {
        let (_, sites) = locate("$x = 'error(no)';");
        assert!(sites.is_empty());
    }
}

//! Rule trait and call-site types for token-based lint rules.

use crate::token::{find_next_significant, Token};
use crate::types::{Severity, Violation};
use std::path::{Path, PathBuf};

/// Context provided to rules for the file being checked.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        Self {
            path,
            content,
            relative_path,
        }
    }
}

/// One recognized call: the method name token and its argument list bounds.
///
/// Produced by the locator, which guarantees `call < open < close` and that
/// the brackets are balanced. Transient; recomputed per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Index of the method name token.
    pub call: usize,
    /// Index of the opening parenthesis.
    pub open: usize,
    /// Index of the matching closing parenthesis.
    pub close: usize,
}

/// Token span `[start, end)` of one positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument {
    /// Index of the first token of the argument.
    pub start: usize,
    /// Index one past the last token of the argument.
    pub end: usize,
}

impl CallSite {
    /// Extracts the first positional argument of this call.
    ///
    /// The span starts at the first significant token after the open bracket
    /// and ends at the first top-level comma or the close bracket, whichever
    /// comes first; nested brackets are skipped. Returns `None` when the
    /// argument list is empty or contains only trivia.
    #[must_use]
    pub fn first_argument(&self, tokens: &[Token]) -> Option<Argument> {
        let start = find_next_significant(tokens, self.open + 1)?;
        if start >= self.close {
            return None;
        }

        let mut depth = 0usize;
        let mut end = self.close;
        for (i, token) in tokens.iter().enumerate().take(self.close).skip(start) {
            if token.is_open_bracket() {
                depth += 1;
            } else if token.is_close_bracket() {
                depth = depth.saturating_sub(1);
            } else if depth == 0 && token.is_punct(",") {
                end = i;
                break;
            }
        }

        Some(Argument { start, end })
    }
}

/// A lint rule over recognized call sites.
///
/// Implement this trait to create rules that inspect calls to a fixed set of
/// method names. The analyzer locates each occurrence of a registered name
/// and hands the rule the token stream plus the call's bracket bounds.
///
/// # Example
///
/// ```ignore
/// use loglint_core::{CallRule, CallSite, FileContext, Token, Violation};
///
/// pub struct NoDump;
///
/// impl CallRule for NoDump {
///     fn name(&self) -> &'static str { "no-dump" }
///     fn code(&self) -> &'static str { "LL999" }
///     fn method_names(&self) -> &'static [&'static str] { &["var_dump"] }
///
///     fn check_call(&self, ctx: &FileContext, tokens: &[Token], call: &CallSite) -> Vec<Violation> {
///         // ...
///         vec![]
///     }
/// }
/// ```
pub trait CallRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "method-log").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "LL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the method names whose call sites this rule inspects.
    ///
    /// Matching is case-insensitive; names must be lowercase.
    fn method_names(&self) -> &'static [&'static str];

    /// Checks a single call site and returns any violations found.
    fn check_call(&self, ctx: &FileContext, tokens: &[Token], call: &CallSite) -> Vec<Violation>;
}

/// Type alias for boxed `CallRule` trait objects.
pub type CallRuleBox = Box<dyn CallRule>;

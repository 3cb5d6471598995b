//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a location anchored at a token.
    #[must_use]
    pub fn at_token(file: PathBuf, token: &crate::token::Token) -> Self {
        Self {
            file,
            line: token.line,
            column: token.column,
            offset: token.offset,
            length: token.content.len(),
        }
    }
}

/// A suggested fix for a violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A lint violation found during analysis.
///
/// `code` is the stable message code used by downstream tooling for
/// suppression and filtering (e.g. `EmptyLog`); `rule` is the kebab-case
/// name of the rule that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Stable message code (e.g., "EmptyLog").
    pub code: String,
    /// Rule name (e.g., "method-log").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{}.{} at {}:{}:{}\n",
            self.rule,
            self.code,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut errors = 0;
        let mut warnings = 0;
        let mut infos = 0;
        for v in &self.violations {
            match v.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => infos += 1,
            }
        }
        (errors, warnings, infos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "EmptyLog",
            "method-log",
            severity,
            Location::new(PathBuf::from("src/Logger.php"), 42, 10),
            "Empty calls to error() are not allowed",
        )
    }

    #[test]
    fn violation_format_includes_suggestion() {
        let v = make_violation(Severity::Error)
            .with_suggestion(Suggestion::new("Pass a message literal"));
        let formatted = v.format();
        assert!(formatted.contains("= help: Pass a message literal"));
        assert!(formatted.contains("method-log.EmptyLog"));
    }

    #[test]
    fn violation_display_has_code_and_position() {
        let v = make_violation(Severity::Error);
        let display = format!("{v}");
        assert!(display.contains("src/Logger.php:42:10"));
        assert!(display.contains("[EmptyLog]"));
    }

    #[test]
    fn has_violations_at_error_only() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(!result.has_errors());
    }

    #[test]
    fn count_by_severity_buckets() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Warning));
        assert_eq!(result.count_by_severity(), (1, 2, 0));
    }
}

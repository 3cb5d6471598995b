//! Rule checking the message argument of logger method calls.
//!
//! Covers the PSR-3 `LoggerInterface` methods plus the generic `log()` entry
//! point. The human-readable message must be a single, non-empty, unmodified
//! string literal: no runtime concatenation, no leading or trailing
//! whitespace inside the quotes, no unnecessary backslash escaping.
//!
//! # Message codes
//!
//! Errors: `EmptyLog`, `NotLiteralString`, `EmptyString`, `Concat`.
//! Warnings: `ConcatString`, `WhiteSpace`, `BackslashSingleQuote`,
//! `BackslashDoubleQuote`.

use crate::triviality::{ConcatTriviality, MarkupTriviality};
use loglint_core::{
    find_next_significant, CallRule, CallSite, FileContext, Location, Severity, Suggestion, Token,
    TokenKind, Violation,
};

/// Rule code for method-log.
pub const CODE: &str = "LL001";

/// Rule name for method-log.
pub const NAME: &str = "method-log";

/// The PSR-3 logger methods, plus the generic `log()` entry point.
const METHOD_NAMES: &[&str] = &[
    "log",
    "alert",
    "critical",
    "debug",
    "emergency",
    "error",
    "info",
    "notice",
    "warning",
];

/// Checks that logger calls receive a single clean string literal.
pub struct MethodLog {
    triviality: Box<dyn ConcatTriviality>,
}

impl Default for MethodLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodLog {
    /// Creates a new rule with the default triviality predicate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            triviality: Box::new(MarkupTriviality),
        }
    }

    /// Replaces the predicate deciding which adjacent concatenated literals
    /// are too trivial to warn about.
    #[must_use]
    pub fn with_triviality(mut self, triviality: Box<dyn ConcatTriviality>) -> Self {
        self.triviality = triviality;
        self
    }
}

impl CallRule for MethodLog {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Logger calls must receive a single non-empty string literal message"
    }

    fn method_names(&self) -> &'static [&'static str] {
        METHOD_NAMES
    }

    fn check_call(&self, ctx: &FileContext, tokens: &[Token], call: &CallSite) -> Vec<Violation> {
        let mut validator = Validator {
            rule: self,
            ctx,
            tokens,
            call,
            violations: Vec::new(),
        };
        validator.run();
        validator.violations
    }
}

/// Outcome of one pipeline step.
///
/// `Stop` means later checks are meaningless for this call site (no usable
/// literal, or the documented escaping-style early exit).
enum Flow {
    Continue,
    Stop,
}

struct Validator<'a> {
    rule: &'a MethodLog,
    ctx: &'a FileContext<'a>,
    tokens: &'a [Token],
    call: &'a CallSite,
    violations: Vec<Violation>,
}

impl Validator<'_> {
    fn run(&mut self) {
        let Some(argument) = self.call.first_argument(self.tokens) else {
            self.emit(
                "EmptyLog",
                Severity::Error,
                self.call.call,
                format!("Empty calls to {}() are not allowed", self.method_name()),
            );
            return;
        };

        let first = &self.tokens[argument.start];
        if first.kind != TokenKind::StringLiteral {
            self.emit(
                "NotLiteralString",
                Severity::Error,
                argument.start,
                format!(
                    "Only string literals should be passed to {}()",
                    self.method_name()
                ),
            );
            return;
        }

        if let Flow::Stop = self.check_empty_string(argument.start) {
            return;
        }

        self.check_concat_after_call();
        self.check_surrounding_whitespace(argument.start);
        self.check_concat_in_argument(argument.start, argument.end);

        if let Flow::Stop = self.check_single_quote_escaping(argument.start) {
            return;
        }
        self.check_double_quote_escaping(argument.start);
    }

    fn method_name(&self) -> &str {
        &self.tokens[self.call.call].content
    }

    fn literal(&self, index: usize) -> &str {
        &self.tokens[index].content
    }

    fn emit(&mut self, code: &str, severity: Severity, anchor: usize, message: String) {
        self.violations.push(Violation::new(
            code,
            NAME,
            severity,
            Location::at_token(self.ctx.relative_path.clone(), &self.tokens[anchor]),
            message,
        ));
    }

    /// Step 3: the literal must not be an empty pair of quotes.
    fn check_empty_string(&mut self, literal: usize) -> Flow {
        let raw = self.literal(literal);
        if raw == "\"\"" || raw == "''" {
            self.emit(
                "EmptyString",
                Severity::Error,
                literal,
                format!("Do not pass empty strings to {}()", self.method_name()),
            );
            return Flow::Stop;
        }
        Flow::Continue
    }

    /// Step 4: a non-trivial literal concatenated after the call.
    fn check_concat_after_call(&mut self) {
        let Some(after) = find_next_significant(self.tokens, self.call.close + 1) else {
            return;
        };
        if self.tokens[after].kind != TokenKind::Concat {
            return;
        }
        let Some(next) = find_next_significant(self.tokens, after + 1) else {
            return;
        };
        if self.tokens[next].kind == TokenKind::StringLiteral
            && !self.rule.triviality.is_trivial(self.literal(next))
        {
            self.emit(
                "ConcatString",
                Severity::Warning,
                next,
                format!(
                    "Do not concatenate strings to translatable strings, \
                     they should be part of the {}() argument and you should use placeholders",
                    self.method_name()
                ),
            );
        }
    }

    /// Step 5: no leading or trailing whitespace inside the quotes.
    fn check_surrounding_whitespace(&mut self, literal: usize) {
        let raw = self.literal(literal);
        let last = raw.as_bytes().last().copied();
        if !matches!(last, Some(b'\'' | b'"')) {
            return;
        }
        let inner = &raw[1..raw.len() - 1];
        if inner != inner.trim() {
            self.emit(
                "WhiteSpace",
                Severity::Warning,
                literal,
                format!(
                    "Translatable strings must not begin or end with white spaces, \
                     use placeholders with {}() for variables",
                    self.method_name()
                ),
            );
        }
    }

    /// Step 6: no concatenation inside the message argument itself.
    fn check_concat_in_argument(&mut self, start: usize, end: usize) {
        let concat = self.tokens[start..end]
            .iter()
            .position(|t| t.kind == TokenKind::Concat)
            .map(|i| start + i);
        if let Some(index) = concat {
            self.violations.push(
                Violation::new(
                    "Concat",
                    NAME,
                    Severity::Error,
                    Location::at_token(self.ctx.relative_path.clone(), &self.tokens[index]),
                    "Concatenating translatable strings is not allowed, \
                     use placeholders instead and only one string literal",
                )
                .with_suggestion(Suggestion::new(
                    "Merge into one literal and pass variables as placeholder context",
                )),
            );
        }
    }

    /// Step 7a: single-quoted literal escaping a quote it would not need to
    /// with double quotes.
    fn check_single_quote_escaping(&mut self, literal: usize) -> Flow {
        let raw = self.literal(literal);
        if raw.starts_with('\'') && raw.contains("\\'") && !raw.contains('"') {
            self.emit(
                "BackslashSingleQuote",
                Severity::Warning,
                literal,
                "Avoid backslash escaping in translatable strings when possible, \
                 use \"\" quotes instead"
                    .to_string(),
            );
            return Flow::Stop;
        }
        Flow::Continue
    }

    /// Step 7b: the double-quoted counterpart.
    fn check_double_quote_escaping(&mut self, literal: usize) {
        let raw = self.literal(literal);
        if raw.starts_with('"') && raw.contains("\\\"") && !raw.contains('\'') {
            self.emit(
                "BackslashDoubleQuote",
                Severity::Warning,
                literal,
                "Avoid backslash escaping in translatable strings when possible, \
                 use '' quotes instead"
                    .to_string(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loglint_core::{locate_calls, tokenize};
    use std::path::Path;

    fn check(source: &str) -> Vec<Violation> {
        check_with(MethodLog::new(), source)
    }

    fn check_with(rule: MethodLog, source: &str) -> Vec<Violation> {
        let tokens = tokenize(source).expect("failed to tokenize");
        let sites = locate_calls(&tokens, rule.method_names());
        assert_eq!(sites.len(), 1, "expected exactly one call site");
        let ctx = FileContext {
            path: Path::new("test.php"),
            content: source,
            relative_path: std::path::PathBuf::from("test.php"),
        };
        rule.check_call(&ctx, &tokens, &sites[0])
    }

    fn codes(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.code.as_str()).collect()
    }

    #[test]
    fn clean_call_passes() {
        assert!(check("$logger->info('Saved item');").is_empty());
        assert!(check("$logger->log('notice', 'Saved item', $ctx);").is_empty());
    }

    #[test]
    fn empty_call() {
        let violations = check("$logger->error();");
        assert_eq!(codes(&violations), vec!["EmptyLog"]);
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(
            violations[0].message,
            "Empty calls to error() are not allowed"
        );
    }

    #[test]
    fn empty_call_anchors_at_call_token() {
        let violations = check("$logger->error();");
        // `$logger->` is 9 chars; the call token starts at column 10.
        assert_eq!(violations[0].location.column, 10);
    }

    #[test]
    fn variable_argument() {
        let violations = check("$logger->warning($message);");
        assert_eq!(codes(&violations), vec!["NotLiteralString"]);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn function_call_argument() {
        let violations = check("$logger->warning(sprintf('x %s', $y));");
        assert_eq!(codes(&violations), vec!["NotLiteralString"]);
    }

    #[test]
    fn empty_double_quoted_string() {
        let violations = check("$logger->info(\"\");");
        assert_eq!(codes(&violations), vec!["EmptyString"]);
    }

    #[test]
    fn empty_single_quoted_string() {
        let violations = check("$logger->info('');");
        assert_eq!(codes(&violations), vec!["EmptyString"]);
    }

    #[test]
    fn empty_string_suppresses_later_checks() {
        // Concat after the call would otherwise warn.
        let violations = check("$logger->info('') . ' trailing';");
        assert_eq!(codes(&violations), vec!["EmptyString"]);
    }

    #[test]
    fn concat_inside_argument() {
        let violations = check("$logger->debug('Saved item' . $suffix);");
        assert_eq!(codes(&violations), vec!["Concat"]);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn concat_anchors_at_operator() {
        let source = "$logger->debug('Saved item' . $suffix);";
        let violations = check(source);
        let dot = source.find(" . ").expect("operator") + 2;
        assert_eq!(violations[0].location.column, dot);
    }

    #[test]
    fn concat_after_call() {
        let violations = check("$logger->notice('Saved') . ' to disk';");
        assert_eq!(codes(&violations), vec!["ConcatString"]);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn trivial_concat_after_call_is_allowed() {
        assert!(check("$logger->notice('Saved') . '</a>';").is_empty());
        assert!(check("$logger->notice('Saved') . '.';").is_empty());
    }

    #[test]
    fn custom_triviality_predicate() {
        struct NothingIsTrivial;
        impl ConcatTriviality for NothingIsTrivial {
            fn is_trivial(&self, _raw: &str) -> bool {
                false
            }
        }
        let rule = MethodLog::new().with_triviality(Box::new(NothingIsTrivial));
        let violations = check_with(rule, "$logger->notice('Saved') . '.';");
        assert_eq!(codes(&violations), vec!["ConcatString"]);
    }

    #[test]
    fn concat_after_call_with_non_literal_is_silent() {
        assert!(check("$logger->notice('Saved') . $suffix;").is_empty());
    }

    #[test]
    fn surrounding_whitespace() {
        let violations = check("$logger->notice(' Task complete ');");
        assert_eq!(codes(&violations), vec!["WhiteSpace"]);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn trailing_whitespace_only() {
        let violations = check("$logger->notice(\"Task complete \");");
        assert_eq!(codes(&violations), vec!["WhiteSpace"]);
    }

    #[test]
    fn backslash_single_quote() {
        let violations = check(r"$logger->alert('It\'s done');");
        assert_eq!(codes(&violations), vec!["BackslashSingleQuote"]);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn single_quote_escape_with_double_quote_present_is_allowed() {
        // The literal needs single-quoting anyway; no style warning.
        assert!(check(r#"$logger->alert('It\'s a "done" deal');"#).is_empty());
    }

    #[test]
    fn backslash_double_quote() {
        let violations = check(r#"$logger->alert("Say \"hi\" now");"#);
        assert_eq!(codes(&violations), vec!["BackslashDoubleQuote"]);
    }

    #[test]
    fn double_quote_escape_with_single_quote_present_is_allowed() {
        assert!(check(r#"$logger->alert("It's a \"done\" deal");"#).is_empty());
    }

    #[test]
    fn backslash_warnings_never_co_occur() {
        // A literal has exactly one quoting style; craft the nastiest mix.
        let violations = check(r#"$logger->alert('mix \' of \" quotes');"#);
        let codes = codes(&violations);
        assert!(
            !(codes.contains(&"BackslashSingleQuote") && codes.contains(&"BackslashDoubleQuote"))
        );
    }

    #[test]
    fn independent_checks_co_occur() {
        let violations = check(r"$logger->notice(' It\'s saved ' . $x) . ' now';");
        let codes = codes(&violations);
        assert_eq!(
            codes,
            vec!["ConcatString", "WhiteSpace", "Concat", "BackslashSingleQuote"]
        );
    }

    #[test]
    fn single_quote_warning_does_not_suppress_earlier_checks() {
        // WhiteSpace and Concat run before the escaping check; only the
        // double-quote branch is suppressed.
        let violations = check(r"$logger->alert(' It\'s done ');");
        assert_eq!(codes(&violations), vec!["WhiteSpace", "BackslashSingleQuote"]);
    }

    #[test]
    fn validation_is_idempotent() {
        let source = r"$logger->notice(' It\'s saved ' . $x);";
        let first = check(source);
        let second = check(source);
        assert_eq!(codes(&first), codes(&second));
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn second_argument_is_not_inspected() {
        assert!(check("$logger->error('Saved', $bad . 'concat');").is_empty());
    }

    #[test]
    fn generic_log_entry_point_is_checked() {
        let violations = check("$logger->log($level);");
        assert_eq!(codes(&violations), vec!["NotLiteralString"]);
    }

    #[test]
    fn message_names_the_method_as_written() {
        let violations = check("$logger->Error();");
        assert_eq!(
            violations[0].message,
            "Empty calls to Error() are not allowed"
        );
    }
}

//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::locator::locate_calls;
use crate::rule::{CallRule, CallRuleBox, FileContext};
use crate::tokenizer::{tokenize, TokenizeError};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error tokenizing a source file.
    #[error("Tokenize error in {path}: {source}")]
    Tokenize {
        /// Path to the file that failed to tokenize.
        path: PathBuf,
        /// Underlying tokenizer error.
        source: TokenizeError,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<CallRuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_tokenize_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: CallRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: CallRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on tokenizer errors (default: false).
    #[must_use]
    pub fn fail_on_tokenize_error(mut self, fail: bool) -> Self {
        self.fail_on_tokenize_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.clone());

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            config,
            fail_on_tokenize_error: self.fail_on_tokenize_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<CallRuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_tokenize_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or on tokenizer errors when
    /// `fail_on_tokenize_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Tokenize { path, source }) => {
                    warn!("Failed to tokenize {}: {}", path.display(), source);
                    if self.fail_on_tokenize_error {
                        return Err(AnalyzerError::Tokenize { path, source });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        // Sort violations by file, then position
        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns violations.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let tokens = tokenize(&content).map_err(|e| AnalyzerError::Tokenize {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ctx = FileContext::new(path, &content, &self.root);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            for call in locate_calls(&tokens, rule.method_names()) {
                let call_violations = rule.check_call(&ctx, &tokens, &call);
                violations.extend(self.apply_severity_override(rule.name(), call_violations));
            }
        }

        Ok(violations)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Discovers all source files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files = Vec::new();

        for extension in &self.config.analyzer.extensions {
            let pattern = format!("{}/**/*.{}", self.root.display(), extension);
            for entry in glob::glob(&pattern)? {
                let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }

                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/vendor/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

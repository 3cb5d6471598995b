//! # loglint-core
//!
//! Core framework for linting logger method calls in PHP sources.
//!
//! This crate provides the host side of the linter: a PHP-subset tokenizer,
//! a call-site locator, and the traits and types rules are built from:
//!
//! - [`CallRule`] trait for rules over recognized call sites
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//! - [`Token`] and [`tokenize`] for the lexed representation rules consume
//!
//! ## Example
//!
//! ```ignore
//! use loglint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./web")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod locator;
mod rule;
mod token;
mod tokenizer;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use locator::locate_calls;
pub use rule::{Argument, CallRule, CallRuleBox, CallSite, FileContext};
pub use token::{find_next_significant, find_prev_significant, Token, TokenKind};
pub use tokenizer::{tokenize, TokenizeError};
pub use types::{
    LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic,
};

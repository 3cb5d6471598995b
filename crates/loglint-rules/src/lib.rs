//! # loglint-rules
//!
//! Built-in lint rules for loglint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | LL001 | `method-log` | Logger calls must receive a single non-empty string literal message |
//!
//! ## Usage
//!
//! ```ignore
//! use loglint_core::Analyzer;
//! use loglint_rules::MethodLog;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./web")
//!     .rule(MethodLog::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod method_log;
mod triviality;

pub use method_log::MethodLog;
pub use triviality::{ConcatTriviality, MarkupTriviality};

/// Re-export core types for convenience.
pub use loglint_core::{CallRule, CallRuleBox, Severity, Violation};

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<CallRuleBox> {
    vec![Box::new(MethodLog::new())]
}

/// Returns the rules enabled by default.
#[must_use]
pub fn default_rules() -> Vec<CallRuleBox> {
    all_rules()
}

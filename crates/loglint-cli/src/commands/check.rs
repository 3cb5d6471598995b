//! Check command implementation.

use anyhow::{Context, Result};
use loglint_core::{Analyzer, Config};
use loglint_rules::{default_rules, CallRuleBox, MethodLog};
use std::path::Path;

use super::output;
use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    strict: bool,
    source: &ConfigSource,
) -> Result<()> {
    let config = match source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };
    let fail_on = config.fail_on_severity();

    // Build analyzer
    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .fail_on_tokenize_error(strict);

    // Add exclude patterns
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    // Add rules based on filter
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names)
    } else {
        default_rules()
    };

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    output::print(&result, format)?;

    // Exit with error code when the threshold is met
    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str]) -> Vec<CallRuleBox> {
    let mut rules: Vec<CallRuleBox> = Vec::new();

    for name in names {
        match *name {
            "method-log" | "LL001" => rules.push(Box::new(MethodLog::new())),
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# loglint configuration

# Severity threshold for a failing exit code
# fail_on = "warning"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./web"

# Glob patterns to exclude from analysis
exclude = [
    "**/vendor/**",
    "**/node_modules/**",
]

# File extensions to analyze
# extensions = ["php", "module", "inc", "install", "theme", "profile"]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.method-log]
enabled = true
# severity = "warning"  # Override default severity
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("loglint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created loglint.toml");
    println!("\nNext steps:");
    println!("  1. Edit loglint.toml to configure rules");
    println!("  2. Run: loglint check");

    Ok(())
}

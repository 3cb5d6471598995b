//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/loglint.toml` or `.loglint.toml`
//! 3. `~/.loglint/config.toml` (global fallback)
//! 4. No config found → defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.loglint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["loglint.toml", ".loglint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    // 1. Explicit path from --config flag
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    // 2. Project-level config
    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    // 3. Global fallback
    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.exists() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Returns the global config directory path.
///
/// Resolution: `$LOGLINT_CONFIG_DIR` > `~/.loglint/`
///
/// The env var override enables testing and custom CI setups.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LOGLINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".loglint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().expect("tempdir");
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "").expect("write");

        // Even when project config exists, explicit wins
        let project = tmp.path().join("project");
        fs::create_dir(&project).expect("mkdir");
        fs::write(project.join("loglint.toml"), "").expect("write");

        let result = resolve_inner(&project, Some(&explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn explicit_does_not_check_existence() {
        // Explicit path is trusted as-is (caller handles missing file error)
        let result = resolve_inner(
            Path::new("/tmp"),
            Some(Path::new("/nonexistent.toml")),
            None,
        );
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn project_loglint_toml_found() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("loglint.toml"), "").expect("write");

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("loglint.toml"))
        );
    }

    #[test]
    fn loglint_toml_preferred_over_dot_prefix() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("loglint.toml"), "").expect("write");
        fs::write(tmp.path().join(".loglint.toml"), "").expect("write");

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("loglint.toml"))
        );
    }

    #[test]
    fn global_fallback_when_no_project_config() {
        let project = TempDir::new().expect("tempdir");
        let global = TempDir::new().expect("tempdir");
        fs::write(global.path().join("config.toml"), "").expect("write");

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );
        assert!(result.is_global());
    }

    #[test]
    fn no_config_anywhere_returns_default() {
        let project = TempDir::new().expect("tempdir");
        let result = resolve_inner(project.path(), None, None);
        assert_eq!(result, ConfigSource::Default);
        assert_eq!(result.path(), None);
    }
}

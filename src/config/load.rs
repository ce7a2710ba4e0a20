//! Configuration loading from files.
//!
//! This module handles reading and parsing configuration files.

use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

/// The config file name looked up when none is given on the command line.
const DEFAULT_CONFIG_FILE: &str = "docweld.yaml";

impl Config {
    /// Load the config from the command line argument.
    ///
    /// When no path is given, `docweld.yaml` in the current directory is
    /// used if it exists; otherwise built-in defaults apply, so a bare
    /// invocation always runs the same fixed pipeline. An explicitly named
    /// config file must exist.
    ///
    /// Returns the config together with the base path that relative input
    /// and output paths resolve against (the config file's directory).
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CwdFailure)?;

        let (path, required) = match config_file {
            Some(path) => {
                let path = if path.is_relative() {
                    cwd.join(path)
                } else {
                    path.to_path_buf()
                };
                (path, true)
            }
            None => (cwd.join(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            return Ok((Config::default(), cwd));
        }

        let config = Self::load_from_file(&path)?;
        let base_path = base_path_from_config(&path);
        Ok((config, base_path))
    }

    /// Load the config from a file path
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Validation(format_config_error(e)))
    }
}

/// The directory relative input/output paths are resolved against.
fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Format a config deserialization error with helpful context
fn format_config_error(e: serde_yaml::Error) -> String {
    let msg = e.to_string();

    if msg.contains("invalid type") && msg.contains("site") {
        return "invalid config: 'site' must be a mapping\n\nExample:\n  site:\n    title: My Project".to_string();
    }

    format!("invalid config: {msg}")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site:\n  title: Loaded\noutput:\n  path: docs/index.md").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.site.title, "Loaded");
        assert_eq!(config.output.path, PathBuf::from("docs/index.md"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let err = Config::load_from_file(Path::new("/nonexistent/docweld.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site: [not, a, mapping]").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_base_path_from_config() {
        assert_eq!(
            base_path_from_config(Path::new("/tmp/project/docweld.yaml")),
            PathBuf::from("/tmp/project")
        );
    }
}

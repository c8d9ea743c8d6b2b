//! View configuration — color mode, body limits, refresh policy.
//!
//! Project-level config: `.events-view/config.yaml` (optional).
//!
//! Resolution: explicit `--config` path → project config → defaults.
//! Command-line flags override whatever was loaded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default limit for url-encoded form bodies (10 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 << 20;

/// Project config location, relative to the working directory.
const PROJECT_CONFIG: &str = ".events-view/config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// When to emit ANSI styling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when writing to a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether styling should be applied to an output stream.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Top-level view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub color: ColorMode,
    /// Upper bound for url-encoded bodies decoded as forms.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Ask the session to redraw after every rendered event.
    #[serde(default)]
    pub refresh: bool,
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            refresh: false,
        }
    }
}

impl ViewConfig {
    /// Load the project-level config, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        match Self::from_path(PROJECT_CONFIG) {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => Self::default(),
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load a config file. Missing keys take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from a YAML document. An empty document is the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_from_yaml_string() {
        let yaml = r#"
color: never
max_body_bytes: 4096
refresh: true
"#;
        let config = ViewConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.max_body_bytes, 4096);
        assert!(config.refresh);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = ViewConfig::from_yaml("color: always\n").unwrap();
        assert_eq!(config.color, ColorMode::Always);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert!(!config.refresh);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ViewConfig::from_yaml("").unwrap(), ViewConfig::default());
    }

    #[test]
    fn unknown_color_mode_rejected() {
        assert!(ViewConfig::from_yaml("color: rainbow\n").is_err());
    }

    #[test]
    fn from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "max_body_bytes: 12\n").unwrap();
        let config = ViewConfig::from_path(&path).unwrap();
        assert_eq!(config.max_body_bytes, 12);
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = ViewConfig::from_path(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn from_path_bad_yaml_is_yaml_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "max_body_bytes: [1, 2]\n").unwrap();
        let err = ViewConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
    }
}

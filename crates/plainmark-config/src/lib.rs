use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid input pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read a match of input pattern {pattern:?}: {source}")]
    GlobError {
        pattern: String,
        source: glob::GlobError,
    },
}

pub const DEFAULT_EXTENSION: &str = "html";

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Settings for batch conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Glob patterns converted when no paths are given on the command line.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Directory for the generated HTML; next to each input when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// File extension of the generated HTML.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_dir: None,
            extension: default_extension(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.output_dir = config
            .output_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));
        config.inputs = config
            .inputs
            .iter()
            .map(|pattern| Self::expand_pattern(pattern))
            .collect();

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/plainmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands every input pattern into the files it matches.
    ///
    /// Results are sorted and de-duplicated; a pattern matching nothing
    /// contributes nothing.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = BTreeSet::new();

        for pattern in &self.inputs {
            let paths = glob::glob(pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in paths {
                let path = entry.map_err(|source| ConfigError::GlobError {
                    pattern: pattern.clone(),
                    source,
                })?;
                if path.is_file() {
                    files.insert(path);
                }
            }
        }

        Ok(files.into_iter().collect())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    fn expand_pattern(pattern: &str) -> String {
        shellexpand::full(pattern)
            .map(|expanded| expanded.into_owned())
            .unwrap_or_else(|_| pattern.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/plainmark/config.toml"));
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.extension, "html");
        assert!(config.inputs.is_empty());
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            inputs: vec!["notes/*.txt".to_string()],
            output_dir: Some(PathBuf::from("/tmp/site")),
            extension: "htm".to_string(),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_expand_pattern_with_tilde() {
        let expanded = Config::expand_pattern("~/notes/*.txt");

        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/notes/*.txt"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "inputs = 42").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            inputs: vec!["/tmp/notes/*.txt".to_string()],
            output_dir: Some(PathBuf::from("/tmp/site")),
            ..Config::default()
        };

        // Test saving
        test_config.save_to_path(&config_file).unwrap();

        // Test loading
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        unsafe {
            env::set_var("PLAINMARK_SITE_ROOT", "/custom/site");
        }
        std::fs::write(
            &config_file,
            r#"
inputs = ["$PLAINMARK_SITE_ROOT/*.txt"]
output_dir = "$PLAINMARK_SITE_ROOT/html"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.inputs, vec!["/custom/site/*.txt".to_string()]);
        assert_eq!(config.output_dir, Some(PathBuf::from("/custom/site/html")));

        unsafe {
            env::remove_var("PLAINMARK_SITE_ROOT");
        }
    }

    #[test]
    fn test_resolve_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("b.txt"), "b").unwrap();
        std::fs::write(root.join("a.txt"), "a").unwrap();
        std::fs::write(root.join("skip.md"), "c").unwrap();
        std::fs::create_dir(root.join("dir.txt")).unwrap();

        let config = Config {
            inputs: vec![
                format!("{}/*.txt", root.display()),
                format!("{}/a.*", root.display()),
            ],
            ..Config::default()
        };

        let files = config.resolve_inputs().unwrap();

        assert_eq!(files, vec![root.join("a.txt"), root.join("b.txt")]);
    }

    #[test]
    fn test_resolve_invalid_pattern() {
        let config = Config {
            inputs: vec!["[unclosed".to_string()],
            ..Config::default()
        };

        assert!(matches!(
            config.resolve_inputs(),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }
}

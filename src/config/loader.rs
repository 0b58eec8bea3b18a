//! Layered loading with provenance
//!
//! Layers, lowest precedence first:
//! 1. Built-in blog configuration
//! 2. Site file (`b3.toml`), if present
//! 3. CLI overrides

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::defaults::BuiltinDefaults;
use super::error::{ConfigError, ValidationError};
use super::merge::merge_layers;
use super::store::{Config, RawConfig};

/// Default site file name, looked up in the working directory
pub const DEFAULT_SITE_FILE: &str = "b3.toml";

/// Origin of a configuration layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Cli,
}

/// A contributing layer with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    pub origin: ConfigOrigin,

    /// File path (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// A validated configuration and where it came from
#[derive(Debug, Clone, Serialize)]
pub struct LoadedConfig {
    /// When the layers were merged
    pub loaded_at: DateTime<Utc>,

    /// Contributing layers in precedence order
    pub sources: Vec<ConfigSource>,

    pub config: Config,
}

impl LoadedConfig {
    /// Load the built-in configuration alone
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::build(None, None)
    }

    /// Merge, validate and type the configuration layers
    pub fn build(site_file: Option<&Path>, overrides: Option<Value>) -> Result<Self, ConfigError> {
        let mut layers = vec![BuiltinDefaults::to_value()];
        let mut sources = vec![ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        }];

        if let Some(path) = site_file {
            if path.exists() {
                let (value, digest) = Self::load_toml_file(path)?;
                debug!(path = %path.display(), %digest, "merging site file");
                layers.push(value);
                sources.push(ConfigSource {
                    origin: ConfigOrigin::File,
                    path: Some(path.to_string_lossy().to_string()),
                    digest: Some(digest),
                });
            } else if Self::is_default_site_file(path) {
                debug!(path = %path.display(), "site file not found, skipping");
            } else {
                warn!(path = %path.display(), "site file not found, skipping");
            }
        }

        if let Some(cli) = overrides {
            if !cli.is_object() {
                return Err(ConfigError::ParseError(
                    "CLI overrides must be a JSON object".to_string(),
                ));
            }
            debug!("merging CLI overrides");
            layers.push(cli);
            sources.push(ConfigSource {
                origin: ConfigOrigin::Cli,
                path: None,
                digest: None,
            });
        }

        let merged = merge_layers(layers);
        Self::validate_raw(&merged)?;

        let raw: RawConfig = serde_json::from_value(merged)
            .map_err(|e| ConfigError::ParseError(format!("Invalid configuration shape: {}", e)))?;
        let config = Config::try_from(raw)?;

        for warning in config.lint() {
            warn!("{}", warning);
        }
        info!(
            layers = sources.len(),
            socials = config.socials().len(),
            "configuration loaded"
        );

        Ok(Self {
            loaded_at: Utc::now(),
            sources,
            config,
        })
    }

    /// Whether `path` is the implicit site file, which may legitimately be absent
    fn is_default_site_file(path: &Path) -> bool {
        path == Path::new(DEFAULT_SITE_FILE)
    }

    /// Checks that must run before typing, where the typed form cannot
    /// express the violation
    fn validate_raw(merged: &Value) -> Result<(), ConfigError> {
        if let Some(n) = merged
            .get("SITE")
            .and_then(|site| site.get("postPerPage"))
            .and_then(Value::as_i64)
        {
            if n <= 0 {
                return Err(ValidationError::NonPositivePostPerPage(n).into());
            }
        }
        Ok(())
    }

    /// Load and parse a TOML file, returning the value and digest
    fn load_toml_file(path: &Path) -> Result<(Value, String), ConfigError> {
        let bytes = fs::read(path)?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes)
            .map_err(|e| ConfigError::ParseError(format!("Invalid UTF-8: {}", e)))?;

        let toml_value: toml::Value = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

        Ok((Self::toml_to_json(toml_value), digest))
    }

    /// Convert TOML Value to JSON Value
    fn toml_to_json(toml: toml::Value) -> Value {
        match toml {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Number(i.into()),
            toml::Value::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(arr) => Value::Array(arr.into_iter().map(Self::toml_to_json).collect()),
            toml::Value::Table(table) => Value::Object(
                table
                    .into_iter()
                    .map(|(k, v)| (k, Self::toml_to_json(v)))
                    .collect(),
            ),
        }
    }

    /// Drop provenance and keep the configuration
    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_with_builtin_only() {
        let loaded = LoadedConfig::builtin().unwrap();

        assert_eq!(loaded.config, BuiltinDefaults::config());
        assert_eq!(loaded.sources.len(), 1);
        assert_eq!(loaded.sources[0].origin, ConfigOrigin::Builtin);
    }

    #[test]
    fn test_cli_override() {
        let cli = serde_json::json!({"SITE": {"postPerPage": 10}});
        let config = LoadedConfig::build(None, Some(cli)).unwrap().into_config();

        assert_eq!(config.site().post_per_page, 10);
        assert_eq!(config.site().title, "Ordinary Days");
    }

    #[test]
    fn test_cli_override_must_be_object() {
        let result = LoadedConfig::build(None, Some(serde_json::json!([1, 2])));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_zero_post_per_page() {
        let cli = serde_json::json!({"SITE": {"postPerPage": 0}});
        let err = LoadedConfig::build(None, Some(cli)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError(ValidationError::NonPositivePostPerPage(0))
        ));
    }

    #[test]
    fn test_negative_post_per_page() {
        let cli = serde_json::json!({"SITE": {"postPerPage": -3}});
        let err = LoadedConfig::build(None, Some(cli)).unwrap_err();
        assert!(err.to_string().contains("postPerPage must be positive, got -3"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let cli = serde_json::json!({"SITE": {"lightAndDarkMode": "yes"}});
        let result = LoadedConfig::build(None, Some(cli));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_toml_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "LOCALE = []").unwrap();
        writeln!(temp, "[SITE]").unwrap();
        writeln!(temp, "title = \"Extraordinary Days\"").unwrap();

        let loaded = LoadedConfig::build(Some(temp.path()), None).unwrap();

        assert_eq!(loaded.config.site().title, "Extraordinary Days");
        assert_eq!(loaded.config.site().author, "Zhou Yu");
        assert!(loaded.config.locales().is_empty());
        assert_eq!(loaded.sources.len(), 2);
        assert_eq!(loaded.sources[1].origin, ConfigOrigin::File);
        assert_eq!(loaded.sources[1].digest.as_ref().map(String::len), Some(64));
    }

    #[test]
    fn test_missing_site_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = LoadedConfig::build(Some(dir.path().join("b3.toml").as_path()), None).unwrap();
        assert_eq!(loaded.sources.len(), 1);
    }

    #[test]
    fn test_only_default_site_file_is_silently_optional() {
        assert!(LoadedConfig::is_default_site_file(Path::new(DEFAULT_SITE_FILE)));
        assert!(!LoadedConfig::is_default_site_file(Path::new("b3.tmol")));
        assert!(!LoadedConfig::is_default_site_file(Path::new("site/b3.toml")));

        let loaded = LoadedConfig::build(Some(Path::new("b3.tmol")), None).unwrap();
        assert_eq!(loaded.sources.len(), 1);
    }

    #[test]
    fn test_invalid_toml() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "[SITE").unwrap();

        let result = LoadedConfig::build(Some(temp.path()), None);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_duplicate_name_in_file() {
        let mut temp = NamedTempFile::new().unwrap();
        for _ in 0..2 {
            writeln!(temp, "[[SOCIALS]]").unwrap();
            writeln!(temp, "name = \"Github\"").unwrap();
            writeln!(temp, "href = \"https://github.com/yuzhouu/b3\"").unwrap();
            writeln!(temp, "linkTitle = \"Ordinary Days on Github\"").unwrap();
            writeln!(temp, "active = true").unwrap();
        }

        let err = LoadedConfig::build(Some(temp.path()), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError(ValidationError::DuplicateSocialName(ref name)) if name == "Github"
        ));
    }

    #[test]
    fn test_file_then_cli_precedence() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "[SITE]").unwrap();
        writeln!(temp, "postPerPage = 8").unwrap();
        writeln!(temp, "lightAndDarkMode = false").unwrap();

        let cli = serde_json::json!({"SITE": {"postPerPage": 12}});
        let loaded = LoadedConfig::build(Some(temp.path()), Some(cli)).unwrap();

        assert_eq!(loaded.config.site().post_per_page, 12);
        assert!(!loaded.config.site().light_and_dark_mode);
        assert_eq!(loaded.sources.len(), 3);
        assert_eq!(loaded.sources[2].origin, ConfigOrigin::Cli);
    }
}

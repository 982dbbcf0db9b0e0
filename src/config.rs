//! Configuration file support for measures-ws.
//!
//! Provides YAML-based configuration through `measures-ws.config.yml` files,
//! including data structures, file loading, validation and merging with the
//! command-line options.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::application::dto::{OutputFormat, RequestLimits};
use crate::shared::security::read_checked;
use crate::shared::{MeasuresError, Result};

pub const CONFIG_FILENAME: &str = "measures-ws.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Dataset path, relative paths are resolved against the working directory
    pub data: Option<PathBuf>,
    pub log_level: Option<String>,
    pub limits: Option<RequestLimits>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options given on the command line, each overriding the config file
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub data: Option<PathBuf>,
}

/// Effective settings after merging the config file and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub data: PathBuf,
    pub log_level: Option<String>,
    pub limits: RequestLimits,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|message| MeasuresError::Validation {
            message: format!("Invalid config: format. {}", message),
        })?;
    }
    if let Some(limits) = &config.limits {
        limits.validate()?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
///
/// Called once logging is set up, since the config decides the log level.
pub fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Merges the optional config file with the CLI options, CLI first
///
/// # Errors
/// Validation error when neither source names a dataset
pub fn merge(config: Option<&ConfigFile>, overrides: CliOverrides) -> Result<Settings> {
    let format = match (overrides.format, config.and_then(|c| c.format.as_deref())) {
        (Some(format), _) => format,
        (None, Some(configured)) => OutputFormat::from_str(configured)
            .map_err(|message| MeasuresError::Validation { message })?,
        (None, None) => OutputFormat::default(),
    };

    let data = overrides
        .data
        .or_else(|| config.and_then(|c| c.data.clone()))
        .ok_or_else(|| MeasuresError::Validation {
            message: format!(
                "No dataset given.\n\n💡 Hint: Pass --data <FILE> or set 'data' in {}",
                CONFIG_FILENAME
            ),
        })?;

    Ok(Settings {
        format,
        data,
        log_level: config.and_then(|c| c.log_level.clone()),
        limits: config.and_then(|c| c.limits).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
data: measures.json
log_level: debug
limits:
  max_page_size: 200
  max_metric_keys: 5
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.data, Some(PathBuf::from("measures.json")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        let limits = config.limits.unwrap();
        assert_eq!(limits.max_page_size, 200);
        assert_eq!(limits.max_metric_keys, 5);
        assert_eq!(limits.default_page_size, 100);
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: [unclosed\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: json\ncheck_cve: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: xml\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Invalid format: xml"));
    }

    #[test]
    fn test_invalid_limits_are_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "limits:\n  default_page_size: 600\n  max_page_size: 500\n",
        )
        .unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("limits.default_page_size (600)"));
    }

    #[test]
    fn test_merge_prefers_cli() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            data: Some(PathBuf::from("from-config.json")),
            ..Default::default()
        };

        let settings = merge(
            Some(&config),
            CliOverrides {
                format: Some(OutputFormat::Json),
                data: Some(PathBuf::from("from-cli.json")),
            },
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.data, PathBuf::from("from-cli.json"));
        assert_eq!(settings.limits, RequestLimits::default());
    }

    #[test]
    fn test_merge_falls_back_to_config() {
        let config = ConfigFile {
            format: Some("md".to_string()),
            data: Some(PathBuf::from("from-config.json")),
            ..Default::default()
        };

        let settings = merge(Some(&config), CliOverrides::default()).unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.data, PathBuf::from("from-config.json"));
    }

    #[test]
    fn test_merge_requires_dataset() {
        let err = merge(None, CliOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("No dataset given"));
    }
}

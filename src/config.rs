//! Configuration file support for build-model.
//!
//! Provides YAML-based configuration through `build-model.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::project_model::services::PathLayout;
use crate::shared::logging::parse_level;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "build-model.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub resolve_sources: Option<bool>,
    pub layout: Option<String>,
    pub kind_tags: Option<Vec<String>>,
    pub parallel: Option<bool>,
    pub strict: Option<bool>,
    pub log_level: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`; only valid after `validate_config`
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    /// Parsed `layout`; only valid after `validate_config`
    pub fn path_layout(&self) -> Option<PathLayout> {
        self.layout.as_deref().and_then(|l| l.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
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
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config next to the project. Returns `None` silently if not found.
///
/// `project_path` may be the snapshot file itself, in which case its
/// directory is searched.
pub fn discover_config(project_path: &Path) -> Result<Option<ConfigFile>> {
    let dir = if project_path.is_file() {
        project_path.parent().unwrap_or(project_path)
    } else {
        project_path
    };
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    eprintln!("📄 Auto-discovered config file: {}", config_path.display());
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(message) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", message);
        }
    }
    if let Some(ref layout) = config.layout {
        if let Err(message) = layout.parse::<PathLayout>() {
            bail!("Invalid config: {}", message);
        }
    }
    if let Some(ref tags) = config.kind_tags {
        if tags.is_empty() {
            bail!(
                "Invalid config: kind_tags must not be empty.\n\n\
                 💡 Hint: Remove the field to use the defaults (java, kotlin, generated, resources)."
            );
        }
        for (i, tag) in tags.iter().enumerate() {
            if tag.trim().is_empty() {
                bail!(
                    "Invalid config: kind_tags[{}] must not be empty.\n\n\
                     💡 Hint: Each kind tag is a path fragment such as \"java\" or \"resources\".",
                    i
                );
            }
        }
    }
    if let Some(ref level) = config.log_level {
        if parse_level(level).is_none() {
            bail!(
                "Invalid config: unknown log_level '{}'.\n\n\
                 💡 Hint: Use one of trace, debug, info, warn, error.",
                level
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: markdown
resolve_sources: false
layout: grouped
kind_tags:
  - scala
  - resources
parallel: true
strict: true
log_level: debug
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Markdown));
        assert_eq!(config.resolve_sources, Some(false));
        assert_eq!(config.path_layout(), Some(PathLayout::Grouped));
        assert_eq!(
            config.kind_tags.as_deref(),
            Some(&["scala".to_string(), "resources".to_string()][..])
        );
        assert_eq!(config.parallel, Some(true));
        assert_eq!(config.strict, Some(true));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_discover_config_in_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\nparallel: false\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.parallel, Some(false));
    }

    #[test]
    fn test_discover_config_next_to_snapshot_file() {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("build-tree.yaml");
        fs::write(&snapshot, "root: {name: w}\n").unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "strict: true\n").unwrap();

        let config = discover_config(&snapshot).unwrap().unwrap();
        assert_eq!(config.strict, Some(true));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_kind_tags_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "kind_tags: []\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("kind_tags must not be empty"));
    }

    #[test]
    fn test_blank_kind_tag_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "kind_tags: [java, \"  \"]\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("kind_tags[1]"));
    }

    #[test]
    fn test_invalid_format_and_layout_rejected() {
        let dir = TempDir::new().unwrap();

        let config_path = write_config(&dir, "format: xml\n");
        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format"));

        let config_path = write_config(&dir, "layout: flat\n");
        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid layout"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "log_level: chatty\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("log_level"));
    }

    #[test]
    fn test_unknown_fields_are_kept_for_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
unknown_field: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.resolve_sources.is_none());
        assert!(config.layout.is_none());
        assert!(config.kind_tags.is_none());
        assert!(config.parallel.is_none());
        assert!(config.strict.is_none());
        assert!(config.log_level.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}

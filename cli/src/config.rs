//! Draw configuration with TOML file support.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tombola_export::ExportFormat;
use tombola_types::{Algorithm, FieldNames};
use tombola_utils::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings shared by every command.
///
/// Loaded from a TOML file via [`TombolaConfig::from_toml_file`]; command
/// line flags override individual values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TombolaConfig {
    /// Draw algorithm. When unset it is chosen from the participant weights.
    #[serde(default)]
    pub algorithm: Option<Algorithm>,

    /// Counter value the PRNG starts from.
    #[serde(default)]
    pub start_counter: u64,

    /// Formats written when an output base is given.
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,

    /// Field names in participant records.
    #[serde(default)]
    pub fields: FieldNames,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Json]
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl TombolaConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for TombolaConfig {
    fn default() -> Self {
        Self {
            algorithm: None,
            start_counter: 0,
            formats: default_formats(),
            fields: FieldNames::default(),
            log_level: default_log_level(),
            log_format: LogFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = TombolaConfig::from_toml_str("").unwrap();
        assert_eq!(config, TombolaConfig::default());
        assert_eq!(config.algorithm, None);
        assert_eq!(config.fields.id, "id");
        assert_eq!(config.formats, vec![ExportFormat::Json]);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            algorithm = "weighted-scan"
            start_counter = 12
            formats = ["json", "csv"]
            log_format = "json"

            [fields]
            id = "email"
            weight = "entries"
        "#;
        let config = TombolaConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.algorithm, Some(Algorithm::WeightedScan));
        assert_eq!(config.start_counter, 12);
        assert_eq!(config.formats, vec![ExportFormat::Json, ExportFormat::Csv]);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.fields.id, "email");
        assert_eq!(config.fields.weight, "entries");
        assert_eq!(config.fields.position, "position");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = TombolaConfig::from_toml_str(r#"algorithm = "lottery""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tombola.toml");
        std::fs::write(&path, "start_counter = 3\n").unwrap();
        assert_eq!(TombolaConfig::from_toml_file(&path).unwrap().start_counter, 3);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = TombolaConfig::from_toml_file(Path::new("/nonexistent/tombola.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

//! Output-shaping configuration
//!
//! The input table is fixed; configuration only shapes what gets printed
//! and how loudly the run narrates itself. Every field has a default, so a
//! missing config flag means a fully default run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// INSERT target table (optional, default "designs")
    #[serde(default = "default_table")]
    pub table: String,

    /// INSERT target column (optional, default "design")
    #[serde(default = "default_column")]
    pub column: String,

    /// Wrap generate output in a full INSERT statement (default: false)
    #[serde(default)]
    pub emit_insert: bool,

    /// Minimum log severity: trace, info, warn, or error (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_table() -> String {
    "designs".to_string()
}
fn default_column() -> String {
    "design".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            column: default_column(),
            emit_insert: false,
            log_level: default_log_level(),
        }
    }
}

impl GenConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: GenConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from file when a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if !is_sql_identifier(&self.table) {
            return Err(CliError::config_error(format!(
                "Invalid table: '{}'. Must be a plain SQL identifier.",
                self.table
            )));
        }

        if !is_sql_identifier(&self.column) {
            return Err(CliError::config_error(format!(
                "Invalid column: '{}'. Must be a plain SQL identifier.",
                self.column
            )));
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error.",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Minimum log severity for this run
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Info)
    }
}

/// Plain SQL identifier: leading letter or underscore, then alphanumerics.
fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenConfig::default();
        assert_eq!(config.table, "designs");
        assert_eq!(config.column, "design");
        assert!(!config.emit_insert);
        assert_eq!(config.severity(), Severity::Info);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: GenConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.table, "designs");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_validate_rejects_bad_identifier() {
        let config = GenConfig {
            table: "designs; DROP".to_string(),
            ..GenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_leading_digit() {
        let config = GenConfig {
            column: "1design".to_string(),
            ..GenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = GenConfig {
            log_level: "debug".to_string(),
            ..GenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_identifier_rules() {
        assert!(is_sql_identifier("designs"));
        assert!(is_sql_identifier("_tmp_designs2"));
        assert!(!is_sql_identifier(""));
        assert!(!is_sql_identifier("2designs"));
        assert!(!is_sql_identifier("de signs"));
    }
}

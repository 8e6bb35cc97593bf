//! YAML configuration file support for the auditfuse pipeline.
//!
//! All stage configurations (inputs, embedding, matcher, store, report) live
//! in a single YAML file loaded at startup. Every field has a default, so an
//! empty document (or no file at all) yields a runnable configuration.
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! inputs:
//!   openscap_report: "reports/openscap-report.json"
//!   lynis_report: "reports/lynis-report.json"
//!
//! embedding:
//!   mode: "hash"
//!   model_name: "secbert"
//!   dim: 384
//!   normalize: true
//!
//! matcher:
//!   threshold: 0.5
//!
//! store:
//!   backend: "redb"
//!   redb_path: "reports.redb"
//!
//! report:
//!   output_path: "generated_reports/audit-report.html"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use embedding::EmbeddingConfig;
use matcher::MatcherConfig;
use store::BackendConfig;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuditfuseConfig {
    /// Configuration format version.
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Scanner report locations.
    #[serde(default)]
    pub inputs: InputsConfig,

    /// Embedding provider configuration.
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Reconciliation engine configuration.
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Persistence configuration.
    #[serde(default)]
    pub store: StoreYamlConfig,

    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportYamlConfig,
}

impl AuditfuseConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: AuditfuseConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
        self.embedding
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.store.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

impl Default for AuditfuseConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            name: None,
            inputs: InputsConfig::default(),
            embedding: EmbeddingConfig::default(),
            matcher: MatcherConfig::default(),
            store: StoreYamlConfig::default(),
            report: ReportYamlConfig::default(),
        }
    }
}

/// Scanner report locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_openscap_report")]
    pub openscap_report: String,

    #[serde(default = "default_lynis_report")]
    pub lynis_report: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            openscap_report: default_openscap_report(),
            lynis_report: default_lynis_report(),
        }
    }
}

/// Persistence YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreYamlConfig {
    /// `"in_memory"` or `"redb"`.
    #[serde(default = "default_store_backend")]
    pub backend: String,

    /// Database file path, required when backend is `"redb"`.
    #[serde(default)]
    pub redb_path: Option<String>,
}

impl StoreYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.backend.as_str() {
            "in_memory" => Ok(()),
            "redb" => {
                if self.redb_path.as_deref().map_or(true, str::is_empty) {
                    return Err(ConfigLoadError::Validation(
                        "store.redb_path is required when backend is 'redb'".to_string(),
                    ));
                }
                Ok(())
            }
            other => Err(ConfigLoadError::Validation(format!(
                "store.backend must be one of: [\"in_memory\", \"redb\"], got {other:?}"
            ))),
        }
    }

    /// Resolve into the store crate's backend selection.
    pub fn backend_config(&self) -> BackendConfig {
        match self.backend.as_str() {
            "redb" => BackendConfig::redb(self.redb_path.clone().unwrap_or_default()),
            _ => BackendConfig::in_memory(),
        }
    }
}

impl Default for StoreYamlConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            redb_path: None,
        }
    }
}

/// Report rendering YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportYamlConfig {
    /// Where the rendered HTML report is written.
    #[serde(default = "default_report_output")]
    pub output_path: String,
}

impl ReportYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.output_path.is_empty() {
            return Err(ConfigLoadError::Validation(
                "report.output_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReportYamlConfig {
    fn default() -> Self {
        Self {
            output_path: default_report_output(),
        }
    }
}

// Helper functions for serde defaults
fn default_config_version() -> String {
    "1.0".to_string()
}
fn default_openscap_report() -> String {
    "reports/openscap-report.json".to_string()
}
fn default_lynis_report() -> String {
    "reports/lynis-report.json".to_string()
}
fn default_store_backend() -> String {
    "in_memory".to_string()
}
fn default_report_output() -> String {
    "generated_reports/audit-report.html".to_string()
}

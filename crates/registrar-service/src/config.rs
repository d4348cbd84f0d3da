//! Service configuration
//!
//! Grading thresholds and notification settings, read from TOML:
//!
//! ```toml
//! [notifications]
//! enabled = true
//! sender = "registrar@campus.example"
//!
//! [grading]
//! base_credits = 15
//!
//! [[grading.credit_bands]]
//! min_gpa = 3.0
//! max_credits = 24
//! ```
//!
//! Omitted sections fall back to the institutional defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use registrar::{DomainResult, GradeCalculator, GradingConfig};

/// Notification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// When false, messages are logged and discarded
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_sender")]
    pub sender: String,
}

fn default_enabled() -> bool {
    true
}

fn default_sender() -> String {
    "registrar@localhost".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sender: default_sender(),
        }
    }
}

/// Service Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub grading: GradingConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl ServiceConfig {
    /// Parse config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ServiceConfig =
            toml::from_str(content).context("Failed to parse service config")?;
        config
            .grading
            .validate()
            .context("Invalid grading config")?;
        Ok(config)
    }

    /// Load config from file, or use defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config at {:?} - using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to load {:?}", path))
    }

    /// Grade calculator configured with these thresholds
    pub fn build_calculator(&self) -> DomainResult<GradeCalculator> {
        GradeCalculator::new(Some(self.grading.clone()))
    }
}

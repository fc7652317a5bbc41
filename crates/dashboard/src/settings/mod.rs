pub mod validation;

use crate::ingestor::datasets::ReportingPeriod;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};
use validation::validate_config;

/// Main settings for the dashboard backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level for application logging (e.g., "info", "debug", "warn", "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Snapshot source configuration
    #[serde(default)]
    pub source: SourceSettings,
    /// Reporting period selecting which snapshot directory to read
    #[serde(default)]
    pub period: PeriodSettings,
    /// Lazy view configuration
    #[serde(default)]
    pub view: ViewSettings,
}

/// Object-store gateway holding the period-partitioned snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Base location; dataset locators are `<base>/year=YYYY/month=MM/<file>`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Reporting period, with the deployment's fixed default when absent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodSettings {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default = "default_month")]
    pub month: u32,
}

impl Default for PeriodSettings {
    fn default() -> Self {
        Self {
            year: default_year(),
            month: default_month(),
        }
    }
}

/// Lazy view configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Intersection ratio (0.0-1.0) at which a placeholder's chart loads
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://gateway.ipfs.io/ipfs/bafybeiak2c6se7bmttyjwhtsaswmu34a72rrz4gublnc3grnjnqs567wja"
        .to_string()
}

fn default_year() -> i32 {
    2023
}

fn default_month() -> u32 {
    10
}

fn default_visibility_threshold() -> f64 {
    0.5
}

impl Settings {
    /// Load configuration from a specific config file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Construct settings, env vars take priority still
        let settings = ConfigBuilder::builder()
            .add_source(File::with_name(&path.as_ref().to_string_lossy()))
            .add_source(
                Environment::with_prefix("SATURN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        validate_config(&settings)?;

        Ok(settings)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        // NOTE: It's ok if this fails (file might not exist)
        let _ = dotenvy::dotenv();

        let settings: Settings = ConfigBuilder::builder()
            .add_source(
                Environment::with_prefix("SATURN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        validate_config(&settings)?;

        Ok(settings)
    }

    pub fn reporting_period(&self) -> ReportingPeriod {
        ReportingPeriod::new(self.period.year, self.period.month)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{\n\
             \tLog Level: {}\n\
             \tSnapshot Base URL: {}\n\
             \tReporting Period: {}\n\
             \tVisibility Threshold: {}\n\
             }}",
            self.log_level,
            self.source.base_url,
            self.reporting_period(),
            self.view.visibility_threshold,
        )
    }
}

use crate::settings::Settings;
use anyhow::{Context, Result, bail};
use url::Url;

/// Validate the configuration values
pub fn validate_config(settings: &Settings) -> Result<()> {
    let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_log_levels.contains(&settings.log_level.to_lowercase().as_str()) {
        bail!(
            "Invalid log level '{}'. Valid options are: {:?}",
            settings.log_level,
            valid_log_levels
        );
    }

    if settings.source.base_url.is_empty() {
        bail!("Snapshot base URL cannot be empty");
    }

    let base_url =
        Url::parse(&settings.source.base_url).context("Snapshot base URL is not a valid URL")?;
    if base_url.scheme() != "http" && base_url.scheme() != "https" {
        bail!(
            "Snapshot base URL must use http or https, got '{}'",
            base_url.scheme()
        );
    }

    if settings.period.month < 1 || settings.period.month > 12 {
        bail!(
            "Reporting month must be between 1 and 12, got {}",
            settings.period.month
        );
    }

    if settings.period.year < 2000 || settings.period.year > 2100 {
        bail!(
            "Reporting year must be between 2000 and 2100, got {}",
            settings.period.year
        );
    }

    if settings.view.visibility_threshold < 0.0 || settings.view.visibility_threshold > 1.0 {
        bail!(
            "Visibility threshold must be between 0.0 and 1.0, got {}",
            settings.view.visibility_threshold
        );
    }

    Ok(())
}

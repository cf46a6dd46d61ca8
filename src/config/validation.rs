//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the patch directory is configured
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TrackerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::TrackerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("patch directory is not set (use PATCH_DIR or --patch-dir)")]
    MissingPatchDirectory,

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("separator '{0}' cannot be a digit")]
    DigitSeparator(char),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &TrackerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.patches.directory.as_os_str().is_empty() {
        errors.push(ValidationError::MissingPatchDirectory);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.patches.separator.is_ascii_digit() {
        errors.push(ValidationError::DigitSeparator(config.patches.separator));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> TrackerConfig {
        let mut config = TrackerConfig::default();
        config.patches.directory = "/tmp/patches".into();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_directory_rejected() {
        let errors = validate_config(&TrackerConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingPatchDirectory]);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = TrackerConfig::default();
        config.timeouts.request_secs = 0;
        config.patches.separator = '7';
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::DigitSeparator('7')));
    }
}

use crate::config::types::{ChecksConfig, Config, ProbeConfig, ServerConfig};
use crate::ConfigError;
use std::net::SocketAddr;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_probe_config(&config.probe)?;
    validate_checks_config(&config.checks)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config
        .bind_address
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidAddress(format!("'{}': {}", config.bind_address, e)))?;
    Ok(())
}

/// Validates probe configuration
fn validate_probe_config(config: &ProbeConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 120, got {}",
            config.timeout_secs
        )));
    }

    if config.max_hops < 1 || config.max_hops > 50 {
        return Err(ConfigError::Validation(format!(
            "max_hops must be between 1 and 50, got {}",
            config.max_hops
        )));
    }

    if config.default_user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "default_user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates check catalog configuration
fn validate_checks_config(config: &ChecksConfig) -> Result<(), ConfigError> {
    validate_relative_path("fallback_path", &config.fallback_path)?;
    validate_relative_path("missing_page_path", &config.missing_page_path)?;

    if config.canonical_probe_query.is_empty() || config.canonical_probe_query.starts_with('?') {
        return Err(ConfigError::Validation(format!(
            "canonical_probe_query must be a non-empty query without leading '?', got '{}'",
            config.canonical_probe_query
        )));
    }

    if config.max_sampled_links < 1 {
        return Err(ConfigError::Validation(
            "max_sampled_links must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Paths are joined onto the base URL, so they must stay relative to it
fn validate_relative_path(name: &str, path: &str) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
    }

    if path.starts_with('/') || path.contains("://") {
        return Err(ConfigError::Validation(format!(
            "{} must be relative to the base URL, got '{}'",
            name, path
        )));
    }

    Ok(())
}

//! Redirect-Audit: URL canonicalization checker
//!
//! This crate probes a website with a fixed catalog of URL variants (http vs https,
//! www vs bare host, doubled slashes, letter case, index files, trailing slash,
//! legacy extensions, canonical tags, 404 handling, chained redirects), walks each
//! redirect chain hop by hop and classifies the observed behaviour as pass, warn
//! or fail with a human-readable diagnosis.

pub mod checks;
pub mod config;
pub mod output;
pub mod probe;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for Redirect-Audit operations
///
/// Network and HTML failures during a check never surface here; they are turned
/// into data on the affected result row. Only invalid input, client construction
/// and serialization failures escape as errors.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    /// Returns true if the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::Url(_) | Self::UrlParse(_)
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for Redirect-Audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use checks::{AuditReport, Auditor, Verdict};
pub use config::Config;
pub use output::CheckResult;
pub use probe::{HttpProbe, Probe, RedirectChainResult};
pub use url::{normalize_for_compare, parse_base_url};

//! Configuration module for Redirect-Audit
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so an empty file (or no file at all) is a valid
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use redirect_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Probe timeout: {}s", config.probe.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ChecksConfig, Config, ProbeConfig, ServerConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;

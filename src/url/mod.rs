//! URL handling module for Redirect-Audit
//!
//! This module provides base URL validation, the comparison normalization used
//! to decide whether a redirect landed on the right target, host helpers and
//! the variant builders used by the check catalog.

mod domain;
mod normalize;
pub mod variants;

// Re-export main functions
pub use domain::{extract_domain, is_same_host};
pub use normalize::{normalize_for_compare, parse_base_url, same_target};

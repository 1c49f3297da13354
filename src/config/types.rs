use serde::Deserialize;

/// Main configuration structure for Redirect-Audit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// HTTP API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on
    #[serde(rename = "bind-address", default = "default_bind_address")]
    pub bind_address: String,
}

/// Outbound request configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// Timeout for a single HTTP round trip (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of round trips when walking a redirect chain
    #[serde(rename = "max-hops", default = "default_max_hops")]
    pub max_hops: usize,

    /// User-Agent sent when the request does not name one
    #[serde(rename = "default-user-agent", default = "default_user_agent")]
    pub default_user_agent: String,
}

/// Check catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChecksConfig {
    /// Path joined onto the base URL when the home page has no internal links
    #[serde(rename = "fallback-path", default = "default_fallback_path")]
    pub fallback_path: String,

    /// Path joined onto the base URL for the 404 handling check
    #[serde(rename = "missing-page-path", default = "default_missing_page_path")]
    pub missing_page_path: String,

    /// Query appended to the test link for the canonical check
    #[serde(
        rename = "canonical-probe-query",
        default = "default_canonical_probe_query"
    )]
    pub canonical_probe_query: String,

    /// Maximum number of internal links sampled from the home page
    #[serde(rename = "max-sampled-links", default = "default_max_sampled_links")]
    pub max_sampled_links: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_hops: default_max_hops(),
            default_user_agent: default_user_agent(),
        }
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            fallback_path: default_fallback_path(),
            missing_page_path: default_missing_page_path(),
            canonical_probe_query: default_canonical_probe_query(),
            max_sampled_links: default_max_sampled_links(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_hops() -> usize {
    10
}

fn default_user_agent() -> String {
    "Googlebot Smartphone".to_string()
}

fn default_fallback_path() -> String {
    "catalog/".to_string()
}

fn default_missing_page_path() -> String {
    "this-page-should-not-exist-404-check".to_string()
}

fn default_canonical_probe_query() -> String {
    "utm_source=test".to_string()
}

fn default_max_sampled_links() -> usize {
    5
}

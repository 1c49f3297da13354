//! HTTP probe implementation
//!
//! This module issues exactly one GET per call:
//! - Redirects are never followed at the transport level
//! - Every HTTP status, 4xx and 5xx included, is a normal result
//! - Transport failures (DNS, connect, TLS, timeout) become data, not errors
//! - No retries

use crate::config::ProbeConfig;
use async_trait::async_trait;
use reqwest::header::{LOCATION, USER_AGENT};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Outcome of a single HTTP round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// URL that was requested
    pub url: String,
    /// HTTP status code, `None` if no response was obtained
    pub status: Option<u16>,
    /// Raw `Location` header value
    pub location: Option<String>,
    /// Response body; not read for redirects with a `Location` header
    pub body: String,
    /// Description of a transport or body-read failure
    pub error: Option<String>,
}

impl ProbeResult {
    /// A round trip that produced no usable response
    pub fn failed(url: &str, status: Option<u16>, error: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            status,
            location: None,
            body: String::new(),
            error: Some(error.into()),
        }
    }

    /// Returns true if the status is in the 3xx range
    pub fn is_redirect_status(&self) -> bool {
        matches!(self.status, Some(code) if (300..400).contains(&code))
    }

    /// Returns true for a 3xx response carrying a `Location` header
    pub fn is_followable_redirect(&self) -> bool {
        self.is_redirect_status() && self.location.is_some()
    }
}

/// A single-request HTTP probe
///
/// The redirect walker only ever talks to this trait, which keeps the check
/// pipeline independent from the HTTP client.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Performs one GET against `url` with the given `User-Agent` header
    async fn fetch(&self, url: &str, user_agent: &str) -> ProbeResult;
}

/// Builds an HTTP client suitable for probing
///
/// # Arguments
///
/// * `config` - The probe configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use redirect_audit::config::ProbeConfig;
/// use redirect_audit::probe::build_http_client;
///
/// let client = build_http_client(&ProbeConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ProbeConfig) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_secs);

    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::none()) // Redirects are walked manually
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Probe`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Wraps an existing client; it must have redirects disabled
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the probe configuration
    pub fn from_config(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn fetch(&self, url: &str, user_agent: &str) -> ProbeResult {
        let response = match self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let status = e.status().map(|s| s.as_u16());
                let error = describe_error(&e);
                tracing::trace!("Probe {} failed: {}", url, error);
                return ProbeResult::failed(url, status, error);
            }
        };

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        tracing::trace!("Probe {} -> {}", url, status);

        let mut result = ProbeResult {
            url: url.to_string(),
            status: Some(status),
            location,
            body: String::new(),
            error: None,
        };

        // A redirect the walker will follow has no use for its body
        if !result.is_followable_redirect() {
            match response.text().await {
                Ok(body) => result.body = body,
                Err(e) => result.error = Some(describe_error(&e)),
            }
        }

        result
    }
}

/// Classifies a reqwest error into a short description
fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        "Connection failed".to_string()
    } else {
        e.to_string()
    }
}

//! Request, response and shared state types for the HTTP API

use crate::checks::Auditor;
use crate::config::Config;
use crate::output::CheckResult;
use crate::probe::HttpProbe;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub auditor: Arc<Auditor<HttpProbe>>,
    /// Sent when the request names no user agent
    pub default_user_agent: Arc<str>,
}

impl AppState {
    pub fn new(auditor: Auditor<HttpProbe>, default_user_agent: &str) -> Self {
        Self {
            auditor: Arc::new(auditor),
            default_user_agent: Arc::from(default_user_agent),
        }
    }

    /// Builds the state, including the HTTP client, from configuration
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let auditor = Auditor::from_config(config)?;
        Ok(Self::new(auditor, &config.probe.default_user_agent))
    }
}

/// Body of `POST /api/check-redirects`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub results: Vec<CheckResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

//! In-memory probe replaying canned responses for unit tests

use crate::probe::fetcher::{Probe, ProbeResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Probe that answers from a fixed URL -> response table
///
/// Unknown URLs behave like a DNS failure.
#[derive(Debug, Default)]
pub struct ScriptedProbe {
    routes: HashMap<String, ProbeResult>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A terminal response with a body
    pub fn page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            ProbeResult {
                url: url.to_string(),
                status: Some(status),
                location: None,
                body: body.to_string(),
                error: None,
            },
        );
        self
    }

    /// A redirect with a `Location` header
    pub fn redirect(mut self, url: &str, status: u16, location: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            ProbeResult {
                url: url.to_string(),
                status: Some(status),
                location: Some(location.to_string()),
                body: String::new(),
                error: None,
            },
        );
        self
    }

    /// A status without `Location`, body included whatever the status
    pub fn status_only(self, url: &str, status: u16, body: &str) -> Self {
        self.page(url, status, body)
    }

    /// URLs requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.iter().map(|(url, _)| url.clone()).collect())
            .unwrap_or_default()
    }

    /// User agents sent so far, in order
    pub fn user_agents(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.iter().map(|(_, ua)| ua.clone()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Probe for ScriptedProbe {
    async fn fetch(&self, url: &str, user_agent: &str) -> ProbeResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((url.to_string(), user_agent.to_string()));
        }

        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| ProbeResult::failed(url, None, "dns error: no such host"))
    }
}

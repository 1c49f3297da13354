//! Check run orchestration
//!
//! A run is a short-circuiting pipeline:
//! 1. Gate: walk the base URL; anything but a final 200 ends the run
//! 2. Pick the test link from the home page (or the configured fallback)
//! 3. Build the catalog and walk every check's chain concurrently
//! 4. Report results in catalog order

use crate::checks::catalog::{build_catalog, CheckDefinition};
use crate::config::Config;
use crate::output::{render_fact, CheckResult, ReportSummary};
use crate::probe::{sample_internal_links, walk_redirects, HttpProbe, Probe, RedirectChainResult};
use crate::url::parse_base_url;
use crate::url::variants::join_path;
use crate::AuditError;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use url::Url;

/// Inputs of a run that do not come from the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSettings {
    /// Walker hop cap
    pub max_hops: usize,
    /// Joined onto the base URL when the home page has no internal links
    pub fallback_path: String,
    /// Joined onto the base URL for the 404 check
    pub missing_page_path: String,
    /// Appended to the test link for the canonical check
    pub canonical_probe_query: String,
    /// Internal links sampled from the home page
    pub max_sampled_links: usize,
}

impl AuditSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_hops: config.probe.max_hops,
            fallback_path: config.checks.fallback_path.clone(),
            missing_page_path: config.checks.missing_page_path.clone(),
            canonical_probe_query: config.checks.canonical_probe_query.clone(),
            max_sampled_links: config.checks.max_sampled_links,
        }
    }
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// A finished run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub base_url: String,
    pub user_agent: String,
    /// Page used by the link-based checks; `None` if the gate failed
    pub test_link: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<CheckResult>,
}

impl AuditReport {
    /// Verdict counts over all rows
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_results(&self.results)
    }

    /// True if the run stopped at the reachability gate
    pub fn is_unreachable(&self) -> bool {
        self.test_link.is_none()
    }
}

/// Runs the check catalog against one base URL
///
/// Holds no per-run state, so one instance can serve concurrent requests.
pub struct Auditor<P> {
    probe: P,
    settings: AuditSettings,
}

impl Auditor<HttpProbe> {
    /// Builds an auditor backed by a real HTTP client
    pub fn from_config(config: &Config) -> Result<Self, AuditError> {
        let probe = HttpProbe::from_config(&config.probe)?;
        Ok(Self::new(probe, AuditSettings::from_config(config)))
    }
}

impl<P: Probe> Auditor<P> {
    pub fn new(probe: P, settings: AuditSettings) -> Self {
        Self { probe, settings }
    }

    pub fn settings(&self) -> &AuditSettings {
        &self.settings
    }

    /// Runs the full catalog
    ///
    /// # Returns
    ///
    /// * `Ok(AuditReport)` - Always, once the base URL is valid; network
    ///   failures show up as failing rows
    /// * `Err(AuditError)` - The base URL is not an absolute HTTP(S) URL
    pub async fn run(&self, base_url: &str, user_agent: &str) -> Result<AuditReport, AuditError> {
        let base = parse_base_url(base_url)?;
        let base_str = base.to_string();

        tracing::info!("Checking redirects for {} as '{}'", base_str, user_agent);

        let gate = walk_redirects(&self.probe, &base_str, user_agent, self.settings.max_hops).await;

        if gate.final_status != Some(200) {
            tracing::warn!(
                "Base URL {} is unreachable (final status {:?}), skipping checks",
                base_str,
                gate.final_status
            );
            return Ok(AuditReport {
                base_url: base_str.clone(),
                user_agent: user_agent.to_string(),
                test_link: None,
                generated_at: Utc::now(),
                results: vec![CheckResult::unreachable(&base_str, &gate)],
            });
        }

        let test_link = self.pick_test_link(&base, &gate.html);
        tracing::debug!("Using test link {}", test_link);

        let catalog = build_catalog(
            &base,
            &test_link,
            &self.settings.missing_page_path,
            &self.settings.canonical_probe_query,
        );

        let results = join_all(
            catalog
                .iter()
                .map(|check| self.run_check(check, user_agent)),
        )
        .await;

        let report = AuditReport {
            base_url: base_str,
            user_agent: user_agent.to_string(),
            test_link: Some(test_link.to_string()),
            generated_at: Utc::now(),
            results,
        };

        let summary = report.summary();
        tracing::info!(
            "Finished {}: {} passed, {} warnings, {} failed",
            report.base_url,
            summary.passed,
            summary.warned,
            summary.failed
        );

        Ok(report)
    }

    /// First sampled internal link, or the configured fallback
    fn pick_test_link(&self, base: &Url, html: &str) -> Url {
        sample_internal_links(base, html, self.settings.max_sampled_links)
            .into_iter()
            .find_map(|link| Url::parse(&link).ok())
            .unwrap_or_else(|| join_path(base, &self.settings.fallback_path))
    }

    async fn run_check(&self, check: &CheckDefinition, user_agent: &str) -> CheckResult {
        let chain = walk_redirects(&self.probe, &check.url, user_agent, self.settings.max_hops).await;
        evaluate(check, &chain)
    }
}

/// Turns one walked chain into a result row
pub fn evaluate(check: &CheckDefinition, chain: &RedirectChainResult) -> CheckResult {
    let finding = check.kind.classify(chain, &check.target);
    let verdict = check.kind.verdict(&finding);

    tracing::debug!(
        "Check {} ({}): {} - {}",
        check.number(),
        check.url,
        verdict,
        finding.message()
    );

    CheckResult {
        number: check.number(),
        check_name: check.name(),
        url: check.url.clone(),
        expected: check.expected.clone(),
        status_code: chain.first_status,
        redirect_chain: chain.chain.clone(),
        redirect_steps: chain.steps.clone(),
        fact: render_fact(chain),
        recommendation: check.recommendation(&finding),
        status: verdict,
        status_text: finding.message(),
    }
}

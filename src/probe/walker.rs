//! Redirect-chain walker
//!
//! Follows `Location` headers one round trip at a time so that every hop and
//! its status code is observable.

use crate::probe::fetcher::Probe;
use serde::Serialize;
use url::Url;

/// One HTTP round trip within a redirect chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectStep {
    pub url: String,
    pub status: Option<u16>,
}

/// Everything observed while walking one redirect chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectChainResult {
    /// URLs visited, starting with the input URL
    pub chain: Vec<String>,

    /// One entry per round trip performed
    pub steps: Vec<RedirectStep>,

    /// Status of the very first round trip
    pub first_status: Option<u16>,

    /// Status of the last round trip performed
    pub final_status: Option<u16>,

    /// Number of 3xx hops that were followed
    pub redirect_count: usize,

    /// Last entry of `chain`
    pub final_url: String,

    /// Body of the terminal response, empty if none was obtained
    pub html: String,

    /// True if the walk stopped because the hop cap ran out mid-redirect
    pub hop_limit_reached: bool,

    /// Transport error of the last round trip, if any
    pub error: Option<String>,
}

impl RedirectChainResult {
    /// Statuses of all round trips, in order
    pub fn statuses(&self) -> impl Iterator<Item = Option<u16>> + '_ {
        self.steps.iter().map(|step| step.status)
    }
}

/// Walks the redirect chain starting at `start_url`
///
/// # Walk Rules
///
/// | Observation | Action |
/// |-------------|--------|
/// | 3xx with resolvable `Location` | count the hop, append target, continue |
/// | 3xx without (usable) `Location` | terminal |
/// | any other status | terminal, keep body as `html` |
/// | transport failure | terminal, status `None` |
/// | `max_hops` round trips done | stop, results stand as-is |
///
/// The walker never performs more than `max_hops` round trips (at least one).
pub async fn walk_redirects<P: Probe + ?Sized>(
    probe: &P,
    start_url: &str,
    user_agent: &str,
    max_hops: usize,
) -> RedirectChainResult {
    let mut chain = vec![start_url.to_string()];
    let mut steps = Vec::new();
    let mut first_status = None;
    let mut final_status = None;
    let mut redirect_count = 0;
    let mut html = String::new();
    let mut error = None;
    let mut hop_limit_reached = true;

    let mut current = start_url.to_string();

    for hop in 0..max_hops.max(1) {
        let result = probe.fetch(&current, user_agent).await;

        steps.push(RedirectStep {
            url: current.clone(),
            status: result.status,
        });
        if hop == 0 {
            first_status = result.status;
        }
        final_status = result.status;

        let next = if result.is_redirect_status() {
            result
                .location
                .as_deref()
                .and_then(|location| resolve_location(&current, location))
        } else {
            None
        };

        match next {
            Some(next) => {
                redirect_count += 1;
                chain.push(next.clone());
                current = next;
            }
            None => {
                html = result.body;
                error = result.error;
                hop_limit_reached = false;
                break;
            }
        }
    }

    if hop_limit_reached {
        tracing::debug!(
            "Hop cap of {} reached while walking {}",
            max_hops,
            start_url
        );
    }

    let final_url = chain.last().cloned().unwrap_or_default();

    tracing::debug!(
        "Walked {} -> {} ({} redirects, final status {:?})",
        start_url,
        final_url,
        redirect_count,
        final_status
    );

    RedirectChainResult {
        chain,
        steps,
        first_status,
        final_status,
        redirect_count,
        final_url,
        html,
        hop_limit_reached,
        error,
    }
}

/// Resolves a `Location` header value against the URL that returned it
///
/// Handles absolute, scheme-relative, root-relative and path-relative
/// targets. Returns `None` for empty values and non-HTTP(S) results.
pub fn resolve_location(current: &str, location: &str) -> Option<String> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }

    let base = Url::parse(current).ok()?;
    let resolved = base.join(location).ok()?;

    if resolved.scheme() == "http" || resolved.scheme() == "https" {
        Some(resolved.to_string())
    } else {
        None
    }
}

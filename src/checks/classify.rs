//! Outcome classification
//!
//! Every check maps a walked chain to a [`Finding`] with a pure decision table
//! over first status, final status, hop count and landing URL. The verdict is
//! then a function of the check kind and the finding.

use crate::checks::catalog::CheckKind;
use crate::checks::finding::Finding;
use crate::checks::verdict::Verdict;
use crate::probe::{extract_canonical, RedirectChainResult};
use crate::url::same_target;
use url::Url;

/// Permanent redirect statuses accepted for canonicalization
const PERMANENT_REDIRECTS: [u16; 2] = [301, 308];

impl CheckKind {
    /// Classifies a walked chain against the expected `target`
    pub fn classify(&self, result: &RedirectChainResult, target: &str) -> Finding {
        match self {
            Self::Https | Self::Www => classify_redirect(result, target, true),
            Self::MultipleSlashes
            | Self::LetterCase
            | Self::IndexFile(_)
            | Self::TrailingSlash
            | Self::LegacyExtension => classify_redirect(result, target, false),
            Self::Canonical => classify_canonical(result, target),
            Self::NotFoundPage => classify_not_found(result),
            Self::RedirectChain => classify_chain_length(result),
        }
    }

    /// Maps a finding to a verdict for this kind of check
    ///
    /// | Finding | Verdict |
    /// |---------|---------|
    /// | correct redirect, matching canonical | pass |
    /// | direct 404 | pass where 404 is acceptable, warn otherwise |
    /// | duplicate 200, redirect before a 404 | warn |
    /// | everything else | fail |
    pub fn verdict(&self, finding: &Finding) -> Verdict {
        match finding {
            Finding::Redirected | Finding::CanonicalMatches => Verdict::Pass,
            Finding::NotFound if self.accepts_not_found() => Verdict::Pass,
            Finding::NotFound | Finding::Duplicate | Finding::RedirectBefore404(_) => Verdict::Warn,
            _ => Verdict::Fail,
        }
    }
}

/// Decision table for the "expects a single 301/308 onto `target`" shape
///
/// When `required` is false, a direct 200 is a soft duplicate and a direct 404
/// is reported as such instead of "no redirect".
fn classify_redirect(result: &RedirectChainResult, target: &str, required: bool) -> Finding {
    let Some(first) = result.first_status else {
        return Finding::NoResponse;
    };

    if result.redirect_count == 0 {
        return match first {
            200 if required => Finding::NoRedirect,
            200 => Finding::Duplicate,
            404 if !required => Finding::NotFound,
            status => Finding::DirectStatus(status),
        };
    }

    if !PERMANENT_REDIRECTS.contains(&first) {
        return Finding::TemporaryRedirect(first);
    }

    if result.redirect_count > 1 {
        return Finding::RedirectChain(result.redirect_count);
    }

    landing(result, target)
}

/// Final status and landing URL after a single permanent hop
fn landing(result: &RedirectChainResult, target: &str) -> Finding {
    match result.final_status {
        None => Finding::NoResponse,
        Some(404) => Finding::RedirectTo404,
        Some(200) if same_target(&result.final_url, target) => Finding::Redirected,
        Some(200) => Finding::WrongTarget(result.final_url.clone()),
        other => Finding::FinalStatus(other),
    }
}

/// Excess-chain check: only the hop count matters
///
/// Status codes and the landing URL are covered by the HTTPS and WWW checks,
/// so any single hop passes here.
fn classify_chain_length(result: &RedirectChainResult) -> Finding {
    let Some(first) = result.first_status else {
        return Finding::NoResponse;
    };

    match result.redirect_count {
        0 if first == 200 => Finding::NoRedirect,
        0 => Finding::DirectStatus(first),
        1 => Finding::Redirected,
        hops => Finding::RedirectChain(hops),
    }
}

/// 404 check: a direct 404 is correct, redirects before it are tolerated
fn classify_not_found(result: &RedirectChainResult) -> Finding {
    let Some(first) = result.first_status else {
        return Finding::NoResponse;
    };

    if result.redirect_count == 0 {
        return match first {
            404 => Finding::NotFound,
            200 => Finding::SoftNotFound,
            status => Finding::DirectStatus(status),
        };
    }

    match result.final_status {
        Some(404) => Finding::RedirectBefore404(result.redirect_count),
        None => Finding::NoResponse,
        other => Finding::RedirectInsteadOf404(other),
    }
}

/// Canonical check: the fully-followed page must name `target` as canonical
fn classify_canonical(result: &RedirectChainResult, target: &str) -> Finding {
    match result.final_status {
        None => return Finding::NoResponse,
        Some(200) => {}
        other => return Finding::FinalStatus(other),
    }

    let page_url = Url::parse(&result.final_url).or_else(|_| Url::parse(target));
    let canonical = page_url
        .ok()
        .and_then(|page| extract_canonical(&result.html, &page));

    match canonical {
        Some(href) if same_target(&href, target) => Finding::CanonicalMatches,
        Some(href) => Finding::CanonicalMismatch(href),
        None => Finding::CanonicalMissing,
    }
}

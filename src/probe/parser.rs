//! HTML content extraction
//!
//! This module pulls the two page signals the checks need out of a fetched body:
//! - The `<link rel="canonical">` target
//! - A sample of internal links, used to pick a representative non-root page
//!
//! Parsing never fails: malformed markup or hrefs simply yield nothing.

use crate::url::{is_same_host, same_target};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the first canonical link of the document
///
/// Matches any `<link>` whose `rel` attribute contains the `canonical` token
/// (case-insensitive) and carries an `href`. Relative hrefs are resolved
/// against `page_url`.
///
/// # Example
///
/// ```
/// use redirect_audit::probe::extract_canonical;
/// use url::Url;
///
/// let html = r#"<html><head><link rel="canonical" href="/shoes/"></head></html>"#;
/// let page = Url::parse("https://example.com/shoes/?utm_source=test").unwrap();
/// assert_eq!(
///     extract_canonical(html, &page),
///     Some("https://example.com/shoes/".to_string())
/// );
/// ```
pub fn extract_canonical(html: &str, page_url: &Url) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("link[rel][href]").ok()?;

    document
        .select(&selector)
        .find(|element| {
            element.value().attr("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            })
        })
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| {
            let href = href.trim();
            if href.is_empty() {
                None
            } else {
                page_url.join(href).ok().map(|u| u.to_string())
            }
        })
}

/// Returns true if the document's canonical link points at `expected_url`
///
/// Both sides are compared after normalization, so scheme/host case and
/// repeated trailing slashes do not matter. Missing tags and unparseable
/// hrefs yield `false`.
pub fn find_canonical(html: &str, expected_url: &str) -> bool {
    let Ok(expected) = Url::parse(expected_url) else {
        return false;
    };

    extract_canonical(html, &expected)
        .map(|canonical| same_target(&canonical, expected_url))
        .unwrap_or(false)
}

/// Collects up to `limit` internal links from the document
///
/// # Selection Rules
///
/// **Include:**
/// - `<a href="...">` resolving to the same hostname as `base_url`
///
/// **Exclude:**
/// - Links to the root path
/// - `javascript:`, `mailto:`, `tel:`, `data:` and fragment-only hrefs
/// - `<a download>` links
/// - Duplicates (compared without fragment)
///
/// Links are returned in document order.
pub fn sample_internal_links(base_url: &Url, html: &str, limit: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        if links.len() >= limit {
            break;
        }

        if element.value().attr("download").is_some() {
            continue;
        }

        let Some(link) = element
            .value()
            .attr("href")
            .and_then(|href| resolve_link(href, base_url))
        else {
            continue;
        };

        if !is_same_host(&link, base_url) {
            continue;
        }

        if link.path().is_empty() || link.path() == "/" {
            continue;
        }

        let link = link.to_string();
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

/// Resolves a link href to an absolute URL without fragment
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only hrefs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    let mut absolute = base_url.join(href).ok()?;
    if absolute.scheme() != "http" && absolute.scheme() != "https" {
        return None;
    }

    absolute.set_fragment(None);
    Some(absolute)
}

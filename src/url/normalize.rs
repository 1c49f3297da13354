use crate::UrlError;
use url::Url;

/// Parses and validates the base URL a check run starts from
///
/// # Validation Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Parse the URL; reject if malformed
/// 3. Accept only `http` and `https`
/// 4. Require a host
///
/// # Examples
///
/// ```
/// use redirect_audit::url::parse_base_url;
///
/// let url = parse_base_url("  https://Example.com  ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
///
/// assert!(parse_base_url("ftp://example.com/").is_err());
/// ```
pub fn parse_base_url(input: &str) -> Result<Url, UrlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlError::Parse("URL is empty".to_string()));
    }

    let url = Url::parse(input).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingDomain),
    }
}

/// Normalizes a URL into the form used to decide whether a redirect landed
/// on the expected target
///
/// # Normalization Steps
///
/// 1. Lowercase the scheme and host (the `url` crate already does both)
/// 2. Keep an explicit non-default port
/// 3. Collapse a run of trailing slashes in the path to a single slash
/// 4. Drop the query string and the fragment
///
/// Nothing else is rewritten: `/a` and `/a/` stay different, and so do
/// `/Page` and `/page`. Input that does not parse is returned trimmed, which
/// keeps the function total and idempotent.
///
/// # Examples
///
/// ```
/// use redirect_audit::url::normalize_for_compare;
///
/// assert_eq!(
///     normalize_for_compare("HTTPS://Example.COM/catalog///?utm_source=x"),
///     "https://example.com/catalog/"
/// );
/// ```
pub fn normalize_for_compare(url_str: &str) -> String {
    let trimmed = url_str.trim();
    let Ok(url) = Url::parse(trimmed) else {
        return trimmed.to_string();
    };

    let Some(host) = url.host_str() else {
        return trimmed.to_string();
    };

    let port = url.port().map(|p| format!(":{}", p)).unwrap_or_default();

    format!(
        "{}://{}{}{}",
        url.scheme(),
        host.to_lowercase(),
        port,
        collapse_trailing_slashes(url.path())
    )
}

/// Returns true if both URLs are equal after normalization
pub fn same_target(left: &str, right: &str) -> bool {
    normalize_for_compare(left) == normalize_for_compare(right)
}

/// Collapses a run of trailing slashes into one
fn collapse_trailing_slashes(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.len() == path.len() {
        path.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (which shouldn't happen for valid HTTP(S) URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use redirect_audit::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if both URLs point at the same hostname
///
/// Scheme and port are ignored; `www.example.com` and `example.com` are
/// different hosts.
pub fn is_same_host(left: &Url, right: &Url) -> bool {
    match (extract_domain(left), extract_domain(right)) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

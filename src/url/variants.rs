//! Builders for the URL variants probed by the check catalog
//!
//! Every builder works on the parsed path rather than on the raw string, so
//! query strings on sampled links stay where they belong. Builders that can
//! produce a no-op variant return `None`; the corresponding check is skipped.

use url::{Host, Url};

/// Swaps `https://` for `http://`
///
/// Returns `None` when the URL is not served over HTTPS.
pub fn insecure_variant(url: &Url) -> Option<Url> {
    if url.scheme() != "https" {
        return None;
    }
    let mut variant = url.clone();
    variant.set_scheme("http").ok()?;
    Some(variant)
}

/// Adds a leading `www.` label to the host, or removes it if present
///
/// Returns `None` for IP hosts, which have no `www` form.
pub fn toggle_www(url: &Url) -> Option<Url> {
    let host = match url.host()? {
        Host::Domain(domain) => domain.to_lowercase(),
        Host::Ipv4(_) | Host::Ipv6(_) => return None,
    };
    let toggled = match host.strip_prefix("www.") {
        Some(bare) => bare.to_string(),
        None => format!("www.{}", host),
    };

    let mut variant = url.clone();
    variant.set_host(Some(&toggled)).ok()?;
    Some(variant)
}

/// The `http://` + toggled-`www` variant, stacking two canonicalization issues
pub fn insecure_www_variant(url: &Url) -> Option<Url> {
    let mut variant = toggle_www(url)?;
    if variant.scheme() == "https" {
        variant.set_scheme("http").ok()?;
    }
    Some(variant)
}

/// Replaces the trailing slash (or appends) with `///`
///
/// `/catalog/` becomes `/catalog///`.
pub fn with_extra_slashes(url: &Url) -> Url {
    let mut variant = url.clone();
    let path = format!("{}///", url.path().trim_end_matches('/'));
    variant.set_path(&path);
    variant
}

/// Uppercases the last non-empty path segment
///
/// Returns `None` for the root path or when uppercasing changes nothing
/// (e.g. the segment is numeric).
pub fn uppercase_last_segment(url: &Url) -> Option<Url> {
    let path = url.path();
    let trimmed = path.trim_end_matches('/');
    let tail = &path[trimmed.len()..];

    let (head, segment) = match trimmed.rfind('/') {
        Some(idx) => (&trimmed[..=idx], &trimmed[idx + 1..]),
        None => ("", trimmed),
    };

    if segment.is_empty() {
        return None;
    }

    let upper = segment.to_uppercase();
    if upper == segment {
        return None;
    }

    let mut variant = url.clone();
    variant.set_path(&format!("{}{}{}", head, upper, tail));
    Some(variant)
}

/// Removes the trailing slash from the path, or appends one if absent
///
/// Returns `None` for the root path, which has no alternative form.
pub fn toggle_trailing_slash(url: &Url) -> Option<Url> {
    let path = url.path();
    if path == "/" || path.is_empty() {
        return None;
    }

    let toggled = if path.ends_with('/') {
        path.trim_end_matches('/').to_string()
    } else {
        format!("{}/", path)
    };

    if toggled.is_empty() {
        return None;
    }

    let mut variant = url.clone();
    variant.set_path(&toggled);
    Some(variant)
}

/// Strips the trailing slash and appends a legacy `.html` extension
///
/// `/catalog/` becomes `/catalog.html`. Returns `None` for the root path.
pub fn with_legacy_extension(url: &Url) -> Option<Url> {
    let trimmed = url.path().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let mut variant = url.clone();
    variant.set_path(&format!("{}.html", trimmed));
    Some(variant)
}

/// Appends a query fragment such as `utm_source=test`, keeping any existing query
pub fn with_extra_query(url: &Url, query: &str) -> Url {
    let mut variant = url.clone();
    let combined = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{}&{}", existing, query),
        _ => query.to_string(),
    };
    variant.set_query(Some(&combined));
    variant
}

/// Joins a relative path onto the base URL
///
/// Falls back to the base URL itself if the join fails, which cannot happen
/// for the validated relative paths coming from configuration.
pub fn join_path(base: &Url, path: &str) -> Url {
    base.join(path).unwrap_or_else(|_| base.clone())
}

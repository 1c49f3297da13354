//! The fixed, ordered catalog of checks
//!
//! Each entry is built once per run from the base URL and the sampled test
//! link; both are passed in explicitly, so entries can be evaluated in any
//! order (or concurrently).

use crate::url::variants::{
    insecure_variant, insecure_www_variant, join_path, toggle_trailing_slash, toggle_www,
    uppercase_last_segment, with_extra_query, with_extra_slashes, with_legacy_extension,
};
use url::Url;

/// Index files probed under the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFile {
    Html,
    Php,
    Htm,
}

impl IndexFile {
    /// All index files, in catalog order
    pub const ALL: [IndexFile; 3] = [IndexFile::Html, IndexFile::Php, IndexFile::Htm];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Html => "index.html",
            Self::Php => "index.php",
            Self::Htm => "index.htm",
        }
    }

    fn number(&self) -> u32 {
        match self {
            Self::Html => 5,
            Self::Php => 6,
            Self::Htm => 7,
        }
    }
}

/// The kind of a check, which selects its classifier and recommendation text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// `http://` variant must redirect to the HTTPS base
    Https,
    /// Toggled `www.` variant must redirect to the base
    Www,
    /// `///` suffix on the test link should collapse
    MultipleSlashes,
    /// Uppercased last segment should redirect to the lowercase link
    LetterCase,
    /// `index.*` under the base should redirect to the base or 404
    IndexFile(IndexFile),
    /// Toggled trailing slash should redirect to the test link
    TrailingSlash,
    /// `.html` variant of the test link should redirect or 404
    LegacyExtension,
    /// Tagged test link must carry a canonical pointing at the clean link
    Canonical,
    /// A nonexistent page must answer 404 directly
    NotFoundPage,
    /// `http://` + toggled `www.` must resolve in a single hop
    RedirectChain,
}

impl CheckKind {
    /// Position in the catalog; 10 is unassigned
    pub fn number(&self) -> u32 {
        match self {
            Self::Https => 1,
            Self::Www => 2,
            Self::MultipleSlashes => 3,
            Self::LetterCase => 4,
            Self::IndexFile(file) => file.number(),
            Self::TrailingSlash => 8,
            Self::LegacyExtension => 9,
            Self::Canonical => 11,
            Self::NotFoundPage => 12,
            Self::RedirectChain => 13,
        }
    }

    /// Human-readable check name
    pub fn name(&self) -> String {
        match self {
            Self::Https => "HTTP → HTTPS".to_string(),
            Self::Www => "WWW / без WWW".to_string(),
            Self::MultipleSlashes => "Множественные слеши".to_string(),
            Self::LetterCase => "Регистр URL".to_string(),
            Self::IndexFile(file) => format!("Индексный файл ({})", file.file_name()),
            Self::TrailingSlash => "Слеш в конце URL".to_string(),
            Self::LegacyExtension => "Старые расширения (.html)".to_string(),
            Self::Canonical => "Canonical".to_string(),
            Self::NotFoundPage => "Обработка 404".to_string(),
            Self::RedirectChain => "Цепочка редиректов".to_string(),
        }
    }

    /// Whether a direct 404 on the probed URL is an acceptable outcome
    pub fn accepts_not_found(&self) -> bool {
        matches!(
            self,
            Self::IndexFile(_) | Self::TrailingSlash | Self::LegacyExtension | Self::NotFoundPage
        )
    }
}

/// One check, ready to be probed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDefinition {
    pub kind: CheckKind,

    /// URL the walker starts from
    pub url: String,

    /// URL the chain (or the canonical tag) is expected to land on
    pub target: String,

    /// Human-readable expected outcome
    pub expected: String,
}

impl CheckDefinition {
    fn new(kind: CheckKind, url: &Url, target: &Url, expected: String) -> Self {
        Self {
            kind,
            url: url.to_string(),
            target: target.to_string(),
            expected,
        }
    }

    pub fn number(&self) -> u32 {
        self.kind.number()
    }

    pub fn name(&self) -> String {
        self.kind.name()
    }
}

/// Builds the catalog for one run
///
/// # Arguments
///
/// * `base` - The validated base URL
/// * `test_link` - A representative non-root page on the same host
/// * `missing_page_path` - Path joined onto `base` for the 404 check
/// * `canonical_probe_query` - Query appended to `test_link` for the canonical check
///
/// Checks whose variant would be a no-op are left out: HTTPS when the base is
/// plain HTTP, letter case when the last segment has no letters, and so on.
pub fn build_catalog(
    base: &Url,
    test_link: &Url,
    missing_page_path: &str,
    canonical_probe_query: &str,
) -> Vec<CheckDefinition> {
    let mut catalog = Vec::new();
    let to_base = format!("301/308 → {}", base);
    let to_link = format!("301/308 → {}", test_link);

    if let Some(url) = insecure_variant(base) {
        catalog.push(CheckDefinition::new(CheckKind::Https, &url, base, to_base.clone()));
    }

    if let Some(url) = toggle_www(base) {
        catalog.push(CheckDefinition::new(CheckKind::Www, &url, base, to_base.clone()));
    }

    catalog.push(CheckDefinition::new(
        CheckKind::MultipleSlashes,
        &with_extra_slashes(test_link),
        test_link,
        to_link.clone(),
    ));

    if let Some(url) = uppercase_last_segment(test_link) {
        catalog.push(CheckDefinition::new(
            CheckKind::LetterCase,
            &url,
            test_link,
            to_link.clone(),
        ));
    }

    for file in IndexFile::ALL {
        catalog.push(CheckDefinition::new(
            CheckKind::IndexFile(file),
            &join_path(base, file.file_name()),
            base,
            format!("{} или 404", to_base),
        ));
    }

    if let Some(url) = toggle_trailing_slash(test_link) {
        catalog.push(CheckDefinition::new(
            CheckKind::TrailingSlash,
            &url,
            test_link,
            format!("{} (единый формат URL)", to_link),
        ));
    }

    if let Some(url) = with_legacy_extension(test_link) {
        catalog.push(CheckDefinition::new(
            CheckKind::LegacyExtension,
            &url,
            test_link,
            format!("{} или 404", to_link),
        ));
    }

    catalog.push(CheckDefinition::new(
        CheckKind::Canonical,
        &with_extra_query(test_link, canonical_probe_query),
        test_link,
        format!("rel=canonical → {}", test_link),
    ));

    catalog.push(CheckDefinition::new(
        CheckKind::NotFoundPage,
        &join_path(base, missing_page_path),
        base,
        "404 без редиректов".to_string(),
    ));

    if let Some(url) = insecure_www_variant(base) {
        catalog.push(CheckDefinition::new(
            CheckKind::RedirectChain,
            &url,
            base,
            format!("Не более 1 редиректа → {}", base),
        ));
    }

    catalog
}

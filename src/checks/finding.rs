//! The reason a check reached its verdict
//!
//! Classifiers produce a [`Finding`]; the verdict, the short status message and
//! the recommendation are all derived from it.

/// Why a check ended the way it did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Correct permanent redirect, single hop, landed on the target with 200
    Redirected,

    /// The probed URL returned 404 directly
    NotFound,

    /// The probed URL answered 200 directly, serving a duplicate
    Duplicate,

    /// No response at all (DNS, connect, TLS or timeout failure)
    NoResponse,

    /// A redirect was required but the URL answered 200 directly
    NoRedirect,

    /// The URL answered a non-redirect status other than 200/404 directly
    DirectStatus(u16),

    /// The first hop used a non-permanent redirect status
    TemporaryRedirect(u16),

    /// More than one redirect hop
    RedirectChain(usize),

    /// The redirect ended on a 404
    RedirectTo404,

    /// The redirect ended on something other than 200
    FinalStatus(Option<u16>),

    /// The redirect landed on a URL other than the expected one
    WrongTarget(String),

    /// The missing page was redirected before answering 404
    RedirectBefore404(usize),

    /// The missing page was redirected to a page that does not answer 404
    RedirectInsteadOf404(Option<u16>),

    /// The missing page answered 200
    SoftNotFound,

    /// The canonical tag points at the expected URL
    CanonicalMatches,

    /// The canonical tag points somewhere else
    CanonicalMismatch(String),

    /// The page has no canonical tag
    CanonicalMissing,
}

impl Finding {
    /// Short status message shown next to the verdict
    pub fn message(&self) -> String {
        match self {
            Self::Redirected => "Корректный редирект".to_string(),
            Self::NotFound => "Ответ 404".to_string(),
            Self::Duplicate => "Дубль: страница отдаёт 200".to_string(),
            Self::NoResponse => "Нет ответа".to_string(),
            Self::NoRedirect => "Нет редиректа".to_string(),
            Self::DirectStatus(status) => format!("Ответ {}", status),
            Self::TemporaryRedirect(status) => format!("Временный редирект ({})", status),
            Self::RedirectChain(hops) => format!("Цепочка редиректов ({})", hops),
            Self::RedirectTo404 => "Редирект на 404".to_string(),
            Self::FinalStatus(status) => format!("Конечный статус {}", status_label(*status)),
            Self::WrongTarget(_) => "Редирект на неправильный URL".to_string(),
            Self::RedirectBefore404(hops) => format!("Редирект перед 404 ({})", hops),
            Self::RedirectInsteadOf404(_) => "Редирект вместо 404".to_string(),
            Self::SoftNotFound => "Soft 404: ответ 200".to_string(),
            Self::CanonicalMatches => "Canonical корректный".to_string(),
            Self::CanonicalMismatch(_) => "Canonical указывает на другой URL".to_string(),
            Self::CanonicalMissing => "Canonical не найден".to_string(),
        }
    }
}

/// Renders an optional status code, `—` when absent
pub fn status_label(status: Option<u16>) -> String {
    status
        .map(|code| code.to_string())
        .unwrap_or_else(|| "—".to_string())
}

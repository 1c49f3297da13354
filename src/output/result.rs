//! Result rows returned to callers

use crate::checks::Verdict;
use crate::probe::{RedirectChainResult, RedirectStep};
use serde::Serialize;

/// Check name used for the reachability gate row
pub const GATE_CHECK_NAME: &str = "Основной URL";

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Catalog position; 0 for the reachability gate
    pub number: u32,
    pub check_name: String,
    /// URL the walk started from
    pub url: String,
    pub expected: String,
    /// Status of the first round trip
    pub status_code: Option<u16>,
    pub redirect_chain: Vec<String>,
    pub redirect_steps: Vec<RedirectStep>,
    /// Compact chain rendering, e.g. `301 → 200 → https://example.com/`
    pub fact: String,
    pub recommendation: String,
    /// Verdict
    pub status: Verdict,
    /// Short status message
    pub status_text: String,
}

impl CheckResult {
    /// The single row reported when the base URL does not answer 200
    pub fn unreachable(base_url: &str, result: &RedirectChainResult) -> Self {
        let status = match result.final_status {
            Some(code) => code.to_string(),
            None => result
                .error
                .clone()
                .unwrap_or_else(|| "нет ответа".to_string()),
        };

        Self {
            number: 0,
            check_name: GATE_CHECK_NAME.to_string(),
            url: base_url.to_string(),
            expected: "200 OK".to_string(),
            status_code: result.first_status,
            redirect_chain: result.chain.clone(),
            redirect_steps: result.steps.clone(),
            fact: render_fact(result),
            recommendation: "Сайт недоступен, остальные проверки не выполнялись. Убедитесь, что главная страница отвечает кодом 200 для выбранного User-Agent.".to_string(),
            status: Verdict::Fail,
            status_text: format!("Сайт недоступен ({})", status),
        }
    }
}

/// Renders the chain of statuses culminating in the final URL
///
/// Absent statuses (transport failures) render as `—`.
pub fn render_fact(result: &RedirectChainResult) -> String {
    let mut parts: Vec<String> = result
        .statuses()
        .map(|status| {
            status
                .map(|code| code.to_string())
                .unwrap_or_else(|| "—".to_string())
        })
        .collect();
    parts.push(result.final_url.clone());
    parts.join(" → ")
}

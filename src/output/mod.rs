//! Output module for check results and reports
//!
//! This module handles:
//! - The serialized result row of each check
//! - Rendering the redirect chain as a compact "fact" string
//! - Verdict counts and markdown reports for the command line

mod markdown;
mod result;
pub mod stats;

pub use markdown::{format_markdown_report, write_markdown_report};
pub use result::{render_fact, CheckResult, GATE_CHECK_NAME};
pub use stats::{print_summary, ReportSummary};

//! The check catalog and its evaluation
//!
//! This module contains:
//! - The fixed, ordered catalog of URL-variant checks
//! - Per-check classification into findings and verdicts
//! - Remediation texts
//! - The orchestrator running a full catalog against one site

mod advice;
mod auditor;
mod catalog;
mod classify;
mod finding;
mod verdict;

pub use auditor::{evaluate, AuditReport, AuditSettings, Auditor};
pub use catalog::{build_catalog, CheckDefinition, CheckKind, IndexFile};
pub use finding::{status_label, Finding};
pub use verdict::Verdict;

//! Verdict definitions for check results
//!
//! A verdict is the single symbol a check run produces per check.

use serde::Serialize;
use std::fmt;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The site behaves as expected
    Pass,

    /// Soft issue: tolerated by search engines but worth fixing
    Warn,

    /// Hard issue: the site should be fixed
    Fail,
}

impl Verdict {
    /// Returns the lowercase string used in JSON responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }

    /// Parses a verdict from its string representation
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pass" => Some(Self::Pass),
            "warn" => Some(Self::Warn),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }

    /// Returns the symbol shown in rendered reports
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Warn => "⚠️",
            Self::Fail => "❌",
        }
    }

    /// Returns true if the check passed
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns all verdicts, best first
    pub fn all() -> [Self; 3] {
        [Self::Pass, Self::Warn, Self::Fail]
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Verdict counts for a finished run

use crate::checks::Verdict;
use crate::output::result::CheckResult;
use serde::Serialize;

/// Pass/warn/fail counts over a list of results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl ReportSummary {
    /// Counts verdicts over the given rows
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            match result.status {
                Verdict::Pass => summary.passed += 1,
                Verdict::Warn => summary.warned += 1,
                Verdict::Fail => summary.failed += 1,
            }
        }

        summary
    }

    /// Worst verdict across the run, `None` for an empty run
    pub fn worst(&self) -> Option<Verdict> {
        if self.failed > 0 {
            Some(Verdict::Fail)
        } else if self.warned > 0 {
            Some(Verdict::Warn)
        } else if self.passed > 0 {
            Some(Verdict::Pass)
        } else {
            None
        }
    }

    /// Percentage of checks that passed
    pub fn pass_rate(&self) -> f64 {
        if self.total > 0 {
            (self.passed as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &ReportSummary) {
    println!("=== Итог ===");
    println!("  {} Пройдено: {}", Verdict::Pass.symbol(), summary.passed);
    println!("  {} Предупреждения: {}", Verdict::Warn.symbol(), summary.warned);
    println!("  {} Ошибки: {}", Verdict::Fail.symbol(), summary.failed);
    println!(
        "  Успешно: {:.1}% ({} / {})",
        summary.pass_rate(),
        summary.passed,
        summary.total
    );
}

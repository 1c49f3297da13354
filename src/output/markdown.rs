//! Markdown report generation
//!
//! Renders a finished run as a human-readable markdown document with one
//! table row per check.

use crate::checks::AuditReport;
use crate::output::stats::ReportSummary;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the markdown report to a file
pub fn write_markdown_report(report: &AuditReport, output_path: &Path) -> std::io::Result<()> {
    let markdown = format_markdown_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run as markdown
pub fn format_markdown_report(report: &AuditReport) -> String {
    let mut md = String::new();
    let summary = ReportSummary::from_results(&report.results);

    md.push_str("# Проверка редиректов\n\n");

    md.push_str(&format!("- **URL**: {}\n", report.base_url));
    md.push_str(&format!("- **User-Agent**: {}\n", report.user_agent));
    if let Some(test_link) = &report.test_link {
        md.push_str(&format!("- **Тестовая страница**: {}\n", test_link));
    }
    md.push_str(&format!(
        "- **Дата**: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("## Итог\n\n");
    md.push_str("| Результат | Количество |\n");
    md.push_str("|-----------|------------|\n");
    md.push_str(&format!("| ✅ Пройдено | {} |\n", summary.passed));
    md.push_str(&format!("| ⚠️ Предупреждения | {} |\n", summary.warned));
    md.push_str(&format!("| ❌ Ошибки | {} |\n\n", summary.failed));

    md.push_str("## Проверки\n\n");
    md.push_str("| № | Проверка | URL | Ожидание | Факт | Статус | Рекомендация |\n");
    md.push_str("|---|----------|-----|----------|------|--------|--------------|\n");

    for result in &report.results {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} {} | {} |\n",
            result.number,
            escape_cell(&result.check_name),
            escape_cell(&result.url),
            escape_cell(&result.expected),
            escape_cell(&result.fact),
            result.status.symbol(),
            escape_cell(&result.status_text),
            escape_cell(&result.recommendation),
        ));
    }

    md
}

/// Keeps cell content from breaking the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

use crate::domain::models::{BudgetStatus, SizeReport};
use crate::services::size_guard::format_kb;

const RULE_WIDTH: usize = 40;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Measurement block framed by separator lines.
pub fn summary_lines(report: &SizeReport) -> Vec<String> {
    let m = &report.measurement;
    vec![
        String::new(),
        "📊 CSS Size Report".to_string(),
        rule(),
        format!("   File:         {}", m.file),
        format!("   Uncompressed: {}", format_kb(m.size_bytes)),
        format!("   Gzipped:      {}", format_kb(m.gzip_bytes)),
        format!("   Target:       < {} KB", report.target_kb),
        format!("   Hard Limit:   {} KB", report.max_kb),
        rule(),
    ]
}

pub fn verdict_lines(report: &SizeReport) -> Vec<String> {
    match report.status {
        BudgetStatus::Fail => {
            let mut lines = vec![
                String::new(),
                format!("❌ BUILD FAILED: CSS exceeds {} KB limit!", report.max_kb),
                format!(
                    "   Current size: {}",
                    format_kb(report.measurement.size_bytes)
                ),
                format!(
                    "   Over budget by: {}",
                    format_kb(report.over_budget_bytes.unwrap_or(0))
                ),
                String::new(),
                "   Actions required:".to_string(),
            ];
            lines.extend(report.recommendations.iter().map(|r| format!("   - {}", r)));
            lines
        }
        BudgetStatus::Warn => vec![
            String::new(),
            format!("⚠️  WARNING: CSS exceeds {} KB target", report.target_kb),
            "   Consider optimizing before next release".to_string(),
        ],
        BudgetStatus::Ok => vec![String::new(), "✅ CSS size is within budget!".to_string()],
    }
}

/// Summary goes to stdout; failures and warnings go to stderr.
pub fn print_report(report: &SizeReport) {
    for line in summary_lines(report) {
        println!("{}", line);
    }
    match report.status {
        BudgetStatus::Fail | BudgetStatus::Warn => {
            for line in verdict_lines(report) {
                eprintln!("{}", line);
            }
        }
        BudgetStatus::Ok => {
            for line in verdict_lines(report) {
                println!("{}", line);
            }
        }
    }
    if report.passed() {
        println!();
    }
}

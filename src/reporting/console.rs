// src/reporting/console.rs
//! Formatted console output for a rank report.

use super::{PageScore, RankReport};
use colored::Colorize;

/// Prints both estimates to stdout, pages sorted by name, four decimals.
pub fn print_report(report: &RankReport) {
    print_section(
        &format!("PageRank results from sampling (n = {})", report.samples),
        &report.sampling,
    );
    println!();
    print_section("PageRank results from iteration", &report.iteration);
    println!();
    println!(
        "{}",
        format!("estimators agree within {:.4}", report.max_gap()).dimmed()
    );
}

fn print_section(title: &str, scores: &[PageScore]) {
    println!("{}", title.cyan().bold());
    let top = top_page(scores);
    for s in scores {
        let line = format!("  {}: {:.4}", s.page, s.score);
        if Some(s.page.as_str()) == top {
            println!("{} {}", line, "<- top".green());
        } else {
            println!("{line}");
        }
    }
}

fn top_page(scores: &[PageScore]) -> Option<&str> {
    scores
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|s| s.page.as_str())
}

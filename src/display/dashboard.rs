//! Dashboard display formatting
//!
//! Renders the aggregated dashboard for the terminal: total-spend metric,
//! category breakdown with percentage bars, and the date series. The empty
//! ledger state gets its own message, never an empty chart.

use crate::models::Money;
use crate::reports::{Dashboard, DashboardReport};

const BAR_WIDTH: usize = 30;

/// Format the full dashboard
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    match dashboard {
        Dashboard::Empty => "No expenses yet. Add some with 'tally add'.\n".to_string(),
        Dashboard::Ready(report) => format_report(report),
    }
}

fn format_report(report: &DashboardReport) -> String {
    let mut output = String::new();

    output.push_str("Expense Dashboard\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!("Total Spent: {}\n", report.total_spend));
    output.push_str(&format!("Records:     {}\n\n", report.record_count));

    // Category breakdown (pie-chart stand-in)
    output.push_str("Spending by Category\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    for category in &report.by_category {
        output.push_str(&format!(
            "{:<14} {:>10} {:>6.1}% {}\n",
            category.category.to_string(),
            category.total.to_string(),
            category.percentage,
            bar(category.percentage / 100.0)
        ));
    }
    output.push('\n');

    // Date series (line-chart stand-in), ascending so the axis is monotonic
    output.push_str("Spending Over Time\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    let max_day = report
        .by_date
        .iter()
        .map(|d| d.total)
        .max()
        .unwrap_or_else(Money::zero);
    for day in &report.by_date {
        let fraction = if max_day.is_zero() {
            0.0
        } else {
            day.total.cents() as f64 / max_day.cents() as f64
        };
        output.push_str(&format!(
            "{}  {:>10} {}\n",
            day.date.format("%Y-%m-%d"),
            day.total.to_string(),
            bar(fraction)
        ));
    }

    output
}

/// A fixed-width proportional bar
fn bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}

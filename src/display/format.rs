//! Formatting helpers for terminal output

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

/// Format a money amount with the configured currency symbol
pub fn format_money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format a date with the configured strftime pattern
///
/// An invalid pattern falls back to ISO 8601 instead of failing the report.
pub fn format_date(date: NaiveDate, settings: &Settings) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&settings.date_format)).is_err() {
        return date.to_string();
    }
    out
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a month-over-month change with a trend arrow
///
/// Positive changes get `↑`, negative ones `↓`; zero is shown flat.
pub fn format_change(pct: f64) -> String {
    if pct > 0.0 {
        format!("↑ {:.1}%", pct)
    } else if pct < 0.0 {
        format!("↓ {:.1}%", pct.abs())
    } else {
        "  0.0%".to_string()
    }
}

/// Create a progress bar for a percentage
///
/// The fill is clamped to `0..=100`; the underlying value is never altered.
pub fn format_bar(pct: f64, width: usize) -> String {
    let clamped = if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section header with an underline
pub fn format_header(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title, double_separator(width))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

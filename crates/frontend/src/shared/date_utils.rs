/// Utilities for date formatting
///
/// Provides consistent date formatting across the application
use chrono::NaiveDate;

/// Format a calendar date as DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a parsed date, falling back to the raw service value
pub fn format_date_or_raw(date: Option<NaiveDate>, raw: &str) -> String {
    date.map(format_date).unwrap_or_else(|| raw.to_string())
}

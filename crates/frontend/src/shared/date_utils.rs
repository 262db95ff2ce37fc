/// Utilities for date formatting
use chrono::NaiveDate;

/// Value of `<input type="date">` ("YYYY-MM-DD"); empty or malformed gives None
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format compact pipeline date "YYYYMMDD" to "YYYY-MM-DD"
/// Anything else is returned unchanged
pub fn format_compact_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y%m%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format a money amount with thousands separators, no fraction
/// Example: 1234567.8 -> "1,234,568"
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if rounded < 0.0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

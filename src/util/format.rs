//! Date formatting for the Vietnamese-locale UI.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Render an ISO-8601 date as `DD/MM/YYYY` for display.
///
/// Accepts a plain date or a datetime; anything unparseable is echoed back
/// unchanged so bad backend data degrades to ugly text instead of a panic.
pub fn display_date(iso: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return datetime.format("%d/%m/%Y").to_string();
    }
    iso.to_owned()
}

/// Today's date as `YYYY-MM-DD`, for the date-input `min` attribute.
/// Uses the browser clock on the WASM target.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

//! Даты для ячеек `Date` / `DateTime`.
//!
//! Понимает RFC 3339, наивный `YYYY-MM-DDTHH:MM:SS[.fff]` и просто дату.
//! Нераспознанная строка возвращается как есть.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%d.%m.%Y";
const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Время со смещением показывается в исходном поясе, без перевода в UTC
fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `"2024-03-15T14:02:26.123Z"` -> `"15.03.2024 14:02:26"`
pub fn format_datetime(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_date(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

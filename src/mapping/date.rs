//! ISO 8601 date normalization for the target schema

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Extended or basic date, optional time down to the hour, optional UTC marker or offset
static ISO_DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(\d{4})-(\d{2})-(\d{2})|(\d{4})(\d{2})(\d{2}))(?:[T ](\d{2})(?::?(\d{2})(?::?(\d{2})(?:[.,]\d+)?)?)?(?:Z|[+-]\d{2}(?::?\d{2})?)?)?$",
    )
    .unwrap()
});

/// Reformat an ISO date or datetime string as `YYYY-MM-DD`.
///
/// The calendar date is kept as written; offsets do not shift it.
/// Anything unparseable, including the empty string, gives `None`.
pub fn format_date(input: &str) -> Option<String> {
    let caps = ISO_DATETIME_REGEX.captures(input)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    // Groups 1-3 hold the extended date, 4-6 the basic one
    let base = if caps.get(1).is_some() { 1 } else { 4 };
    let year = caps.get(base)?.as_str().parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, number(base + 1)?, number(base + 2)?)?;

    if let Some(hour) = number(7) {
        NaiveTime::from_hms_opt(hour, number(8).unwrap_or(0), number(9).unwrap_or(0))?;
    }

    Some(date.format("%Y-%m-%d").to_string())
}

/// `format_date` over an optional JSON value; non-strings give `None`
pub fn format_date_value(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => format_date(s),
        _ => None,
    }
}

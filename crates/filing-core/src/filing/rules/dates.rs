//! Incorporation-date rules.
//!
//! Patterns capture month names loosely; chrono decides whether the
//! captured month and day form a real calendar date.

use chrono::{Month, NaiveDate};
use regex::Captures;

use crate::filing::strategy::ExtractContext;

/// Whether `month [day,] year` names a real calendar date.
pub fn is_calendar_date(month: &str, day: Option<&str>, year: &str) -> bool {
    let Ok(month) = month.parse::<Month>() else {
        return false;
    };
    let Ok(year) = year.parse::<i32>() else {
        return false;
    };
    let day = match day {
        Some(d) => match d.trim_end_matches(',').parse::<u32>() {
            Ok(d) => d,
            Err(_) => return false,
        },
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day).is_some()
}

/// Whole `incorporated in <State> on <date>` statement, provided any month
/// and day it names are valid.
pub fn incorporation_statement(caps: &Captures<'_>, _ctx: &ExtractContext<'_>) -> Option<String> {
    if let (Some(month), Some(year)) = (caps.get(1), caps.get(3)) {
        let day = caps.get(2).map(|d| d.as_str());
        if !is_calendar_date(month.as_str(), day, year.as_str()) {
            return None;
        }
    }
    Some(caps.get(0)?.as_str().trim().to_string())
}

/// Founding date in one of `Month D, YYYY`, `Month YYYY` or `YYYY`.
pub fn founding_date(caps: &Captures<'_>, _ctx: &ExtractContext<'_>) -> Option<String> {
    let date = caps.get(1)?.as_str().trim();
    let tokens: Vec<&str> = date.split_whitespace().collect();
    let valid = match tokens.as_slice() {
        [year] => year.parse::<i32>().is_ok(),
        [month, year] => is_calendar_date(month, None, year),
        [month, day, year] => is_calendar_date(month, Some(day), year),
        _ => false,
    };
    valid.then(|| date.to_string())
}

//! Date resolution for heterogeneous spreadsheet input.
//!
//! Spreadsheet exports carry dates as day-count serials, locale-formatted
//! strings, or ISO strings, sometimes mixed within one file. `resolve` turns
//! any of them into a `NaiveDate` and signals unparseable input with `None`
//! rather than an error, leaving the decision to the caller.

use chrono::{DateTime, NaiveDate};

use crate::workbook::CellValue;

/// Day-count serial for the Unix epoch in the 1900 date system.
const EPOCH_SERIAL: f64 = 25569.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Resolves a raw cell into a calendar date.
///
/// Numeric input is a spreadsheet serial. String input is matched against
/// `D{1,2}[./-]M{1,2}[./-]Y{2,4}` first; two-digit years mean 2000+. The
/// delimited form is disambiguated in this exact order:
/// 1. first group > 12 — unambiguously day-first;
/// 2. second group > 12 — month-first, groups swapped;
/// 3. both ≤ 12 — ambiguous, default to day-first (id-ID convention).
///
/// Anything else falls through to the ISO parsers. Invalid calendar dates
/// (month 13, Feb 30) resolve to `None` on every path.
pub fn resolve(input: &CellValue) -> Option<NaiveDate> {
    match input {
        CellValue::Empty => None,
        CellValue::Date(date) => Some(*date),
        CellValue::Number(serial) => from_serial(*serial),
        CellValue::Text(raw) => from_text(raw),
    }
}

fn from_serial(serial: f64) -> Option<NaiveDate> {
    let millis = ((serial - EPOCH_SERIAL) * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.date_naive())
}

fn from_text(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some((first, second, year)) = split_delimited(trimmed) {
        let year = if year < 100 { year + 2000 } else { year };
        let (day, month) = if first > 12 {
            (first, second)
        } else if second > 12 {
            // Month-first input such as 08/15/2024; swap.
            (second, first)
        } else {
            (first, second)
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    // ISO 8601 and its slash-delimited sibling.
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"))
        .ok()
}

/// Splits `D{1,2}[./-]M{1,2}[./-]Y{2,4}` into its numeric groups, rejecting
/// anything that deviates from that shape.
fn split_delimited(text: &str) -> Option<(u32, u32, i32)> {
    let mut groups = text.split(['.', '/', '-']);
    let first = groups.next()?;
    let second = groups.next()?;
    let third = groups.next()?;
    if groups.next().is_some() {
        return None;
    }
    if first.len() > 2 || second.len() > 2 || !(2..=4).contains(&third.len()) {
        return None;
    }
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(first) || !all_digits(second) || !all_digits(third) {
        return None;
    }
    Some((
        first.parse().ok()?,
        second.parse().ok()?,
        third.parse().ok()?,
    ))
}

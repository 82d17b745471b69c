use chrono::{Duration, NaiveDate};

use crate::consts::DATE_FORMAT;

/// Parse the leading `YYYY-MM-DD` of `text`, but only when it carries one of
/// the expected year markers. Anything else has no usable date.
pub(crate) fn parse_marked_date<S: AsRef<str>>(text: &str, markers: &[S]) -> Option<NaiveDate> {
    if !markers.iter().any(|m| text.contains(m.as_ref())) {
        return None;
    }
    NaiveDate::parse_from_str(first_chars(text, 10), DATE_FORMAT).ok()
}

/// Convert an Excel serial day number (1900 date system) to a calendar date.
pub(crate) fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    // Day 0 is 1899-12-30; this absorbs Excel's phantom 1900-02-29.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Whether an Excel number format code renders a date.
pub(crate) fn is_date_format_code(code: &str) -> bool {
    let mut in_quotes = false;
    let mut in_brackets = false;
    for c in code.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            '[' if !in_quotes => in_brackets = true,
            ']' if !in_quotes => in_brackets = false,
            'y' | 'Y' | 'd' | 'D' if !in_quotes && !in_brackets => return true,
            _ => {}
        }
    }
    false
}

/// First `n` characters of `s` (not bytes), or all of it when shorter.
pub(crate) fn first_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

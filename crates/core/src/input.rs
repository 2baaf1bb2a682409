//! Pure parse-and-validate helpers for raw user input.
//!
//! Each helper either returns a validated value or a `DomainError`; any
//! re-prompting loop lives in the presentation layer that calls them.

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};
use crate::name::canonicalize;

/// `yyyy-MM-dd`, the only accepted date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` date.
///
/// The input must be exactly ten characters (four-digit year, zero-padded
/// month and day) and name a real calendar date. Signed years are rejected.
pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    let bytes = raw.as_bytes();
    let layout_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !layout_ok {
        return Err(DomainError::validation(format!(
            "wrong date format '{raw}', expected yyyy-MM-dd"
        )));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        DomainError::validation(format!("wrong date format '{raw}', expected yyyy-MM-dd: {e}"))
    })
}

/// Format a date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Collapse whitespace runs, trim, and canonicalize free text.
pub fn normalize_text(raw: &str) -> DomainResult<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Err(DomainError::validation("input cannot be blank or empty"));
    }
    Ok(canonicalize(&collapsed))
}

/// Parse a strictly positive, finite amount.
pub fn parse_positive_amount(raw: &str) -> DomainResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("'{}' is not a number", raw.trim())))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::validation(
            "amount cannot be negative, zero or non-finite",
        ));
    }
    Ok(value)
}

/// Parse an integer (menu selections, servings, unit codes).
pub fn parse_integer(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("'{}' is not an integer", raw.trim())))
}

/// Parse a single-character answer, ignoring whitespace.
pub fn parse_choice(raw: &str) -> DomainResult<char> {
    let mut chars = raw.chars().filter(|c| !c.is_whitespace());
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DomainError::validation("please enter a single character")),
    }
}

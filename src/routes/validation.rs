use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

/// Parse an integer from the leading digits of a string, ignoring any
/// trailing garbage ("10x" parses to 10, "abc" to nothing). Duration and
/// limit values have always been parsed this leniently and clients rely
/// on it.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Parse a caller-supplied date string
///
/// Accepts RFC 3339, a bare `YYYY-MM-DD` (interpreted as UTC midnight), and
/// `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date_input(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}

/// A body field that may arrive as a JSON number or a string
///
/// HTML form clients submit durations as strings while JSON clients send
/// numbers; both spellings must validate identically.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    /// True for the values the API treats as "not supplied": the number
    /// zero and the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            NumberOrString::Int(n) => *n == 0,
            NumberOrString::Float(f) => *f == 0.0,
            NumberOrString::Text(s) => s.is_empty(),
        }
    }

    /// Leading-integer interpretation of the value; fractional numbers
    /// truncate toward zero
    pub fn as_leading_int(&self) -> Option<i64> {
        match self {
            NumberOrString::Int(n) => Some(*n),
            NumberOrString::Float(f) => Some(*f as i64),
            NumberOrString::Text(s) => parse_leading_int(s),
        }
    }
}

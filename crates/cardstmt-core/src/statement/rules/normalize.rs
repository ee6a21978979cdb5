//! Value normalization for matched amounts and dates.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

/// Date templates, tried in order. The first one that parses wins.
///
/// `%Y` on its own accepts one to four digits, so the year token's width is
/// checked separately: four digits are taken as is, two digits are pivoted,
/// anything else does not match.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%d-%B-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %b-%Y",
    "%d-%b %Y",
    "%Y-%m-%d",
];

/// Keep only digits, commas and decimal points.
///
/// Separators left dangling at either end (the period of "Rs.", a trailing
/// comma) are dropped. Returns `None` when nothing numeric remains.
pub fn clean_amount(raw: &str) -> Option<String> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let cleaned = kept.trim_matches(|c| c == ',' || c == '.');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Format a statement date as `YYYY-MM-DD`.
///
/// Unrecognized input is returned trimmed but otherwise unchanged; only an
/// empty input yields `None`.
pub fn format_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        let two_digit_year = match year_width(trimmed, format) {
            4 => false,
            2 => true,
            _ => continue,
        };

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            let date = if two_digit_year {
                pivot_century(date)
            } else {
                Some(date)
            };
            if let Some(date) = date {
                return Some(date.format("%Y-%m-%d").to_string());
            }
        }
    }

    warn!("Could not parse date: {}", trimmed);
    Some(trimmed.to_string())
}

/// Width of the digit run holding the year: leading for ISO templates,
/// trailing for the rest.
fn year_width(input: &str, format: &str) -> usize {
    if format.starts_with("%Y") {
        input.chars().take_while(|c| c.is_ascii_digit()).count()
    } else {
        input.chars().rev().take_while(|c| c.is_ascii_digit()).count()
    }
}

/// Map a two-digit year into 1950..=2049.
fn pivot_century(date: NaiveDate) -> Option<NaiveDate> {
    let year = date.year();
    let full_year = if year < 50 { 2000 + year } else { 1900 + year };
    NaiveDate::from_ymd_opt(full_year, date.month(), date.day())
}

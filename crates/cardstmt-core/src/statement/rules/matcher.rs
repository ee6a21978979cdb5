//! Ordered pattern alternatives with first-match semantics.
//!
//! Every bank rule is a list of regular expressions tried strictly in
//! declaration order: earlier entries describe the more specific layouts,
//! later entries are fallbacks. All patterns are compiled case-insensitive
//! with `.` matching line breaks, since statement text wraps unpredictably.

use regex::{Captures, Regex, RegexBuilder};
use tracing::trace;

/// An ordered list of patterns, each with one capture group of interest
/// (or two for paired values).
#[derive(Debug, Clone)]
pub struct Alternatives {
    patterns: Vec<Regex>,
}

impl Alternatives {
    /// Compile the given patterns, keeping their order.
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .dot_matches_new_line(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Captures of the first alternative that matches anywhere in `text`.
    pub fn first_captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.patterns.iter().enumerate().find_map(|(i, re)| {
            let caps = re.captures(text)?;
            trace!("alternative {} matched: {:?}", i, &caps[0]);
            Some(caps)
        })
    }

    /// Group 1 of the first matching alternative.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.first_captures(text)?
            .get(1)
            .map(|m| m.as_str())
    }

    /// Group 1 of the first matching alternative, passed through `transform`.
    pub fn resolve<F>(&self, text: &str, transform: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.first_match(text).and_then(transform)
    }

    /// Group 1 of the *last* occurrence of the first alternative that
    /// matches at all.
    pub fn last_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.patterns.iter().find_map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .last()
                .map(|m| m.as_str())
        })
    }
}

/// Return the raw group text unchanged.
pub fn verbatim(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_alternative_wins() {
        let alts = Alternatives::new(&[r"Total\s+(\d+)", r"(\d+)"]).unwrap();
        assert_eq!(alts.first_match("7 items, total 42"), Some("42"));
    }

    #[test]
    fn test_falls_back_in_order() {
        let alts = Alternatives::new(&[r"Total\s+(\d+)", r"Sum\s+(\d+)", r"(\d+)"]).unwrap();
        assert_eq!(alts.first_match("sum 9, then 10"), Some("9"));
        assert_eq!(alts.first_match("nothing labelled 5"), Some("5"));
        assert_eq!(alts.first_match("no digits"), None);
    }

    #[test]
    fn test_matches_across_lines_case_insensitive() {
        let alts = Alternatives::new(&[r"available.+?(\d+)"]).unwrap();
        assert_eq!(alts.first_match("AVAILABLE\n\nCREDIT\n 120"), Some("120"));
    }

    #[test]
    fn test_paired_groups() {
        let alts = Alternatives::new(&[r"Limit\s+(\d+)\s+(\d+)"]).unwrap();
        let caps = alts.first_captures("limit 100 40").unwrap();
        assert_eq!(&caps[1], "100");
        assert_eq!(&caps[2], "40");
    }

    #[test]
    fn test_last_match() {
        let alts = Alternatives::new(&[r"card\s+(\d+)"]).unwrap();
        assert_eq!(alts.last_match("card 11 ... card 22 ... card 33"), Some("33"));
        assert_eq!(alts.last_match("no cards"), None);
    }

    #[test]
    fn test_resolve_applies_transform() {
        let alts = Alternatives::new(&[r"due\s+(\S+)"]).unwrap();
        let upper = alts.resolve("due soon", |v| Some(v.to_uppercase()));
        assert_eq!(upper, Some("SOON".to_string()));
        assert_eq!(alts.resolve("due soon", verbatim), Some("soon".to_string()));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(Alternatives::new(&[r"(unclosed"]).is_err());
    }
}

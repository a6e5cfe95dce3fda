use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

use crate::config::Terminator;

static QUALIFICATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:OPEN COMPETITIVE|MINIMUM QUALIFICATIONS)(.*)")
        .expect("qualifications pattern")
});

/// Finds the span between the "PROMOTIONAL" header and the earliest terminator.
#[derive(Debug, Clone)]
pub struct SectionIsolator {
    pattern: Option<Regex>,
}

impl SectionIsolator {
    pub fn new(terminators: &[Terminator]) -> Result<Self> {
        if terminators.is_empty() {
            return Ok(Self { pattern: None });
        }

        let alternatives = terminators
            .iter()
            .map(Terminator::to_regex)
            .collect::<Vec<_>>()
            .join("|");

        // Lazy body: the section stops at whichever terminator occurs first
        let pattern = Regex::new(&format!(r"(?is)PROMOTIONAL(.*?)(?:{})", alternatives))
            .context("Invalid terminator pattern")?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// The promotional section, or `None` when the header or every terminator is missing
    pub fn isolate<'a>(&self, text: &'a str) -> Option<&'a str> {
        let pattern = self.pattern.as_ref()?;
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Trailing free text after the first qualifications heading, trimmed
pub fn qualifications(text: &str) -> String {
    QUALIFICATIONS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;

    fn isolator() -> SectionIsolator {
        SectionIsolator::new(&ExtractorConfig::document().terminators).unwrap()
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(isolator().isolate("OPEN COMPETITIVE: none. REVISION DATE 2020"), None);
    }

    #[test]
    fn test_missing_terminator() {
        assert_eq!(isolator().isolate("PROMOTIONAL: as a Clerk for six months"), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "PROMOTIONAL: as a Clerk.\nREVISION DATE 1/1/99\nSUFFOLK COUNTY CIVIL SERVICE";
        assert_eq!(isolator().isolate(text), Some(": as a Clerk.\n"));
    }

    #[test]
    fn test_case_insensitive_and_multiline() {
        let text = "Promotional:\nas a Typist\n\ncompetitive exams";
        assert_eq!(isolator().isolate(text), Some(":\nas a Typist\n\n"));
    }

    #[test]
    fn test_revision_code_pattern() {
        let text = "PROMOTIONAL: as a Clerk. R2 (07/15)";
        assert_eq!(isolator().isolate(text), Some(": as a Clerk. "));

        // Also fires inside ordinary words followed by a digit
        let text = "PROMOTIONAL: one year as a Clerk for 2 years.";
        assert_eq!(isolator().isolate(text), Some(": one year as a Clerk fo"));
    }

    #[test]
    fn test_page_terminators_skip_full_performance() {
        let page = SectionIsolator::new(&ExtractorConfig::page().terminators).unwrap();
        let text = "PROMOTIONAL: as a Clerk. Full Performance level. NECESSARY SPECIAL";

        assert_eq!(page.isolate(text), Some(": as a Clerk. Full Performance level. "));
        assert_eq!(isolator().isolate(text), Some(": as a Clerk. "));
    }

    #[test]
    fn test_no_terminators_means_no_section() {
        let isolator = SectionIsolator::new(&[]).unwrap();
        assert_eq!(isolator.isolate("PROMOTIONAL: as a Clerk. REVISION DATE"), None);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(SectionIsolator::new(&[Terminator::pattern("(")]).is_err());
    }

    #[test]
    fn test_qualifications() {
        let text = "DUTIES\nfiles things\nMINIMUM QUALIFICATIONS:\n  High school diploma.  ";
        assert_eq!(qualifications(text), ":\n  High school diploma.");
        assert_eq!(qualifications("no such heading"), "");
    }
}

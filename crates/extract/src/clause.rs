use regex::Regex;
use std::sync::LazyLock;

static INTRODUCER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:as\s+an?|as\s+a\(n\))\s*:?\s*").expect("introducer pattern")
});

static PERIOD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s|\.$").expect("period boundary pattern"));

/// Splits a promotional section into candidate clauses, one per introducer phrase.
#[derive(Debug, Clone)]
pub struct ClauseFinder {
    self_references: Vec<String>,
}

impl ClauseFinder {
    pub fn new(self_references: &[String]) -> Self {
        Self {
            self_references: self_references.iter().map(|s| s.to_uppercase()).collect(),
        }
    }

    pub fn candidates<'a>(&self, section: &'a str) -> Vec<&'a str> {
        INTRODUCER
            .find_iter(section)
            .filter_map(|m| {
                let after = section[m.end()..].trim();
                if self.is_self_reference(after) {
                    return None;
                }
                Some(first_sentence(after))
            })
            .collect()
    }

    fn is_self_reference(&self, text: &str) -> bool {
        let upper = text.to_uppercase();
        self.self_references
            .iter()
            .any(|prefix| upper.starts_with(prefix.as_str()))
    }
}

/// Everything before the first ". " or a trailing period
fn first_sentence(text: &str) -> &str {
    match PERIOD_BOUNDARY.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

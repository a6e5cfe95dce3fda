use serde::{Deserialize, Serialize};

/// A marker that ends the promotional section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Terminator {
    /// Matched literally, case-insensitive
    Literal(String),
    /// Raw regex fragment, compiled case-insensitive
    Pattern(String),
}

impl Terminator {
    pub fn literal(s: &str) -> Self {
        Terminator::Literal(s.to_string())
    }

    pub fn pattern(s: &str) -> Self {
        Terminator::Pattern(s.to_string())
    }

    /// Regex fragment for this terminator
    pub fn to_regex(&self) -> String {
        match self {
            Terminator::Literal(s) => regex::escape(s),
            Terminator::Pattern(p) => p.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    pub denylist: Vec<String>,
    pub terminators: Vec<Terminator>,
    /// Clauses starting with one of these are not parent titles
    pub self_references: Vec<String>,
    /// Code used when a document name carries none. `None` drops the document.
    pub code_fallback: Option<String>,
    /// Keep the qualifications span and the full text on each result
    pub capture_qualifications: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::document()
    }
}

impl ExtractorConfig {
    /// Settings for text stripped from rendered spec pages
    pub fn page() -> Self {
        Self {
            denylist: to_strings(&["SUFFOLK", "THREE", "TWO"]),
            terminators: vec![
                Terminator::literal("NECESSARY SPECIAL"),
                Terminator::literal("SUFFOLK COUNTY"),
                Terminator::literal("REVISION DATE"),
                Terminator::pattern(r"R\s?\d"),
                Terminator::literal("Competitive"),
            ],
            self_references: to_strings(&["SUFFOLK COUNTY", "NON-COUNTY"]),
            code_fallback: None,
            capture_qualifications: false,
        }
    }

    /// Settings for text loaded from specification documents
    pub fn document() -> Self {
        let mut terminators = Self::page().terminators;
        terminators.push(Terminator::literal("Full Performance"));

        Self {
            denylist: to_strings(&["SUFFOLK", "THREE", "TWO", "ONE", "YEAR"]),
            terminators,
            self_references: to_strings(&["SUFFOLK COUNTY", "NON-COUNTY"]),
            code_fallback: Some("0000".to_string()),
            capture_qualifications: true,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

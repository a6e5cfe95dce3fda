use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Plain text of one title specification with its identifying metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    pub code: String,
    pub title: String,
    pub raw_text: String,
}

impl SpecDocument {
    pub fn new(code: impl Into<String>, title: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            raw_text: raw_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub code: String,
    pub parents: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qual_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

/// `{title, code, parents}` triple written to the relationships file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub title: String,
    pub code: String,
    pub parents: BTreeSet<String>,
}

impl From<&ExtractionResult> for Relationship {
    fn from(result: &ExtractionResult) -> Self {
        Self {
            title: result.title.clone(),
            code: result.code.clone(),
            parents: result.parents.clone(),
        }
    }
}

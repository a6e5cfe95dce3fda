pub mod clause;
pub mod config;
pub mod metadata;
pub mod normalizer;
pub mod schema;
pub mod section;

pub use clause::ClauseFinder;
pub use config::{ExtractorConfig, Terminator};
pub use normalizer::TitleNormalizer;
pub use schema::{ExtractionResult, Relationship, SpecDocument};
pub use section::SectionIsolator;

use anyhow::Result;
use std::collections::BTreeSet;

/// Promotional clause extractor. Pure: the same text always yields the same parents.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    isolator: SectionIsolator,
    clauses: ClauseFinder,
    normalizer: TitleNormalizer,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let isolator = SectionIsolator::new(&config.terminators)?;
        let clauses = ClauseFinder::new(&config.self_references);
        let normalizer = TitleNormalizer::new(&config.denylist);

        Ok(Self {
            config,
            isolator,
            clauses,
            normalizer,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parent titles named in the promotional section of `text`
    pub fn parents(&self, text: &str) -> BTreeSet<String> {
        // Step 1: isolate the section
        let Some(section) = self.isolator.isolate(text) else {
            return BTreeSet::new();
        };

        // Step 2: one candidate per introducer, then split and normalize
        self.clauses
            .candidates(section)
            .into_iter()
            .flat_map(|clause| self.normalizer.titles(clause))
            .collect()
    }

    pub fn extract(&self, doc: &SpecDocument) -> ExtractionResult {
        let parents = self.parents(&doc.raw_text);

        let (qual_text, full_text) = if self.config.capture_qualifications {
            (
                Some(section::qualifications(&doc.raw_text)),
                Some(doc.raw_text.clone()),
            )
        } else {
            (None, None)
        };

        ExtractionResult {
            title: doc.title.clone(),
            code: doc.code.clone(),
            parents,
            qual_text,
            full_text,
        }
    }
}

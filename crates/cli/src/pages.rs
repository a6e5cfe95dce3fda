use anyhow::Result;
use extract::{Extractor, Relationship};
use fetch::PageFetcher;
use tracing::{debug, error, info, warn};

use crate::config::PagesConfig;
use crate::output::{BatchSummary, write_json};

/// Fetch every spec page linked from the index and write the relationships file
///
/// An unreachable index is logged and still produces an empty relationships file.
pub async fn run(config: &PagesConfig) -> Result<BatchSummary> {
    let extractor = Extractor::new(config.extractor.clone())?;
    let fetcher = PageFetcher::new(config.fetch.clone())?;

    info!(url = %config.fetch.index_url, "Accessing title index");
    let mut codes = match fetcher.discover_codes().await {
        Ok(codes) => codes,
        Err(e) => {
            error!(url = %config.fetch.index_url, error = %format!("{:#}", e), "Failed to access index");
            Vec::new()
        }
    };
    if let Some(limit) = config.limit {
        codes.truncate(limit);
    }
    info!(codes = codes.len(), "Found spec codes to scrape");

    let mut summary = BatchSummary::default();
    let mut relationships = Vec::with_capacity(codes.len());

    for (i, code) in codes.iter().enumerate() {
        match fetcher.fetch_spec(code).await {
            Ok(doc) => {
                let result = extractor.extract(&doc);
                debug!(code = %code, parents = result.parents.len(), "Extracted");

                if i % 10 == 0 {
                    info!(done = i, total = codes.len(), title = %result.title, "Scraped");
                }
                if !result.parents.is_empty() {
                    summary.with_parents += 1;
                }
                summary.processed += 1;
                relationships.push(Relationship::from(&result));
            }
            Err(e) => {
                summary.failed += 1;
                warn!(code = %code, error = %format!("{:#}", e), "Error scraping spec page");
            }
        }

        if i + 1 < codes.len() {
            fetcher.pace().await;
        }
    }

    write_json(&config.relationships_out, &relationships).await?;
    info!(relationships = ?config.relationships_out, "Wrote output file");

    Ok(summary)
}

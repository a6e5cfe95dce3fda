use anyhow::Result;
use extract::{Extractor, Relationship};
use ingest::DocumentLoader;
use tracing::{debug, info, warn};

use crate::config::DocumentsConfig;
use crate::output::{BatchSummary, write_json};

/// Extract every document in the configured directory and write both output files
pub async fn run(config: &DocumentsConfig) -> Result<BatchSummary> {
    let extractor = Extractor::new(config.extractor.clone())?;
    let loader = DocumentLoader::new(
        config.loader.clone(),
        extractor.config().code_fallback.clone(),
    );

    info!(dir = ?loader.config().dir, "Scanning for specification documents");
    let files = loader.scan()?;
    info!(files = files.len(), "Found documents");

    let mut summary = BatchSummary::default();
    let mut results = Vec::with_capacity(files.len());

    for (i, path) in files.iter().enumerate() {
        match loader.load(path).await {
            Ok(doc) => {
                let result = extractor.extract(&doc);
                debug!(code = %result.code, parents = result.parents.len(), "Extracted");

                if !result.parents.is_empty() {
                    summary.with_parents += 1;
                }
                summary.processed += 1;
                results.push(result);
            }
            Err(e) => {
                summary.failed += 1;
                warn!(path = ?path, error = %format!("{:#}", e), "Skipping document");
            }
        }

        if (i + 1) % 100 == 0 {
            info!(done = i + 1, total = files.len(), "Processed documents");
        }
    }

    let relationships: Vec<Relationship> = results.iter().map(Relationship::from).collect();

    write_json(&config.specs_data_out, &results).await?;
    write_json(&config.relationships_out, &relationships).await?;
    info!(
        specs = ?config.specs_data_out,
        relationships = ?config.relationships_out,
        "Wrote output files"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_dir;
    use extract::ExtractionResult;
    use ingest::LoaderConfig;

    #[tokio::test]
    async fn test_run_writes_both_files() {
        let dir = test_dir("documents_run");
        let specs = dir.join("specs");
        std::fs::create_dir_all(&specs).unwrap();
        std::fs::write(
            specs.join("0456 - HEAD CLERK.txt"),
            "HEAD CLERK\nPROMOTIONAL: One year as a Senior Clerk, Clerk Typist or Typist.\n\
             MINIMUM QUALIFICATIONS: none\nREVISION DATE 2019",
        )
        .unwrap();
        std::fs::write(specs.join("TYPIST.txt"), "TYPIST\nno promotional section").unwrap();
        std::fs::write(specs.join("0999 - BROKEN.txt"), [0xff, 0xfe]).unwrap();

        let config = DocumentsConfig {
            loader: LoaderConfig {
                dir: specs.clone(),
                ..LoaderConfig::default()
            },
            specs_data_out: dir.join("out").join("specs_data.json"),
            relationships_out: dir.join("out").join("relationships.json"),
            ..DocumentsConfig::default()
        };

        let summary = run(&config).await.unwrap();
        assert_eq!(
            summary,
            BatchSummary {
                processed: 2,
                failed: 1,
                with_parents: 1,
            }
        );

        let specs_data: Vec<ExtractionResult> =
            serde_json::from_str(&std::fs::read_to_string(&config.specs_data_out).unwrap())
                .unwrap();
        assert_eq!(specs_data.len(), 2);
        assert_eq!(specs_data[0].code, "0456");
        assert_eq!(specs_data[0].title, "HEAD CLERK");
        assert_eq!(
            specs_data[0].parents.iter().cloned().collect::<Vec<_>>(),
            vec!["Clerk Typist", "Senior Clerk", "Typist"]
        );
        assert_eq!(specs_data[0].qual_text.as_deref(), Some(": none\nREVISION DATE 2019"));
        assert_eq!(specs_data[1].code, "0000");
        assert!(specs_data[1].parents.is_empty());

        let raw = std::fs::read_to_string(&config.relationships_out).unwrap();
        let relationships: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(relationships.len(), 2);
        assert!(relationships[0].get("full_text").is_none());
        assert_eq!(relationships[0]["code"], "0456");
    }

    #[tokio::test]
    async fn test_unnamed_files_skipped_without_fallback() {
        let dir = test_dir("documents_no_fallback");
        let specs = dir.join("specs");
        std::fs::create_dir_all(&specs).unwrap();
        std::fs::write(specs.join("0456 - HEAD CLERK.txt"), "HEAD CLERK").unwrap();
        std::fs::write(specs.join("TYPIST.txt"), "TYPIST").unwrap();

        let mut config = DocumentsConfig {
            loader: LoaderConfig {
                dir: specs.clone(),
                ..LoaderConfig::default()
            },
            specs_data_out: dir.join("specs_data.json"),
            relationships_out: dir.join("relationships.json"),
            ..DocumentsConfig::default()
        };
        config.extractor.code_fallback = None;

        let summary = run(&config).await.unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed, 1);

        let written: Vec<ExtractionResult> =
            serde_json::from_str(&std::fs::read_to_string(&config.specs_data_out).unwrap())
                .unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].code, "0456");
    }

    #[tokio::test]
    async fn test_missing_directory_fails_the_run() {
        let dir = test_dir("documents_missing");
        let config = DocumentsConfig {
            loader: LoaderConfig {
                dir: dir.join("absent"),
                ..LoaderConfig::default()
            },
            specs_data_out: dir.join("specs_data.json"),
            relationships_out: dir.join("relationships.json"),
            ..DocumentsConfig::default()
        };

        assert!(run(&config).await.is_err());
        assert!(!config.relationships_out.exists());
    }
}

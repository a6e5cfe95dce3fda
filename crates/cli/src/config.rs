use anyhow::{Context, Result};
use extract::ExtractorConfig;
use fetch::FetchConfig;
use ingest::LoaderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub documents: DocumentsConfig,
    pub pages: PagesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub loader: LoaderConfig,
    /// `code_fallback` also decides the code of files named without one
    pub extractor: ExtractorConfig,
    pub specs_data_out: PathBuf,
    pub relationships_out: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub fetch: FetchConfig,
    /// `code_fallback` is unused: a page without a code has no URL to fetch
    pub extractor: ExtractorConfig,
    pub relationships_out: PathBuf,
    /// Stop after this many spec pages
    pub limit: Option<usize>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            extractor: ExtractorConfig::document(),
            specs_data_out: PathBuf::from("specs_data.json"),
            relationships_out: PathBuf::from("relationships.json"),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            extractor: ExtractorConfig::page(),
            relationships_out: PathBuf::from("relationships.json"),
            limit: None,
        }
    }
}

impl AppConfig {
    /// Defaults, or a JSON file layered over them
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&content).context(format!("Invalid config file: {:?}", path))
    }
}

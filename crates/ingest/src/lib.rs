pub mod reader;

pub use reader::FileReader;

use anyhow::{Context, Result};
use extract::SpecDocument;
use extract::metadata::{code_from_file_name, title_from_path};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub dir: PathBuf,
    pub recursive: bool,
    pub extensions: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("specs"),
            recursive: false,
            extensions: vec!["txt".to_string(), "md".to_string()],
        }
    }
}

/// Yields one `SpecDocument` per specification file
pub struct DocumentLoader {
    config: LoaderConfig,
    reader: FileReader,
    /// Code for files whose name has no leading 4-digit code. `None` skips them.
    code_fallback: Option<String>,
}

impl DocumentLoader {
    pub fn new(config: LoaderConfig, code_fallback: Option<String>) -> Self {
        let reader = FileReader::new(&config.extensions);
        Self {
            config,
            reader,
            code_fallback,
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Candidate files, sorted
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        self.reader.scan(&self.config.dir, self.config.recursive)
    }

    /// Load one file; code and title come from the file name
    pub async fn load(&self, path: &Path) -> Result<SpecDocument> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .context(format!("Not a file path: {:?}", path))?;

        let code = code_from_file_name(&file_name, self.code_fallback.as_deref())
            .context(format!("No spec code in file name: {}", file_name))?;
        let title = title_from_path(path);
        let raw_text = self.reader.read_file(path).await?;

        Ok(SpecDocument {
            code,
            title,
            raw_text,
        })
    }
}

/// Fresh scratch directory for tests
#[cfg(test)]
pub(crate) fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ingest_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;
use walkdir::WalkDir;

/// Reads specification documents that are already plain text, one paragraph per line.
pub struct FileReader {
    extensions: Vec<String>,
}

impl FileReader {
    pub fn new(extensions: &[String]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|s| s == &ext.to_lowercase()))
    }

    /// Paragraphs of the file joined by '\n'
    pub async fn read_file(&self, path: &Path) -> Result<String> {
        if !self.is_supported(path) {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            anyhow::bail!("Unsupported file format: {}", extension);
        }

        let content = fs::read_to_string(path)
            .await
            .context(format!("Failed to read file: {:?}", path))?;

        Ok(content.lines().collect::<Vec<_>>().join("\n"))
    }

    /// Supported files under `dir`, sorted by path
    ///
    /// Only a failure on `dir` itself is an error; unreadable entries below it are skipped.
    pub fn scan(&self, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    warn!(path = ?e.path(), error = %e, "Skipping unreadable entry");
                    continue;
                }
                Err(e) => {
                    return Err(e).context(format!("Failed to scan directory: {:?}", dir));
                }
            };
            let path = entry.path();

            if entry.file_type().is_file() && self.is_supported(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

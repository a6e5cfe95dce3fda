use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tokio::fs;

/// Counts reported at the end of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
    pub with_parents: usize,
}

/// Pretty-printed JSON, creating parent directories as needed
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .context(format!("Failed to create directory: {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)
        .await
        .context(format!("Failed to write {:?}", path))
}

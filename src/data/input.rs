//! JSONL document ingestion.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use walkdir::WalkDir;

use crate::data::Document;

/// Read one document per line from a `.jsonl` file, or from every `.jsonl`
/// file below a directory in path order.
pub async fn read_documents(input: &Path) -> Result<Vec<Document>> {
    let files = if input.is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(input)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("jsonl"))
            .collect();
        files.sort();
        files
    } else {
        vec![input.to_path_buf()]
    };

    let mut documents = Vec::new();
    for file in &files {
        let content = tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("reading {}", file.display()))?;
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let document: Document = serde_json::from_str(line)
                .with_context(|| format!("decoding {} line {}", file.display(), idx + 1))?;
            documents.push(document);
        }
    }
    info!(files = files.len(), documents = documents.len(), "loaded documents");
    Ok(documents)
}

use anyhow::{Context, Result};
use classify_core::ClassificationRequest;
use std::path::Path;

/// Reads an image file into an upload request named after the file.
pub async fn image_request(path: &Path) -> Result<ClassificationRequest> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(ClassificationRequest::image(file_name, bytes))
}

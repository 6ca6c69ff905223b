//! Document I/O for handout conversion

use super::document::SourceDocument;
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a worksheet PDF.
///
/// Any failure to read or parse the file is reported as `DocumentOpen`.
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<SourceDocument> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| HandoutError::DocumentOpen {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes))
        .await?
        .map_err(|e| HandoutError::DocumentOpen {
            path,
            reason: e.to_string(),
        })?;

    Ok(SourceDocument::new(doc))
}

/// Save a finished handout
pub async fn save_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let bytes = tokio::task::spawn_blocking(move || serialize(doc)).await??;
    write_bytes(path.as_ref(), bytes).await
}

/// Serialize a document to PDF bytes
pub(crate) fn serialize(mut doc: Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

pub(crate) async fn write_bytes(path: &Path, bytes: Vec<u8>) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| HandoutError::Write {
            path: path.to_owned(),
            source,
        })
}

//! Batch conversion of every worksheet under a directory
//!
//! Files are discovered recursively and converted one at a time. A failing
//! file is recorded and the batch moves on to the next one.

use crate::font::FontProvider;
use crate::handout::convert;
use crate::options::HandoutLayout;
use crate::types::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A worksheet that could not be converted
#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: HandoutError,
}

/// Result of converting one discovered file
#[derive(Debug)]
pub enum FileOutcome {
    Converted(ConversionReport),
    Failed(FileFailure),
}

/// Outcomes of a whole batch, in processing order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConversionReport>,
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Whether a file name marks a worksheet PDF (both checks case-insensitive)
pub fn is_worksheet(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    lower.ends_with(".pdf") && lower.contains("-worksheet")
}

/// Output path for a worksheet: same directory, `Worksheet`/`worksheet`
/// in the file name replaced by `Handout`.
pub fn handout_path(input: &Path) -> PathBuf {
    let Some(name) = input.file_name() else {
        return input.to_owned();
    };
    let renamed = name
        .to_string_lossy()
        .replace("Worksheet", "Handout")
        .replace("worksheet", "Handout");
    input.with_file_name(renamed)
}

/// Recursively find worksheet PDFs under `root`, sorted by path.
///
/// Subdirectories and entries that cannot be read are logged and skipped;
/// an unreadable `root` is an error.
pub async fn discover_worksheets(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref().to_owned();
    let mut found = Vec::new();
    let mut pending = vec![root.clone()];

    while let Some(dir) = pending.pop() {
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) => {
                skip_unreadable(&dir, &root, e)?;
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    skip_unreadable(&dir, &root, e)?;
                    break;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(e) => {
                    skip_unreadable(&path, &root, e)?;
                    continue;
                }
            };

            if file_type.is_dir() {
                pending.push(path);
            } else if is_worksheet(&entry.file_name().to_string_lossy()) {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Errors below `root` are logged and skipped; an error on `root` itself is returned.
fn skip_unreadable(path: &Path, root: &Path, error: std::io::Error) -> Result<()> {
    if path == root {
        return Err(error.into());
    }
    log::warn!("Skipping unreadable {}: {}", path.display(), error);
    Ok(())
}

/// Convert every worksheet under `root`.
///
/// `on_outcome` is called after each file, in processing order. Only a
/// failure to read `root` itself aborts the batch.
pub async fn convert_all<F>(
    root: impl AsRef<Path>,
    font: Arc<F>,
    year: i32,
    layout: &HandoutLayout,
    mut on_outcome: impl FnMut(&FileOutcome),
) -> Result<BatchReport>
where
    F: FontProvider + Send + Sync + 'static,
{
    let inputs = discover_worksheets(root).await?;
    let mut report = BatchReport::default();

    for input in inputs {
        let outcome = match convert_one(&input, Arc::clone(&font), year, layout).await {
            Ok(converted) => FileOutcome::Converted(converted),
            Err(error) => {
                log::warn!("Failed to convert {}: {}", input.display(), error);
                FileOutcome::Failed(FileFailure { input, error })
            }
        };

        on_outcome(&outcome);

        match outcome {
            FileOutcome::Converted(converted) => report.converted.push(converted),
            FileOutcome::Failed(failure) => report.failed.push(failure),
        }
    }

    Ok(report)
}

async fn convert_one<F>(
    input: &Path,
    font: Arc<F>,
    year: i32,
    layout: &HandoutLayout,
) -> Result<ConversionReport>
where
    F: FontProvider + Send + Sync + 'static,
{
    let output = handout_path(input);
    if output == input {
        return Err(HandoutError::OutputCollision(output));
    }
    convert(input, &output, font, year, layout).await
}

//! Worksheet to handout conversion
//!
//! This module orchestrates a single conversion:
//! 1. Open the worksheet and derive metadata from its file name
//! 2. Compose every adjacent page pair onto one A4 page
//! 3. Decorate each output page once the final page count is known
//! 4. Write the handout

mod compose;
mod document;
mod io;

pub use compose::compose;
pub use document::{HandoutDocument, OutputPage, SlotContent, SourceDocument};
pub use io::{load_pdf, save_pdf};

use crate::decorate::decorate;
use crate::font::FontProvider;
use crate::options::HandoutLayout;
use crate::types::*;
use io::{serialize, write_bytes};
use lopdf::Document;
use std::path::Path;
use std::sync::Arc;

/// Adjacent page pairs `(0, 1), (2, 3), ...` of a document with `page_count` pages.
///
/// An unpaired last page is left out.
pub fn page_pairs(page_count: usize) -> impl Iterator<Item = PagePair> {
    (0..page_count)
        .step_by(2)
        .filter(move |&i| i + 1 < page_count)
        .map(|i| PagePair::new(i, i + 1))
}

/// Build the handout for an opened worksheet.
///
/// Page numbers in the frame count output pages, so decoration only starts
/// after every pair has been composed.
pub fn build_handout<F: FontProvider + ?Sized>(
    source: &SourceDocument,
    metadata: &Metadata,
    font: &F,
    layout: &HandoutLayout,
) -> Result<Document> {
    layout.validate()?;

    let mut handout = HandoutDocument::new(*layout);
    for pair in page_pairs(source.page_count()) {
        let page = compose(&mut handout, source, pair)?;
        handout.push(page);
    }

    if source.page_count() % 2 == 1 {
        log::debug!("Dropping unpaired last page {}", source.page_count());
    }

    let total_pages = handout.len();
    for (idx, page) in handout.pages_mut().iter_mut().enumerate() {
        decorate(page, idx + 1, total_pages, metadata, font, layout);
    }

    handout.finish(font)
}

/// Convert one worksheet PDF into a handout PDF.
///
/// The worksheet is released when this returns, whether or not it succeeded.
pub async fn convert<F>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    font: Arc<F>,
    year: i32,
    layout: &HandoutLayout,
) -> Result<ConversionReport>
where
    F: FontProvider + Send + Sync + 'static,
{
    let input = input.as_ref().to_owned();
    let output = output.as_ref().to_owned();
    let metadata = Metadata::from_path(&input, year);

    let source = load_pdf(&input).await?;
    let source_pages = source.page_count();

    let layout = *layout;
    let (bytes, output_pages) = tokio::task::spawn_blocking(move || {
        let doc = build_handout(&source, &metadata, font.as_ref(), &layout)?;
        let output_pages = doc.get_pages().len();
        Ok::<_, HandoutError>((serialize(doc)?, output_pages))
    })
    .await??;

    write_bytes(&output, bytes).await?;

    log::info!(
        "Converted {} ({} pages) -> {} ({} pages)",
        input.display(),
        source_pages,
        output.display(),
        output_pages
    );

    Ok(ConversionReport {
        input,
        output,
        source_pages,
        output_pages,
        dropped_trailing_page: source_pages % 2 == 1,
        metadata,
    })
}

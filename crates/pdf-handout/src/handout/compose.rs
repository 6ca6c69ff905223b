//! Page composition: two source pages stacked on one output page

use super::document::{HandoutDocument, OutputPage, SlotContent, SourceDocument};
use crate::layout::{SlotPosition, place_page, slot_bounds};
use crate::types::*;

/// Compose one output page from a pair of source pages.
///
/// `pair.first` is fit into the upper slot and `pair.second` into the lower
/// one. Each page is fit independently, so pages of different sizes in one
/// pair are fine. The page is returned, not appended.
pub fn compose(
    output: &mut HandoutDocument,
    source: &SourceDocument,
    pair: PagePair,
) -> Result<OutputPage> {
    if pair.first == pair.second {
        return Err(HandoutError::InvalidPair {
            first: pair.first,
            second: pair.second,
        });
    }

    let upper = place_slot(output, source, pair.first, SlotPosition::Upper)?;
    let lower = place_slot(output, source, pair.second, SlotPosition::Lower)?;

    Ok(OutputPage::new(output.layout(), upper, lower))
}

fn place_slot(
    output: &mut HandoutDocument,
    source: &SourceDocument,
    index: usize,
    position: SlotPosition,
) -> Result<SlotContent> {
    let source_box = source.page_box(index)?;
    let rotation = source.page_rotation(index)?;
    let slot_rect = slot_bounds(output.layout(), position);
    let placement = place_page(&slot_rect, &source_box, rotation, position, index);
    let xobject_id = output.import_page(source, index)?;

    Ok(SlotContent {
        placement,
        xobject_id,
    })
}

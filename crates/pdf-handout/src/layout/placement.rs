//! Slot partitioning and proportional fit

use crate::options::HandoutLayout;

use super::{PagePlacement, Rect, SlotPosition};

/// Calculate the rectangle of a slot on the output page.
///
/// The page height minus three margins (top, middle, bottom) is split into
/// two equal slots; both span the page width minus the side margins.
pub fn slot_bounds(layout: &HandoutLayout, position: SlotPosition) -> Rect {
    let margin = layout.slot_margin_pt;
    let height = layout.slot_height();
    let width = layout.slot_width();

    let y = match position {
        SlotPosition::Upper => layout.page_height_pt - margin - height,
        SlotPosition::Lower => margin,
    };

    Rect::new(margin, y, width, height)
}

/// Fit a source page into a slot.
///
/// The page is fit as displayed: a quarter-turned page swaps width and
/// height. It is scaled uniformly so it fits entirely inside `slot_rect`
/// and is centered on both axes.
///
/// # Arguments
/// * `slot_rect` - Target rectangle on the output page
/// * `source_box` - The visible source page box in source user space
/// * `rotation` - Normalized clockwise `/Rotate` of the source page
/// * `slot` - Which slot the page goes in
/// * `source_page` - Index of the source page
pub fn place_page(
    slot_rect: &Rect,
    source_box: &Rect,
    rotation: u16,
    slot: SlotPosition,
    source_page: usize,
) -> PagePlacement {
    let (shown_width, shown_height) = match rotation {
        90 | 270 => (source_box.height, source_box.width),
        _ => (source_box.width, source_box.height),
    };

    let scale = fit_scale(shown_width, shown_height, slot_rect.width, slot_rect.height);

    let scaled_width = shown_width * scale;
    let scaled_height = shown_height * scale;

    let x = slot_rect.x + (slot_rect.width - scaled_width) / 2.0;
    let y = slot_rect.y + (slot_rect.height - scaled_height) / 2.0;

    PagePlacement {
        source_page,
        slot,
        slot_rect: *slot_rect,
        content_rect: Rect::new(x, y, scaled_width, scaled_height),
        scale,
        source_box: *source_box,
        rotation,
    }
}

/// Largest uniform scale factor at which the source still fits the target.
fn fit_scale(src_width: f32, src_height: f32, target_width: f32, target_height: f32) -> f32 {
    if src_width <= 0.0 || src_height <= 0.0 {
        return 1.0;
    }
    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;
    scale_w.min(scale_h)
}

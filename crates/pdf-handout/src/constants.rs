//! Shared constants for handout generation
//!
//! All lengths are PDF points (1/72 inch).

// =============================================================================
// Output Page
// =============================================================================

/// A4 width in points (210 mm)
pub const A4_WIDTH_PT: f32 = 595.276;

/// A4 height in points (297 mm)
pub const A4_HEIGHT_PT: f32 = 841.890;

/// Gap around and between the two slots
pub const SLOT_MARGIN_PT: f32 = 10.0;

/// Default source page size when a page has no usable MediaBox (US Letter)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);

// =============================================================================
// Frame (header/footer)
// =============================================================================

pub const FRAME_MARGIN_LEFT: f32 = 14.0;
pub const FRAME_MARGIN_TOP: f32 = 14.0;
pub const FRAME_MARGIN_RIGHT: f32 = 14.0;
pub const FRAME_MARGIN_BOTTOM: f32 = 20.0;

/// Added to the left frame margin where rules and left-aligned text start
pub const FRAME_START_INSET: f32 = 14.0;

/// Subtracted after the right frame margin where rules and right-aligned text end
pub const FRAME_END_INSET: f32 = 11.0;

/// Top rule sits at this multiple of the top margin
pub const TOP_RULE_FACTOR: f32 = 1.8;

/// Bottom rule sits this multiple of the bottom margin above the page bottom
pub const BOTTOM_RULE_FACTOR: f32 = 1.6;

/// Baseline of the header text, measured from the top edge
pub const HEADER_BASELINE: f32 = 22.0;

/// Stroke width of the rules
pub const RULE_WIDTH: f32 = 0.5;

/// Gray used for rules and text
pub const FRAME_GRAY: f32 = 0.6;

/// Font size of every frame text field
pub const FRAME_FONT_SIZE: f32 = 12.0;

/// Fixed bottom-left footer text
pub const AUTHOR_LINE: &str = "Frank Huettner | SKK GSB";

// =============================================================================
// Font
// =============================================================================

/// File name of the display typeface
pub const DISPLAY_FONT_FILE: &str = "LexendDeca-SemiBold.ttf";

/// PDF resource name of the display font on output pages
pub const FONT_RESOURCE_NAME: &str = "F1";

/// First character code covered by the embedded width table
pub const FIRST_CHAR: u8 = 32;

/// Last character code covered by the embedded width table
pub const LAST_CHAR: u8 = 255;

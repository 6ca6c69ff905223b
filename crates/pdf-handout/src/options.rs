use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn gray(level: f32) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }
}

/// Margins of the header/footer frame.
///
/// These position the rules and text; they are independent of the
/// slot margin used to place source pages.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameMargins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for FrameMargins {
    fn default() -> Self {
        Self {
            left: FRAME_MARGIN_LEFT,
            top: FRAME_MARGIN_TOP,
            right: FRAME_MARGIN_RIGHT,
            bottom: FRAME_MARGIN_BOTTOM,
        }
    }
}

/// Fixed geometry of a handout page.
///
/// Passed explicitly to the compositor and the decoration engine.
/// `Default` yields the A4 handout layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HandoutLayout {
    // Output page
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub slot_margin_pt: f32,

    // Frame
    pub frame: FrameMargins,
    pub start_inset: f32,
    pub end_inset: f32,
    pub top_rule_factor: f32,
    pub bottom_rule_factor: f32,
    pub header_baseline: f32,
    pub rule_width: f32,
    pub color: Rgb,
    pub font_size: f32,
}

impl Default for HandoutLayout {
    fn default() -> Self {
        Self {
            page_width_pt: A4_WIDTH_PT,
            page_height_pt: A4_HEIGHT_PT,
            slot_margin_pt: SLOT_MARGIN_PT,
            frame: FrameMargins::default(),
            start_inset: FRAME_START_INSET,
            end_inset: FRAME_END_INSET,
            top_rule_factor: TOP_RULE_FACTOR,
            bottom_rule_factor: BOTTOM_RULE_FACTOR,
            header_baseline: HEADER_BASELINE,
            rule_width: RULE_WIDTH,
            color: Rgb::gray(FRAME_GRAY),
            font_size: FRAME_FONT_SIZE,
        }
    }
}

impl HandoutLayout {
    /// Height of each slot: page height minus top, middle and bottom margins, halved
    pub fn slot_height(&self) -> f32 {
        (self.page_height_pt - 3.0 * self.slot_margin_pt) / 2.0
    }

    /// Width of each slot: page width minus both side margins
    pub fn slot_width(&self) -> f32 {
        self.page_width_pt - 2.0 * self.slot_margin_pt
    }

    /// Left end of the rules and anchor of left-aligned text
    pub fn frame_left(&self) -> f32 {
        self.frame.left + self.start_inset
    }

    /// Right end of the rules and right edge of right-aligned text
    pub fn frame_right(&self) -> f32 {
        self.page_width_pt - self.frame.right - self.end_inset
    }

    /// Validate the geometry
    pub fn validate(&self) -> Result<()> {
        if self.page_width_pt <= 0.0 || self.page_height_pt <= 0.0 {
            return Err(HandoutError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }

        if self.slot_margin_pt < 0.0 {
            return Err(HandoutError::Config(
                "Slot margin must not be negative".to_string(),
            ));
        }

        if self.slot_width() <= 0.0 || self.slot_height() <= 0.0 {
            return Err(HandoutError::Config(format!(
                "Slot margin {} leaves no room for slots on a {}x{} page",
                self.slot_margin_pt, self.page_width_pt, self.page_height_pt
            )));
        }

        if self.frame_right() <= self.frame_left() {
            return Err(HandoutError::Config(
                "Frame margins leave no room for the rules".to_string(),
            ));
        }

        if self.font_size <= 0.0 {
            return Err(HandoutError::Config(
                "Font size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

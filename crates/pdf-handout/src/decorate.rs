//! Header/footer frame for handout pages
//!
//! Every page gets two gray rules and four text fields:
//!
//! ```text
//! Handout | OM 3 - 2                    [Page 1/4]
//! ---------------------------------------------------
//!                  (upper and lower slot)
//! ---------------------------------------------------
//! Frank Huettner | SKK GSB                  [2024]
//! ```
//!
//! Frame geometry is expressed top-down (origin at the top-left corner,
//! y growing downward) and flipped into PDF space when rendered.

use crate::constants::{AUTHOR_LINE, FONT_RESOURCE_NAME};
use crate::font::FontProvider;
use crate::handout::OutputPage;
use crate::options::{HandoutLayout, Rgb};
use crate::types::Metadata;

/// A horizontal rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleLine {
    pub x_start: f32,
    pub x_end: f32,
    /// Distance from the top edge
    pub y: f32,
}

/// A positioned single-line text field
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Font-encoded bytes drawn for `text`
    pub encoded: Vec<u8>,
    /// Left edge of the text
    pub x: f32,
    /// Baseline, as distance from the top edge
    pub baseline: f32,
    /// Measured advance width
    pub width: f32,
}

impl TextRun {
    /// Right edge of the text
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Decoration of one output page
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub rules: [RuleLine; 2],
    /// Header left, header right, footer left, footer right
    pub texts: [TextRun; 4],
    pub font_size: f32,
    pub rule_width: f32,
    pub color: Rgb,
}

impl Frame {
    /// Lay out the frame for the page at 1-based `ordinal` of `total_pages`.
    pub fn new<F: FontProvider + ?Sized>(
        ordinal: usize,
        total_pages: usize,
        metadata: &Metadata,
        font: &F,
        layout: &HandoutLayout,
    ) -> Self {
        let left = layout.frame_left();
        let right = layout.frame_right();
        let top_rule = layout.top_rule_factor * layout.frame.top;
        let bottom_rule = layout.page_height_pt - layout.bottom_rule_factor * layout.frame.bottom;
        let header = layout.header_baseline;
        let footer = layout.page_height_pt - layout.frame.bottom;

        let left_run = |text: String, baseline: f32| {
            let width = font.measure(&text, layout.font_size);
            TextRun {
                encoded: font.encode(&text),
                text,
                x: left,
                baseline,
                width,
            }
        };
        let right_run = |text: String, baseline: f32| {
            let width = font.measure(&text, layout.font_size);
            TextRun {
                encoded: font.encode(&text),
                text,
                x: right - width,
                baseline,
                width,
            }
        };

        Self {
            rules: [
                RuleLine {
                    x_start: left,
                    x_end: right,
                    y: top_rule,
                },
                RuleLine {
                    x_start: left,
                    x_end: right,
                    y: bottom_rule,
                },
            ],
            texts: [
                left_run(
                    format!("Handout | OM {} - {}", metadata.week, metadata.part),
                    header,
                ),
                right_run(format!("[Page {}/{}]", ordinal, total_pages), header),
                left_run(AUTHOR_LINE.to_string(), footer),
                right_run(format!("[{}]", metadata.year), footer),
            ],
            font_size: layout.font_size,
            rule_width: layout.rule_width,
            color: layout.color,
        }
    }

    /// Render the frame as content stream operators for a page of `page_height`.
    pub fn to_content(&self, page_height: f32) -> String {
        let Rgb { r, g, b } = self.color;
        let mut ops = String::new();

        // Save graphics state
        ops.push_str("q\n");

        // Gray stroke and fill
        ops.push_str(&format!("{} {} {} RG\n", r, g, b));
        ops.push_str(&format!("{} {} {} rg\n", r, g, b));
        ops.push_str(&format!("{} w\n", self.rule_width));

        for rule in &self.rules {
            let y = page_height - rule.y;
            ops.push_str(&format!(
                "{} {} m {} {} l S\n",
                rule.x_start, y, rule.x_end, y
            ));
        }

        for run in &self.texts {
            ops.push_str(&format!(
                "BT /{} {} Tf {} {} Td <{}> Tj ET\n",
                FONT_RESOURCE_NAME,
                self.font_size,
                run.x,
                page_height - run.baseline,
                hex_string(&run.encoded)
            ));
        }

        // Restore graphics state
        ops.push_str("Q\n");

        ops
    }
}

/// Draw the frame on `page`.
///
/// A page holds a single frame, so decorating it again with the same
/// inputs leaves it unchanged rather than drawing everything twice.
pub fn decorate<F: FontProvider + ?Sized>(
    page: &mut OutputPage,
    ordinal: usize,
    total_pages: usize,
    metadata: &Metadata,
    font: &F,
    layout: &HandoutLayout,
) {
    page.set_frame(Frame::new(ordinal, total_pages, metadata, font, layout));
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

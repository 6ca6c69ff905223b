pub mod batch;
pub mod constants;
mod decorate;
mod font;
pub mod handout;
pub mod layout;
mod metadata;
mod options;
pub mod render;
mod types;

pub use batch::{
    BatchReport, FileFailure, FileOutcome, convert_all, discover_worksheets, handout_path,
    is_worksheet,
};
pub use decorate::{Frame, RuleLine, TextRun, decorate};
pub use font::{DisplayFont, FontProvider, font_path_for, load_display_font, resolve_font_path};
pub use handout::{
    HandoutDocument, OutputPage, SlotContent, SourceDocument, build_handout, compose, convert,
    load_pdf, page_pairs, save_pdf,
};
pub use metadata::current_year;
pub use options::*;
pub use types::*;

//! Layout calculation for handout pages
//!
//! This module handles the geometry of an output page:
//! - Slot partitioning (upper and lower rectangles)
//! - Proportional fit of a source page into its slot

mod placement;
mod types;

pub use placement::*;
pub use types::*;

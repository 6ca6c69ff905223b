//! PDF rendering modules for handouts
//!
//! This module handles all PDF-specific operations:
//! - Creating XObjects from source pages
//! - Deep copying PDF objects
//! - Writing composed output pages

mod page;
mod xobject;

pub use page::*;
pub use xobject::{copy_object_deep, create_page_xobject, get_page_box, get_page_rotation};

//! Output page rendering
//!
//! Turns an [`OutputPage`] into a PDF page dictionary: one content stream
//! for the two slots and, when decorated, a second one for the frame.

use crate::constants::FONT_RESOURCE_NAME;
use crate::handout::OutputPage;
use crate::layout::PagePlacement;
use crate::types::{HandoutError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Write an output page into `output` and return its object ID.
///
/// # Arguments
/// * `output` - The output document
/// * `page` - The composed (and possibly decorated) page
/// * `parent_pages_id` - The parent Pages object ID
/// * `font_id` - Embedded display font, required when the page has a frame
pub fn write_page(
    output: &mut Document,
    page: &OutputPage,
    parent_pages_id: ObjectId,
    font_id: Option<ObjectId>,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page.width()),
            Object::Real(page.height()),
        ]),
    );

    let mut xobjects = Dictionary::new();
    let mut slot_ops = String::new();
    for slot in page.slots() {
        let name = slot.placement.slot.xobject_name();
        xobjects.set(name.as_bytes(), Object::Reference(slot.xobject_id));
        slot_ops.push_str(&placement_command(name, &slot.placement));
    }

    let slot_stream = output.add_object(Stream::new(Dictionary::new(), slot_ops.into_bytes()));
    let mut contents = vec![Object::Reference(slot_stream)];

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    if let Some(frame) = page.frame() {
        let font_id = font_id.ok_or_else(|| {
            HandoutError::Config("Decorated page written without an embedded font".to_string())
        })?;
        let mut fonts = Dictionary::new();
        fonts.set(FONT_RESOURCE_NAME, Object::Reference(font_id));
        resources.set("Font", Object::Dictionary(fonts));

        let frame_ops = frame.to_content(page.height());
        let frame_stream =
            output.add_object(Stream::new(Dictionary::new(), frame_ops.into_bytes()));
        contents.push(Object::Reference(frame_stream));
    }

    page_dict.set("Contents", Object::Array(contents));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Generate the content stream command that draws a slot's XObject.
pub fn placement_command(xobject_name: &str, placement: &PagePlacement) -> String {
    let [a, b, c, d, e, f] = placement.matrix();
    format!("q {} {} {} {} {} {} cm /{} Do Q\n", a, b, c, d, e, f, xobject_name)
}

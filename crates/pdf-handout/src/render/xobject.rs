//! XObject creation for handout pages
//!
//! This module handles turning source PDF pages into Form XObjects,
//! which are then placed onto output pages with a scaling transform.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::layout::{Rect, normalize_rotation};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Parent chains longer than this are treated as malformed
const MAX_INHERITANCE_DEPTH: usize = 32;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// The XObject's BBox is the visible page box (see [`get_page_box`]) and its
/// resources are deep copied into `output`.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `cache` - Source-to-output object IDs already copied into `output`
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let page_box = get_page_box(source, page_id)?;

    let content = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(vec![
            Object::Real(page_box.x),
            Object::Real(page_box.y),
            Object::Real(page_box.right()),
            Object::Real(page_box.top()),
        ]),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_dict, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    // Content that could not be decoded keeps its encoding
    for (key, value) in content.encoding.iter() {
        xobject_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }

    let mut stream = Stream::new(xobject_dict, content.data);
    stream.allows_compression = content.encoding.is_empty();
    Ok(output.add_object(stream))
}

/// Look up a page attribute, following `/Parent` for inheritable keys.
fn inherited_attribute<'a>(
    doc: &'a Document,
    page_dict: &'a Dictionary,
    key: &[u8],
) -> Option<&'a Object> {
    let mut current = page_dict;
    for _ in 0..MAX_INHERITANCE_DEPTH {
        if let Ok(value) = current.get(key) {
            return Some(value);
        }
        let parent_id = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent_id).ok()?;
    }
    None
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Page content, decoded unless a filter could not be undone
struct PageContent {
    data: Vec<u8>,
    /// `/Filter` and `/DecodeParms` still applying to `data`
    encoding: Dictionary,
}

impl PageContent {
    fn decoded(data: Vec<u8>) -> Self {
        Self {
            data,
            encoding: Dictionary::new(),
        }
    }
}

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<PageContent> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(PageContent::decoded(Vec::new())), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => get_single_content_stream(doc, *id),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(PageContent::decoded(Vec::new())),
    }
}

/// Get content from a single content stream reference
fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<PageContent> {
    let Ok(stream) = doc.get_object(id)?.as_stream() else {
        return Ok(PageContent::decoded(Vec::new()));
    };

    if stream.dict.get(b"Filter").is_err() {
        return Ok(PageContent::decoded(stream.content.clone()));
    }

    match stream.decompressed_content() {
        Ok(data) => Ok(PageContent::decoded(data)),
        Err(e) => {
            log::warn!("Keeping content stream {:?} encoded: {}", id, e);
            let mut encoding = Dictionary::new();
            for key in [b"Filter".as_slice(), b"DecodeParms".as_slice()] {
                if let Ok(value) = stream.dict.get(key) {
                    encoding.set(key, value.clone());
                }
            }
            Ok(PageContent {
                data: stream.content.clone(),
                encoding,
            })
        }
    }
}

/// Concatenate multiple content streams.
///
/// A stream that cannot be decoded cannot be joined with the others and is
/// left out, unless it is the only one.
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<PageContent> {
    if let [Object::Reference(id)] = refs {
        return get_single_content_stream(doc, *id);
    }

    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            let part = get_single_content_stream(doc, *id)?;
            if !part.encoding.is_empty() {
                log::warn!("Dropping undecodable content stream {:?}", id);
                continue;
            }
            result.extend_from_slice(&part.data);
            result.push(b'\n');
        }
    }

    Ok(PageContent::decoded(result))
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// `/Parent` entries are dropped so a copy never drags in the source page tree.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the ID before recursing so reference cycles terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let copied = match source.get_object(*id) {
                Ok(referenced) => copy_object_deep(output, source, referenced, cache)?,
                Err(_) => Object::Null,
            };
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Get the visible source page box in points.
///
/// This is the CropBox clipped to the MediaBox, both possibly inherited.
/// Without a usable CropBox the MediaBox is used; pages without a usable
/// MediaBox fall back to US Letter at the origin.
pub fn get_page_box(doc: &Document, page_id: ObjectId) -> Result<Rect> {
    let page_dict = doc.get_dictionary(page_id)?;

    let (default_w, default_h) = DEFAULT_PAGE_DIMENSIONS;
    let media_box = read_box(doc, page_dict, b"MediaBox")
        .unwrap_or_else(|| Rect::new(0.0, 0.0, default_w, default_h));

    let visible = match read_box(doc, page_dict, b"CropBox") {
        Some(crop_box) => crop_box.intersection(&media_box).unwrap_or(media_box),
        None => media_box,
    };

    Ok(visible)
}

/// Clockwise display rotation of a page (`/Rotate`, possibly inherited)
pub fn get_page_rotation(doc: &Document, page_id: ObjectId) -> Result<u16> {
    let page_dict = doc.get_dictionary(page_id)?;
    let rotation = inherited_attribute(doc, page_dict, b"Rotate")
        .and_then(|obj| resolve(doc, obj))
        .and_then(|obj| obj.as_i64().ok())
        .unwrap_or(0);
    Ok(normalize_rotation(rotation))
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        _ => Some(obj),
    }
}

/// Read a normalized, non-empty page box rectangle
fn read_box(doc: &Document, page_dict: &Dictionary, key: &[u8]) -> Option<Rect> {
    let c = inherited_attribute(doc, page_dict, key)
        .and_then(|obj| resolve(doc, obj))
        .and_then(|obj| obj.as_array().ok())
        .filter(|arr| arr.len() == 4)
        .and_then(|arr| {
            let values: Option<Vec<f32>> = arr.iter().map(extract_number).collect();
            values
        })?;

    let (x0, x1) = (c[0].min(c[2]), c[0].max(c[2]));
    let (y0, y1) = (c[1].min(c[3]), c[1].max(c[3]));
    if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
        return None;
    }

    Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use pdf_handout::{FontProvider, Result};

/// Monospaced stand-in for the display font: every glyph is half an em wide.
pub struct FixedWidthFont;

impl FontProvider for FixedWidthFont {
    fn encode(&self, text: &str) -> Vec<u8> {
        text.bytes().collect()
    }

    fn measure(&self, text: &str, size: f32) -> f32 {
        text.len() as f32 * size * 0.5
    }

    fn embed(&self, doc: &mut Document) -> Result<ObjectId> {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
        Ok(doc.add_object(font_dict))
    }
}

/// Content marker written into source page `index`
pub fn page_marker(index: usize) -> String {
    format!("% source page {}\n", index)
}

/// Build a PDF whose pages have the given (width, height) sizes.
///
/// Each page's content starts with [`page_marker`] so tests can tell
/// which source page ended up in which slot.
pub fn create_sized_pdf(sizes: &[(i64, i64)]) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for (index, &(width, height)) in sizes.iter().enumerate() {
        let mut content = page_marker(index).into_bytes();
        content.extend_from_slice(b"q 0 0 m 10 10 l S Q");
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(width),
                    Object::Integer(height),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(sizes.len() as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

/// Build a PDF of `num_pages` 16:9 slides
pub fn create_test_pdf(num_pages: usize) -> Document {
    create_sized_pdf(&vec![(960, 540); num_pages])
}

pub fn pdf_bytes(mut doc: Document) -> Vec<u8> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    writer
}

pub fn write_test_pdf(path: &std::path::Path, num_pages: usize) {
    std::fs::write(path, pdf_bytes(create_test_pdf(num_pages))).unwrap();
}

/// Set `key` on the dictionary of page `index`
pub fn set_page_entry(doc: &mut Document, index: usize, key: &str, value: Object) {
    let page_id = page_ids(doc)[index];
    doc.get_object_mut(page_id)
        .unwrap()
        .as_dict_mut()
        .unwrap()
        .set(key, value);
}

pub fn rect_object(values: [i64; 4]) -> Object {
    Object::Array(values.iter().map(|&v| Object::Integer(v)).collect())
}

/// Page object IDs of `doc` in order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

pub fn resource<'a>(doc: &'a Document, page_id: ObjectId, category: &[u8], name: &[u8]) -> &'a Object {
    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    resources.get(category).unwrap().as_dict().unwrap().get(name).unwrap()
}

/// Raw content of the XObject drawn in slot `name` (`S0` upper, `S1` lower)
pub fn slot_content(doc: &Document, page_id: ObjectId, name: &str) -> Vec<u8> {
    let id = resource(doc, page_id, b"XObject", name.as_bytes())
        .as_reference()
        .unwrap();
    doc.get_object(id).unwrap().as_stream().unwrap().content.clone()
}

/// Concatenated content streams of an output page
pub fn page_content(doc: &Document, page_id: ObjectId) -> String {
    let page = doc.get_dictionary(page_id).unwrap();
    let contents = page.get(b"Contents").unwrap().as_array().unwrap();
    contents
        .iter()
        .map(|obj| {
            let stream = doc
                .get_object(obj.as_reference().unwrap())
                .unwrap()
                .as_stream()
                .unwrap();
            String::from_utf8_lossy(&stream.content).into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn contains(haystack: &[u8], needle: &str) -> bool {
    String::from_utf8_lossy(haystack).contains(needle)
}

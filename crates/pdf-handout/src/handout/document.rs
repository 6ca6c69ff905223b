//! Source and output document types

use crate::decorate::Frame;
use crate::font::FontProvider;
use crate::layout::{PagePlacement, Rect};
use crate::options::HandoutLayout;
use crate::render::{create_page_xobject, get_page_box, get_page_rotation, write_page};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// A worksheet opened for reading, with its pages in document order
#[derive(Debug, Clone)]
pub struct SourceDocument {
    doc: Document,
    page_ids: Vec<ObjectId>,
}

impl SourceDocument {
    pub fn new(doc: Document) -> Self {
        let page_ids = doc.get_pages().values().copied().collect();
        Self { doc, page_ids }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Object ID of the page at `index` (0-based)
    pub fn page_id(&self, index: usize) -> Result<ObjectId> {
        self.page_ids
            .get(index)
            .copied()
            .ok_or(HandoutError::PageOutOfRange {
                index,
                count: self.page_ids.len(),
            })
    }

    /// Visible page box of the page at `index`
    pub fn page_box(&self, index: usize) -> Result<Rect> {
        get_page_box(&self.doc, self.page_id(index)?)
    }

    /// Clockwise display rotation of the page at `index`
    pub fn page_rotation(&self, index: usize) -> Result<u16> {
        get_page_rotation(&self.doc, self.page_id(index)?)
    }
}

/// A source page placed in a slot, backed by a Form XObject in the output document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotContent {
    pub placement: PagePlacement,
    pub xobject_id: ObjectId,
}

/// One page of the handout: two stacked slots plus an optional frame
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPage {
    width: f32,
    height: f32,
    upper: SlotContent,
    lower: SlotContent,
    frame: Option<Frame>,
}

impl OutputPage {
    pub(crate) fn new(layout: &HandoutLayout, upper: SlotContent, lower: SlotContent) -> Self {
        Self {
            width: layout.page_width_pt,
            height: layout.page_height_pt,
            upper,
            lower,
            frame: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn upper(&self) -> &SlotContent {
        &self.upper
    }

    pub fn lower(&self) -> &SlotContent {
        &self.lower
    }

    /// Both slots, upper first
    pub fn slots(&self) -> [&SlotContent; 2] {
        [&self.upper, &self.lower]
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Replace the page's frame; a page carries at most one
    pub(crate) fn set_frame(&mut self, frame: Frame) {
        self.frame = Some(frame);
    }
}

/// The handout being built.
///
/// Owns the output `lopdf::Document` the slot XObjects are copied into and
/// the composed pages; [`HandoutDocument::finish`] writes the page tree.
#[derive(Debug)]
pub struct HandoutDocument {
    output: Document,
    pages_id: ObjectId,
    pages: Vec<OutputPage>,
    copy_cache: HashMap<ObjectId, ObjectId>,
    layout: HandoutLayout,
}

impl HandoutDocument {
    pub fn new(layout: HandoutLayout) -> Self {
        let mut output = Document::with_version("1.7");
        let pages_id = output.new_object_id();
        Self {
            output,
            pages_id,
            pages: Vec::new(),
            copy_cache: HashMap::new(),
            layout,
        }
    }

    pub fn layout(&self) -> &HandoutLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[OutputPage] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut [OutputPage] {
        &mut self.pages
    }

    /// Append a composed page after all previously pushed pages
    pub fn push(&mut self, page: OutputPage) {
        self.pages.push(page);
    }

    /// Copy a source page into the output as a Form XObject.
    pub(crate) fn import_page(&mut self, source: &SourceDocument, index: usize) -> Result<ObjectId> {
        let page_id = source.page_id(index)?;
        create_page_xobject(
            &mut self.output,
            source.document(),
            page_id,
            &mut self.copy_cache,
        )
    }

    /// Write pages, page tree and catalog, returning the finished document.
    ///
    /// The font is embedded only when at least one page carries a frame.
    pub fn finish<F: FontProvider + ?Sized>(self, font: &F) -> Result<Document> {
        let Self {
            mut output,
            pages_id,
            pages,
            ..
        } = self;

        let font_id = if pages.iter().any(|page| page.frame().is_some()) {
            Some(font.embed(&mut output)?)
        } else {
            None
        };

        let mut page_refs = Vec::with_capacity(pages.len());
        for page in &pages {
            let page_id = write_page(&mut output, page, pages_id, font_id)?;
            page_refs.push(Object::Reference(page_id));
        }

        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        output
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));

        output.trailer.set("Root", catalog_id);

        Ok(output)
    }
}

//! Display font loading, measurement and embedding
//!
//! The frame text is set in a single TrueType face read from a fixed
//! per-OS location under the home directory. There is no fallback font.

use crate::constants::{DISPLAY_FONT_FILE, FIRST_CHAR, LAST_CHAR};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::{Path, PathBuf};
use ttf_parser::{Face, name_id};

/// Text measurement and embedding capability used by the frame.
///
/// `measure` must agree with the widths `embed` writes, otherwise
/// right-aligned text drifts.
pub trait FontProvider {
    /// Encode text into the single-byte codes written to the content stream
    fn encode(&self, text: &str) -> Vec<u8>;

    /// Advance width of `text` at `size`, in points
    fn measure(&self, text: &str, size: f32) -> f32;

    /// Add the font to `doc` and return the font dictionary's ID
    fn embed(&self, doc: &mut Document) -> Result<ObjectId>;
}

/// Relative font location under the home directory for an OS name
/// as reported by `std::env::consts::OS`.
pub fn font_path_for(os: &str, home: &Path) -> PathBuf {
    let relative = match os {
        "macos" => Path::new("Library/Fonts"),
        _ => Path::new(".local/share/fonts"),
    };
    home.join(relative).join(DISPLAY_FONT_FILE)
}

/// Absolute path of the display font on this host
pub fn resolve_font_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(HandoutError::NoHomeDir)?;
    Ok(font_path_for(std::env::consts::OS, &home))
}

/// Load the display font from its well-known location
pub fn load_display_font() -> Result<DisplayFont> {
    DisplayFont::load(resolve_font_path()?)
}

/// Metrics written to the PDF font descriptor, in 1/1000 em
#[derive(Debug, Clone, Copy, PartialEq)]
struct DescriptorMetrics {
    flags: i64,
    bbox: [i64; 4],
    italic_angle: i64,
    ascent: i64,
    descent: i64,
    cap_height: i64,
    stem_v: i64,
}

/// A parsed TrueType font.
///
/// Keeps the raw program for embedding and a WinAnsi width table for
/// codes `FIRST_CHAR..=LAST_CHAR`.
#[derive(Debug, Clone)]
pub struct DisplayFont {
    path: PathBuf,
    data: Vec<u8>,
    postscript_name: String,
    widths: Vec<i64>,
    metrics: DescriptorMetrics,
}

impl DisplayFont {
    /// Load and parse a font file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_owned();
        if !path.is_file() {
            return Err(HandoutError::FontNotFound(path));
        }
        let data = std::fs::read(&path)?;
        Self::from_bytes(data, path)
    }

    /// Parse font data; `path` is only used in messages
    pub fn from_bytes(data: Vec<u8>, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let face = Face::parse(&data, 0).map_err(|e| HandoutError::FontParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let units_per_em = f32::from(face.units_per_em().max(1));
        let to_1000 = |value: f32| (value * 1000.0 / units_per_em).round() as i64;

        let notdef_advance = face
            .glyph_hor_advance(ttf_parser::GlyphId(0))
            .map(f32::from)
            .unwrap_or(0.0);

        let widths = (FIRST_CHAR..=LAST_CHAR)
            .map(|code| match winansi_char(code) {
                Some(ch) => {
                    let advance = face
                        .glyph_index(ch)
                        .and_then(|gid| face.glyph_hor_advance(gid))
                        .map(f32::from)
                        .unwrap_or(notdef_advance);
                    to_1000(advance)
                }
                None => 0,
            })
            .collect();

        let bbox = face.global_bounding_box();
        let mut flags = 32; // Nonsymbolic
        if face.is_monospaced() {
            flags |= 1;
        }
        if face.is_italic() {
            flags |= 64;
        }

        let metrics = DescriptorMetrics {
            flags,
            bbox: [
                to_1000(f32::from(bbox.x_min)),
                to_1000(f32::from(bbox.y_min)),
                to_1000(f32::from(bbox.x_max)),
                to_1000(f32::from(bbox.y_max)),
            ],
            italic_angle: if face.is_italic() { -12 } else { 0 },
            ascent: to_1000(f32::from(face.ascender())),
            descent: to_1000(f32::from(face.descender())),
            cap_height: to_1000(f32::from(
                face.capital_height().unwrap_or_else(|| face.ascender()),
            )),
            stem_v: if face.is_bold() { 120 } else { 80 },
        };

        let postscript_name = face
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id::POST_SCRIPT_NAME)
            .and_then(|name| name.to_string())
            .map(|name| sanitize_font_name(&name))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "LexendDeca-SemiBold".to_string());

        Ok(Self {
            path,
            data,
            postscript_name,
            widths,
            metrics,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    /// Width of a character code in 1/1000 em
    fn code_width(&self, code: u8) -> i64 {
        code.checked_sub(FIRST_CHAR)
            .and_then(|idx| self.widths.get(usize::from(idx)))
            .copied()
            .unwrap_or(0)
    }
}

impl FontProvider for DisplayFont {
    fn encode(&self, text: &str) -> Vec<u8> {
        encode_winansi(text)
    }

    fn measure(&self, text: &str, size: f32) -> f32 {
        let units: i64 = self
            .encode(text)
            .into_iter()
            .map(|code| self.code_width(code))
            .sum();
        units as f32 * size / 1000.0
    }

    fn embed(&self, doc: &mut Document) -> Result<ObjectId> {
        let mut file_dict = Dictionary::new();
        file_dict.set("Length1", Object::Integer(self.data.len() as i64));
        let file_id = doc.add_object(Stream::new(file_dict, self.data.clone()));

        let name = Object::Name(self.postscript_name.as_bytes().to_vec());
        let m = &self.metrics;
        let descriptor_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"FontDescriptor".to_vec())),
            ("FontName", name.clone()),
            ("Flags", Object::Integer(m.flags)),
            (
                "FontBBox",
                Object::Array(m.bbox.iter().map(|&v| Object::Integer(v)).collect()),
            ),
            ("ItalicAngle", Object::Integer(m.italic_angle)),
            ("Ascent", Object::Integer(m.ascent)),
            ("Descent", Object::Integer(m.descent)),
            ("CapHeight", Object::Integer(m.cap_height)),
            ("StemV", Object::Integer(m.stem_v)),
            ("FontFile2", Object::Reference(file_id)),
        ]));

        let font_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"TrueType".to_vec())),
            ("BaseFont", name),
            ("FirstChar", Object::Integer(i64::from(FIRST_CHAR))),
            ("LastChar", Object::Integer(i64::from(LAST_CHAR))),
            (
                "Widths",
                Object::Array(self.widths.iter().map(|&w| Object::Integer(w)).collect()),
            ),
            ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ("FontDescriptor", Object::Reference(descriptor_id)),
        ]));

        Ok(font_id)
    }
}

/// Character for a WinAnsi code, limited to the range WinAnsi shares with Latin-1.
fn winansi_char(code: u8) -> Option<char> {
    match code {
        32..=126 | 160..=255 => Some(char::from(code)),
        _ => None,
    }
}

/// Encode text as WinAnsi bytes; unsupported characters become `?`.
pub(crate) fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match u8::try_from(u32::from(ch)) {
            Ok(code) if winansi_char(code).is_some() => code,
            _ => b'?',
        })
        .collect()
}

fn sanitize_font_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

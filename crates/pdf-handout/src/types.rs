use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandoutError {
    #[error("Font not found: {}", .0.display())]
    FontNotFound(PathBuf),
    #[error("Failed to parse font {}: {reason}", path.display())]
    FontParse { path: PathBuf, reason: String },
    #[error("Could not determine the home directory")]
    NoHomeDir,
    #[error("Failed to open {}: {reason}", path.display())]
    DocumentOpen { path: PathBuf, reason: String },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Page index {index} out of range ({count} pages)")]
    PageOutOfRange { index: usize, count: usize },
    #[error("Page pair ({first}, {second}) must reference two distinct pages")]
    InvalidPair { first: usize, second: usize },
    #[error("Output path would overwrite the input: {}", .0.display())]
    OutputCollision(PathBuf),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, HandoutError>;

/// Header metadata derived from a worksheet file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Course week (first digit group of the file name)
    pub week: u32,
    /// Part within the week (second digit group, 1 when absent)
    pub part: u32,
    /// Calendar year printed in the footer
    pub year: i32,
}

impl Metadata {
    /// Metadata used when the file name carries no week/part
    pub fn fallback(year: i32) -> Self {
        Self {
            week: 1,
            part: 1,
            year,
        }
    }
}

/// Two consecutive source page indices placed on one output page.
///
/// `first` always lands in the upper slot and `second` in the lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePair {
    pub first: usize,
    pub second: usize,
}

impl PagePair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

/// Summary of one converted worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Pages in the worksheet
    pub source_pages: usize,
    /// Pages written to the handout
    pub output_pages: usize,
    /// Whether an unpaired last page was left out
    pub dropped_trailing_page: bool,
    pub metadata: Metadata,
}

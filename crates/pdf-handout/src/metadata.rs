//! Header metadata from worksheet file names

use crate::types::Metadata;
use chrono::Datelike;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `<week>[-<part>]-Worksheet` at the start of the file name
static WORKSHEET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:-(\d+))?-Worksheet").expect("worksheet name pattern is valid")
});

impl Metadata {
    /// Derive metadata from a path's file name; see [`Metadata::from_file_name`].
    pub fn from_path(path: &Path, year: i32) -> Self {
        match path.file_name() {
            Some(name) => Self::from_file_name(&name.to_string_lossy(), year),
            None => Self::fallback(year),
        }
    }

    /// Derive metadata from a file name such as `3-2-Worksheet.pdf`.
    ///
    /// The first digit group is the week, the optional second one the part.
    /// Names that do not match yield week 1, part 1.
    pub fn from_file_name(name: &str, year: i32) -> Self {
        let parsed = WORKSHEET_NAME.captures(name).and_then(|caps| {
            let week = caps.get(1)?.as_str().parse().ok()?;
            let part = match caps.get(2) {
                Some(m) => m.as_str().parse().ok()?,
                None => 1,
            };
            Some(Self { week, part, year })
        });

        parsed.unwrap_or_else(|| {
            log::debug!("No week/part in {name:?}, using defaults");
            Self::fallback(year)
        })
    }
}

/// Calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

//! How a staged file is previewed in the list.
//!
//! Images get a thumbnail; everything else gets an icon picked
//! from a fixed extension table.  Also provides the small text helpers
//! used by each preview row (human-readable sizes, truncated labels,
//! MIME type captions).

use std::borrow::Cow;
use std::fmt;

use crate::types::FileContent;

/// Icon shown for a file that has no thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileIcon {
    Pdf,
    Word,
    Excel,
    Presentation,
    Archive,
    Text,
    Spreadsheet,
    Image,
    /// Fallback for unknown extensions.
    Generic,
}

/// Extension → icon table.  Keys are lowercase.
const EXTENSION_ICONS: &[(&str, FileIcon)] = &[
    ("pdf", FileIcon::Pdf),
    ("doc", FileIcon::Word),
    ("docx", FileIcon::Word),
    ("xls", FileIcon::Excel),
    ("xlsx", FileIcon::Excel),
    ("ppt", FileIcon::Presentation),
    ("pptx", FileIcon::Presentation),
    ("zip", FileIcon::Archive),
    ("rar", FileIcon::Archive),
    ("txt", FileIcon::Text),
    ("csv", FileIcon::Spreadsheet),
    ("jpg", FileIcon::Image),
    ("jpeg", FileIcon::Image),
    ("png", FileIcon::Image),
    ("gif", FileIcon::Image),
];

impl FileIcon {
    /// Look up the icon for a file name by its extension.
    ///
    /// Names without an extension, and extensions missing from the
    /// table, map to [`FileIcon::Generic`].  Only text after a dot
    /// counts as an extension: a bare `"pdf"` is a name, not a PDF.
    /// A leading dot does count (`".txt"` is text).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.rsplit_once('.')
            .and_then(|(_, ext)| {
                EXTENSION_ICONS
                    .iter()
                    .find(|(known, _)| known.eq_ignore_ascii_case(ext))
                    .map(|&(_, icon)| icon)
            })
            .unwrap_or(Self::Generic)
    }

    /// Icon for a file, falling back to [`FileIcon::Image`] for image
    /// MIME types whose extension is not in the table.
    ///
    /// Used when an image's thumbnail cannot be produced.
    #[must_use]
    pub fn for_content(content: &FileContent) -> Self {
        match Self::from_name(content.name()) {
            Self::Generic if content.is_image() => Self::Image,
            icon => icon,
        }
    }

    /// Short human-readable label, used as accessible text for the icon.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF document",
            Self::Word => "Word document",
            Self::Excel => "Excel workbook",
            Self::Presentation => "Presentation",
            Self::Archive => "Archive",
            Self::Text => "Text file",
            Self::Spreadsheet => "Spreadsheet",
            Self::Image => "Image",
            Self::Generic => "File",
        }
    }
}

impl fmt::Display for FileIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Preview chosen for one staged file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// Let the browser decode the file and show a thumbnail.
    Thumbnail,
    /// Show a static icon.
    Icon(FileIcon),
}

impl Preview {
    /// Thumbnail for `image/*` content, icon by extension otherwise.
    #[must_use]
    pub fn for_content(content: &FileContent) -> Self {
        if content.is_image() {
            Self::Thumbnail
        } else {
            Self::Icon(FileIcon::from_name(content.name()))
        }
    }
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with 1024-based units, e.g. `"488.28 KB"`.
///
/// Values are rounded to two decimals with trailing zeros dropped, so
/// 1024 bytes reads `"1 KB"`.  Anything beyond the gigabyte range is
/// still expressed in GB.
#[must_use]
#[allow(clippy::cast_precision_loss)] // display only; f64 is exact up to 2^53
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Shorten a name for display to at most `limit` characters.
///
/// Names longer than `limit` keep their first `limit - 3` characters
/// followed by `"..."`.  Counts characters, not bytes.
#[must_use]
pub fn truncate_display_name(name: &str, limit: usize) -> Cow<'_, str> {
    if name.chars().count() <= limit {
        return Cow::Borrowed(name);
    }
    let keep = limit.saturating_sub(3);
    let head: String = name.chars().take(keep).collect();
    Cow::Owned(format!("{head}..."))
}

/// Caption for a file's type: its MIME type, or `"Unknown"`.
#[must_use]
pub fn type_label(content: &FileContent) -> &str {
    if content.mime_type().is_empty() {
        "Unknown"
    } else {
        content.mime_type()
    }
}

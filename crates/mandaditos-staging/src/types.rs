//! Core data types for the staged-upload working set.

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;

/// Opaque identifier of one working-set entry.
///
/// Issued by [`StagedList`](crate::StagedList) from a monotonic counter,
/// so an id is never handed out twice by the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// Immutable file payload plus the metadata captured at selection time.
///
/// The byte buffer is reference-counted: the buffer handed to
/// [`new`](Self::new) is kept as is, and renaming produces a new
/// `FileContent` that shares the same bytes instead of copying them.
#[derive(Debug, Clone)]
pub struct FileContent {
    name: String,
    mime_type: String,
    last_modified: i64,
    bytes: Bytes,
}

impl FileContent {
    /// Capture a file's bytes and metadata.
    ///
    /// `last_modified` is in milliseconds since the Unix epoch, as
    /// reported by the browser's `File.lastModified`.  A `Bytes` or
    /// `Vec<u8>` buffer is taken over without copying.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        last_modified: i64,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            last_modified,
            bytes: bytes.into(),
        }
    }

    /// File name as it was when selected.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type reported by the browser; empty when unknown.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Last-modified timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn last_modified(&self) -> i64 {
        self.last_modified
    }

    /// Size of the payload in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the MIME type marks this file as an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// A copy of this content under a different name.
    ///
    /// Bytes, MIME type and timestamp are shared with `self`.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: self.mime_type.clone(),
            last_modified: self.last_modified,
            bytes: self.bytes.clone(),
        }
    }

    /// Whether `other` shares this content's byte buffer.
    #[must_use]
    pub fn shares_bytes_with(&self, other: &Self) -> bool {
        self.bytes.as_ptr() == other.bytes.as_ptr() && self.bytes.len() == other.bytes.len()
    }
}

impl PartialEq for FileContent {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.mime_type == other.mime_type
            && self.last_modified == other.last_modified
            && (self.shares_bytes_with(other) || self.bytes == other.bytes)
    }
}

impl Eq for FileContent {}

/// One entry in the working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    id: FileId,
    content: FileContent,
    display_name: String,
}

impl StagedFile {
    pub(crate) fn new(id: FileId, content: FileContent) -> Self {
        let display_name = content.name().to_owned();
        Self {
            id,
            content,
            display_name,
        }
    }

    #[must_use]
    pub const fn id(&self) -> FileId {
        self.id
    }

    /// The content as captured at selection time.
    #[must_use]
    pub const fn content(&self) -> &FileContent {
        &self.content
    }

    /// The user-editable name the file will be submitted under.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub(crate) fn set_display_name(&mut self, name: String) {
        self.display_name = name;
    }

    /// Whether the display name differs from the original name.
    #[must_use]
    pub fn is_renamed(&self) -> bool {
        self.display_name != self.content.name()
    }

    /// The content this entry submits.
    ///
    /// Borrows the original content while the name is unchanged;
    /// otherwise returns a renamed copy sharing the same bytes.
    #[must_use]
    pub fn submission(&self) -> Cow<'_, FileContent> {
        if self.is_renamed() {
            Cow::Owned(self.content.renamed(self.display_name.as_str()))
        } else {
            Cow::Borrowed(&self.content)
        }
    }
}

//! mandaditos-staging: Pure staged-upload working set (sans-IO).
//!
//! Holds the files a user has picked or dropped before submission,
//! lets them be renamed or removed, and derives the collection that a
//! multipart form submission transmits.  Also decides how each entry is
//! previewed, bounds how much staged content is held in memory, guards
//! against duplicate submissions, and interprets the upload endpoint's
//! response.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte buffers and returns structured data.  All browser interaction
//! lives in `mandaditos-io`.

pub mod config;
pub mod list;
pub mod preview;
pub mod submit;
pub mod theme;
pub mod types;

pub use config::{ConfigError, UploadConfig};
pub use list::{StageError, StagedList, StagingBudget, ViewState};
pub use preview::{FileIcon, Preview, format_file_size, truncate_display_name, type_label};
pub use submit::{
    ResponseSummary, SubmitError, SubmitGate, UploadError, UploadOutcome, interpret_response,
};
pub use theme::Theme;
pub use types::{FileContent, FileId, StagedFile};

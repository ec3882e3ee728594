//! mandaditos-io: Browser I/O and Dioxus component library.
//!
//! Handles reading picked and dropped files, posting the multipart
//! upload, persisting the theme preference, creating object URLs for
//! image previews, and provides the UI components of the upload form.

pub mod components;
pub mod config;
pub mod object_url;
pub mod picked;
pub mod storage;
pub mod transport;

pub use components::{DropZone, FileList, FilePreview, SubmitButton, ThemeToggle};
pub use transport::TransportError;

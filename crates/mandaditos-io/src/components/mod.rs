//! Dioxus UI components for mandaditos.
//!
//! Provides the drop zone with its file picker, the staged-file list
//! and its per-file preview rows, the submit button, and the theme
//! toggle.

mod drop_zone;
mod file_list;
mod file_preview;
mod submit_button;
mod theme_toggle;

pub use drop_zone::DropZone;
pub use file_list::FileList;
pub use file_preview::FilePreview;
pub use submit_button::SubmitButton;
pub use theme_toggle::ThemeToggle;

//! Reading picked or dropped files into staged content.

use dioxus::html::FileData;
use mandaditos_staging::{FileContent, StagingBudget};

/// Result of reading a batch of picked files.
#[derive(Debug, Default)]
pub struct PickedFiles {
    /// Files read successfully, in the order they were handed over.
    pub contents: Vec<FileContent>,
    /// One message per file that was refused or could not be read.
    pub failures: Vec<String>,
}

/// Read every file's bytes and capture its metadata.
///
/// Each file is checked against `budget` before any of it is read, so
/// a batch too large to hold in memory is refused file by file instead
/// of exhausting the heap.  Refused and unreadable files are reported
/// in [`PickedFiles::failures`]; the rest of the batch still loads.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn read_files(files: Vec<FileData>, mut budget: StagingBudget) -> PickedFiles {
    let mut picked = PickedFiles::default();
    for file in files {
        let name = file.name();
        if let Err(e) = budget.reserve(&name, file.size()) {
            web_sys::console::warn_1(&format!("skipped {name}: {e}").into());
            picked.failures.push(e.to_string());
            continue;
        }
        match file.read_bytes().await {
            Ok(bytes) => {
                let mime_type = file.content_type().unwrap_or_default();
                let last_modified = i64::try_from(file.last_modified()).unwrap_or_default();
                // The read buffer becomes the staged buffer as is.
                picked
                    .contents
                    .push(FileContent::new(name, mime_type, last_modified, bytes));
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("failed to read {name}: {e}").into());
                picked.failures.push(format!("Failed to read {name}: {e}"));
            }
        }
    }
    picked
}

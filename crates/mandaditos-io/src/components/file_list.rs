//! Ordered list of staged-file previews.

use dioxus::prelude::*;
use mandaditos_staging::{FileId, StagedList};

use super::file_preview::FilePreview;

/// Props for the [`FileList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileListProps {
    /// The working set, rendered in insertion order.
    files: StagedList,
    name_display_limit: usize,
    thumbnail_size: u32,
    on_rename: EventHandler<(FileId, String)>,
    on_remove: EventHandler<FileId>,
}

/// Renders one [`FilePreview`] per staged file.
///
/// Rows are keyed by file id, so removing an entry drops exactly its
/// row (and its handlers) while the others keep their state.
#[component]
pub fn FileList(props: FileListProps) -> Element {
    rsx! {
        ul { class: "file-previews",
            for entry in props.files.iter() {
                FilePreview {
                    key: "{entry.id()}",
                    id: entry.id(),
                    content: entry.content().clone(),
                    display_name: entry.display_name().to_owned(),
                    name_display_limit: props.name_display_limit,
                    thumbnail_size: props.thumbnail_size,
                    on_rename: props.on_rename,
                    on_remove: props.on_remove,
                }
            }
        }
    }
}

//! Drop zone with a multi-file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use mandaditos_staging::{FileContent, StagingBudget};

use crate::picked;

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Called with every file that was read successfully, in order.
    on_files: EventHandler<Vec<FileContent>>,
    /// Whether files are already staged.  Switches the prompt to an
    /// "add more" button.
    has_files: bool,
    /// Room left for new files; larger files are refused unread.
    budget: StagingBudget,
    /// Disables picking and dropping while an upload is in flight.
    #[props(default)]
    disabled: bool,
}

/// A drag-and-drop zone with a file picker button.
///
/// Any number of files can be picked or dropped at once.  Their bytes
/// are read and forwarded through `on_files`; files that do not fit
/// the budget or cannot be read are reported inline and skipped.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Shared by the picker and drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        if files.is_empty() || props.disabled {
            return;
        }
        let picked = picked::read_files(files, props.budget).await;
        error.set(if picked.failures.is_empty() {
            None
        } else {
            Some(picked.failures.join("; "))
        });
        if !picked.contents.is_empty() {
            props.on_files.call(picked.contents);
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "drop-zone drop-zone-active"
    } else if props.has_files {
        "drop-zone"
    } else {
        "drop-zone drop-zone-empty"
    };
    let picker_class = if props.disabled {
        "btn btn-secondary btn-disabled"
    } else {
        "btn btn-secondary"
    };
    let picker_label = if props.has_files {
        "Add more files"
    } else {
        "Choose files"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if !props.has_files {
                p { class: "drop-zone-prompt",
                    "Drag files here or "
                }
            }

            label {
                class: "{picker_class}",
                input {
                    r#type: "file",
                    multiple: true,
                    class: "hidden",
                    disabled: props.disabled,
                    onchange: handle_files,
                }
                "{picker_label}"
            }

            if let Some(ref err) = error() {
                p { class: "text-error", "{err}" }
            }
        }
    }
}

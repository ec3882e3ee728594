//! One row of the staged-file list: preview, editable name, actions.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdFile, LdFileArchive, LdFileImage, LdFileSpreadsheet, LdFileText, LdPencil, LdPresentation,
    LdTrash2,
};
use mandaditos_staging::{
    FileContent, FileIcon, FileId, Preview, format_file_size, truncate_display_name, type_label,
};

use crate::object_url;

const ICON_SIZE: u32 = 40;

/// What the visual slot of a row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Visual {
    Image(String),
    Icon(FileIcon),
}

/// Props for the [`FilePreview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FilePreviewProps {
    id: FileId,
    /// Content as captured at selection time.
    content: FileContent,
    /// Name the file will be submitted under.
    display_name: String,
    /// Longest name shown in the label before truncation.
    name_display_limit: usize,
    /// Largest edge, in pixels, a preview image is drawn at.
    thumbnail_size: u32,
    /// Fired with the new name when the name field is committed.
    on_rename: EventHandler<(FileId, String)>,
    /// Fired when the remove button is clicked.
    on_remove: EventHandler<FileId>,
}

/// Preview row for a single staged file.
///
/// Images are shown from an object URL over their original bytes and
/// decoded by the browser; the row shows the file-type icon instead if
/// the URL cannot be created or the image fails to load.
#[component]
pub fn FilePreview(props: FilePreviewProps) -> Element {
    let broken = use_signal(|| false);
    let mut name_input = use_signal(|| Option::<Rc<MountedData>>::None);

    let id = props.id;
    let preview = Preview::for_content(&props.content);

    // Entries are keyed by id, so this runs once per staged file.
    let blob_url = use_hook(|| {
        if preview != Preview::Thumbnail {
            return None;
        }
        match object_url::content_blob_url(&props.content) {
            Ok(url) => Some(url),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("no preview for {}: {e}", props.content.name()).into(),
                );
                None
            }
        }
    });
    use_drop({
        let blob_url = blob_url.clone();
        move || {
            if let Some(url) = &blob_url {
                object_url::revoke_blob_url(url);
            }
        }
    });

    let label = truncate_display_name(&props.display_name, props.name_display_limit);
    let size = format_file_size(props.content.size());
    let kind = type_label(&props.content);
    let fallback_icon = match preview {
        Preview::Icon(icon) => icon,
        Preview::Thumbnail => FileIcon::for_content(&props.content),
    };
    let visual = choose_visual(blob_url.as_deref(), broken(), fallback_icon);
    let image_style = thumbnail_style(props.thumbnail_size);

    rsx! {
        li { class: "file-preview",
            div { class: "file-preview-visual",
                {render_visual(visual, &label, &image_style, broken)}
            }

            div { class: "file-info",
                p { class: "file-label", title: "{props.display_name}", "{label}" }
                input {
                    r#type: "text",
                    class: "file-name-input",
                    value: "{props.display_name}",
                    aria_label: "File name",
                    onmounted: move |evt| name_input.set(Some(evt.data())),
                    onchange: move |evt: FormEvent| props.on_rename.call((id, evt.value())),
                }
                p { class: "file-meta", "{size} • {kind}" }
            }

            div { class: "file-actions",
                button {
                    r#type: "button",
                    class: "btn btn-icon",
                    title: "Edit name",
                    aria_label: "Edit name",
                    onclick: move |_| async move {
                        if let Some(input) = name_input() {
                            let _ = input.set_focus(true).await;
                        }
                    },
                    Icon { width: 16, height: 16, icon: LdPencil }
                }
                button {
                    r#type: "button",
                    class: "btn btn-icon btn-danger",
                    title: "Remove",
                    aria_label: "Remove",
                    onclick: move |_| props.on_remove.call(id),
                    Icon { width: 16, height: 16, icon: LdTrash2 }
                }
            }
        }
    }
}

/// Render the preview image, or the icon when there is none.
fn render_visual(visual: Visual, alt: &str, style: &str, mut broken: Signal<bool>) -> Element {
    match visual {
        Visual::Image(url) => rsx! {
            img {
                src: "{url}",
                class: "preview-thumb",
                style: "{style}",
                alt: "{alt}",
                decoding: "async",
                onerror: move |_| broken.set(true),
            }
        },
        Visual::Icon(icon) => render_icon(icon),
    }
}

/// The image while it has a usable URL, the file-type icon otherwise.
fn choose_visual(url: Option<&str>, broken: bool, fallback: FileIcon) -> Visual {
    match url {
        Some(url) if !broken => Visual::Image(url.to_owned()),
        _ => Visual::Icon(fallback),
    }
}

fn thumbnail_style(max_side: u32) -> String {
    format!("max-width: {max_side}px; max-height: {max_side}px;")
}

/// Render the icon for a file type.
fn render_icon(icon: FileIcon) -> Element {
    let label = icon.label();
    let glyph = match icon {
        FileIcon::Pdf | FileIcon::Word | FileIcon::Text => {
            rsx! { Icon { width: ICON_SIZE, height: ICON_SIZE, icon: LdFileText } }
        }
        FileIcon::Excel | FileIcon::Spreadsheet => {
            rsx! { Icon { width: ICON_SIZE, height: ICON_SIZE, icon: LdFileSpreadsheet } }
        }
        FileIcon::Presentation => {
            rsx! { Icon { width: ICON_SIZE, height: ICON_SIZE, icon: LdPresentation } }
        }
        FileIcon::Archive => {
            rsx! { Icon { width: ICON_SIZE, height: ICON_SIZE, icon: LdFileArchive } }
        }
        FileIcon::Image => {
            rsx! { Icon { width: ICON_SIZE, height: ICON_SIZE, icon: LdFileImage } }
        }
        FileIcon::Generic => rsx! { Icon { width: ICON_SIZE, height: ICON_SIZE, icon: LdFile } },
    };

    rsx! {
        div { class: "file-icon", title: "{label}", role: "img", aria_label: "{label}",
            {glyph}
            if let Some(badge) = badge(icon) {
                span { class: "file-icon-badge", "{badge}" }
            }
        }
    }
}

/// Short badge distinguishing types that share a glyph.
const fn badge(icon: FileIcon) -> Option<&'static str> {
    match icon {
        FileIcon::Pdf => Some("PDF"),
        FileIcon::Word => Some("DOC"),
        FileIcon::Excel => Some("XLS"),
        FileIcon::Text => Some("TXT"),
        FileIcon::Spreadsheet => Some("CSV"),
        FileIcon::Presentation
        | FileIcon::Archive
        | FileIcon::Image
        | FileIcon::Generic => None,
    }
}

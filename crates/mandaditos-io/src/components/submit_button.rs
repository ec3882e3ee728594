//! Upload submit button with busy indicator.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

/// Props for the [`SubmitButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    /// Button text while idle, e.g. `"Upload 2 files"`.
    label: String,
    /// A submission is in flight.
    busy: bool,
    on_submit: EventHandler<()>,
}

/// Disabled only while an upload is running, when it shows a spinner
/// and "Uploading...".  Clicking with nothing staged is left to the
/// submit handler, which reports why nothing was sent.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "btn btn-primary upload-button",
            disabled: props.busy,
            "aria-busy": "{props.busy}",
            onclick: move |_| props.on_submit.call(()),

            if props.busy {
                span { class: "spinner", aria_hidden: "true" }
                "Uploading..."
            } else {
                Icon { width: 18, height: 18, icon: LdUpload }
                "{props.label}"
            }
        }
    }
}

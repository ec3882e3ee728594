use std::borrow::Cow;

use dioxus::prelude::*;
use mandaditos_io::{DropZone, FileList, SubmitButton, ThemeToggle, storage, transport};
use mandaditos_staging::submit::RETRY_MESSAGE;
use mandaditos_staging::{FileContent, FileId, StagedList, SubmitGate, ViewState};

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the working set, the submit busy flag, the notice line, and the
/// theme, and wires them into the drop zone, preview list, submit
/// button, and theme toggle.  This is the page's only initialization
/// routine.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let config = use_hook(mandaditos_io::config::load_config);
    let mut staged = use_signal(StagedList::new);
    let mut gate = use_signal(SubmitGate::new);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut theme = use_signal({
        let config = config.clone();
        move || storage::load_theme(&config.theme_storage_key, config.default_theme)
    });

    // --- Theme ---
    // Re-applies whenever the theme signal changes, including at startup.
    use_effect(move || {
        if let Err(e) = storage::apply_theme(theme()) {
            web_sys::console::warn_1(&format!("could not apply theme: {e}").into());
        }
    });

    let on_theme_toggle = {
        let key = config.theme_storage_key.clone();
        move |()| {
            let next = theme().toggled();
            theme.set(next);
            if let Err(e) = storage::save_theme(&key, next) {
                web_sys::console::warn_1(&format!("could not save theme: {e}").into());
            }
        }
    };

    // --- Working set handlers ---
    let on_files = move |files: Vec<FileContent>| {
        staged.write().add_files(files);
        notice.set(None);
    };

    let on_rename = move |(id, name): (FileId, String)| {
        staged.write().rename(id, name);
    };

    let on_remove = move |id: FileId| {
        staged.write().remove(id);
    };

    // --- Submission ---
    let on_submit = {
        let config = config.clone();
        move |()| {
            // An empty working set is refused here with a notice.
            let pending = staged.peek().len();
            if let Err(e) = gate.write().begin(pending) {
                notice.set(Some(e.to_string()));
                return;
            }
            notice.set(None);

            let files: Vec<FileContent> = staged
                .peek()
                .synchronized_files()
                .into_iter()
                .map(Cow::into_owned)
                .collect();
            let config = config.clone();

            spawn(async move {
                match transport::upload(&config, &files).await {
                    Ok(outcome) => {
                        staged.write().reset();
                        // The busy flag stays set until the page navigates
                        // away; only clear it if navigation itself fails.
                        if let Err(e) = transport::follow(&outcome) {
                            web_sys::console::error_1(
                                &format!("upload succeeded but navigation failed: {e}").into(),
                            );
                            gate.write().finish();
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("upload failed: {e}").into());
                        gate.write().finish();
                        notice.set(Some(RETRY_MESSAGE.to_owned()));
                    }
                }
            });
        }
    };

    let view = staged.read().view_state();
    let busy = gate.read().is_busy();
    let upload_label = staged.read().upload_label();
    let budget = staged.read().budget(config.max_staged_bytes);

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div {
            class: "app",
            // Stray drops outside the zone must not navigate to the file.
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| evt.prevent_default(),

            header { class: "app-header",
                div {
                    h1 { class: "app-title", "mandaditos" }
                    p { class: "text-muted", "Stage files, rename them, and upload them together" }
                }
                ThemeToggle {
                    theme: theme(),
                    on_toggle: on_theme_toggle,
                }
            }

            main { class: "upload-card",
                DropZone {
                    on_files: on_files,
                    has_files: view != ViewState::Empty,
                    budget: budget,
                    disabled: busy,
                }

                if let ViewState::Pending { .. } = view {
                    FileList {
                        files: staged(),
                        name_display_limit: config.name_display_limit,
                        thumbnail_size: config.thumbnail_size,
                        on_rename: on_rename,
                        on_remove: on_remove,
                    }
                }

                if let Some(ref message) = notice() {
                    div { class: "notice notice-error", role: "alert",
                        p { "{message}" }
                    }
                }

                div { class: "upload-actions",
                    if view != ViewState::Empty && !busy {
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                staged.write().reset();
                                notice.set(None);
                            },
                            "Clear"
                        }
                    }
                    SubmitButton {
                        label: upload_label,
                        busy: busy,
                        on_submit: on_submit,
                    }
                }
            }
        }
    }
}

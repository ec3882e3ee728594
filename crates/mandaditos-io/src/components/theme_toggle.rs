//! Light/dark theme toggle button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdSun};
use mandaditos_staging::Theme;

/// Props for the [`ThemeToggle`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ThemeToggleProps {
    /// The active theme.
    theme: Theme,
    /// Fired on click; the parent flips and persists the theme.
    on_toggle: EventHandler<()>,
}

/// Shows a moon in light mode and a sun in dark mode.
#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let label = props.theme.toggle_label();

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| props.on_toggle.call(()),
            {match props.theme {
                Theme::Light => rsx! { Icon { width: 20, height: 20, icon: LdMoon } },
                Theme::Dark => rsx! { Icon { width: 20, height: 20, icon: LdSun } },
            }}
        }
    }
}

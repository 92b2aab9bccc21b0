use crate::theme::COLOR_SCHEMES;
use dioxus::prelude::*;

/// Colour scheme picker
///
/// Inert markup: switching and persisting the scheme is left to page scripts.
#[component]
pub fn ThemeSelector() -> Element {
    rsx! {
        label { class: "color-scheme",
            "Theme: "
            select { id: "theme-selector",
                for scheme in COLOR_SCHEMES {
                    option { key: "{scheme:?}", value: scheme.value(), {scheme.label()} }
                }
            }
        }
    }
}

pub fn render_theme_selector() -> String {
    dioxus_ssr::render_element(rsx! {
        ThemeSelector {}
    })
}

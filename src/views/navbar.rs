use crate::nav::Navigation;
use dioxus::prelude::*;

/// The site navigation bar
#[component]
pub fn Navbar(navigation: Navigation) -> Element {
    rsx! {
        nav {
            for (index, link) in navigation.links.iter().enumerate() {
                a {
                    key: "{index}-{link.href}",
                    href: "{link.href}",
                    class: link.class(),
                    target: link.target(),
                    "{link.title}"
                }
            }
        }
    }
}

/// Static markup for the navigation bar
pub fn render_navbar(navigation: &Navigation) -> String {
    let navigation = navigation.clone();
    dioxus_ssr::render_element(rsx! {
        Navbar { navigation }
    })
}

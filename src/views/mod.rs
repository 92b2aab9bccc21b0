//! Dioxus components for the site chrome, rendered to static markup

/// Navigation bar component
mod navbar;
pub use navbar::{Navbar, render_navbar};

/// Theme selector component
mod theme_selector;
pub use theme_selector::{ThemeSelector, render_theme_selector};

//! Colour scheme options offered by the theme selector

/// A `color-scheme` choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Follow the OS/browser preference for both light and dark
    Automatic,
    Dark,
    Light,
}

/// Options in the order the selector lists them
pub const COLOR_SCHEMES: [ColorScheme; 3] =
    [ColorScheme::Automatic, ColorScheme::Dark, ColorScheme::Light];

impl ColorScheme {
    /// Value of the `<option>`, usable as a CSS `color-scheme`
    pub fn value(&self) -> &'static str {
        match self {
            ColorScheme::Automatic => "light dark",
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Automatic => "Automatic",
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
        }
    }
}

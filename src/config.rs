//! Navigation destinations
//!
//! The site ships with a fixed, hand-maintained list of pages. An alternate
//! list can be loaded from JSON for static rendering.

use crate::error::NavError;
use serde::{Deserialize, Serialize};

/// One navigation destination
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Destination {
    /// Path relative to the page (`"."` for home) or an absolute external URL
    pub url: String,
    /// Visible link text
    pub title: String,
}

impl Destination {
    pub fn new(url: &str, title: &str) -> Self {
        Destination {
            url: url.to_string(),
            title: title.to_string(),
        }
    }
}

const PAGES: &[(&str, &str)] = &[
    (".", "Home"),
    ("projects", "Projects"),
    ("cv", "Resume"),
    ("https://github.com/Cassy081/portfolio", "GitHub"),
    ("meta", "Meta"),
    ("contact", "Contact"),
];

/// The site's built-in page list, in display order
pub fn default_pages() -> Vec<Destination> {
    PAGES
        .iter()
        .map(|&(url, title)| Destination::new(url, title))
        .collect()
}

/// Parse a JSON array of `{ "url": .., "title": .. }` objects
pub fn pages_from_json(json: &str) -> Result<Vec<Destination>, NavError> {
    let pages: Vec<Destination> = serde_json::from_str(json)?;
    log::debug!("Loaded {} pages from json", pages.len());
    Ok(pages)
}

pub fn load_pages(path: &std::path::Path) -> Result<Vec<Destination>, NavError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| NavError::Config(format!("{}: {}", path.display(), e)))?;
    pages_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages_order() {
        let titles: Vec<String> = default_pages().into_iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec!["Home", "Projects", "Resume", "GitHub", "Meta", "Contact"]
        );
    }

    #[test]
    fn test_home_is_relative_dot() {
        assert_eq!(default_pages()[0].url, ".");
    }

    #[test]
    fn test_pages_from_json() {
        let pages = pages_from_json(
            r#"[{"url": "blog", "title": "Blog"}, {"url": "https://x.example/", "title": "X"}]"#,
        )
        .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], Destination::new("blog", "Blog"));
        assert_eq!(pages[1].url, "https://x.example/");
    }

    #[test]
    fn test_pages_from_json_missing_title() {
        let err = pages_from_json(r#"[{"url": "blog"}]"#).unwrap_err();
        assert!(matches!(err, NavError::Json(_)));
    }

    #[test]
    fn test_load_pages_missing_file() {
        let err = load_pages(std::path::Path::new("/nonexistent/pages.json")).unwrap_err();
        match err {
            NavError::Config(msg) => assert!(msg.contains("/nonexistent/pages.json")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

//! Attaching the site chrome to a document
//!
//! The document is injected through the [`Document`] trait so the same
//! install step runs against the live page (see `web`) or an in-memory body.

use crate::config::Destination;
use crate::error::NavError;
use crate::nav::{Navigation, PageLocation, build_navigation};
use crate::views::{render_navbar, render_theme_selector};

/// What the install step needs from the hosting page
pub trait Document {
    /// Location of the page being viewed
    fn location(&self) -> Result<PageLocation, NavError>;

    /// Insert markup as the first content of the body
    fn prepend_html(&mut self, html: &str) -> Result<(), NavError>;
}

/// A document body held as ordered markup fragments
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    location: PageLocation,
    body: Vec<String>,
}

impl MemoryDocument {
    pub fn new(location: PageLocation) -> Self {
        MemoryDocument {
            location,
            body: Vec::new(),
        }
    }

    /// Start from existing body markup
    pub fn with_body(location: PageLocation, body: &str) -> Self {
        let mut doc = MemoryDocument::new(location);
        if !body.is_empty() {
            doc.body.push(body.to_string());
        }
        doc
    }

    pub fn fragments(&self) -> &[String] {
        &self.body
    }

    pub fn body_html(&self) -> String {
        self.body.concat()
    }
}

impl Document for MemoryDocument {
    fn location(&self) -> Result<PageLocation, NavError> {
        Ok(self.location.clone())
    }

    fn prepend_html(&mut self, html: &str) -> Result<(), NavError> {
        self.body.insert(0, html.to_string());
        Ok(())
    }
}

/// Build the navigation for the document's page and attach it
///
/// The navigation bar is prepended first and the theme selector after it,
/// so the body ends up as: theme selector, navigation, existing content.
/// Calling this twice adds a second selector and navigation bar.
pub fn install<D: Document>(doc: &mut D, pages: &[Destination]) -> Result<Navigation, NavError> {
    let location = doc.location()?;
    let navigation = build_navigation(pages, &location);

    doc.prepend_html(&render_navbar(&navigation))?;
    doc.prepend_html(&render_theme_selector())?;

    log::info!(
        "Navigation with {} links installed for {}",
        navigation.len(),
        location.href()
    );
    Ok(navigation)
}

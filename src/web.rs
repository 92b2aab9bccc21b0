//! Browser entry point
//!
//! Installs the site chrome into the live page when the wasm module loads.

#![cfg(feature = "web")]

use crate::config::default_pages;
use crate::document::{Document, install};
use crate::error::NavError;
use crate::nav::PageLocation;
use wasm_bindgen::prelude::*;

/// The live page, reached through `window`
pub struct BrowserDocument {
    window: web_sys::Window,
}

impl BrowserDocument {
    pub fn new() -> Result<Self, NavError> {
        let window =
            web_sys::window().ok_or_else(|| NavError::Platform("no global window".to_string()))?;
        Ok(BrowserDocument { window })
    }
}

fn js_error(e: JsValue) -> NavError {
    NavError::Platform(format!("{:?}", e))
}

impl Document for BrowserDocument {
    fn location(&self) -> Result<PageLocation, NavError> {
        let href = self.window.location().href().map_err(js_error)?;
        PageLocation::parse(&href)
    }

    fn prepend_html(&mut self, html: &str) -> Result<(), NavError> {
        let body = self
            .window
            .document()
            .and_then(|d| d.body())
            .ok_or_else(|| NavError::Platform("document has no body".to_string()))?;
        body.insert_adjacent_html("afterbegin", html)
            .map_err(js_error)
    }
}

/// Forwards `log` records to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!("[{}] {}", record.level(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

/// Runs once per page load
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logger();

    web_sys::console::log_1(&"IT’S ALIVE!".into());

    let result = BrowserDocument::new().and_then(|mut doc| install(&mut doc, &default_pages()));
    if let Err(e) = result {
        log::error!("Failed to install navigation: {}", e);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_location_is_absolute() {
        let doc = BrowserDocument::new().unwrap();
        let location = doc.location().unwrap();
        assert!(!location.origin().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_install_prepends_selector_then_nav() {
        let mut doc = BrowserDocument::new().unwrap();
        install(&mut doc, &default_pages()).unwrap();

        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .unwrap();
        let first = body.first_element_child().unwrap();
        assert_eq!(first.tag_name(), "LABEL");
        let second = first.next_element_sibling().unwrap();
        assert_eq!(second.tag_name(), "NAV");
        assert_eq!(second.children().length(), 6);
    }
}

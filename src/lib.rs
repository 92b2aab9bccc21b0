//! Navigation bar and theme selector for the portfolio site
//!
//! The page list is classified against the current location in [`nav`],
//! rendered by the Dioxus components in [`views`] and attached through the
//! [`document::Document`] capability.

pub mod config;
pub mod document;
pub mod error;
pub mod nav;
pub mod theme;
pub mod views;
pub mod web;

pub use config::{Destination, default_pages};
pub use document::{Document, MemoryDocument, install};
pub use error::NavError;
pub use nav::{NavLink, Navigation, PageLocation, build_navigation};

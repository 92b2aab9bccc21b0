//! Navigation builder
//!
//! Turns the ordered page list into classified links for the page currently
//! being viewed. Nothing here touches a document: the result is handed to
//! [`crate::document::install`] which renders and attaches it.

use crate::config::Destination;
use crate::error::NavError;
use url::Url;

/// The page currently being viewed
#[derive(Debug, Clone, PartialEq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(href: &str) -> Result<Self, NavError> {
        let url = Url::parse(href).map_err(|e| NavError::InvalidUrl {
            url: href.to_string(),
            reason: e.to_string(),
        })?;
        Ok(PageLocation { url })
    }

    /// Hostname plus `:port` when the port is not the scheme default
    pub fn host(&self) -> String {
        host_of(&self.url)
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Scheme, host and port, serialized as `location.origin` would be
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Resolve a link the way an anchor's `href` is resolved against its page
    pub fn resolve(&self, href: &str) -> Result<Url, NavError> {
        self.url.join(href).map_err(|e| NavError::InvalidUrl {
            url: href.to_string(),
            reason: e.to_string(),
        })
    }
}

fn host_of(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    }
}

/// A single classified navigation link
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    /// The destination url as written, left for the browser to resolve
    pub href: String,
    pub title: String,
    /// Absolute form of `href` against the current page
    pub resolved: String,
    pub is_current: bool,
    pub is_external: bool,
}

impl NavLink {
    /// Class marking the link to the page being viewed
    pub fn class(&self) -> Option<&'static str> {
        self.is_current.then_some("current")
    }

    /// External links open in a new browsing context
    pub fn target(&self) -> Option<&'static str> {
        self.is_external.then_some("_blank")
    }
}

/// The navigation bar contents, one link per destination in list order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Navigation {
    pub links: Vec<NavLink>,
}

impl Navigation {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn current(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter().filter(|l| l.is_current)
    }
}

/// Classify one destination against the current page
///
/// A url that cannot be resolved is kept as written, like an anchor whose
/// `href` fails to parse: it has no host, so it is never current, and it is
/// external unless the raw text starts with the origin.
pub fn classify(page: &Destination, location: &PageLocation) -> NavLink {
    let origin = location.origin();
    let (resolved, is_current) = match location.resolve(&page.url) {
        // query and fragment take no part in the comparison
        Ok(url) => {
            let is_current = host_of(&url) == location.host() && url.path() == location.path();
            (url.to_string(), is_current)
        }
        Err(e) => {
            log::warn!("Keeping unresolvable link {}: {}", page.url, e);
            (page.url.clone(), false)
        }
    };
    let is_external = !resolved.starts_with(&origin);

    NavLink {
        href: page.url.clone(),
        title: page.title.clone(),
        resolved,
        is_current,
        is_external,
    }
}

/// Build the navigation bar for `location`
///
/// Links keep the order of `pages`. Duplicates are not merged and several
/// links may be marked current.
pub fn build_navigation(pages: &[Destination], location: &PageLocation) -> Navigation {
    let mut links = Vec::with_capacity(pages.len());
    for page in pages {
        let link = classify(page, location);
        log::debug!(
            "{} -> {} (current: {}, external: {})",
            link.title,
            link.resolved,
            link.is_current,
            link.is_external
        );
        links.push(link);
    }
    Navigation { links }
}

//! Head-level stylesheet link for the active webfont

use crate::error::Result;

/// Element id of the shared font link
pub const DEFAULT_LINK_ID: &str = "font-link";

/// Host capability over `<link rel="stylesheet">` elements in the document head
pub trait StylesheetHost {
    fn has_link(&self, id: &str) -> bool;

    /// Append a new stylesheet link with the given id
    fn insert_link(&mut self, id: &str) -> Result<()>;

    fn set_link_href(&mut self, id: &str, href: &str) -> Result<()>;

    /// Remove the link; returns false when it was not there
    fn remove_link(&mut self, id: &str) -> Result<bool>;
}

/// Keeps exactly one stylesheet link pointing at the current font resource
#[derive(Debug, Clone)]
pub struct FontLinkActivator {
    link_id: String,
    /// URL written by the last sync, without the cache-busting suffix
    active_url: Option<String>,
}

impl Default for FontLinkActivator {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_ID)
    }
}

impl FontLinkActivator {
    pub fn new(link_id: impl Into<String>) -> Self {
        Self {
            link_id: link_id.into(),
            active_url: None,
        }
    }

    pub fn link_id(&self) -> &str {
        &self.link_id
    }

    pub fn active_url(&self) -> Option<&str> {
        self.active_url.as_deref()
    }

    /// Point the link at `url`, creating it if needed.
    ///
    /// Does nothing when `url` is what the link already loads. Otherwise the
    /// href becomes `{url}?{stamp}` so the browser refetches it. Returns
    /// whether the link was written.
    pub fn sync<H: StylesheetHost>(&mut self, host: &mut H, url: &str, stamp: u64) -> Result<bool> {
        let present = host.has_link(&self.link_id);
        if present && self.active_url.as_deref() == Some(url) {
            return Ok(false);
        }

        if !present {
            host.insert_link(&self.link_id)?;
        }
        host.set_link_href(&self.link_id, &format!("{}?{}", url, stamp))?;
        self.active_url = Some(url.to_string());
        log::debug!("font link {:?} now loads {:?}", self.link_id, url);
        Ok(true)
    }

    /// Remove the link. Safe to call when it is already gone.
    pub fn teardown<H: StylesheetHost>(&mut self, host: &mut H) -> Result<bool> {
        self.active_url = None;
        host.remove_link(&self.link_id)
    }
}

/// A stylesheet link as held by [`MemoryHead`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkElement {
    pub id: String,
    pub rel: String,
    pub href: String,
}

/// In-memory document head
#[derive(Debug, Clone, Default)]
pub struct MemoryHead {
    links: Vec<LinkElement>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> &[LinkElement] {
        &self.links
    }

    pub fn link(&self, id: &str) -> Option<&LinkElement> {
        self.links.iter().find(|l| l.id == id)
    }
}

impl StylesheetHost for MemoryHead {
    fn has_link(&self, id: &str) -> bool {
        self.link(id).is_some()
    }

    fn insert_link(&mut self, id: &str) -> Result<()> {
        self.links.push(LinkElement {
            id: id.to_string(),
            rel: "stylesheet".to_string(),
            href: String::new(),
        });
        Ok(())
    }

    fn set_link_href(&mut self, id: &str, href: &str) -> Result<()> {
        if let Some(link) = self.links.iter_mut().find(|l| l.id == id) {
            link.href = href.to_string();
        }
        Ok(())
    }

    fn remove_link(&mut self, id: &str) -> Result<bool> {
        let before = self.links.len();
        self.links.retain(|l| l.id != id);
        Ok(self.links.len() != before)
    }
}

/// Current time in milliseconds, used as the cache-busting stamp
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

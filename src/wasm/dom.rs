//! DOM implementations of the host capabilities

use crate::activator::StylesheetHost;
use crate::error::{PreviewError, Result};
use crate::persist::{KeyValueStore, Notifier};
use crate::style::{SelectionSurface, TextStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlLinkElement, Range, Storage, Window};

impl From<JsValue> for PreviewError {
    fn from(err: JsValue) -> Self {
        PreviewError::Host(format!("{:?}", err))
    }
}

/// The content-editable element and the window's selection
pub struct DomSurface {
    window: Window,
    document: Document,
    editor: HtmlElement,
}

impl DomSurface {
    /// Bind to the element with id `editor_id`
    pub fn new(window: Window, editor_id: &str) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| PreviewError::Host("no document".into()))?;
        let editor = document
            .get_element_by_id(editor_id)
            .ok_or_else(|| PreviewError::Host(format!("no element with id {:?}", editor_id)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PreviewError::Host(format!("{:?} is not an HTML element", editor_id)))?;

        Ok(Self {
            window,
            document,
            editor,
        })
    }

    /// Serialized content of the editor
    pub fn markup(&self) -> String {
        self.editor.inner_html()
    }

    pub fn set_markup(&self, markup: &str) {
        self.editor.set_inner_html(markup);
    }

    /// Style the whole editor with the current choice
    pub fn set_base_style(&self, style: &TextStyle) -> Result<()> {
        let css = self.editor.style();
        css.set_property("font-family", &style.family)?;
        css.set_property("font-weight", style.surface_font_weight())?;
        css.set_property("font-style", style.font_style())?;
        Ok(())
    }
}

impl SelectionSurface for DomSurface {
    type Range = Range;

    fn active_selection(&self) -> Option<Range> {
        let selection = self.window.get_selection().ok().flatten()?;
        if selection.range_count() == 0 {
            return None;
        }
        let range = selection.get_range_at(0).ok()?;
        let ancestor = range.common_ancestor_container().ok()?;
        // selections elsewhere on the page are not ours to restyle
        self.editor.contains(Some(&ancestor)).then_some(range)
    }

    fn is_collapsed(&self, range: &Range) -> bool {
        range.collapsed()
    }

    fn wrap_range(&mut self, range: Range, style: &TextStyle) -> Result<()> {
        let span = self
            .document
            .create_element("span")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PreviewError::Host("span is not an HTML element".into()))?;

        let css = span.style();
        css.set_property("font-family", &style.family)?;
        css.set_property("font-weight", style.span_font_weight())?;
        css.set_property("font-style", style.font_style())?;

        let contents = range.extract_contents()?;
        span.append_child(&contents)?;
        range.insert_node(&span)?;
        Ok(())
    }

    fn clear_selection(&mut self) -> Result<()> {
        if let Some(selection) = self.window.get_selection()? {
            selection.remove_all_ranges()?;
        }
        Ok(())
    }
}

/// `<link>` elements in `document.head`
pub struct DomHead {
    document: Document,
}

impl DomHead {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn link(&self, id: &str) -> Result<HtmlLinkElement> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PreviewError::Host(format!("no link with id {:?}", id)))?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|_| PreviewError::Host(format!("{:?} is not a link element", id)))
    }
}

impl StylesheetHost for DomHead {
    fn has_link(&self, id: &str) -> bool {
        self.document
            .get_element_by_id(id)
            .is_some_and(|el| el.dyn_ref::<HtmlLinkElement>().is_some())
    }

    fn insert_link(&mut self, id: &str) -> Result<()> {
        // a non-link element may already hold the id
        if let Some(other) = self.document.get_element_by_id(id) {
            log::warn!("replacing <{}> with id {:?} by a stylesheet link", other.tag_name(), id);
            other.remove();
        }
        let head = self
            .document
            .head()
            .ok_or_else(|| PreviewError::Host("document has no head".into()))?;
        let link = self
            .document
            .create_element("link")?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|_| PreviewError::Host("link is not a link element".into()))?;
        link.set_id(id);
        link.set_rel("stylesheet");
        head.append_child(&link)?;
        Ok(())
    }

    fn set_link_href(&mut self, id: &str, href: &str) -> Result<()> {
        self.link(id)?.set_href(href);
        Ok(())
    }

    fn remove_link(&mut self, id: &str) -> Result<bool> {
        match self.document.get_element_by_id(id) {
            Some(link) => {
                link.remove();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// `window.localStorage`
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    pub fn new(window: &Window) -> Result<Self> {
        let storage = window
            .local_storage()
            .map_err(|e| PreviewError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| PreviewError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| PreviewError::Storage(format!("read {:?}: {:?}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PreviewError::Storage(format!("write {:?}: {:?}", key, e)))
    }
}

/// `window.alert`
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        self.window.alert_with_message(message)?;
        Ok(())
    }
}

//! WASM bindings for the previewer

pub mod dom;
pub mod fetch;

use crate::activator::now_millis;
use crate::error::PreviewError;
use crate::{ApplyOutcome, ControlEvent, FontPreview, PreviewConfig};
use dom::{AlertNotifier, DomHead, DomSurface, LocalStorageStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

impl From<PreviewError> for JsValue {
    fn from(err: PreviewError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Controller plus the page collaborators it drives
struct Host {
    preview: FontPreview,
    surface: DomSurface,
    head: DomHead,
    store: LocalStorageStore,
    notifier: AlertNotifier,
    on_change: Option<js_sys::Function>,
}

impl Host {
    /// Push the current choice out to the head link and the editor style
    fn refresh(&mut self) -> Result<(), PreviewError> {
        self.preview.sync_font_link(&mut self.head, now_millis())?;
        self.surface.set_base_style(&self.preview.surface_style())
    }
}

fn notify_change(callback: Option<js_sys::Function>) {
    if let Some(callback) = callback {
        if let Err(err) = callback.call0(&JsValue::NULL) {
            log::warn!("change callback failed: {:?}", err);
        }
    }
}

/// WASM-exposed previewer bound to one content-editable element
#[wasm_bindgen(js_name = FontPreview)]
pub struct WasmFontPreview {
    host: Rc<RefCell<Host>>,
}

#[wasm_bindgen(js_class = FontPreview)]
impl WasmFontPreview {
    /// Bind to the editor element, restore saved state and activate the font
    /// link. `config_json` may override any `PreviewConfig` field.
    #[wasm_bindgen(constructor)]
    pub fn new(editor_id: &str, config_json: Option<String>) -> Result<WasmFontPreview, JsValue> {
        let config = match config_json {
            Some(json) => PreviewConfig::from_json(&json)?,
            None => PreviewConfig::default(),
        };

        let window = web_sys::window().ok_or_else(|| PreviewError::Host("no window object".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PreviewError::Host("no document".into()))?;
        let surface = DomSurface::new(window.clone(), editor_id)?;
        let store = LocalStorageStore::new(&window)?;

        let mut preview = FontPreview::new(config);
        if let Err(err) = preview.restore(&store) {
            log::warn!("could not restore saved state: {}", err);
        }
        surface.set_markup(&preview.state().text);

        let mut host = Host {
            preview,
            surface,
            head: DomHead::new(document),
            store,
            notifier: AlertNotifier::new(window),
            on_change: None,
        };
        host.refresh()?;

        Ok(Self {
            host: Rc::new(RefCell::new(host)),
        })
    }

    /// Register a callback run whenever the controls need redrawing
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        self.host.borrow_mut().on_change = Some(callback);
    }

    /// Start the one-shot catalog fetch. Completion updates the state and
    /// fires the change callback; failure is logged only.
    #[wasm_bindgen(js_name = loadCatalog)]
    pub fn load_catalog(&self) {
        let host = Rc::clone(&self.host);
        let url = self.host.borrow().preview.config().catalog_url.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch::fetch_catalog(&url).await;
            let callback = {
                let mut host = host.borrow_mut();
                host.preview.on_catalog_loaded(result);
                if let Err(err) = host.refresh() {
                    log::warn!("could not refresh after catalog load: {}", err);
                }
                host.on_change.clone()
            };
            notify_change(callback);
        });
    }

    /// Control view models as JSON
    pub fn controls(&self) -> Result<String, JsValue> {
        let panel = self.host.borrow().preview.controls();
        Ok(serde_json::to_string(&panel).map_err(PreviewError::from)?)
    }

    /// Returns whether a selection was styled
    #[wasm_bindgen(js_name = setFont)]
    pub fn set_font(&self, name: &str) -> Result<bool, JsValue> {
        self.control(ControlEvent::FontChanged(name.to_string()))
    }

    /// Returns whether a selection was styled
    #[wasm_bindgen(js_name = setWeight)]
    pub fn set_weight(&self, weight: &str) -> Result<bool, JsValue> {
        self.control(ControlEvent::WeightChanged(weight.to_string()))
    }

    /// Returns whether a selection was styled
    #[wasm_bindgen(js_name = toggleItalic)]
    pub fn toggle_italic(&self) -> Result<bool, JsValue> {
        self.control(ControlEvent::ItalicToggled)
    }

    /// Record the editor's current markup after user input
    #[wasm_bindgen(js_name = handleInput)]
    pub fn handle_input(&self) {
        let mut host = self.host.borrow_mut();
        let markup = host.surface.markup();
        host.preview.set_text(markup);
    }

    /// Persist the state and show the confirmation
    pub fn save(&self) -> Result<(), JsValue> {
        let mut guard = self.host.borrow_mut();
        let host = &mut *guard;
        host.preview.save(&mut host.store, &host.notifier)?;
        Ok(())
    }

    /// Empty the editor; saved state is kept
    pub fn reset(&self) {
        let callback = {
            let mut host = self.host.borrow_mut();
            host.preview.reset();
            host.surface.set_markup("");
            host.on_change.clone()
        };
        notify_change(callback);
    }

    /// Resolved resource URL of the current family/weight
    #[wasm_bindgen(js_name = fontUrl)]
    pub fn font_url(&self) -> String {
        self.host.borrow().preview.font_url().to_string()
    }

    /// Current editor markup as last recorded
    pub fn text(&self) -> String {
        self.host.borrow().preview.state().text.clone()
    }

    /// Remove the font link from the head
    pub fn dispose(&self) -> Result<bool, JsValue> {
        let mut guard = self.host.borrow_mut();
        let host = &mut *guard;
        Ok(host.preview.release_font_link(&mut host.head)?)
    }
}

impl WasmFontPreview {
    fn control(&self, event: ControlEvent) -> Result<bool, JsValue> {
        let (applied, callback) = {
            let mut guard = self.host.borrow_mut();
            let host = &mut *guard;
            let outcome = host.preview.handle_control(event, &mut host.surface)?;
            let applied = outcome == ApplyOutcome::Applied;
            if applied {
                let markup = host.surface.markup();
                host.preview.set_text(markup);
            }
            // the selection is already styled at this point
            if let Err(err) = host.refresh() {
                log::warn!("could not refresh after control change: {}", err);
            }
            (applied, host.on_change.clone())
        };
        notify_change(callback);
        Ok(applied)
    }
}

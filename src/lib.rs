//! Font Preview: a WebAssembly font-preview core
//!
//! This crate provides the logic behind a browser font previewer:
//! - A font catalog loaded once from a static JSON document
//! - Family/weight/italic controls and the state they drive
//! - Selection-scoped styling of an editable surface
//! - A single head-level stylesheet link for the active webfont
//! - Save/restore of the current choice in durable key/value storage
//!
//! Host concerns (selection, head links, storage, alerts) sit behind small
//! traits so the core runs natively; the `wasm` module binds them to the DOM.

pub mod activator;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod error;
pub mod persist;
pub mod state;
pub mod style;
pub mod surface;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export WASM types for direct use
#[cfg(target_arch = "wasm32")]
pub use wasm::WasmFontPreview;

// Re-export primary types
pub use activator::{FontLinkActivator, MemoryHead, StylesheetHost};
pub use catalog::{FontCatalog, FontFamily};
pub use config::PreviewConfig;
pub use controls::{ControlEvent, ControlPanel};
pub use error::{PreviewError, Result};
pub use persist::{KeyValueStore, MemoryStore, Notifier, Snapshot};
pub use state::SelectionState;
pub use style::{apply_style, ApplyOutcome, SelectionSurface, TextStyle};
pub use surface::{Node, RichText, TextRange};

/// The preview controller: owns the catalog and the current selection state
/// and routes every user action through them
pub struct FontPreview {
    config: PreviewConfig,
    catalog: FontCatalog,
    state: SelectionState,
    link: FontLinkActivator,
}

impl FontPreview {
    /// Create a controller with an empty catalog and default state
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            catalog: FontCatalog::new(),
            state: SelectionState::new(&config.default_font, &config.default_weight),
            link: FontLinkActivator::new(&config.link_id),
            config,
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Completion of the startup catalog fetch.
    ///
    /// A failure is logged and leaves the catalog empty for the session.
    pub fn on_catalog_loaded(&mut self, result: Result<FontCatalog>) {
        match result {
            Ok(catalog) => {
                log::info!("loaded {} font families", catalog.len());
                self.catalog = catalog;
            }
            Err(err) => log::error!("error fetching font data: {}", err),
        }
    }

    /// Apply a control change, then style the live selection with the
    /// updated choice
    pub fn handle_control<S: SelectionSurface>(
        &mut self,
        event: ControlEvent,
        surface: &mut S,
    ) -> Result<ApplyOutcome> {
        match event {
            ControlEvent::FontChanged(font) => self.state.select_font(&font, &self.catalog),
            ControlEvent::WeightChanged(weight) => self.state.select_weight(&weight),
            ControlEvent::ItalicToggled => self.state.toggle_italic(),
        }
        self.apply_style(surface)
    }

    /// Style the live selection with the current choice
    pub fn apply_style<S: SelectionSurface>(&self, surface: &mut S) -> Result<ApplyOutcome> {
        apply_style(surface, &self.state.style())
    }

    /// The surface reported new content
    pub fn set_text(&mut self, markup: impl Into<String>) {
        self.state.set_text(markup);
    }

    /// Clear the text; storage and the font choice are left alone
    pub fn reset(&mut self) {
        self.state.reset_text();
    }

    /// Persist the current state, then acknowledge to the user
    pub fn save<K: KeyValueStore, N: Notifier>(&self, store: &mut K, notifier: &N) -> Result<()> {
        Snapshot::capture(&self.state).write(store)?;
        log::info!(
            "saved {} / {} (italic: {})",
            self.state.selected_font,
            self.state.selected_weight,
            self.state.is_italic
        );
        notifier.notify(persist::SAVE_CONFIRMATION)
    }

    /// Load whatever was saved last; absent keys keep their defaults
    pub fn restore<K: KeyValueStore>(&mut self, store: &K) -> Result<()> {
        Snapshot::read(store)?.restore_into(&mut self.state);
        Ok(())
    }

    /// Resource URL of the current family/weight, `""` if unknown
    pub fn font_url(&self) -> &str {
        self.state.font_url(&self.catalog)
    }

    /// Bring the head stylesheet link in line with the current font URL
    pub fn sync_font_link<H: StylesheetHost>(&mut self, host: &mut H, stamp: u64) -> Result<bool> {
        self.link
            .sync(host, self.state.font_url(&self.catalog), stamp)
    }

    /// Remove the head stylesheet link
    pub fn release_font_link<H: StylesheetHost>(&mut self, host: &mut H) -> Result<bool> {
        self.link.teardown(host)
    }

    /// View models for the controls
    pub fn controls(&self) -> ControlPanel {
        ControlPanel::new(&self.catalog, &self.state)
    }

    /// Base style of the whole editable surface
    pub fn surface_style(&self) -> TextStyle {
        self.state.style()
    }
}

impl Default for FontPreview {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}

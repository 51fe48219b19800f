//! Current font choice and editor text

use crate::catalog::FontCatalog;
use crate::style::TextStyle;

/// Family used before anything is restored or chosen
pub const DEFAULT_FONT: &str = "Arial";
/// Variant used before anything is restored or chosen
pub const DEFAULT_WEIGHT: &str = "normal";

/// What the user has picked so far.
///
/// Each field is set independently. The weight is not checked against the
/// catalog when set directly; a variant the family lacks simply resolves to
/// an empty font URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_font: String,
    pub selected_weight: String,
    pub is_italic: bool,
    /// Serialized markup of the editable surface
    pub text: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(DEFAULT_FONT, DEFAULT_WEIGHT)
    }
}

impl SelectionState {
    /// Create a state with the given font and weight, upright, with no text
    pub fn new(font: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            selected_font: font.into(),
            selected_weight: weight.into(),
            is_italic: false,
            text: String::new(),
        }
    }

    /// Switch family.
    ///
    /// The weight is kept when the new family offers it. Otherwise it moves
    /// to the family's first variant, so a weight left over from the previous
    /// family never lingers. A family with no variants (or one the catalog
    /// does not know) leaves the weight alone.
    pub fn select_font(&mut self, font: &str, catalog: &FontCatalog) {
        self.selected_font = font.to_string();

        let Some(family) = catalog.family(font) else {
            return;
        };
        if family.has_variant(&self.selected_weight) {
            return;
        }
        if let Some(first) = family.first_variant() {
            log::debug!(
                "weight {:?} not offered by {:?}, using {:?}",
                self.selected_weight,
                font,
                first
            );
            self.selected_weight = first.to_string();
        }
    }

    pub fn select_weight(&mut self, weight: &str) {
        self.selected_weight = weight.to_string();
    }

    pub fn toggle_italic(&mut self) {
        self.is_italic = !self.is_italic;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Clear the text only; font, weight and italic stay
    pub fn reset_text(&mut self) {
        self.text.clear();
    }

    /// The style triple the applicator writes
    pub fn style(&self) -> TextStyle {
        TextStyle::new(&self.selected_font, &self.selected_weight, self.is_italic)
    }

    /// Resource URL of the current family/weight, `""` if not in the catalog
    pub fn font_url<'a>(&self, catalog: &'a FontCatalog) -> &'a str {
        catalog.resolve_url(&self.selected_font, &self.selected_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FontCatalog {
        FontCatalog::new()
            .with_variant("Roboto", "normal", "roboto.css")
            .with_variant("Roboto", "bold", "roboto-bold.css")
            .with_variant("Lato", "300", "lato-300.css")
            .with_variant("Lato", "bold", "lato-bold.css")
    }

    #[test]
    fn test_defaults() {
        let state = SelectionState::default();
        assert_eq!(state.selected_font, "Arial");
        assert_eq!(state.selected_weight, "normal");
        assert!(!state.is_italic);
        assert!(state.text.is_empty());
    }

    #[test]
    fn test_toggle_italic_twice_is_identity() {
        let mut state = SelectionState::default();
        let before = state.is_italic;
        state.toggle_italic();
        assert_ne!(state.is_italic, before);
        state.toggle_italic();
        assert_eq!(state.is_italic, before);
    }

    #[test]
    fn test_select_font_keeps_available_weight() {
        let mut state = SelectionState::new("Roboto", "bold");
        state.select_font("Lato", &catalog());
        assert_eq!(state.selected_font, "Lato");
        assert_eq!(state.selected_weight, "bold");
    }

    #[test]
    fn test_select_font_replaces_stale_weight() {
        let mut state = SelectionState::new("Roboto", "normal");
        state.select_font("Lato", &catalog());
        assert_eq!(state.selected_weight, "300");
        assert_eq!(state.font_url(&catalog()), "lato-300.css");
    }

    #[test]
    fn test_select_unknown_font_keeps_weight() {
        let mut state = SelectionState::new("Roboto", "bold");
        state.select_font("Papyrus", &catalog());
        assert_eq!(state.selected_font, "Papyrus");
        assert_eq!(state.selected_weight, "bold");
        assert_eq!(state.font_url(&catalog()), "");
    }

    #[test]
    fn test_select_weight_is_not_validated() {
        let mut state = SelectionState::new("Roboto", "normal");
        state.select_weight("900");
        assert_eq!(state.selected_weight, "900");
        assert_eq!(state.font_url(&catalog()), "");
    }

    #[test]
    fn test_reset_text_only_clears_text() {
        let mut state = SelectionState::new("Roboto", "bold");
        state.toggle_italic();
        state.set_text("hello");
        state.reset_text();

        assert!(state.text.is_empty());
        assert_eq!(state.selected_font, "Roboto");
        assert_eq!(state.selected_weight, "bold");
        assert!(state.is_italic);
    }
}

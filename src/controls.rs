//! View models for the font controls

use crate::catalog::FontCatalog;
use crate::state::SelectionState;
use serde::Serialize;

/// A change notification emitted by one of the controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    FontChanged(String),
    WeightChanged(String),
    /// Carries no value; the owner flips its own flag
    ItalicToggled,
}

/// Family `<select>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilySelector {
    pub options: Vec<String>,
    pub selected: String,
}

impl FamilySelector {
    pub fn new(catalog: &FontCatalog, state: &SelectionState) -> Self {
        Self {
            options: catalog.families().map(str::to_string).collect(),
            selected: state.selected_font.clone(),
        }
    }

    pub fn choose(&self, name: &str) -> ControlEvent {
        ControlEvent::FontChanged(name.to_string())
    }
}

/// Variant `<select>` for the selected family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightSelector {
    pub options: Vec<String>,
    pub selected: String,
}

impl WeightSelector {
    pub fn new(catalog: &FontCatalog, state: &SelectionState) -> Self {
        Self {
            options: catalog
                .variants(&state.selected_font)
                .iter()
                .map(|(label, _)| label.clone())
                .collect(),
            selected: state.selected_weight.clone(),
        }
    }

    pub fn choose(&self, weight: &str) -> ControlEvent {
        ControlEvent::WeightChanged(weight.to_string())
    }
}

/// Italic switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItalicToggle {
    pub checked: bool,
}

impl ItalicToggle {
    pub fn toggle(&self) -> ControlEvent {
        ControlEvent::ItalicToggled
    }
}

/// Everything the host page needs to draw the controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPanel {
    pub family: FamilySelector,
    pub weight: WeightSelector,
    pub italic: ItalicToggle,
    /// Resolved resource URL of the current family/weight
    pub font_url: String,
}

impl ControlPanel {
    pub fn new(catalog: &FontCatalog, state: &SelectionState) -> Self {
        Self {
            family: FamilySelector::new(catalog, state),
            weight: WeightSelector::new(catalog, state),
            italic: ItalicToggle {
                checked: state.is_italic,
            },
            font_url: state.font_url(catalog).to_string(),
        }
    }
}

//! Selection-scoped style application

use crate::error::Result;

/// The family/weight/italic triple written onto a styled container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub family: String,
    pub weight: String,
    pub italic: bool,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, weight: impl Into<String>, italic: bool) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            italic,
        }
    }

    /// `font-weight` for a styled span: "normal" becomes 400, anything else
    /// is passed through as-is
    pub fn span_font_weight(&self) -> &str {
        match self.weight.as_str() {
            "normal" => "400",
            other => other,
        }
    }

    /// `font-weight` for the editor surface itself, which also maps "bold"
    pub fn surface_font_weight(&self) -> &str {
        match self.weight.as_str() {
            "bold" => "700",
            _ => self.span_font_weight(),
        }
    }

    pub fn font_style(&self) -> &'static str {
        if self.italic {
            "italic"
        } else {
            "normal"
        }
    }

    /// Inline declarations for a styled span, in `style` attribute form
    pub fn span_css(&self) -> String {
        format!(
            "font-family: {}; font-weight: {}; font-style: {};",
            self.family,
            self.span_font_weight(),
            self.font_style()
        )
    }
}

/// Host capability around a live text selection.
///
/// Implemented by the in-memory [`RichText`](crate::surface::RichText) and by
/// the browser's Selection/Range API in the wasm bridge.
pub trait SelectionSurface {
    /// Host-specific description of the selected range
    type Range;

    /// The current selection inside the surface, if any
    fn active_selection(&self) -> Option<Self::Range>;

    /// Whether the range covers no content
    fn is_collapsed(&self, range: &Self::Range) -> bool;

    /// Move the range's contents into a new container carrying `style`,
    /// placed where the range was
    fn wrap_range(&mut self, range: Self::Range, style: &TextStyle) -> Result<()>;

    /// Deselect everything
    fn clear_selection(&mut self) -> Result<()>;
}

/// What [`apply_style`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The selection was wrapped and then cleared
    Applied,
    /// Nothing or nothing visible was selected; the surface is untouched
    NoSelection,
}

/// Wrap the surface's live selection in a container styled with `style`.
///
/// An absent or collapsed selection is a silent no-op. Styling inside an
/// already styled region nests containers; nothing is merged.
pub fn apply_style<S: SelectionSurface>(surface: &mut S, style: &TextStyle) -> Result<ApplyOutcome> {
    let Some(range) = surface.active_selection() else {
        return Ok(ApplyOutcome::NoSelection);
    };
    if surface.is_collapsed(&range) {
        return Ok(ApplyOutcome::NoSelection);
    }

    surface.wrap_range(range, style)?;
    surface.clear_selection()?;
    log::debug!("applied {} to selection", style.span_css());
    Ok(ApplyOutcome::Applied)
}

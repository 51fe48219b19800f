//! In-memory editable surface
//!
//! A minimal rich-text tree (text runs and styled spans) with a single
//! selection, mutated the way a DOM range extraction mutates a
//! content-editable region. Used outside the browser and in tests.

mod markup;

use crate::error::Result;
use crate::style::{SelectionSurface, TextStyle};
use unicode_segmentation::UnicodeSegmentation;

/// A node of the rich-text tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    /// Inline styling container
    Span { style: TextStyle, children: Vec<Node> },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn span(style: TextStyle, children: Vec<Node>) -> Self {
        Node::Span { style, children }
    }

    /// Byte length of the text this node contains
    pub fn text_len(&self) -> usize {
        match self {
            Node::Text(text) => text.len(),
            Node::Span { children, .. } => children.iter().map(Node::text_len).sum(),
        }
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Span { children, .. } => children.iter().for_each(|c| c.push_text(out)),
        }
    }

    /// Split so that `self` keeps `[0, at)` and the returned node holds the
    /// rest. A span is cloned with its style, like a partially selected
    /// element. `at` must lie strictly inside the node on a char boundary.
    fn split_off(&mut self, at: usize) -> Node {
        match self {
            Node::Text(text) => Node::Text(text.split_off(at)),
            Node::Span { style, children } => {
                let idx = split_at(children, at);
                Node::Span {
                    style: style.clone(),
                    children: children.split_off(idx),
                }
            }
        }
    }
}

/// Ensure a node boundary at text offset `at`, returning the index of the
/// first node at or after it
fn split_at(nodes: &mut Vec<Node>, at: usize) -> usize {
    let mut offset = 0;
    for idx in 0..nodes.len() {
        if offset == at {
            return idx;
        }
        let len = nodes[idx].text_len();
        if at < offset + len {
            let tail = nodes[idx].split_off(at - offset);
            nodes.insert(idx + 1, tail);
            return idx + 1;
        }
        offset += len;
    }
    nodes.len()
}

/// Wrap `[start, end)` in a new span, inside the deepest span that contains
/// the whole range
fn wrap(nodes: &mut Vec<Node>, start: usize, end: usize, style: &TextStyle) {
    let mut offset = 0;
    for node in nodes.iter_mut() {
        let len = node.text_len();
        if let Node::Span { children, .. } = node {
            if start >= offset && end <= offset + len {
                wrap(children, start - offset, end - offset, style);
                return;
            }
        }
        offset += len;
        if offset >= end {
            break;
        }
    }

    let first = split_at(nodes, start);
    let last = split_at(nodes, end);
    let extracted: Vec<Node> = nodes.drain(first..last).collect();
    nodes.insert(first, Node::span(style.clone(), extracted));
}

/// Selected byte range of the surface's plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    /// Create a range, ordering the endpoints
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Rich text with one optional selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    nodes: Vec<Node>,
    selection: Option<TextRange>,
}

impl RichText {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface holding unstyled text
    pub fn from_plain(text: &str) -> Self {
        let nodes = if text.is_empty() {
            Vec::new()
        } else {
            vec![Node::text(text)]
        };
        Self {
            nodes,
            selection: None,
        }
    }

    /// Create a surface from an existing tree
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            selection: None,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Text content without markup
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.len());
        self.nodes.iter().for_each(|n| n.push_text(&mut out));
        out
    }

    /// Total text length in bytes
    pub fn len(&self) -> usize {
        self.nodes.iter().map(Node::text_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select a byte range. Endpoints are ordered, clamped to the text and
    /// moved back to the nearest grapheme boundary.
    pub fn select(&mut self, a: usize, b: usize) {
        let text = self.plain_text();
        let range = TextRange::new(a, b);
        self.selection = Some(TextRange {
            start: snap_to_grapheme(&text, range.start),
            end: snap_to_grapheme(&text, range.end),
        });
    }

    pub fn selection(&self) -> Option<TextRange> {
        self.selection
    }

    /// Remove all content
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.selection = None;
    }

    /// Serialize to HTML, as a content-editable region's `innerHTML` would
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.len() * 2);
        markup::write_nodes(&self.nodes, &mut out);
        out
    }
}

fn snap_to_grapheme(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    text.grapheme_indices(true)
        .map(|(idx, _)| idx)
        .take_while(|&idx| idx <= offset)
        .last()
        .unwrap_or(0)
}

impl SelectionSurface for RichText {
    type Range = TextRange;

    fn active_selection(&self) -> Option<TextRange> {
        self.selection
    }

    fn is_collapsed(&self, range: &TextRange) -> bool {
        range.is_collapsed()
    }

    fn wrap_range(&mut self, range: TextRange, style: &TextStyle) -> Result<()> {
        // ranges may come from outside `select`, so align them the same way
        let text = self.plain_text();
        let range = TextRange::new(range.start, range.end);
        let start = snap_to_grapheme(&text, range.start);
        let end = snap_to_grapheme(&text, range.end);
        if start < end {
            wrap(&mut self.nodes, start, end, style);
        }
        Ok(())
    }

    fn clear_selection(&mut self) -> Result<()> {
        self.selection = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{apply_style, ApplyOutcome};

    fn bold() -> TextStyle {
        TextStyle::new("Roboto", "bold", false)
    }

    fn italic() -> TextStyle {
        TextStyle::new("Lato", "normal", true)
    }

    #[test]
    fn test_from_plain() {
        let surface = RichText::from_plain("Hello <world>");
        assert_eq!(surface.plain_text(), "Hello <world>");
        assert_eq!(surface.to_markup(), "Hello &lt;world&gt;");
        assert!(RichText::from_plain("").nodes().is_empty());
    }

    #[test]
    fn test_wraps_exactly_the_selection() {
        let mut surface = RichText::from_plain("Hello brave world");
        surface.select(6, 11);

        let outcome = apply_style(&mut surface, &bold()).unwrap();
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(
            surface.nodes(),
            &[
                Node::text("Hello "),
                Node::span(bold(), vec![Node::text("brave")]),
                Node::text(" world"),
            ]
        );
        assert_eq!(
            surface.to_markup(),
            "Hello <span style=\"font-family: Roboto; font-weight: bold; font-style: normal;\">brave</span> world"
        );
        assert_eq!(surface.plain_text(), "Hello brave world");
        assert!(surface.selection().is_none());
    }

    #[test]
    fn test_collapsed_selection_leaves_content() {
        let mut surface = RichText::from_plain("Hello");
        surface.select(2, 2);
        let before = surface.to_markup();

        let outcome = apply_style(&mut surface, &bold()).unwrap();
        assert_eq!(outcome, ApplyOutcome::NoSelection);
        assert_eq!(surface.to_markup(), before);
    }

    #[test]
    fn test_no_selection_leaves_content() {
        let mut surface = RichText::from_plain("Hello");
        let before = surface.clone();
        apply_style(&mut surface, &bold()).unwrap();
        assert_eq!(surface, before);
    }

    #[test]
    fn test_reversed_selection_is_ordered() {
        let mut surface = RichText::from_plain("abcdef");
        surface.select(4, 1);
        assert_eq!(surface.selection(), Some(TextRange { start: 1, end: 4 }));
    }

    #[test]
    fn test_selection_snaps_to_graphemes() {
        // "e" + combining acute accent, then "x"
        let mut surface = RichText::from_plain("e\u{301}x");
        surface.select(2, 99);
        assert_eq!(surface.selection(), Some(TextRange { start: 0, end: 4 }));
    }

    #[test]
    fn test_nested_styles_are_not_merged() {
        let mut surface = RichText::from_plain("one two three");
        surface.select(4, 7);
        apply_style(&mut surface, &bold()).unwrap();
        surface.select(4, 7);
        apply_style(&mut surface, &italic()).unwrap();

        assert_eq!(
            surface.nodes(),
            &[
                Node::text("one "),
                Node::span(bold(), vec![Node::span(italic(), vec![Node::text("two")])]),
                Node::text(" three"),
            ]
        );
    }

    #[test]
    fn test_selection_inside_span_nests_in_place() {
        let mut surface =
            RichText::from_nodes(vec![Node::span(bold(), vec![Node::text("abcdef")])]);
        surface.select(2, 4);
        apply_style(&mut surface, &italic()).unwrap();

        assert_eq!(
            surface.nodes(),
            &[Node::span(
                bold(),
                vec![
                    Node::text("ab"),
                    Node::span(italic(), vec![Node::text("cd")]),
                    Node::text("ef"),
                ]
            )]
        );
    }

    #[test]
    fn test_partial_overlap_splits_container() {
        let mut surface = RichText::from_nodes(vec![
            Node::span(bold(), vec![Node::text("Hello")]),
            Node::text(" world"),
        ]);
        surface.select(3, 8);
        apply_style(&mut surface, &italic()).unwrap();

        assert_eq!(
            surface.nodes(),
            &[
                Node::span(bold(), vec![Node::text("Hel")]),
                Node::span(
                    italic(),
                    vec![Node::span(bold(), vec![Node::text("lo")]), Node::text(" wo")]
                ),
                Node::text("rld"),
            ]
        );
        assert_eq!(surface.plain_text(), "Hello world");
    }

    #[test]
    fn test_wrap_range_inside_multibyte_char() {
        // byte 2 falls inside "é"
        let mut surface = RichText::from_plain("h\u{e9}llo");
        surface
            .wrap_range(TextRange { start: 2, end: 4 }, &bold())
            .unwrap();

        assert_eq!(
            surface.nodes(),
            &[
                Node::text("h"),
                Node::span(bold(), vec![Node::text("\u{e9}l")]),
                Node::text("lo"),
            ]
        );
        assert_eq!(surface.plain_text(), "h\u{e9}llo");
    }

    #[test]
    fn test_wrap_range_past_end_is_clamped() {
        let mut surface = RichText::from_plain("abc");
        surface
            .wrap_range(TextRange { start: 1, end: 40 }, &bold())
            .unwrap();
        assert_eq!(
            surface.nodes(),
            &[Node::text("a"), Node::span(bold(), vec![Node::text("bc")])]
        );
    }

    #[test]
    fn test_clear_removes_content() {
        let mut surface = RichText::from_plain("text");
        surface.select(0, 2);
        surface.clear();
        assert!(surface.is_empty());
        assert!(surface.selection().is_none());
        assert_eq!(surface.to_markup(), "");
    }
}

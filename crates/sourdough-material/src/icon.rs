//! Icon boundary: named glyphs or caller-prebuilt nodes
//!
//! The icon input is a tagged variant resolved once at the call site,
//! not type-sniffed inside the component. `Named` goes through the
//! default glyph renderer; `Node` is rendered as the caller built it,
//! with size and color completed only where left unset.

use sourdough_ui_graphics::Color;

/// Glyph rendered when the caller does not pick one.
pub const DEFAULT_GLYPH: &str = "add";

/// Fixed glyph size used by the default renderer and as the fill-in for
/// prebuilt nodes that do not specify their own.
pub const ICON_SIZE: f32 = 24.0;

/// Caller-prebuilt icon node. Unset fields are completed at render time;
/// set fields are never overwritten.
#[derive(Clone, Debug, PartialEq)]
pub struct IconNode {
    pub name: String,
    pub size: Option<f32>,
    pub color: Option<Color>,
}

impl IconNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            color: None,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Icon input for the FAB.
#[derive(Clone, Debug, PartialEq)]
pub enum IconSource {
    /// Glyph name for the default glyph renderer. An empty name falls
    /// back to [`DEFAULT_GLYPH`].
    Named(String),
    /// Caller-prebuilt node, rendered as given.
    Node(IconNode),
}

impl IconSource {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn node(node: IconNode) -> Self {
        Self::Node(node)
    }
}

impl Default for IconSource {
    fn default() -> Self {
        Self::Named(DEFAULT_GLYPH.to_owned())
    }
}

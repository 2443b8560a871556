//! Data-only render tree emitted by the floating action button
//!
//! The host renderer interprets these nodes; nothing here draws. The
//! tree is recomputed on every render from the control's props, theme,
//! and current animation values.

use sourdough_ui_graphics::{Color, CornerRadius, EdgeInsets, TextStyle};

use crate::fab_style::FabWidth;
use crate::icon::IconNode;
use crate::ripple::RippleSurface;
use crate::shadow::ShadowStyle;

/// The rendered FAB: an outer container wrapping a ripple surface
/// wrapping the content.
#[derive(Clone, Debug, PartialEq)]
pub struct FabNode {
    pub container: ContainerNode,
    pub surface: SurfaceNode,
    pub content: FabContent,
}

/// Outer container. Exposes stacking order and the entrance/exit scale
/// transform; `container_style` merges onto it (z-order is the only
/// overridable field of this node).
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerNode {
    pub z_index: i32,
    /// Current visibility scale, applied as a centered scale transform.
    pub scale: f32,
    pub test_id: Option<String>,
}

/// The pressable button surface, handed to the host ripple primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceNode {
    pub width: FabWidth,
    pub height: f32,
    pub padding: EdgeInsets,
    pub background: Color,
    pub corner_radius: CornerRadius,
    pub shadow: ShadowStyle,
    pub ripple: RippleSurface,
}

/// What appears inside the button surface.
#[derive(Clone, Debug, PartialEq)]
pub enum FabContent {
    /// Caller-supplied children, rendered verbatim; the icon/label
    /// composition is skipped entirely.
    Custom(Vec<FabChild>),
    /// Default composition: icon and/or label, either possibly absent.
    Composed {
        icon: Option<IconContent>,
        label: Option<LabelContent>,
    },
}

/// Caller-supplied content rendered in place of the icon/label pair.
#[derive(Clone, Debug, PartialEq)]
pub enum FabChild {
    Icon(IconNode),
    Label(String),
}

/// Resolved icon content.
///
/// The press rotation applies only to the `Glyph` branch; a `Prebuilt`
/// node renders exactly as the caller built it, untransformed. The
/// asymmetry is deliberate and part of the contract, which is why only
/// `Glyph` carries a rotation field.
#[derive(Clone, Debug, PartialEq)]
pub enum IconContent {
    /// Default glyph renderer path.
    Glyph {
        name: String,
        size: f32,
        color: Color,
        rotation_degrees: f32,
    },
    /// Caller-prebuilt node with unset fields completed; caller-set
    /// size and color are never overwritten.
    Prebuilt { name: String, size: f32, color: Color },
}

/// Resolved label content.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelContent {
    pub text: String,
    pub style: TextStyle,
    pub color: Color,
    pub margin_left: f32,
}

//! Touch feedback boundary
//!
//! The FAB never draws ripples or tracks touch geometry. It emits a
//! [`RippleSurface`] describing what the host's feedback primitive
//! should do; the primitive owns the press visuals and reports presses
//! back to [`crate::Fab::press`].

use sourdough_ui_graphics::{Color, CornerRadius};

/// Default ripple tint: semi-opaque black.
pub const DEFAULT_RIPPLE_TINT: Color = Color::rgba(0.0, 0.0, 0.0, 0.8);

/// Configuration handed to the host ripple primitive.
///
/// `disabled` instructs the primitive to suppress both the feedback
/// visuals and press dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleSurface {
    pub tint: Color,
    pub container_corner_radius: CornerRadius,
    pub disabled: bool,
}

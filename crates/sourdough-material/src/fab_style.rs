//! Style resolution for the floating action button
//!
//! [`resolve_fab_style`] is a pure function from `(props, theme)` to the
//! concrete geometry and colors of the current render. It holds no state
//! and is re-evaluated on every render, so the result is always
//! re-derivable from its inputs.

use sourdough_ui_graphics::{Color, CornerRadius, EdgeInsets};

use crate::fab::FabProps;
use crate::render::SurfaceNode;
use crate::ripple::DEFAULT_RIPPLE_TINT;
use crate::shadow::ShadowStyle;
use crate::theme::Theme;

/// Default FAB diameter.
pub const FAB_SIZE: f32 = 56.0;
/// Compact FAB diameter (`mini`).
pub const MINI_FAB_SIZE: f32 = 40.0;
/// Height of an extended (labeled) FAB.
pub const EXTENDED_FAB_HEIGHT: f32 = 48.0;
/// Horizontal padding of an extended FAB.
pub const EXTENDED_FAB_PADDING: f32 = 12.0;
/// Elevation applied when the caller supplies none.
pub const DEFAULT_FAB_ELEVATION: u8 = 10;
/// Corner rounding large enough to keep every size class circular.
pub const FAB_CORNER_RADIUS: CornerRadius = CornerRadius(100.0);
/// Label font size.
pub const LABEL_FONT_SIZE: f32 = 14.0;
/// Gap between the icon and the label.
pub const LABEL_MARGIN_LEFT: f32 = 8.0;

/// Horizontal extent of the button surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FabWidth {
    Fixed(f32),
    /// Sized by the content (extended FAB).
    Intrinsic,
}

/// Concrete geometry and color for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedFabStyle {
    pub background: Color,
    pub content_color: Color,
    pub width: FabWidth,
    pub height: f32,
    pub padding: EdgeInsets,
    pub elevation: u8,
    pub ripple_tint: Color,
    pub corner_radius: CornerRadius,
}

/// Resolve geometry and color from props and theme.
///
/// Precedence:
/// 1. background: `background_color` prop, else `theme.primary`;
///    unconditionally the disabled container color when `disabled`;
/// 2. size class: labeled, else mini, else default;
/// 3. elevation: 0 when disabled, else the `shadow` prop (an explicit 0
///    is honored), else [`DEFAULT_FAB_ELEVATION`];
/// 4. ripple tint: `ripple_color` prop, else [`DEFAULT_RIPPLE_TINT`].
pub fn resolve_fab_style(props: &FabProps, theme: &Theme) -> ResolvedFabStyle {
    let background = if props.disabled {
        theme.disabled_container
    } else {
        props.background_color.unwrap_or(theme.primary)
    };

    let content_color = if props.disabled {
        theme.disabled_content
    } else {
        theme.on_primary
    };

    let (width, height, padding) = if props.label.is_some() {
        (
            FabWidth::Intrinsic,
            EXTENDED_FAB_HEIGHT,
            EdgeInsets::horizontal(EXTENDED_FAB_PADDING),
        )
    } else if props.mini {
        (FabWidth::Fixed(MINI_FAB_SIZE), MINI_FAB_SIZE, EdgeInsets::ZERO)
    } else {
        (FabWidth::Fixed(FAB_SIZE), FAB_SIZE, EdgeInsets::ZERO)
    };

    let elevation = if props.disabled {
        0
    } else {
        props.shadow.unwrap_or(DEFAULT_FAB_ELEVATION)
    };

    ResolvedFabStyle {
        background,
        content_color,
        width,
        height,
        padding,
        elevation,
        ripple_tint: props.ripple_color.unwrap_or(DEFAULT_RIPPLE_TINT),
        corner_radius: FAB_CORNER_RADIUS,
    }
}

/// Per-field style override merged onto a resolved node.
///
/// Mirrors the caller-facing `style`/`container_style` props: a field
/// left `None` keeps the resolved value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleOverride {
    pub background: Option<Color>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub padding: Option<EdgeInsets>,
    pub corner_radius: Option<CornerRadius>,
    pub elevation: Option<u8>,
    pub z_index: Option<i32>,
}

impl StyleOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Field-wise merge; fields set in `later` win.
    pub fn merge(mut self, later: StyleOverride) -> StyleOverride {
        self.background = later.background.or(self.background);
        self.width = later.width.or(self.width);
        self.height = later.height.or(self.height);
        self.padding = later.padding.or(self.padding);
        self.corner_radius = later.corner_radius.or(self.corner_radius);
        self.elevation = later.elevation.or(self.elevation);
        self.z_index = later.z_index.or(self.z_index);
        self
    }

    /// Apply onto a surface node. An elevation override re-derives the
    /// shadow for the new level.
    pub(crate) fn apply_to_surface(&self, surface: &mut SurfaceNode) {
        if let Some(background) = self.background {
            surface.background = background;
        }
        if let Some(width) = self.width {
            surface.width = FabWidth::Fixed(width);
        }
        if let Some(height) = self.height {
            surface.height = height;
        }
        if let Some(padding) = self.padding {
            surface.padding = padding;
        }
        if let Some(corner_radius) = self.corner_radius {
            surface.corner_radius = corner_radius;
            surface.ripple.container_corner_radius = corner_radius;
        }
        if let Some(elevation) = self.elevation {
            surface.shadow = ShadowStyle::for_elevation(elevation);
        }
    }
}

#[cfg(test)]
#[path = "tests/fab_style_tests.rs"]
mod tests;

//! Static chrome styling for the bottom app bar
//!
//! The bar that seats a FAB over its center cutout. Everything here is
//! fixed styling data; the platform is passed in by the host rather than
//! sniffed (elevation is an Android-only rendering concept for this
//! chrome).

use sourdough_ui_graphics::{Color, CornerRadius, EdgeInsets};

use crate::fab_style::FAB_SIZE;
use crate::theme::Theme;

/// Host platform, for the one platform-conditional value in this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Web,
    Desktop,
}

/// Bar height.
pub const APP_BAR_HEIGHT: f32 = 56.0;
/// Bar content padding.
pub const APP_BAR_PADDING: f32 = 16.0;
/// Diameter of the center cutout circle seating the FAB.
pub const FAB_CUTOUT_DIAMETER: f32 = FAB_SIZE + APP_BAR_PADDING;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    pub height: f32,
    pub padding: EdgeInsets,
}

/// Seat for the FAB overlaying the bar's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabSeatStyle {
    /// Lifts the FAB so it straddles the bar's top edge.
    pub translate_y: f32,
    pub z_index: i32,
    pub elevation: u8,
}

/// Scrim rendered behind modal bar content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub color: Color,
}

/// Surface-colored circle cut behind the seated FAB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutoutStyle {
    pub diameter: f32,
    pub corner_radius: CornerRadius,
    pub translate_y: f32,
    pub background: Color,
    pub z_index: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppBarStyles {
    pub bar: BarStyle,
    pub fab_seat: FabSeatStyle,
    pub overlay: OverlayStyle,
    pub cutout: CutoutStyle,
}

/// Chrome styles for the bottom app bar on the given platform.
pub fn app_bar_styles(platform: Platform, theme: &Theme) -> AppBarStyles {
    AppBarStyles {
        bar: BarStyle {
            height: APP_BAR_HEIGHT,
            padding: EdgeInsets::all(APP_BAR_PADDING),
        },
        fab_seat: FabSeatStyle {
            translate_y: -29.0,
            z_index: 11,
            elevation: if platform == Platform::Android { 10 } else { 0 },
        },
        overlay: OverlayStyle {
            color: Color::BLACK.with_alpha(0.4),
        },
        cutout: CutoutStyle {
            diameter: FAB_CUTOUT_DIAMETER,
            corner_radius: CornerRadius(FAB_CUTOUT_DIAMETER),
            translate_y: -32.5,
            background: theme.surface,
            z_index: 10,
        },
    }
}

#[cfg(test)]
#[path = "tests/appbar_tests.rs"]
mod tests;

//! Drop-shadow styling quantized to elevation levels

use sourdough_ui_graphics::Color;

/// Shadow parameters the host renderer applies to a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    pub color: Color,
    pub offset_y: f32,
    pub blur_radius: f32,
}

impl ShadowStyle {
    pub const NONE: ShadowStyle = ShadowStyle {
        color: Color::TRANSPARENT,
        offset_y: 0.0,
        blur_radius: 0.0,
    };

    /// Shadow for a numeric elevation level. Total over all inputs;
    /// level 0 is fully transparent.
    pub fn for_elevation(level: u8) -> Self {
        if level == 0 {
            return Self::NONE;
        }
        let level = f32::from(level);
        Self {
            color: Color::BLACK.with_alpha((0.12 + level * 0.01).min(0.3)),
            offset_y: level * 0.5,
            blur_radius: level,
        }
    }
}

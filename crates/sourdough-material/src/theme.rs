//! Theme tokens consumed by the components
//!
//! The theme is plain data passed by reference into style resolution;
//! how an application scopes or injects it is the host's concern.

use sourdough_ui_graphics::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Primary brand color, the default FAB background.
    pub primary: Color,
    /// Content color rendered on top of `primary`.
    pub on_primary: Color,
    /// Surface color for chrome elements (app-bar cutout).
    pub surface: Color,
    /// Container color forced onto disabled controls.
    pub disabled_container: Color,
    /// Content color forced onto disabled controls.
    pub disabled_content: Color,
}

impl Default for Theme {
    /// Material baseline palette.
    fn default() -> Self {
        Self {
            primary: Color::from_rgb_u8(33, 150, 243),
            on_primary: Color::WHITE,
            surface: Color::WHITE,
            disabled_container: Color::BLACK.with_alpha(0.12),
            disabled_content: Color::BLACK.with_alpha(0.26),
        }
    }
}

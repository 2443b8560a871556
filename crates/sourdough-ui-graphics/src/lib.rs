//! Pure math/data for styling Sourdough components
//!
//! This crate contains the color, geometry, and typography primitives the
//! component crates describe their output with. Nothing here draws; the
//! host renderer interprets these values.

mod color;
mod geometry;
mod typography;

pub use color::*;
pub use geometry::*;
pub use typography::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadius, EdgeInsets};
    pub use crate::typography::{FontWeight, TextStyle};
}

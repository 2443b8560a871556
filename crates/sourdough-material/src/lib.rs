//! Material-flavored floating action components
//!
//! The core of this crate is [`Fab`], a floating action button control
//! that owns two animation channels (an entrance/exit scale spring and a
//! press-driven icon rotation tween) and resolves its geometry and colors
//! from props plus a [`Theme`] on every render. Rendering is data-only:
//! [`Fab::render`] emits a [`FabNode`] tree for the host renderer, with
//! touch feedback delegated to the host's ripple primitive through
//! [`RippleSurface`].
//!
//! The bottom app-bar chrome that seats a FAB is static styling, exposed
//! by the [`appbar`] module.

pub mod appbar;
pub mod fab;
pub mod fab_style;
pub mod icon;
pub mod render;
pub mod ripple;
pub mod shadow;
pub mod theme;

pub use fab::{Fab, FabProps};
pub use fab_style::{resolve_fab_style, FabWidth, ResolvedFabStyle, StyleOverride};
pub use icon::{IconNode, IconSource};
pub use render::{FabChild, FabContent, FabNode, IconContent, LabelContent};
pub use ripple::RippleSurface;
pub use shadow::ShadowStyle;
pub use theme::Theme;

//! Animation system for Sourdough
//!
//! Animations never tick themselves: the host toolkit (or a test) owns the
//! frame loop and calls [`FrameClock::drain_frame_callbacks`] once per
//! frame. Components register one-shot callbacks through [`Animatable`]
//! value cells and read the current value during render.

mod animation;
mod driver;
mod frame_clock;

pub use animation::*;
pub use driver::*;
pub use frame_clock::*;

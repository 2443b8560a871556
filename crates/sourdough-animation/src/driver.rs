//! Frame pump for hosts without their own vsync source

use web_time::Instant;

use crate::FrameClock;

/// Drives a [`FrameClock`] from wall-clock time.
///
/// Intended for std hosts and examples that lack a compositor-provided
/// frame loop: call [`StdFrameDriver::pump`] once per iteration of your
/// own loop. Hosts with a real vsync signal should call
/// [`FrameClock::drain_frame_callbacks`] directly with their frame
/// timestamps instead.
pub struct StdFrameDriver {
    clock: FrameClock,
    started: Instant,
}

impl StdFrameDriver {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            started: Instant::now(),
        }
    }

    /// Drain one frame at the current wall-clock time. Returns whether
    /// callbacks are still pending afterwards.
    pub fn pump(&self) -> bool {
        let nanos = self.started.elapsed().as_nanos() as u64;
        self.clock.drain_frame_callbacks(nanos);
        self.clock.has_pending_callbacks()
    }

    pub fn is_idle(&self) -> bool {
        !self.clock.has_pending_callbacks()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}

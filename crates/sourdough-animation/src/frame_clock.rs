//! Frame callback plumbing between animatable values and the host scheduler

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

/// Schedules frame work on behalf of the animation system.
///
/// Hosts with their own vsync source implement this so the clock can
/// request a frame whenever a callback is registered while none were
/// pending. Hosts that poll [`FrameClock::has_pending_callbacks`] each
/// frame do not need one.
pub trait HostScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Identifier for a registered frame callback. Never reused within a
/// clock's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameCallbackId(u64);

type FrameCallback = Box<dyn FnOnce(u64)>;

struct FrameClockInner {
    next_id: u64,
    pending: SmallVec<[(FrameCallbackId, FrameCallback); 4]>,
    scheduler: Option<Rc<dyn HostScheduler>>,
}

/// Shared handle to the per-instance frame callback queue.
///
/// Single-threaded by design: all access happens on the UI thread, so the
/// interior mutability is a plain `RefCell`.
#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<RefCell<FrameClockInner>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_scheduler(scheduler: Rc<dyn HostScheduler>) -> Self {
        Self::build(Some(scheduler))
    }

    fn build(scheduler: Option<Rc<dyn HostScheduler>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FrameClockInner {
                next_id: 0,
                pending: SmallVec::new(),
                scheduler,
            })),
        }
    }

    /// Register a one-shot callback receiving the frame time in
    /// nanoseconds. Callbacks registered during a drain run on the next
    /// drain, not the current one.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let (id, scheduler) = {
            let mut inner = self.inner.borrow_mut();
            let id = FrameCallbackId(inner.next_id);
            inner.next_id += 1;
            let was_idle = inner.pending.is_empty();
            inner.pending.push((id, Box::new(callback)));
            let scheduler = if was_idle {
                inner.scheduler.clone()
            } else {
                None
            };
            (id, scheduler)
        };
        if let Some(scheduler) = scheduler {
            scheduler.schedule_frame();
        }
        FrameCallbackRegistration::new(self.clone(), id)
    }

    /// Run every callback registered before this call with the given frame
    /// time. Invoked by the host once per frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        // The batch is committed before any callback runs; cancellation
        // from inside a callback only affects not-yet-drained callbacks.
        let batch = std::mem::take(&mut self.inner.borrow_mut().pending);
        for (_, callback) in batch {
            callback(frame_time_nanos);
        }
    }

    pub fn has_pending_callbacks(&self) -> bool {
        !self.inner.borrow().pending.is_empty()
    }

    fn cancel(&self, id: FrameCallbackId) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|(pending_id, _)| *pending_id != id);
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a registered frame callback. Cancels the callback when
/// dropped, so holders keep it alive for as long as the callback should
/// be able to fire.
pub struct FrameCallbackRegistration {
    clock: FrameClock,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(clock: FrameClock, id: FrameCallbackId) -> Self {
        Self {
            clock,
            id: Some(id),
        }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.clock.cancel(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.clock.cancel(id);
        }
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;

//! Animatable f32 value cells with tween and spring drivers
//!
//! An [`Animatable`] owns its current value exclusively; the rendering
//! layer reads it, and the only mutation paths are `animate_to`,
//! `snap_to`, and the frame callbacks the cell registers on its
//! [`FrameClock`]. Starting a new animation redirects any in-flight one
//! toward the new target (last-writer-wins, no queueing).

use std::cell::RefCell;
use std::rc::Rc;

use crate::{FrameCallbackRegistration, FrameClock};

/// Easing functions for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease in using a cubic curve.
    EaseIn,
    /// Ease out using a cubic curve.
    EaseOut,
    /// Ease in and out using a cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric value matching the x fraction,
    // clamped to [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        // Binary subdivision fallback when Newton-Raphson did not converge.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Fixed-duration animation specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting the animation in milliseconds.
    pub delay_millis: u64,
}

impl TweenSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy).
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold to stop the animation.
    pub velocity_threshold: f32,
    /// Position threshold to stop the animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Critically damped spring with material defaults.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Moderate-stiffness, slightly bouncy spring. Fast without feeling
    /// abrupt; the entrance/exit tuning for floating action controls.
    pub fn gentle() -> Self {
        Self {
            damping_ratio: 0.75,
            stiffness: 400.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Stiff spring (fast, no bounce).
    pub fn stiff() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 3000.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSpec {
    /// Time-based tween animation.
    Tween(TweenSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationSpec {
    fn default() -> Self {
        AnimationSpec::Tween(TweenSpec::default())
    }
}

/// Spring integration substep, ~60fps, for numerical stability.
const SPRING_TIMESTEP: f32 = 0.016;

/// Owned animatable scalar bound to a [`FrameClock`].
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    clock: FrameClock,
    current: f32,
    velocity: f32,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    /// Tween reference time, set on the first drained frame.
    start_time_nanos: Option<u64>,
    /// Spring integration reference, advanced every drained frame.
    last_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl Animatable {
    pub fn new(initial: f32, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial,
            velocity: 0.0,
            start: initial,
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            last_time_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate toward the target using the given spec.
    ///
    /// Cancels any in-flight animation and redirects from the current
    /// value. A spring keeps its momentum across the redirect; completion
    /// is observable only through [`Animatable::value`] and
    /// [`Animatable::is_animating`].
    pub fn animate_to(&mut self, target: f32, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                log::trace!(
                    "redirecting animation {} -> {}",
                    inner.target,
                    target
                );
                registration.cancel();
            }
            inner.start = inner.current;
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.last_time_nanos = None;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to the value without animating.
    pub fn snap_to(&mut self, value: f32) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.current = value;
        inner.start = value;
        inner.target = value;
        inner.velocity = 0.0;
        inner.start_time_nanos = None;
        inner.last_time_nanos = None;
    }

    /// Current value, as of the most recently drained frame.
    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    /// The most recently requested target.
    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.register_frame_callback(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            match inner.spec {
                AnimationSpec::Tween(spec) => {
                    let start_time = inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed_nanos = frame_time_nanos.saturating_sub(*start_time);
                    let delay_nanos = spec.delay_millis * 1_000_000;

                    if elapsed_nanos < delay_nanos {
                        schedule_next = true;
                    } else {
                        let animation_elapsed = elapsed_nanos - delay_nanos;
                        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                        let linear_progress =
                            (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);
                        let progress = spec.easing.transform(linear_progress);

                        inner.current = inner.start + (inner.target - inner.start) * progress;

                        if linear_progress >= 1.0 {
                            inner.current = inner.target;
                            inner.start = inner.target;
                            inner.velocity = 0.0;
                            inner.start_time_nanos = None;
                        } else {
                            schedule_next = true;
                        }
                    }
                }
                AnimationSpec::Spring(spec) => {
                    let last = *inner.last_time_nanos.get_or_insert(frame_time_nanos);
                    let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;
                    inner.last_time_nanos = Some(frame_time_nanos);

                    if dt == 0.0 {
                        schedule_next = true;
                    } else {
                        // Damped harmonic oscillator in value space,
                        // semi-implicit Euler in bounded substeps.
                        let stiffness = spec.stiffness;
                        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();

                        let mut integrated = 0.0f32;
                        while integrated < dt {
                            let step = SPRING_TIMESTEP.min(dt - integrated);
                            let displacement = inner.current - inner.target;
                            let spring_force = -stiffness * displacement - damping * inner.velocity;
                            inner.velocity += spring_force * step;
                            inner.current += inner.velocity * step;
                            integrated += step;
                        }

                        let at_rest = inner.velocity.abs() < spec.velocity_threshold;
                        let near_target =
                            (inner.current - inner.target).abs() < spec.position_threshold;

                        if at_rest && near_target {
                            inner.current = inner.target;
                            inner.start = inner.target;
                            inner.velocity = 0.0;
                            inner.last_time_nanos = None;
                        } else {
                            schedule_next = true;
                        }
                    }
                }
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

use super::*;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

/// Pump frames until the value settles, returning every sampled value.
fn run_to_rest(clock: &FrameClock, animatable: &Animatable, max_frames: usize) -> Vec<f32> {
    let mut samples = Vec::new();
    let mut frame_time = 0u64;
    for _ in 0..max_frames {
        if !animatable.is_animating() {
            break;
        }
        frame_time += FRAME_NANOS;
        clock.drain_frame_callbacks(frame_time);
        samples.push(animatable.value());
    }
    samples
}

#[test]
fn tween_interpolates_and_lands_exactly_on_the_target() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());

    value.animate_to(1.0, AnimationSpec::Tween(TweenSpec::linear(100)));
    assert!(value.is_animating());
    assert_eq!(value.value(), 0.0);

    // First drained frame establishes the start time.
    clock.drain_frame_callbacks(0);
    assert_eq!(value.value(), 0.0);

    clock.drain_frame_callbacks(50_000_000);
    assert!((value.value() - 0.5).abs() < 1e-4);

    clock.drain_frame_callbacks(100_000_000);
    assert_eq!(value.value(), 1.0);
    assert!(!value.is_animating());
}

#[test]
fn tween_honors_the_start_delay() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());

    value.animate_to(
        1.0,
        AnimationSpec::Tween(TweenSpec::linear(100).with_delay(50)),
    );

    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(40_000_000);
    assert_eq!(value.value(), 0.0, "still inside the delay window");

    clock.drain_frame_callbacks(100_000_000);
    assert!((value.value() - 0.5).abs() < 1e-4);

    clock.drain_frame_callbacks(150_000_000);
    assert_eq!(value.value(), 1.0);
}

#[test]
fn a_new_tween_redirects_the_one_in_flight() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());

    value.animate_to(1.0, AnimationSpec::Tween(TweenSpec::linear(100)));
    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(50_000_000);
    let midway = value.value();
    assert!(midway > 0.0 && midway < 1.0);

    // Redirect: the new tween starts from the current value.
    value.animate_to(0.0, AnimationSpec::Tween(TweenSpec::linear(100)));
    assert_eq!(value.target(), 0.0);

    clock.drain_frame_callbacks(60_000_000);
    clock.drain_frame_callbacks(160_000_000);
    assert_eq!(value.value(), 0.0);
    assert!(!value.is_animating());
}

#[test]
fn snap_to_cancels_and_sets_immediately() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());

    value.animate_to(1.0, AnimationSpec::Tween(TweenSpec::linear(100)));
    value.snap_to(0.25);

    assert_eq!(value.value(), 0.25);
    assert_eq!(value.target(), 0.25);
    assert!(!value.is_animating());
    assert!(!clock.has_pending_callbacks());
}

#[test]
fn spring_reaches_the_target_through_intermediate_values() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());

    value.animate_to(1.0, AnimationSpec::Spring(SpringSpec::gentle()));
    let samples = run_to_rest(&clock, &value, 600);

    assert!(
        samples.iter().any(|v| *v > 0.0 && *v < 1.0),
        "spring should report intermediate values"
    );
    assert_eq!(value.value(), 1.0, "spring should settle exactly on target");
    assert!(!value.is_animating());
}

#[test]
fn spring_redirect_keeps_momentum_and_settles_on_the_new_target() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());

    value.animate_to(1.0, AnimationSpec::Spring(SpringSpec::gentle()));
    let mut frame_time = 0u64;
    for _ in 0..6 {
        frame_time += FRAME_NANOS;
        clock.drain_frame_callbacks(frame_time);
    }
    assert!(value.value() > 0.0);

    value.animate_to(0.0, AnimationSpec::Spring(SpringSpec::gentle()));
    assert_eq!(value.target(), 0.0);

    for _ in 0..600 {
        if !value.is_animating() {
            break;
        }
        frame_time += FRAME_NANOS;
        clock.drain_frame_callbacks(frame_time);
    }
    assert_eq!(value.value(), 0.0);
    assert!(!value.is_animating());
}

#[test]
fn dropping_the_animatable_releases_its_frame_callback() {
    let clock = FrameClock::new();
    let mut value = Animatable::new(0.0, clock.clone());
    value.animate_to(1.0, AnimationSpec::Spring(SpringSpec::gentle()));
    assert!(clock.has_pending_callbacks());

    drop(value);
    assert!(!clock.has_pending_callbacks());
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!((start - 0.0).abs() < 0.01, "start should be ~0 for {:?}", easing);
        assert!((end - 1.0).abs() < 0.01, "end should be ~1 for {:?}", easing);
    }
}

#[test]
fn tween_spec_default_has_reasonable_values() {
    let spec = TweenSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowIn);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_spec_default_is_critically_damped() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, 1.0);
}

#[test]
fn spring_spec_gentle_is_under_damped_and_softer_than_default() {
    let spec = SpringSpec::gentle();
    assert!(spec.damping_ratio < 1.0);
    assert!(spec.stiffness < SpringSpec::default().stiffness);
}

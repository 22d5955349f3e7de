//! Playback behavior under realistic frame loads: uneven deltas, long
//! sequences, endless repeats, and direction reversal.

use std::time::Duration;

use lumen_motion::{AnimatedValue, Animation, Easing, Segment};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Drives `value` for `total` milliseconds in `step`-sized ticks and
/// returns every sampled value.
fn drive(value: &mut AnimatedValue, total: u64, step: u64) -> Vec<f64> {
    let mut samples = Vec::new();
    let mut t = 0;
    while t < total {
        value.tick(ms(step));
        samples.push(value.get());
        t += step;
    }
    samples
}

#[test]
fn test_entrance_pop_overshoots_then_settles() {
    let mut scale = AnimatedValue::new(0.0);
    scale.animate(Animation::sequence([
        Segment::new(1.2, ms(800)).easing(Easing::back_out(1.5)),
        Segment::new(1.0, ms(300)),
    ]));

    let samples = drive(&mut scale, 1100, 10);
    let peak = samples.iter().copied().fold(f64::MIN, f64::max);

    // The pop swings past its own 1.2 target before the settle leg starts.
    assert!(peak > 1.2, "peak was {peak}");
    assert_eq!(scale.get(), 1.0);
    assert!(!scale.is_animating());
}

#[test]
fn test_entrance_pop_hits_intermediate_target_exactly() {
    let mut scale = AnimatedValue::new(0.0);
    scale.animate(Animation::sequence([
        Segment::new(1.2, ms(800)).easing(Easing::back_out(1.5)),
        Segment::new(1.0, ms(300)),
    ]));

    scale.tick(ms(800));
    assert!((scale.get() - 1.2).abs() < 1e-12);
    assert!(scale.is_animating());
}

#[test]
fn test_fade_in_is_monotone_and_bounded() {
    let mut opacity = AnimatedValue::new(0.0);
    opacity.animate(Animation::timing(1.0, ms(1000)));

    let samples = drive(&mut opacity, 1000, 16);
    for window in samples.windows(2) {
        assert!(window[1] >= window[0] - 1e-12, "opacity regressed: {window:?}");
    }
    assert!(samples.iter().all(|v| (0.0..=1.0).contains(v)));
    assert_eq!(opacity.get(), 1.0);
}

#[test]
fn test_slide_up_is_monotone_and_lands_exactly() {
    let mut lift = AnimatedValue::new(50.0);
    lift.animate(Animation::timing(0.0, ms(800)).easing(Easing::CubicOut));

    let samples = drive(&mut lift, 800, 16);
    for window in samples.windows(2) {
        assert!(window[1] <= window[0] + 1e-12, "lift regressed: {window:?}");
    }
    assert!(samples.iter().all(|v| (0.0..=50.0).contains(v)));
    assert_eq!(lift.get(), 0.0);
    assert!(!lift.is_animating());
}

#[test]
fn test_endless_spin_stays_in_range_and_counts_cycles() {
    let mut rotation = AnimatedValue::new(0.0);
    rotation.animate(
        Animation::timing(360.0, ms(3000))
            .easing(Easing::Linear)
            .repeat_forever(),
    );

    let samples = drive(&mut rotation, 10_000, 16);
    assert!(samples.iter().all(|v| (0.0..=360.0).contains(v)));
    assert!(rotation.is_animating());
    assert_eq!(rotation.cycles(), 3);
}

#[test]
fn test_ping_pong_is_periodic_and_seamless() {
    let mut progress = AnimatedValue::new(0.0);
    progress.animate(
        Animation::timing(1.0, ms(2000))
            .easing(Easing::SineInOut)
            .repeat_forever()
            .reverse_each_cycle(),
    );

    // One full out-and-back takes 4 seconds; samples 4s apart must agree.
    let first = drive(&mut progress, 4000, 100);
    let second = drive(&mut progress, 4000, 100);
    for (a, b) in first.iter().zip(&second) {
        assert!((a - b).abs() < 1e-9, "period drift: {a} vs {b}");
    }
    assert!(first.iter().all(|v| (0.0..=1.0).contains(v)));

    // No jump at the turnaround: the step straddling the apex is smaller
    // than a mid-slope step, because the sine curve flattens at both ends.
    let apex_step = (first[20] - first[19]).abs();
    let mid_step = (first[10] - first[9]).abs();
    assert!(apex_step < mid_step, "apex {apex_step} vs mid {mid_step}");
}

#[test]
fn test_uneven_frame_times_cannot_stall_or_overshoot_terminals() {
    let steps = [1u64, 16, 3, 250, 40, 7, 16, 500, 120, 16, 60, 100];
    let mut opacity = AnimatedValue::new(0.0);
    opacity.animate(Animation::timing(1.0, ms(1000)));

    let mut elapsed = 0;
    for step in steps {
        opacity.tick(ms(step));
        elapsed += step;
        assert!((0.0..=1.0).contains(&opacity.get()), "at {elapsed}ms");
    }
    assert!(elapsed > 1000);
    assert_eq!(opacity.get(), 1.0);
    assert!(!opacity.is_animating());
}

#[test]
fn test_long_soak_keeps_repeating_values_live() {
    let mut rotation = AnimatedValue::new(0.0);
    let mut progress = AnimatedValue::new(0.0);
    rotation.animate(
        Animation::timing(360.0, ms(3000))
            .easing(Easing::Linear)
            .repeat_forever(),
    );
    progress.animate(
        Animation::timing(1.0, ms(2000))
            .easing(Easing::SineInOut)
            .repeat_forever()
            .reverse_each_cycle(),
    );

    // Ten minutes of frames.
    for _ in 0..37_500 {
        rotation.tick(ms(16));
        progress.tick(ms(16));
    }
    assert!(rotation.is_animating());
    assert!(progress.is_animating());
    assert_eq!(rotation.cycles(), 200);
    assert!((0.0..=360.0).contains(&rotation.get()));
    assert!((0.0..=1.0).contains(&progress.get()));
}

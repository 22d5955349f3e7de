//! Animated scalar values and their playback state machine.

use std::time::Duration;

use crate::timing::{Animation, Segment};

/// Playback state for one running [`Animation`].
#[derive(Clone, Debug, PartialEq)]
struct Track {
    animation: Animation,
    /// Value the animation started from. Non-reversing repeats snap back
    /// here at every cycle boundary; reversing repeats ease back to it.
    base: f64,
    /// Leg index within the current cycle, in traversal order.
    position: usize,
    /// Time spent inside the current leg.
    elapsed: Duration,
    /// Whether the current cycle walks the segments forwards.
    forward: bool,
    /// Completed cycles.
    cycles: u32,
}

impl Track {
    fn new(base: f64, animation: Animation) -> Self {
        Self {
            animation,
            base,
            position: 0,
            elapsed: Duration::ZERO,
            forward: true,
            cycles: 0,
        }
    }

    /// Endpoints and shape of the current leg.
    ///
    /// A reverse cycle walks the segment list back to front, reusing each
    /// segment's duration and curve with its endpoints swapped, so the leg
    /// that eased the value somewhere is the one that eases it back.
    fn leg(&self) -> (f64, f64, Segment) {
        let segments = self.animation.segments();
        if self.forward {
            let segment = segments[self.position];
            let from = if self.position == 0 {
                self.base
            } else {
                segments[self.position - 1].target
            };
            (from, segment.target, segment)
        } else {
            let index = segments.len() - 1 - self.position;
            let segment = segments[index];
            let to = if index == 0 {
                self.base
            } else {
                segments[index - 1].target
            };
            (segment.target, to, segment)
        }
    }
}

/// A scalar whose value evolves over time under a timing curve.
///
/// At most one animation plays at a time; starting a new one replaces the
/// old mid-flight, picking up from the current value. The host advances
/// playback by calling [`AnimatedValue::tick`] with real frame deltas.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    track: Option<Track>,
}

impl AnimatedValue {
    pub fn new(initial: f64) -> Self {
        Self {
            value: initial,
            track: None,
        }
    }

    /// Current value.
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Sets the value directly, cancelling any running animation.
    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.track = None;
    }

    /// Starts `animation` from the current value, replacing any running one.
    ///
    /// An animation with no segments, or a `Count(0)` repeat, cancels the
    /// current playback and leaves the value where it is.
    pub fn animate(&mut self, animation: Animation) {
        if animation.segments().is_empty() || !animation.repeat_policy().grants(0) {
            self.track = None;
            return;
        }
        self.track = Some(Track::new(self.value, animation));
    }

    /// Whether an animation is currently running.
    pub fn is_animating(&self) -> bool {
        self.track.is_some()
    }

    /// Completed cycles of the running animation, zero when idle.
    pub fn cycles(&self) -> u32 {
        self.track.as_ref().map(|t| t.cycles).unwrap_or(0)
    }

    /// Advances playback by `dt`.
    ///
    /// Time left over when a leg completes spills into the next leg, and
    /// across cycle boundaries, so a slow frame never stalls progress. A
    /// finishing leg snaps the value exactly onto its endpoint rather than
    /// trusting the eased tail.
    pub fn tick(&mut self, dt: Duration) {
        let Some(mut track) = self.track.take() else {
            return;
        };

        let mut remaining = dt;
        let mut budget = remaining;
        loop {
            let (from, to, segment) = track.leg();
            let left = segment.duration.saturating_sub(track.elapsed);

            if remaining < left {
                track.elapsed += remaining;
                let t = track.elapsed.as_secs_f64() / segment.duration.as_secs_f64();
                self.value = from + (to - from) * segment.easing.apply(t);
                break;
            }

            remaining -= left;
            self.value = to;
            track.elapsed = Duration::ZERO;
            track.position += 1;
            if track.position < track.animation.segments().len() {
                continue;
            }

            track.cycles = track.cycles.saturating_add(1);
            if !track.animation.repeat_policy().grants(track.cycles) {
                return;
            }
            if remaining == budget {
                // A repeating animation with zero total duration cannot make
                // progress; rest at the end of the cycle instead of spinning.
                return;
            }
            budget = remaining;
            track.position = 0;
            if track.animation.reverses() {
                track.forward = !track.forward;
            } else {
                self.value = track.base;
            }
        }

        self.track = Some(track);
    }
}

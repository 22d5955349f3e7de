//! Declarative animation descriptions.
//!
//! An [`Animation`] is pure data: where the value should go, over what
//! durations, under which curves, and how many times. Playback state lives
//! in [`crate::AnimatedValue`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// One timed leg of an animation: ease the value to `target` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub target: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl Segment {
    /// Segment with the default curve.
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            easing: Easing::default(),
        }
    }

    /// Replaces the curve.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// How many times an animation plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repeat {
    /// Play once and finish.
    #[default]
    None,
    /// Play the given number of cycles. `Count(0)` plays nothing.
    Count(u32),
    /// Repeat until the value is reassigned or dropped.
    Forever,
}

impl Repeat {
    /// Whether another cycle may start after `completed` full cycles.
    pub(crate) fn grants(self, completed: u32) -> bool {
        match self {
            Repeat::None => completed == 0,
            Repeat::Count(count) => completed < count,
            Repeat::Forever => true,
        }
    }
}

/// A sequence of timed segments plus a repeat policy.
///
/// Cycles normally restart from the value the animation began at. With
/// [`Animation::reverse_each_cycle`] every other cycle instead plays the
/// segments backwards, so the value turns around smoothly at both ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub(crate) segments: Vec<Segment>,
    pub(crate) repeat: Repeat,
    pub(crate) reverse: bool,
}

impl Animation {
    /// Single segment easing to `target` over `duration` with the default curve.
    pub fn timing(target: f64, duration: Duration) -> Self {
        Self {
            segments: vec![Segment::new(target, duration)],
            repeat: Repeat::None,
            reverse: false,
        }
    }

    /// Segments played in order, each starting where the previous ended.
    pub fn sequence<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        Self {
            segments: segments.into_iter().collect(),
            repeat: Repeat::None,
            reverse: false,
        }
    }

    /// Replaces the curve on every segment.
    pub fn easing(mut self, easing: Easing) -> Self {
        for segment in &mut self.segments {
            segment.easing = easing;
        }
        self
    }

    /// Plays the animation `count` times.
    pub fn repeat(mut self, count: u32) -> Self {
        self.repeat = Repeat::Count(count);
        self
    }

    /// Repeats until the value is reassigned or dropped.
    pub fn repeat_forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// Plays every other cycle backwards instead of snapping to the start.
    pub fn reverse_each_cycle(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn repeat_policy(&self) -> Repeat {
        self.repeat
    }

    pub fn reverses(&self) -> bool {
        self.reverse
    }

    /// Combined duration of one forward pass over the segments.
    pub fn cycle_duration(&self) -> Duration {
        self.segments.iter().map(|s| s.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_builds_single_default_segment() {
        let anim = Animation::timing(1.0, Duration::from_millis(1000));
        assert_eq!(anim.segments().len(), 1);
        assert_eq!(anim.segments()[0].target, 1.0);
        assert_eq!(anim.segments()[0].easing, Easing::QuadInOut);
        assert_eq!(anim.repeat_policy(), Repeat::None);
        assert!(!anim.reverses());
    }

    #[test]
    fn test_easing_applies_to_every_segment() {
        let anim = Animation::sequence([
            Segment::new(1.2, Duration::from_millis(800)),
            Segment::new(1.0, Duration::from_millis(300)),
        ])
        .easing(Easing::Linear);
        assert!(anim.segments().iter().all(|s| s.easing == Easing::Linear));
    }

    #[test]
    fn test_repeat_grants() {
        assert!(Repeat::None.grants(0));
        assert!(!Repeat::None.grants(1));
        assert!(!Repeat::Count(0).grants(0));
        assert!(Repeat::Count(2).grants(1));
        assert!(!Repeat::Count(2).grants(2));
        assert!(Repeat::Forever.grants(u32::MAX));
    }

    #[test]
    fn test_cycle_duration_sums_segments() {
        let anim = Animation::sequence([
            Segment::new(1.2, Duration::from_millis(800)),
            Segment::new(1.0, Duration::from_millis(300)),
        ]);
        assert_eq!(anim.cycle_duration(), Duration::from_millis(1100));
    }
}

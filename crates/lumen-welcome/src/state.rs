//! Animation state owned by the welcome screen.

use std::time::Duration;

use lumen_motion::{AnimatedValue, Animation, Easing, Segment};

/// The five animated scalars behind the welcome screen.
///
/// Entrance values (scale, opacity, lift) play once to a resting state;
/// rotation and color progress repeat until the screen goes away. The
/// struct holds plain playback state, so it drops with the screen and
/// nothing keeps ticking after unmount.
#[derive(Clone, Debug, PartialEq)]
pub struct WelcomeMotion {
    scale: AnimatedValue,
    rotation: AnimatedValue,
    opacity: AnimatedValue,
    lift: AnimatedValue,
    color_progress: AnimatedValue,
}

impl Default for WelcomeMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeMotion {
    /// Resting state before the entrance plays: invisible, fully shrunk,
    /// shifted 50px down.
    pub fn new() -> Self {
        Self {
            scale: AnimatedValue::new(0.0),
            rotation: AnimatedValue::new(0.0),
            opacity: AnimatedValue::new(0.0),
            lift: AnimatedValue::new(50.0),
            color_progress: AnimatedValue::new(0.0),
        }
    }

    /// Declares all five curves. Called once, when the screen mounts.
    pub fn start(&mut self) {
        // Pop past full size, then settle.
        self.scale.animate(Animation::sequence([
            Segment::new(1.2, Duration::from_millis(800)).easing(Easing::back_out(1.5)),
            Segment::new(1.0, Duration::from_millis(300)),
        ]));

        self.opacity
            .animate(Animation::timing(1.0, Duration::from_millis(1000)));

        self.lift.animate(
            Animation::timing(0.0, Duration::from_millis(800)).easing(Easing::CubicOut),
        );

        // Full turn every three seconds, restarting from zero.
        self.rotation.animate(
            Animation::timing(360.0, Duration::from_millis(3000))
                .easing(Easing::Linear)
                .repeat_forever(),
        );

        // Hue sweep out and back, four seconds per round trip.
        self.color_progress.animate(
            Animation::timing(1.0, Duration::from_millis(2000))
                .easing(Easing::SineInOut)
                .repeat_forever()
                .reverse_each_cycle(),
        );
    }

    /// Advances every value by the elapsed frame time.
    pub fn advance(&mut self, dt: Duration) {
        self.scale.tick(dt);
        self.rotation.tick(dt);
        self.opacity.tick(dt);
        self.lift.tick(dt);
        self.color_progress.tick(dt);
    }

    /// Whether the one-shot entrance values have all settled.
    pub fn entrance_complete(&self) -> bool {
        !self.scale.is_animating() && !self.opacity.is_animating() && !self.lift.is_animating()
    }

    pub fn scale(&self) -> f64 {
        self.scale.get()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.get()
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.get()
    }

    pub fn lift(&self) -> f64 {
        self.lift.get()
    }

    pub fn color_progress(&self) -> f64 {
        self.color_progress.get()
    }

    /// Completed turns of the endless spin.
    pub fn spin_cycles(&self) -> u32 {
        self.rotation.cycles()
    }
}

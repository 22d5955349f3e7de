//! Easing curves for timed segments.

use serde::{Deserialize, Serialize};

/// A timing curve mapping normalized elapsed time to normalized progress.
///
/// Input is clamped to `[0.0, 1.0]` before the curve is applied, so callers
/// never have to guard against frame jitter pushing `t` out of range. Every
/// curve maps `0.0` to `0.0` and `1.0` to `1.0`; only [`Easing::BackOut`]
/// leaves the unit band in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Quadratic ease-in-out. The default curve for timed segments.
    #[default]
    QuadInOut,
    /// Cubic ease-out: fast start, soft landing.
    CubicOut,
    /// Sine ease-in-out, symmetric around the midpoint.
    SineInOut,
    /// Ease-out that overshoots the target before settling back.
    ///
    /// `overshoot` controls how far past the target the curve swings.
    /// The conventional value is `1.70158` (about a 10% overshoot).
    BackOut { overshoot: f64 },
}

impl Easing {
    /// Back ease-out with the given overshoot amount.
    pub fn back_out(overshoot: f64) -> Self {
        Easing::BackOut { overshoot }
    }

    /// Applies the curve to a normalized time `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::SineInOut => 0.5 * (1.0 - (std::f64::consts::PI * t).cos()),
            Easing::BackOut { overshoot } => {
                let u = 1.0 - t;
                1.0 - u * u * ((overshoot + 1.0) * u - overshoot)
            }
        }
    }

    /// Whether this curve can leave the `[0.0, 1.0]` band.
    pub fn overshoots(self) -> bool {
        matches!(self, Easing::BackOut { .. })
    }
}

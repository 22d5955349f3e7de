//! CSS color values used by animated layers.

use serde::{Deserialize, Serialize};

/// An HSL color with percentage saturation and lightness.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Maps a normalized progress onto a full hue sweep at the saturated,
    /// bright wash animated backgrounds use. Progress clamps to `[0, 1]`,
    /// so the hue stays inside `[0deg, 360deg]`.
    pub fn from_progress(progress: f64) -> Self {
        Self::new(progress.clamp(0.0, 1.0) * 360.0, 80.0, 60.0)
    }

    /// CSS `hsl()` function notation.
    pub fn css(&self) -> String {
        format!(
            "hsl({:.1}, {:.0}%, {:.0}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// An RGBA color with byte channels and fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// CSS `rgba()` function notation.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

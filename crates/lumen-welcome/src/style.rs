//! Frame-derived styles: pure mappings from animation scalars to CSS.
//!
//! Everything here is a plain function of the current animation values, so
//! the same frame always renders the same styles.

use lumen_motion::interpolate;
use lumen_ui::color::{Hsl, Rgba};

/// Gradient tint drawn over the hue wash, always at the same angle.
const GRADIENT_FROM: Rgba = Rgba::new(255, 0, 150, 0.3);
const GRADIENT_TO: Rgba = Rgba::new(0, 204, 255, 0.3);

/// Logical size of the area the screen renders into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Side of the central card: 30% of the smaller viewport edge, so the
    /// circle fits in either orientation. Degenerate sizes give zero.
    pub fn glyph_box_side(self) -> f64 {
        self.width.min(self.height).max(0.0) * 0.3
    }
}

/// Inline style for the central card: entrance transform chain plus fade.
///
/// Transform order matters: the lift rides inside the rotation, so during
/// the entrance the card slides in along its current spin direction.
pub fn container_style(scale: f64, rotation_deg: f64, lift: f64, opacity: f64) -> String {
    format!(
        "transform: scale({scale:.4}) rotate({rotation_deg:.2}deg) translateY({lift:.2}px); opacity: {opacity:.3};"
    )
}

/// Inline style for the full-bleed hue layer under the content.
pub fn background_style(color_progress: f64) -> String {
    format!("background-color: {};", Hsl::from_progress(color_progress).css())
}

/// Inline style for the fixed diagonal tint over the hue layer.
pub fn gradient_overlay_style() -> String {
    format!(
        "background: linear-gradient(45deg, {} 0%, {} 100%);",
        GRADIENT_FROM.css(),
        GRADIENT_TO.css()
    )
}

/// Text scale tied to the color cycle: up to 110% mid-sweep, back to 100%
/// at both ends.
pub fn text_scale(color_progress: f64) -> f64 {
    interpolate(color_progress, &[(0.0, 1.0), (0.5, 1.1), (1.0, 1.0)])
}

/// Inline style applying [`text_scale`] to a text element.
pub fn text_style(color_progress: f64) -> String {
    format!("transform: scale({:.4});", text_scale(color_progress))
}

/// Inline style for the text block sharing the entrance lift and fade.
pub fn text_block_style(lift: f64, opacity: f64) -> String {
    format!("transform: translateY({lift:.2}px); opacity: {opacity:.3};")
}

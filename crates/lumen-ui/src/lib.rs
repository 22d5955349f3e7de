//! Shared UI layer for Lumen applications.
//!
//! Provides the theme system, CSS color values, and the design-token
//! stylesheet every Lumen screen builds on.

pub mod color;
pub mod theme;

pub use color::{Hsl, Rgba};
pub use theme::{Palette, Theme, ThemedRoot, CURRENT_THEME};

/// Shared CSS with design tokens, theme variables, and base styles.
/// Apps inject this ahead of their own stylesheet.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");

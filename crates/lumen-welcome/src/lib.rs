//! Animated welcome screen for the Lumen desktop app.
//!
//! The screen is three stacked layers: a hue wash cycling through the
//! spectrum, a fixed diagonal gradient tint, and a centered card that pops,
//! spins, and lifts into place. All movement runs on [`lumen_motion`]
//! values advanced by a frame loop; rendering derives styles from those
//! values every frame.

pub mod components;
pub mod state;
pub mod style;

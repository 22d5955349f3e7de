//! Timing-curve animation runtime for Lumen applications.
//!
//! The model is small and declarative. An [`Animation`] describes where a
//! scalar should go: one or more timed [`Segment`]s, an optional repeat
//! policy, and an optional direction reversal on alternate cycles. An
//! [`AnimatedValue`] owns the scalar and plays one animation at a time,
//! advanced by the host's frame driver through [`AnimatedValue::tick`].
//!
//! Nothing here spawns tasks or talks to a renderer. Screens read the
//! current value every frame and derive styles from it.

pub mod easing;
pub mod interpolate;
pub mod timing;
pub mod value;

pub use easing::Easing;
pub use interpolate::interpolate;
pub use timing::{Animation, Repeat, Segment};
pub use value::AnimatedValue;

//! Headless interpolation math for two-stop linear-gradient transitions.
//!
//! For scheduling, cancellation and surfaces, see the `gradient-tween-animator` crate.
//!
//! This crate holds the pure parts of a gradient transition: the endpoint value type, the easing
//! registry, per-frame interpolation with a fixed rounding rule, the legacy unit-step strategy and
//! CSS formatting. Nothing here owns a clock or a surface.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - a tick source (frame callback or timer)
//! - a surface that accepts a background style string
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod color;
mod easing;
mod interpolate;
mod state;
mod step;

#[cfg(test)]
mod tests;

pub use color::Rgb;
pub use easing::{Easing, EasingFn, ParseEasingError};
pub use interpolate::{interpolate, lerp, round_half_up};
pub use state::GradientState;
pub use step::{step_toward, steps_between};

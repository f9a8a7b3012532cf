//! Tick-driven scheduling for gradient transitions.
//!
//! The `gradient-tween` crate is clock-free and focuses on the math. This crate owns everything
//! with a lifecycle:
//!
//! - An injected [`Scheduler`] capability ([`ManualScheduler`] for deterministic hosts and tests,
//!   [`IntervalScheduler`] as a fixed-interval timer)
//! - [`GradientAnimator::start`], which validates options synchronously and returns a
//!   [`Transition`] handle (cancel + [`Completion`] signal) without blocking
//! - Surface, resolver and renderer traits so hosts plug in their own style targets
//!
//! Runs are single-threaded and cooperative: a tick never blocks, it renders and requests the next
//! tick. Handles are `!Send`.
//!
//! ```
//! use std::rc::Rc;
//! use gradient_tween::{Easing, GradientState, Rgb};
//! use gradient_tween_animator::{GradientAnimator, ManualScheduler, Surface, TransitionOptions};
//!
//! struct Log;
//! impl Surface for Log {
//!     fn set_background(&mut self, css: &str) {
//!         let _ = css;
//!     }
//! }
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let animator = GradientAnimator::new(Rc::clone(&scheduler));
//! let from = GradientState::vertical(Rgb::BLACK, Rgb::WHITE);
//! let to = GradientState::vertical(Rgb::WHITE, Rgb::BLACK);
//! let transition = animator
//!     .start(
//!         TransitionOptions::new(from, to)
//!             .surface(Log)
//!             .duration_ms(300)
//!             .easing(Easing::EaseOutCubic),
//!     )
//!     .unwrap();
//!
//! scheduler.run_until_idle(100);
//! assert!(transition.is_finished());
//! assert_eq!(transition.completion().try_take(), Some(Ok(())));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod completion;
mod error;
#[cfg(feature = "std")]
mod interval;
mod options;
mod scheduler;
mod surface;


pub use animator::{GradientAnimator, Phase, Transition};
pub use completion::Completion;
pub use error::{AnimationError, ConfigError, Endpoint};
#[cfg(feature = "std")]
pub use interval::IntervalScheduler;
pub use options::{GradientSpec, Strategy, TransitionConfig, TransitionOptions, TransitionSpec};
pub use scheduler::{ManualScheduler, Scheduler, TickFn, TickHandle};
pub use surface::{CssRenderer, Element, Renderer, Surface, SurfaceResolver};

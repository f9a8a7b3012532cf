//! Animated transitions between two-stop linear gradients.
//!
//! This crate re-exports the two halves of the engine:
//!
//! - [`tween`] (`gradient-tween`): the clock-free math. Gradient endpoints, the easing registry,
//!   interpolation with a fixed rounding rule, the legacy unit-step strategy, CSS formatting.
//! - [`animator`] (`gradient-tween-animator`): the lifecycle. Injected schedulers, transition
//!   options and validation, the tick loop, cancellation and the completion signal.
//!
//! The most common items are also re-exported at the crate root.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use gradient_tween as tween;
pub use gradient_tween_animator as animator;

pub use gradient_tween::{Easing, EasingFn, GradientState, Rgb, interpolate};
pub use gradient_tween_animator::{
    AnimationError, Completion, Element, GradientAnimator, ManualScheduler, Phase, Scheduler,
    Strategy, Surface, Transition, TransitionOptions,
};
#[cfg(feature = "std")]
pub use gradient_tween_animator::IntervalScheduler;

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::rc::Rc;

    struct Sink;

    impl Surface for Sink {
        fn set_background(&mut self, _css: &str) {}
    }

    #[test]
    fn facade_exposes_a_working_pipeline() {
        let scheduler = Rc::new(ManualScheduler::new());
        let animator = GradientAnimator::new(Rc::clone(&scheduler));
        let from = GradientState::vertical(Rgb::BLACK, Rgb::WHITE);
        let t = animator
            .start(
                TransitionOptions::new(from, from.reversed())
                    .surface(Sink)
                    .duration_ms(64)
                    .easing(Easing::EaseInOutQuad),
            )
            .unwrap();
        assert_eq!(scheduler.run_until_idle(100), 5);
        assert_eq!(t.phase(), Phase::Completed);
        assert_eq!(t.completion().try_take(), Some(Ok(())));
    }
}

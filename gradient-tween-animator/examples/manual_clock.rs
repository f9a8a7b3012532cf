// Example: drive a transition from a host-owned clock, then cancel a second one mid-flight.
use std::cell::RefCell;
use std::rc::Rc;

use gradient_tween::{Easing, GradientState, Rgb};
use gradient_tween_animator::{
    AnimationError, GradientAnimator, ManualScheduler, Surface, TransitionOptions,
};

#[derive(Clone, Default)]
struct Element {
    background: Rc<RefCell<String>>,
}

impl Surface for Element {
    fn set_background(&mut self, css: &str) {
        *self.background.borrow_mut() = css.to_string();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let scheduler = Rc::new(ManualScheduler::with_frame_ms(50));
    let animator = GradientAnimator::new(Rc::clone(&scheduler));
    let hero = Element::default();

    let from = GradientState::vertical(Rgb::new(20, 20, 40), Rgb::new(40, 20, 80));
    let to = GradientState::new([Rgb::new(240, 80, 60), Rgb::new(250, 200, 90)], [5.0, 95.0], 90.0);

    let first = animator
        .start(
            TransitionOptions::new(from, to)
                .surface(hero.clone())
                .duration_ms(300)
                .easing(Easing::EaseOutCubic),
        )
        .expect("valid options");

    scheduler.run_frame();
    while !first.is_finished() {
        scheduler.advance(50);
        println!("t={:>4}ms {}", scheduler.now_ms(), hero.background.borrow());
    }

    let second = animator
        .start(
            TransitionOptions::new(to, from)
                .surface(hero.clone())
                .duration_ms(300),
        )
        .expect("valid options");
    let mut completion = second.completion();
    scheduler.advance_frames(3);
    second.cancel();
    println!("cancelled at: {}", hero.background.borrow());
    assert_eq!(completion.try_take(), Some(Err(AnimationError::Cancelled)));
}

// Example: bounce a gradient back and forth on a real interval timer, printing each frame.
//
// Run with `RUST_LOG=gradient_tween_animator=trace` and `--features tracing` to see tick logs.
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gradient_transition::{
    Easing, GradientAnimator, GradientState, IntervalScheduler, Rgb, Surface, TransitionOptions,
};

struct Stdout {
    frame: Rc<Cell<u32>>,
}

impl Surface for Stdout {
    fn set_background(&mut self, css: &str) {
        let n = self.frame.get();
        self.frame.set(n + 1);
        if n % 4 == 0 {
            println!("frame {n:>3}: background: {css};");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let scheduler = Rc::new(IntervalScheduler::new(Duration::from_millis(16)));
    let animator = GradientAnimator::new(Rc::clone(&scheduler));
    let frame = Rc::new(Cell::new(0));

    let sunrise = GradientState::new(
        [Rgb::new(255, 94, 58), Rgb::new(255, 149, 0)],
        [0.0, 100.0],
        135.0,
    );
    let dusk = GradientState::new(
        [Rgb::new(43, 88, 118), Rgb::new(78, 67, 118)],
        [10.0, 90.0],
        225.0,
    );

    let legs = [
        (sunrise, dusk, Easing::EaseInOutCubic),
        (dusk, dusk.reversed(), Easing::EaseOutQuad),
        (dusk.reversed(), sunrise, Easing::EaseInQuad),
    ];

    for (from, to, easing) in legs {
        println!("-- {easing}");
        let transition = match animator.start(
            TransitionOptions::new(from, to)
                .surface(Stdout {
                    frame: Rc::clone(&frame),
                })
                .duration_ms(400)
                .easing(easing),
        ) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("failed to start: {e}");
                return;
            }
        };
        let frames = scheduler.run();
        println!("   {:?} after {frames} frames", transition.phase());
    }
}

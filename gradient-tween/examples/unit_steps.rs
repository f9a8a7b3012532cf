// Example: the legacy discrete strategy, one unit per tick until every scalar matches.
use gradient_tween::{GradientState, Rgb, step_toward, steps_between};

fn main() {
    let from = GradientState::new([Rgb::new(250, 250, 250), Rgb::BLACK], [0.0, 100.0], 180.0);
    let to = GradientState::new([Rgb::new(240, 255, 250), Rgb::new(3, 0, 0)], [4.5, 100.0], 176.0);

    println!("{} ticks needed", steps_between(&from, &to));
    let mut current = from;
    let mut tick = 0;
    while current != to {
        current = step_toward(&current, &to);
        tick += 1;
        println!("tick {tick:>2}: {current}");
    }
}

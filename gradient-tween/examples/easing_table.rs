// Example: sample every named easing curve and print the resulting CSS at a few progress points.
use gradient_tween::{Easing, GradientState, Rgb, interpolate};

fn main() {
    let from = GradientState::new([Rgb::BLACK, Rgb::WHITE], [0.0, 100.0], 0.0);
    let to = GradientState::new([Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)], [0.0, 100.0], 180.0);

    for easing in Easing::ALL {
        println!("{easing}");
        for step in 0..=4 {
            let raw = step as f64 / 4.0;
            let state = interpolate(&from, &to, easing.sample(raw));
            println!("  {raw:.2} -> {state}");
        }
    }
}

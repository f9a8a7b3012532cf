//! Discrete unit-step interpolation.
//!
//! The legacy strategy: every tick, each of the nine scalars moves one unit toward its target, and
//! the transition ends when all of them match. There is no normalized progress and no easing; the
//! number of ticks is an emergent property of the largest per-scalar delta.

use crate::{GradientState, Rgb};

fn step_scalar(current: f64, target: f64) -> f64 {
    let delta = target - current;
    if delta.abs() <= 1.0 {
        target
    } else {
        current + delta.signum()
    }
}

fn step_channel(current: i32, target: i32) -> i32 {
    current + (target - current).signum()
}

fn step_color(current: Rgb, target: Rgb) -> Rgb {
    Rgb::new(
        step_channel(current.r, target.r),
        step_channel(current.g, target.g),
        step_channel(current.b, target.b),
    )
}

/// Moves every scalar of `current` at most one unit toward `target`.
///
/// A fractional remainder smaller than one unit snaps straight to the target, so repeated calls
/// always reach `target` exactly.
pub fn step_toward(current: &GradientState, target: &GradientState) -> GradientState {
    GradientState {
        colors: [
            step_color(current.colors[0], target.colors[0]),
            step_color(current.colors[1], target.colors[1]),
        ],
        positions: [
            step_scalar(current.positions[0], target.positions[0]),
            step_scalar(current.positions[1], target.positions[1]),
        ],
        angle: step_scalar(current.angle, target.angle),
    }
}

fn scalar_steps(a: f64, b: f64) -> u64 {
    let d = (b - a).abs();
    let whole = d as u64;
    if (whole as f64) < d { whole + 1 } else { whole }
}

/// The number of [`step_toward`] calls needed to turn `from` into `to`.
pub fn steps_between(from: &GradientState, to: &GradientState) -> u64 {
    let channel_steps = from
        .colors
        .iter()
        .zip(to.colors.iter())
        .flat_map(|(a, b)| {
            a.channels()
                .into_iter()
                .zip(b.channels())
                .map(|(x, y)| x.abs_diff(y) as u64)
        })
        .max()
        .unwrap_or(0);

    [
        scalar_steps(from.positions[0], to.positions[0]),
        scalar_steps(from.positions[1], to.positions[1]),
        scalar_steps(from.angle, to.angle),
    ]
    .into_iter()
    .fold(channel_steps, u64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_remainder_snaps() {
        assert_eq!(step_scalar(10.0, 10.4), 10.4);
        assert_eq!(step_scalar(10.0, 12.5), 11.0);
        assert_eq!(step_scalar(12.5, 10.0), 11.5);
        assert_eq!(scalar_steps(10.0, 12.5), 3);
        assert_eq!(scalar_steps(10.0, 10.0), 0);
    }

    #[test]
    fn channels_step_by_one() {
        assert_eq!(step_channel(0, 255), 1);
        assert_eq!(step_channel(255, 0), 254);
        assert_eq!(step_channel(7, 7), 7);
    }
}

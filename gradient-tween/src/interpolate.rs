use crate::{GradientState, Rgb};

// 2^52: every f64 at or beyond this magnitude is already an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Linear interpolation between `a` and `b`.
///
/// Evaluated as `a * (1 - t) + b * t`, which returns exactly `a` at `t = 0` and exactly `b` at
/// `t = 1`. Values of `t` outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

fn floor(x: f64) -> f64 {
    if !(x.abs() < INTEGRAL_THRESHOLD) {
        // Large magnitudes, infinities and NaN pass through.
        return x;
    }
    let t = x as i64 as f64;
    if t > x { t - 1.0 } else { t }
}

/// Rounds to the nearest integer, ties toward positive infinity (`127.5 -> 128`, `-0.5 -> 0`).
///
/// This is the single rounding rule applied to all nine gradient scalars.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    floor(x + 0.5)
}

#[inline]
fn channel(a: i32, b: i32, t: f64) -> i32 {
    // `as` saturates, which is the only sane answer for absurd overshoot.
    round_half_up(lerp(a as f64, b as f64, t)) as i32
}

fn color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(channel(a.r, b.r, t), channel(a.g, b.g, t), channel(a.b, b.b, t))
}

/// Computes the intermediate gradient at eased progress `t`.
///
/// All nine scalars (six channels, two positions, the angle) move in lock-step and are rounded with
/// [`round_half_up`]. There is no clamping: an overshooting `t` may produce channels outside
/// `[0, 255]` or positions outside `[0, 100]`.
pub fn interpolate(from: &GradientState, to: &GradientState, t: f64) -> GradientState {
    GradientState {
        colors: [
            color(from.colors[0], to.colors[0], t),
            color(from.colors[1], to.colors[1], t),
        ],
        positions: [
            round_half_up(lerp(from.positions[0], to.positions[0], t)),
            round_half_up(lerp(from.positions[1], to.positions[1], t)),
        ],
        angle: round_half_up(lerp(from.angle, to.angle, t)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_ties_go_up() {
        assert_eq!(round_half_up(127.5), 128.0);
        assert_eq!(round_half_up(127.49), 127.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.51), -2.0);
        assert_eq!(round_half_up(3.0), 3.0);
    }

    #[test]
    fn floor_passes_through_non_finite() {
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_half_up(1e300), 1e300);
    }

    #[test]
    fn lerp_is_exact_at_endpoints() {
        assert_eq!(lerp(0.1, 33.3, 0.0), 0.1);
        assert_eq!(lerp(0.1, 33.3, 1.0), 33.3);
        assert_eq!(lerp(10.0, 20.0, 1.5), 25.0);
    }
}

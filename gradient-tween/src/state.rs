use alloc::string::{String, ToString};
use core::fmt;

use crate::{Rgb, round_half_up};

/// One endpoint of a gradient transition: two color stops, their positions and an angle.
///
/// The two-stop shape is fixed by the type. Positions are conventionally `[0, 100]` with the first
/// not greater than the second, and the angle is in degrees; neither is range-checked here.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` using the
/// `{ "colors": [[r,g,b],[r,g,b]], "positions": [p0,p1], "angle": a }` shape.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientState {
    pub colors: [Rgb; 2],
    pub positions: [f64; 2],
    pub angle: f64,
}

impl GradientState {
    pub const DEFAULT_POSITIONS: [f64; 2] = [0.0, 100.0];
    pub const DEFAULT_ANGLE: f64 = 180.0;

    pub const fn new(colors: [Rgb; 2], positions: [f64; 2], angle: f64) -> Self {
        Self {
            colors,
            positions,
            angle,
        }
    }

    /// A top-to-bottom gradient (`180deg`) spanning the full `0%..100%` range.
    pub const fn vertical(top: Rgb, bottom: Rgb) -> Self {
        Self::new([top, bottom], Self::DEFAULT_POSITIONS, Self::DEFAULT_ANGLE)
    }

    pub fn top(&self) -> Rgb {
        self.colors[0]
    }

    pub fn bottom(&self) -> Rgb {
        self.colors[1]
    }

    /// The same gradient with its two color stops swapped.
    pub fn reversed(&self) -> Self {
        Self {
            colors: [self.colors[1], self.colors[0]],
            ..*self
        }
    }

    /// Applies the crate-wide rounding rule to positions and angle.
    ///
    /// Channels are already integral.
    pub fn rounded(&self) -> Self {
        Self {
            colors: self.colors,
            positions: [
                round_half_up(self.positions[0]),
                round_half_up(self.positions[1]),
            ],
            angle: round_half_up(self.angle),
        }
    }

    /// Formats this state as a CSS `linear-gradient(...)` value with alpha fixed at 1.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GradientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [top, bottom] = self.colors;
        let [p0, p1] = self.positions;
        write!(
            f,
            "linear-gradient({}deg, rgba({},{},{},1) {}%, rgba({},{},{},1) {}%)",
            self.angle, top.r, top.g, top.b, p0, bottom.r, bottom.g, bottom.b, p1
        )
    }
}

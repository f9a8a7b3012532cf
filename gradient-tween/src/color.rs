/// An RGB color stop in raw channel space.
///
/// Channels are `i32` rather than `u8`: interpolating with an overshooting easing curve can push a
/// channel outside `[0, 255]`, and that value is carried through unchanged until a renderer decides
/// whether to clamp it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[i32; 3]", into = "[i32; 3]"))]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    pub const fn channels(self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns `true` when every channel is within `[0, 255]`.
    pub fn is_in_gamut(self) -> bool {
        self.channels().iter().all(|c| (0..=255).contains(c))
    }

    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0, 255),
            self.g.clamp(0, 255),
            self.b.clamp(0, 255),
        )
    }
}

impl From<[i32; 3]> for Rgb {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [i32; 3] {
    fn from(c: Rgb) -> Self {
        c.channels()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r as i32, g as i32, b as i32)
    }
}

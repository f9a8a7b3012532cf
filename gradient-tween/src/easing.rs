use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::str::FromStr;

/// The named easing registry.
///
/// Every curve is total over the real line: inputs are not clamped, so a caller sampling outside
/// `[0, 1]` gets the polynomial's natural continuation. All curves map `0 -> 0` and `1 -> 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub const ALL: [Easing; 7] = [
        Self::Linear,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
    ];

    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    (t - 1.0) * u * u + 1.0
                }
            }
        }
    }

    /// The registry name (`"easeInOutCubic"` etc.).
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing function: {name:?}")]
pub struct ParseEasingError {
    pub name: String,
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| ParseEasingError { name: s.into() })
    }
}

/// An easing curve: either one of the named [`Easing`]s or a caller-supplied function.
///
/// Custom curves are stored in an `Arc` so transition options stay cheap to clone. They may return
/// values outside `[0, 1]` (overshoot); interpolation then extrapolates.
#[derive(Clone)]
pub enum EasingFn {
    Named(Easing),
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl EasingFn {
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn sample(&self, t: f64) -> f64 {
        match self {
            Self::Named(e) => e.sample(t),
            Self::Custom(f) => f(t),
        }
    }

    /// Returns the registry entry, if this is a named curve.
    pub fn named(&self) -> Option<Easing> {
        match self {
            Self::Named(e) => Some(*e),
            Self::Custom(_) => None,
        }
    }
}

impl Default for EasingFn {
    fn default() -> Self {
        Self::Named(Easing::Linear)
    }
}

impl From<Easing> for EasingFn {
    fn from(e: Easing) -> Self {
        Self::Named(e)
    }
}

impl fmt::Debug for EasingFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(e) => f.debug_tuple("Named").field(e).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

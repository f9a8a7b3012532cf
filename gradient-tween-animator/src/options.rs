use alloc::vec::Vec;

use gradient_tween::{Easing, EasingFn, GradientState, Rgb};

use crate::{ConfigError, Element, Endpoint};

/// How a transition advances from one tick to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Strategy {
    /// Sample elapsed time, normalize by the duration, ease, and interpolate.
    #[default]
    Eased,
    /// Move every scalar one unit toward its target per tick. Duration and easing are ignored.
    /// Rendered frames are rounded the same way as eased ones.
    Stepped,
}

/// An unvalidated gradient endpoint as supplied by a caller.
///
/// Missing positions default to `[0, 100]` and a missing angle to `180`. Colors beyond the first two
/// are accepted and ignored.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientSpec {
    pub colors: Vec<[i32; 3]>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub positions: Option<[f64; 2]>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle: Option<f64>,
}

impl GradientSpec {
    pub fn new(colors: impl IntoIterator<Item = [i32; 3]>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            positions: None,
            angle: None,
        }
    }

    pub fn positions(mut self, positions: [f64; 2]) -> Self {
        self.positions = Some(positions);
        self
    }

    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Validates this endpoint and fills in defaults.
    pub fn resolve(&self, endpoint: Endpoint) -> Result<GradientState, ConfigError> {
        let (top, bottom) = match self.colors.as_slice() {
            [top, bottom, ..] => (*top, *bottom),
            _ => {
                return Err(ConfigError::TooFewColors {
                    endpoint,
                    found: self.colors.len(),
                });
            }
        };

        for (stop, channels) in [top, bottom].iter().enumerate() {
            if let Some(&value) = channels.iter().find(|c| !(0..=255).contains(*c)) {
                return Err(ConfigError::ChannelOutOfRange {
                    endpoint,
                    stop,
                    value,
                });
            }
        }

        let positions = self.positions.unwrap_or(GradientState::DEFAULT_POSITIONS);
        if !positions.iter().all(|p| p.is_finite()) {
            return Err(ConfigError::NonFiniteValue {
                endpoint,
                field: "positions",
            });
        }
        let angle = self.angle.unwrap_or(GradientState::DEFAULT_ANGLE);
        if !angle.is_finite() {
            return Err(ConfigError::NonFiniteValue {
                endpoint,
                field: "angle",
            });
        }

        Ok(GradientState::new(
            [Rgb::from(top), Rgb::from(bottom)],
            positions,
            angle,
        ))
    }
}

impl From<GradientState> for GradientSpec {
    fn from(state: GradientState) -> Self {
        Self {
            colors: state.colors.iter().map(|c| c.channels()).collect(),
            positions: Some(state.positions),
            angle: Some(state.angle),
        }
    }
}

/// Configuration for [`crate::GradientAnimator::start`].
///
/// `element`, `from` and `to` are required; they are `Option`s so that a missing value is reported
/// as [`ConfigError`] at `start` rather than being impossible to express.
#[derive(Debug)]
pub struct TransitionOptions {
    pub element: Option<Element>,
    pub from: Option<GradientSpec>,
    pub to: Option<GradientSpec>,
    /// Transition length in milliseconds. `0` completes on the first tick.
    pub duration_ms: u64,
    pub easing: EasingFn,
    pub strategy: Strategy,
}

impl TransitionOptions {
    pub const DEFAULT_DURATION_MS: u64 = 1000;

    /// Creates options for a transition between two endpoints with default timing.
    pub fn new(from: impl Into<GradientSpec>, to: impl Into<GradientSpec>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            ..Self::default()
        }
    }

    pub fn element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn selector(self, selector: impl Into<alloc::string::String>) -> Self {
        self.element(Element::selector(selector))
    }

    pub fn surface(self, surface: impl crate::Surface + 'static) -> Self {
        self.element(Element::surface(surface))
    }

    pub fn from(mut self, from: impl Into<GradientSpec>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn to(mut self, to: impl Into<GradientSpec>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn easing(mut self, easing: impl Into<EasingFn>) -> Self {
        self.easing = easing.into();
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Checks required fields and endpoint shapes, splitting the options into the element still to
    /// be resolved and a validated [`TransitionSpec`].
    pub fn validate(self) -> Result<(Element, TransitionSpec), ConfigError> {
        let element = match self.element {
            None => return Err(ConfigError::MissingElement),
            Some(Element::Selector(s)) if s.is_empty() => return Err(ConfigError::MissingElement),
            Some(element) => element,
        };
        let from = self
            .from
            .ok_or(ConfigError::MissingEndpoint(Endpoint::From))?;
        let to = self.to.ok_or(ConfigError::MissingEndpoint(Endpoint::To))?;

        Ok((
            element,
            TransitionSpec {
                from: from.resolve(Endpoint::From)?,
                to: to.resolve(Endpoint::To)?,
                duration_ms: self.duration_ms,
                easing: self.easing,
                strategy: self.strategy,
            },
        ))
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            element: None,
            from: None,
            to: None,
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: EasingFn::default(),
            strategy: Strategy::default(),
        }
    }
}

/// A validated transition: both endpoints resolved, timing fixed.
#[derive(Clone, Debug)]
pub struct TransitionSpec {
    pub from: GradientState,
    pub to: GradientState,
    pub duration_ms: u64,
    pub easing: EasingFn,
    pub strategy: Strategy,
}

/// The serializable part of [`TransitionOptions`] (everything but the element).
///
/// With `feature = "serde"` this reads camelCase keys:
/// `{ "from": {..}, "to": {..}, "duration": 1000, "easing": "easeInOutQuad", "strategy": "eased" }`.
/// Only named easings can be expressed here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransitionConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub from: Option<GradientSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub to: Option<GradientSpec>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "duration", default = "default_duration_ms")
    )]
    pub duration_ms: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub easing: Easing,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: Strategy,
}

#[cfg(feature = "serde")]
fn default_duration_ms() -> u64 {
    TransitionOptions::DEFAULT_DURATION_MS
}

impl TransitionConfig {
    pub fn into_options(self, element: Element) -> TransitionOptions {
        TransitionOptions {
            element: Some(element),
            from: self.from,
            to: self.to,
            duration_ms: self.duration_ms,
            easing: self.easing.into(),
            strategy: self.strategy,
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            duration_ms: TransitionOptions::DEFAULT_DURATION_MS,
            easing: Easing::default(),
            strategy: Strategy::default(),
        }
    }
}

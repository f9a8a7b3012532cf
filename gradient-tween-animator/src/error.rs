use alloc::string::String;
use core::fmt;

/// Which endpoint of a transition a configuration problem refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::From => "from",
            Self::To => "to",
        })
    }
}

/// A malformed or incomplete [`crate::TransitionOptions`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("element is required")]
    MissingElement,
    #[error("`{0}` gradient state is required")]
    MissingEndpoint(Endpoint),
    #[error("{endpoint}.colors must contain at least 2 RGB colors (found {found})")]
    TooFewColors { endpoint: Endpoint, found: usize },
    #[error("{endpoint}.colors[{stop}] has channel {value} outside 0..=255")]
    ChannelOutOfRange {
        endpoint: Endpoint,
        stop: usize,
        value: i32,
    },
    #[error("{endpoint}.{field} must be finite")]
    NonFiniteValue {
        endpoint: Endpoint,
        field: &'static str,
    },
}

/// Errors surfaced by [`crate::GradientAnimator::start`] and by a transition's completion signal.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AnimationError {
    /// Rejected synchronously; nothing was scheduled.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// The element selector did not resolve; nothing was scheduled.
    #[error("Element not found: {0}")]
    TargetNotFound(String),
    /// The transition was cancelled (or abandoned by its scheduler) before completing.
    #[error("Animation cancelled")]
    Cancelled,
}

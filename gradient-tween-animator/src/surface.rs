use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use gradient_tween::GradientState;

/// A render target whose background style can be overwritten.
pub trait Surface {
    fn set_background(&mut self, css: &str);
}

/// Resolves a selector string to a concrete surface.
///
/// Selector syntax is entirely up to the host.
pub trait SurfaceResolver {
    fn resolve(&self, selector: &str) -> Option<Box<dyn Surface>>;
}

impl<F> SurfaceResolver for F
where
    F: Fn(&str) -> Option<Box<dyn Surface>>,
{
    fn resolve(&self, selector: &str) -> Option<Box<dyn Surface>> {
        self(selector)
    }
}

/// The target of a transition: a selector to resolve or a surface handed over directly.
pub enum Element {
    Selector(String),
    Surface(Box<dyn Surface>),
}

impl Element {
    pub fn surface(surface: impl Surface + 'static) -> Self {
        Self::Surface(Box::new(surface))
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(s) => f.debug_tuple("Selector").field(s).finish(),
            Self::Surface(_) => f.write_str("Surface(..)"),
        }
    }
}

/// Turns a [`GradientState`] into a style and applies it to a surface.
pub trait Renderer {
    fn render(&self, surface: &mut dyn Surface, state: &GradientState);
}

/// Writes the state as a CSS `linear-gradient(...)` background.
///
/// By default values are written exactly as interpolated, including out-of-range channels produced
/// by overshooting easing curves. [`CssRenderer::clamped`] clamps channels to `[0, 255]` and
/// positions to `[0, 100]` at this boundary instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CssRenderer {
    clamp: bool,
}

impl CssRenderer {
    pub const fn new() -> Self {
        Self { clamp: false }
    }

    pub const fn clamped() -> Self {
        Self { clamp: true }
    }

    pub fn style(&self, state: &GradientState) -> String {
        if !self.clamp {
            return state.to_css();
        }
        let [p0, p1] = state.positions;
        GradientState {
            colors: state.colors.map(|c| c.clamped()),
            positions: [p0.clamp(0.0, 100.0), p1.clamp(0.0, 100.0)],
            angle: state.angle,
        }
        .to_css()
    }
}

impl Renderer for CssRenderer {
    fn render(&self, surface: &mut dyn Surface, state: &GradientState) {
        surface.set_background(&self.style(state));
    }
}

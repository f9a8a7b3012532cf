use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::Cell;

use gradient_tween::{GradientState, interpolate, step_toward};

use crate::completion::Settler;
use crate::{
    AnimationError, Completion, CssRenderer, Element, Renderer, Scheduler, Strategy, Surface,
    SurfaceResolver, TickHandle, TransitionOptions, TransitionSpec,
};

/// Lifecycle of a single transition.
///
/// `Idle` lasts until the first tick executes; `Completed` and `Cancelled` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// State shared between a run and the caller's [`Transition`] handle.
struct RunControl {
    scheduler: Weak<dyn Scheduler>,
    cancelled: Cell<bool>,
    pending: Cell<Option<TickHandle>>,
    phase: Cell<Phase>,
    settler: Settler,
}

impl RunControl {
    fn new(scheduler: Weak<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            cancelled: Cell::new(false),
            pending: Cell::new(None),
            phase: Cell::new(Phase::Idle),
            settler: Settler::default(),
        }
    }

    fn cancel(&self) {
        if self.phase.get().is_terminal() || self.cancelled.replace(true) {
            return;
        }
        self.phase.set(Phase::Cancelled);
        self.settler.settle(Err(AnimationError::Cancelled));
        if let Some(handle) = self.pending.take() {
            if let Some(scheduler) = self.scheduler.upgrade() {
                scheduler.cancel_tick(handle);
            }
        }
        gdebug!("transition cancelled");
    }

    fn complete(&self) {
        self.phase.set(Phase::Completed);
        self.settler.settle(Ok(()));
        gdebug!("transition completed");
    }

    fn abandon(&self) {
        self.cancelled.set(true);
        self.phase.set(Phase::Cancelled);
        self.settler.settle(Err(AnimationError::Cancelled));
        gwarn!("transition abandoned before completion");
    }
}

/// The mutable state of one transition.
///
/// Each scheduled tick owns the run and moves it into the next tick it requests, so exactly one
/// place holds it at any time and no two ticks of a run can overlap.
struct AnimationRun {
    control: Rc<RunControl>,
    spec: TransitionSpec,
    surface: Box<dyn Surface>,
    renderer: Rc<dyn Renderer>,
    start_ms: Option<u64>,
    last_progress: f64,
    current: GradientState,
}

impl AnimationRun {
    fn schedule(self) {
        let control = Rc::clone(&self.control);
        let Some(scheduler) = control.scheduler.upgrade() else {
            // Dropping `self` settles the signal as cancelled.
            return;
        };
        let handle = scheduler.request_tick(Box::new(move |now_ms| self.tick(now_ms)));
        control.pending.set(Some(handle));
    }

    fn tick(mut self, now_ms: u64) {
        let control = Rc::clone(&self.control);
        control.pending.set(None);
        if control.cancelled.get() {
            gtrace!(now_ms, "tick observed cancellation");
            return;
        }
        if control.phase.get() == Phase::Idle {
            control.phase.set(Phase::Running);
        }

        let (state, done) = match self.spec.strategy {
            Strategy::Eased => self.sample_eased(now_ms),
            Strategy::Stepped => self.step(),
        };
        self.renderer.render(self.surface.as_mut(), &state);

        // The renderer or surface may have cancelled us.
        if control.cancelled.get() {
            return;
        }
        if done {
            control.complete();
        } else {
            self.schedule();
        }
    }

    /// Returns the state for `now_ms` and whether this is the final frame.
    fn sample_eased(&mut self, now_ms: u64) -> (GradientState, bool) {
        let start_ms = *self.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start_ms);
        let raw = if self.spec.duration_ms == 0 {
            1.0
        } else {
            (elapsed as f64 / self.spec.duration_ms as f64).min(1.0)
        };
        // A scheduler clock stepping backward must not rewind the transition.
        let raw = raw.max(self.last_progress);
        self.last_progress = raw;

        let eased = self.spec.easing.sample(raw);
        gtrace!(now_ms, elapsed, raw, eased, "eased tick");
        (interpolate(&self.spec.from, &self.spec.to, eased), raw >= 1.0)
    }

    fn step(&mut self) -> (GradientState, bool) {
        self.current = step_toward(&self.current, &self.spec.to);
        gtrace!("stepped tick");
        // `current` keeps fractional remainders; the rendered frame uses the shared rounding rule.
        (self.current.rounded(), self.current == self.spec.to)
    }
}

impl Drop for AnimationRun {
    fn drop(&mut self) {
        // A run dropped in a non-terminal phase was discarded by its scheduler.
        if !self.control.phase.get().is_terminal() {
            self.control.abandon();
        }
    }
}

/// The caller's handle to a started transition: a cancel capability plus the completion signal.
///
/// Cloning is cheap; all clones refer to the same run. Dropping every handle does not stop the
/// transition.
#[derive(Clone)]
pub struct Transition {
    control: Rc<RunControl>,
}

impl Transition {
    /// Cancels the transition.
    ///
    /// Idempotent, and a no-op once the transition completed. The pending tick is released, the
    /// phase becomes [`Phase::Cancelled`] and the completion signal settles with
    /// [`AnimationError::Cancelled`]. No further render happens; if the scheduler still delivers a
    /// tick it observes the cancellation and returns. Safe to call from inside a render.
    pub fn cancel(&self) {
        self.control.cancel();
    }

    pub fn phase(&self) -> Phase {
        self.control.phase.get()
    }

    pub fn is_finished(&self) -> bool {
        self.phase().is_terminal()
    }

    /// The completion signal. See [`Completion`] for the at-most-once delivery rule.
    pub fn completion(&self) -> Completion {
        self.control.settler.completion()
    }
}

impl core::fmt::Debug for Transition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Transition")
            .field("phase", &self.phase())
            .finish()
    }
}

/// Starts gradient transitions on an injected [`Scheduler`].
///
/// This type does not hold any UI objects. Hosts drive it by:
/// - supplying a scheduler (frame callback, interval timer, or [`crate::ManualScheduler`] in tests)
/// - optionally a [`SurfaceResolver`] for selector-based elements
/// - optionally a [`Renderer`] (defaults to [`CssRenderer`])
///
/// Each [`GradientAnimator::start`] creates an independent run. Runs never share mutable state;
/// two runs targeting the same surface simply race on the last write.
pub struct GradientAnimator {
    scheduler: Rc<dyn Scheduler>,
    renderer: Rc<dyn Renderer>,
    resolver: Option<Rc<dyn SurfaceResolver>>,
}

impl GradientAnimator {
    pub fn new<S: Scheduler + 'static>(scheduler: Rc<S>) -> Self {
        Self {
            scheduler,
            renderer: Rc::new(CssRenderer::new()),
            resolver: None,
        }
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Rc::new(renderer);
        self
    }

    pub fn with_resolver(mut self, resolver: impl SurfaceResolver + 'static) -> Self {
        self.resolver = Some(Rc::new(resolver));
        self
    }

    /// Validates `options`, resolves the element and requests the first tick.
    ///
    /// Returns immediately. Errors are reported synchronously and leave nothing scheduled.
    /// The clock starts at the first tick, not at this call.
    pub fn start(&self, options: TransitionOptions) -> Result<Transition, AnimationError> {
        let (element, spec) = options.validate().map_err(|e| {
            gwarn!(error = %e, "GradientAnimator::start rejected options");
            AnimationError::from(e)
        })?;
        let surface = self.resolve(element)?;

        gdebug!(
            duration_ms = spec.duration_ms,
            strategy = ?spec.strategy,
            easing = ?spec.easing,
            "GradientAnimator::start"
        );

        let control = Rc::new(RunControl::new(Rc::downgrade(&self.scheduler)));
        let run = AnimationRun {
            control: Rc::clone(&control),
            current: spec.from,
            spec,
            surface,
            renderer: Rc::clone(&self.renderer),
            start_ms: None,
            last_progress: 0.0,
        };
        run.schedule();
        Ok(Transition { control })
    }

    fn resolve(&self, element: Element) -> Result<Box<dyn Surface>, AnimationError> {
        match element {
            Element::Surface(surface) => Ok(surface),
            Element::Selector(selector) => self
                .resolver
                .as_ref()
                .and_then(|r| r.resolve(&selector))
                .ok_or_else(|| {
                    gwarn!(selector = %selector, "element not found");
                    AnimationError::TargetNotFound(selector)
                }),
        }
    }
}

impl core::fmt::Debug for GradientAnimator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GradientAnimator")
            .field("has_resolver", &self.resolver.is_some())
            .finish_non_exhaustive()
    }
}

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// A callback invoked once by a [`Scheduler`] with the current timestamp in milliseconds.
pub type TickFn = Box<dyn FnOnce(u64)>;

/// Opaque token returned by [`Scheduler::request_tick`], used to cancel a pending tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// A per-frame or per-interval callback source.
///
/// This is the injected replacement for a process-wide frame callback or timer. Implementations use
/// interior mutability because ticks request their successors while the scheduler is dispatching.
///
/// Contract:
/// - `request_tick` must not invoke `tick` before returning.
/// - A tick is invoked at most once, and never after `cancel_tick` returned for its handle.
/// - Timestamps passed to ticks should be non-decreasing (runs tolerate violations).
pub trait Scheduler {
    fn request_tick(&self, tick: TickFn) -> TickHandle;
    fn cancel_tick(&self, handle: TickHandle);
}

/// A FIFO of pending ticks shared by the bundled schedulers.
#[derive(Default)]
pub(crate) struct TickQueue {
    next_id: u64,
    pending: Vec<(TickHandle, TickFn)>,
}

impl TickQueue {
    pub(crate) fn push(&mut self, tick: TickFn) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push((handle, tick));
        handle
    }

    pub(crate) fn take(&mut self, handle: TickHandle) -> Option<TickFn> {
        let i = self.pending.iter().position(|(h, _)| *h == handle)?;
        Some(self.pending.remove(i).1)
    }

    pub(crate) fn handles(&self) -> Vec<TickHandle> {
        self.pending.iter().map(|(h, _)| *h).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}

/// Fires every tick that was pending when the call began. Returns how many fired.
///
/// Ticks requested during dispatch wait for the next call (frame semantics). Ticks cancelled during
/// dispatch are skipped. The queue is never borrowed while a tick runs.
pub(crate) fn dispatch_due(queue: &RefCell<TickQueue>, now_ms: u64) -> usize {
    let due = queue.borrow().handles();
    let mut fired = 0;
    for handle in due {
        let tick = queue.borrow_mut().take(handle);
        if let Some(tick) = tick {
            gtrace!(handle = handle.0, now_ms, "dispatch tick");
            tick(now_ms);
            fired += 1;
        }
    }
    fired
}

/// A deterministic scheduler driven by a virtual clock.
///
/// Nothing happens until the host calls [`ManualScheduler::run_frame`] (or one of the helpers that
/// advance the clock first). This makes every timing decision of a transition reproducible.
pub struct ManualScheduler {
    queue: RefCell<TickQueue>,
    now_ms: Cell<u64>,
    frame_ms: u64,
}

impl ManualScheduler {
    pub const DEFAULT_FRAME_MS: u64 = 16;

    pub fn new() -> Self {
        Self::with_frame_ms(Self::DEFAULT_FRAME_MS)
    }

    pub fn with_frame_ms(frame_ms: u64) -> Self {
        Self {
            queue: RefCell::new(TickQueue::default()),
            now_ms: Cell::new(0),
            frame_ms: frame_ms.max(1),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Sets the virtual clock without firing anything. The clock may move backward.
    pub fn set_now_ms(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Fires the ticks pending at the current clock value.
    pub fn run_frame(&self) -> usize {
        dispatch_due(&self.queue, self.now_ms.get())
    }

    /// Advances the clock by `ms`, then runs one frame.
    pub fn advance(&self, ms: u64) -> usize {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
        self.run_frame()
    }

    /// Runs `frames` frames, advancing by the frame interval before each.
    pub fn advance_frames(&self, frames: usize) -> usize {
        (0..frames).map(|_| self.advance(self.frame_ms)).sum()
    }

    /// Runs the current frame and then further frames until nothing is pending, giving up after
    /// `max_frames`. Returns the number of frames run.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        if self.is_idle() {
            return 0;
        }
        self.run_frame();
        let mut frames = 1;
        while !self.is_idle() && frames < max_frames {
            self.advance(self.frame_ms);
            frames += 1;
        }
        frames
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn request_tick(&self, tick: TickFn) -> TickHandle {
        self.queue.borrow_mut().push(tick)
    }

    fn cancel_tick(&self, handle: TickHandle) {
        // Drop the callback after the borrow ends: dropping a run may call back into us.
        let removed = self.queue.borrow_mut().take(handle);
        drop(removed);
    }
}

impl core::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now_ms", &self.now_ms.get())
            .field("frame_ms", &self.frame_ms)
            .field("pending", &self.pending())
            .finish()
    }
}

use core::cell::RefCell;
use std::time::{Duration, Instant};

use crate::scheduler::{TickQueue, dispatch_due};
use crate::{Scheduler, TickFn, TickHandle};

/// A fixed-interval timer scheduler for hosts without a display-synchronized callback.
///
/// Ticks receive the milliseconds elapsed since the scheduler was created. [`IntervalScheduler::run`]
/// blocks the calling thread, sleeping one interval between frames, until no ticks remain.
pub struct IntervalScheduler {
    queue: RefCell<TickQueue>,
    interval: Duration,
    origin: Instant,
}

impl IntervalScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            queue: RefCell::new(TickQueue::default()),
            interval,
            origin: Instant::now(),
        }
    }

    /// Roughly 60 frames per second.
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_micros(16_667))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fires whatever is pending right now without sleeping.
    pub fn run_frame(&self) -> usize {
        dispatch_due(&self.queue, self.now_ms())
    }

    /// Runs frames until nothing is pending. Returns the number of frames run.
    pub fn run(&self) -> usize {
        let mut frames = 0;
        while self.pending() > 0 {
            std::thread::sleep(self.interval);
            self.run_frame();
            frames += 1;
        }
        gdebug!(frames, "IntervalScheduler::run idle");
        frames
    }
}

impl Scheduler for IntervalScheduler {
    fn request_tick(&self, tick: TickFn) -> TickHandle {
        self.queue.borrow_mut().push(tick)
    }

    fn cancel_tick(&self, handle: TickHandle) {
        let removed = self.queue.borrow_mut().take(handle);
        drop(removed);
    }
}

impl core::fmt::Debug for IntervalScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalScheduler")
            .field("interval", &self.interval)
            .field("pending", &self.pending())
            .finish()
    }
}

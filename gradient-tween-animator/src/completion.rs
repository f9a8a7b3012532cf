use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

use crate::AnimationError;

#[derive(Default)]
struct Slot {
    outcome: Option<Result<(), AnimationError>>,
    wakers: Vec<Waker>,
}

/// The writing side of a completion signal. Owned by the run's control block.
#[derive(Clone, Default)]
pub(crate) struct Settler {
    slot: Rc<RefCell<Slot>>,
}

impl Settler {
    /// Settles the signal. Only the first call has any effect; returns whether it was this one.
    pub(crate) fn settle(&self, outcome: Result<(), AnimationError>) -> bool {
        let wakers = {
            let mut slot = self.slot.borrow_mut();
            if slot.outcome.is_some() {
                return false;
            }
            slot.outcome = Some(outcome);
            core::mem::take(&mut slot.wakers)
        };
        wakers.into_iter().for_each(Waker::wake);
        true
    }

    pub(crate) fn completion(&self) -> Completion {
        Completion {
            slot: Rc::clone(&self.slot),
            taken: false,
        }
    }
}

/// A one-shot completion signal: `Ok(())` when a transition reaches its final state,
/// `Err(AnimationError::Cancelled)` when it is cancelled first.
///
/// The outcome settles exactly once. Every handle returned by
/// [`Transition::completion`](crate::Transition::completion) observes that same outcome, and each
/// handle hands it out at most once: after `.await` or [`Completion::try_take`] has yielded it,
/// `try_take` on that handle returns `None` and polling it again stays pending. Ask the transition
/// for a fresh handle to observe the outcome again. Awaiting needs no particular executor; the run
/// wakes every registered waker when it settles.
pub struct Completion {
    slot: Rc<RefCell<Slot>>,
    taken: bool,
}

impl Completion {
    /// Whether the transition has completed or been cancelled.
    pub fn is_settled(&self) -> bool {
        self.slot.borrow().outcome.is_some()
    }

    /// Takes the outcome if it is available and this handle has not yielded it yet.
    pub fn try_take(&mut self) -> Option<Result<(), AnimationError>> {
        if self.taken {
            return None;
        }
        let outcome = self.slot.borrow().outcome.clone();
        self.taken = outcome.is_some();
        outcome
    }
}

impl Future for Completion {
    type Output = Result<(), AnimationError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(outcome) = this.try_take() {
            return Poll::Ready(outcome);
        }
        if !this.taken {
            let mut slot = this.slot.borrow_mut();
            if !slot.wakers.iter().any(|w| w.will_wake(cx.waker())) {
                slot.wakers.push(cx.waker().clone());
            }
        }
        Poll::Pending
    }
}

impl core::fmt::Debug for Completion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Completion")
            .field("settled", &self.is_settled())
            .finish()
    }
}

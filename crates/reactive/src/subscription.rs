//! Subscription handles.
//!
//! A `Subscription` is created per subscribe/block call and owns the live
//! state of exactly one chain traversal. Handles share interior state, so a
//! clone held by a subscriber callback can cancel the traversal it is part
//! of. All transitions go through the `SubscriptionState` machine; terminal
//! states absorb every later transition, which is what guarantees that no
//! signal is delivered after a terminal signal.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use rill_core::{Error, SubscriptionState};

/// Handle to one live (or finished) chain traversal.
///
/// Cancellation is best-effort: the core executes synchronously, so a
/// cancel issued from within a subscriber callback stops delivery before
/// the next item, while a cancel on an already-terminated subscription is
/// accepted as a no-op.
#[derive(Clone)]
pub struct Subscription {
    inner: Rc<Inner>,
}

struct Inner {
    state: Cell<SubscriptionState>,
    error: RefCell<Option<Error>>,
}

impl Subscription {
    /// Creates the subscription for a new subscribe/block call and moves it
    /// through `Created -> Subscribed`.
    pub(crate) fn begin() -> Self {
        let subscription = Subscription {
            inner: Rc::new(Inner {
                state: Cell::new(SubscriptionState::Created),
                error: RefCell::new(None),
            }),
        };
        subscription.transition(SubscriptionState::Subscribed);
        subscription
    }

    fn transition(&self, next: SubscriptionState) -> bool {
        let current = self.inner.state.get();
        if current.can_transition(next) {
            self.inner.state.set(next);
            true
        } else {
            false
        }
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> SubscriptionState {
        self.inner.state.get()
    }

    /// Returns true once a terminal signal has been recorded.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.state().is_terminal()
    }

    /// Returns true if the consumer cancelled this subscription.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.state() == SubscriptionState::Cancelled
    }

    /// Requests cancellation.
    ///
    /// Always accepted; a no-op once the subscription is already terminal.
    pub fn cancel(&self) {
        self.transition(SubscriptionState::Cancelled);
    }

    /// Returns the terminal error, if the subscription errored.
    pub fn error(&self) -> Option<Error> {
        self.inner.error.borrow().clone()
    }

    /// Records an item delivery. Returns false if the subscription is no
    /// longer allowed to deliver (already terminal).
    pub(crate) fn mark_emitting(&self) -> bool {
        self.transition(SubscriptionState::Emitting)
    }

    /// Records successful completion. Returns true if the completion signal
    /// should be delivered to the subscriber.
    pub(crate) fn complete(&self) -> bool {
        self.transition(SubscriptionState::Completed)
    }

    /// Records a terminal error. Returns true if the error signal should be
    /// delivered to the subscriber.
    pub(crate) fn fail(&self, error: &Error) -> bool {
        if self.transition(SubscriptionState::Errored) {
            *self.inner.error.borrow_mut() = Some(error.clone());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_is_subscribed() {
        let sub = Subscription::begin();
        assert_eq!(sub.state(), SubscriptionState::Subscribed);
        assert!(!sub.is_terminated());
        assert!(sub.error().is_none());
    }

    #[test]
    fn test_emit_then_complete() {
        let sub = Subscription::begin();
        assert!(sub.mark_emitting());
        assert!(sub.mark_emitting());
        assert!(sub.complete());
        assert_eq!(sub.state(), SubscriptionState::Completed);
    }

    #[test]
    fn test_complete_without_items() {
        let sub = Subscription::begin();
        assert!(sub.complete());
        assert_eq!(sub.state(), SubscriptionState::Completed);
    }

    #[test]
    fn test_fail_records_error() {
        let sub = Subscription::begin();
        assert!(sub.fail(&Error::cardinality(0)));
        assert_eq!(sub.state(), SubscriptionState::Errored);
        assert_eq!(sub.error(), Some(Error::cardinality(0)));
    }

    #[test]
    fn test_terminal_absorbs_later_signals() {
        let sub = Subscription::begin();
        assert!(sub.complete());
        assert!(!sub.mark_emitting());
        assert!(!sub.complete());
        assert!(!sub.fail(&Error::cardinality(0)));
        assert!(sub.error().is_none());
        assert_eq!(sub.state(), SubscriptionState::Completed);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let sub = Subscription::begin();
        sub.cancel();
        assert!(sub.is_cancelled());
        sub.cancel();
        assert!(sub.is_cancelled());
    }

    #[test]
    fn test_cancel_after_complete_is_noop() {
        let sub = Subscription::begin();
        sub.complete();
        sub.cancel();
        assert_eq!(sub.state(), SubscriptionState::Completed);
        assert!(!sub.is_cancelled());
    }

    #[test]
    fn test_clone_shares_state() {
        let sub = Subscription::begin();
        let other = sub.clone();
        other.cancel();
        assert!(sub.is_cancelled());
    }
}

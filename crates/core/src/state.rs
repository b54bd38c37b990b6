//! Subscription state machine.
//!
//! Every subscribe/block call creates one subscription that moves through:
//!
//! `Created -> Subscribed -> {Emitting}* -> Completed | Errored | Cancelled`
//!
//! Terminal states are absorbing: once a subscription completes, errors or
//! is cancelled, no further transition (and no further signal) is valid.

/// The lifecycle state of a single subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Chain described, no work performed yet.
    Created,
    /// A subscribe/block call has begun the traversal.
    Subscribed,
    /// At least one item has been delivered.
    Emitting,
    /// The sequence finished successfully.
    Completed,
    /// The sequence terminated with an error.
    Errored,
    /// The consumer cancelled the subscription.
    Cancelled,
}

impl SubscriptionState {
    /// Returns true for the absorbing end states.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubscriptionState::Completed
                | SubscriptionState::Errored
                | SubscriptionState::Cancelled
        )
    }

    /// Returns true while the subscription may still deliver signals.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            SubscriptionState::Subscribed | SubscriptionState::Emitting
        )
    }

    /// Checks whether moving to `next` is a valid transition.
    pub fn can_transition(&self, next: SubscriptionState) -> bool {
        use SubscriptionState::*;
        match (self, next) {
            // Terminal states absorb everything.
            (s, _) if s.is_terminal() => false,
            (Created, Subscribed) => true,
            (Subscribed, Emitting) => true,
            (Emitting, Emitting) => true,
            (Subscribed | Emitting, Completed | Errored | Cancelled) => true,
            _ => false,
        }
    }
}

//! Signal type for the push protocol.
//!
//! A `Signal` is one event delivered from a chain to a subscriber: an item,
//! a successful completion, or a terminal error. For any subscription, zero
//! or more `Item` signals are followed by exactly one terminal signal.

use crate::error::Error;

/// One event in the push protocol.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal<T> {
    /// An emitted item.
    Item(T),
    /// Successful completion of the sequence.
    Complete,
    /// Terminal failure of the sequence.
    Error(Error),
}

impl<T> Signal<T> {
    /// Creates an item signal.
    #[inline]
    pub fn item(value: T) -> Self {
        Signal::Item(value)
    }

    /// Returns true if this is an item signal.
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, Signal::Item(_))
    }

    /// Returns true if this is a terminal signal (complete or error).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.is_item()
    }

    /// Returns true if this is an error signal.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Signal::Error(_))
    }

    /// Returns a reference to the item, if any.
    #[inline]
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Signal::Item(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the signal, returning the item if any.
    #[inline]
    pub fn into_item(self) -> Option<T> {
        match self {
            Signal::Item(value) => Some(value),
            _ => None,
        }
    }

    /// Maps the item to a new type, preserving terminal signals.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Signal<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Signal::Item(value) => Signal::Item(f(value)),
            Signal::Complete => Signal::Complete,
            Signal::Error(e) => Signal::Error(e),
        }
    }
}

/// Demand reported by a sink back to the chain traversal.
///
/// `Stop` asks the upstream walk to terminate early; reductions that only
/// need a prefix of the sequence (`next()`, `block_first()`) and cancelled
/// subscriptions use it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep emitting.
    Continue,
    /// Stop the traversal; no further items are wanted.
    Stop,
}

impl Flow {
    /// Returns true if the traversal should stop.
    #[inline]
    pub fn is_stop(&self) -> bool {
        matches!(self, Flow::Stop)
    }
}

//! Rill Core - Core types for the rill reactive streams library.
//!
//! This crate provides the foundational types shared by the reactive crates:
//!
//! - `Signal`: a single event in the push protocol (item, completion, error)
//! - `Flow`: the demand a sink reports back to the traversal (continue/stop)
//! - `SubscriptionState`: the per-subscription state machine
//! - `Error`: terminal error taxonomy for reactive chains
//!
//! # Example
//!
//! ```rust
//! use rill_core::{Signal, SubscriptionState};
//!
//! let signal = Signal::item(42);
//! assert!(!signal.is_terminal());
//!
//! let state = SubscriptionState::Completed;
//! assert!(state.is_terminal());
//! assert!(!state.can_transition(SubscriptionState::Emitting));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod signal;
mod state;

pub use error::{Error, Result};
pub use signal::{Flow, Signal};
pub use state::SubscriptionState;

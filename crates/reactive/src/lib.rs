//! Rill Reactive - deferred push-based value containers.
//!
//! This crate implements two cooperating abstractions:
//!
//! - `Single<T>`: a deferred computation yielding zero or one value
//! - `Stream<T>`: a deferred computation yielding an ordered, finite
//!   sequence of values followed by a terminal signal
//!
//! Both are *descriptions*: constructing a chain of operators (`map`,
//! `filter`, `next`, `single`, `collect_to_list`, ...) performs no work.
//! Only a terminal action - `subscribe` or one of the `block` variants -
//! walks the chain, bottom producer upward, exactly once per subscription.
//!
//! # Example
//!
//! ```rust
//! use rill_reactive::Stream;
//!
//! let first_even = Stream::from_vec(vec![1, 3, 4, 7])
//!     .filter(|n| n % 2 == 0)
//!     .next();
//!
//! // Nothing has run yet; block triggers the traversal.
//! assert_eq!(first_even.block(), Ok(Some(4)));
//! ```
//!
//! # Termination protocol
//!
//! A subscription delivers zero or more items in producer order, then exactly
//! one terminal signal: completion, error, or cancellation. Terminal states
//! are absorbing - no signal follows them. `single()` enforces an
//! exactly-one cardinality and fails with `Error::Cardinality` otherwise;
//! `next()` tolerates absence and yields an empty `Single` instead.

#![no_std]

extern crate alloc;

pub mod single;
pub mod stream;
pub mod subscription;

pub use single::Single;
pub use stream::Stream;
pub use subscription::Subscription;

// Re-export commonly used types from rill-core.
pub use rill_core::{Error, Flow, Result, Signal, SubscriptionState};

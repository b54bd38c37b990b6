//! Error types for reactive chains.
//!
//! An `Error` is always a *terminal* signal: once it reaches a subscriber no
//! further item or completion may follow on that subscription. Cancellation is
//! deliberately not an error - it is a benign terminal subscription state.

use alloc::string::String;
use core::fmt;

/// Result type alias for rill operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Terminal errors produced by a reactive chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A map or filter closure failed while transforming an item.
    Transform {
        message: String,
    },
    /// A `single()` reduction observed a number of items other than one.
    ///
    /// `count` is the observed item count: `0` for an empty upstream, `2`
    /// once a second item is seen (the traversal stops there, so counts
    /// above two are never observed).
    Cardinality {
        count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transform { message } => {
                write!(f, "Transform failed: {}", message)
            }
            Error::Cardinality { count } => {
                write!(f, "Expected exactly one item, observed {}", count)
            }
        }
    }
}

impl Error {
    /// Creates a transform error.
    pub fn transform(message: impl Into<String>) -> Self {
        Error::Transform {
            message: message.into(),
        }
    }

    /// Creates a cardinality error with the observed item count.
    pub fn cardinality(count: usize) -> Self {
        Error::Cardinality { count }
    }

    /// Returns true if this is a cardinality error.
    #[inline]
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Error::Cardinality { .. })
    }

    /// Returns true if this is a transform error.
    #[inline]
    pub fn is_transform(&self) -> bool {
        matches!(self, Error::Transform { .. })
    }
}

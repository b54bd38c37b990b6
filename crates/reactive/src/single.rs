//! Single: a deferred 0-or-1 value computation.
//!
//! A `Single<T>` describes a computation that, once subscribed, yields at
//! most one value or a terminal error. Like `Stream`, it is immutable after
//! construction: operators wrap the upstream in a new node and nothing runs
//! until subscribe/block.

use alloc::rc::Rc;
use core::cell::RefCell;

use rill_core::{Error, Result, Signal};

use crate::subscription::Subscription;

type OutcomeFn<T> = Rc<dyn Fn() -> Result<Option<T>>>;

/// A node in the operator chain of a `Single`.
enum SingleOp<T> {
    /// Deferred supplier of at most one value, invoked once per
    /// subscription.
    Source { supply: Rc<dyn Fn() -> Option<T>> },

    /// Transform of an upstream single, erased into the resolve closure.
    Map { resolve: OutcomeFn<T> },

    /// Cardinality-sensitive reduction of an upstream stream
    /// (`next`/`single`/`collect_to_list` build these).
    Reduce { resolve: OutcomeFn<T> },

    /// Observes a terminal error just before it propagates downstream.
    OnError {
        upstream: Rc<Single<T>>,
        hook: Rc<dyn Fn(&Error)>,
    },
}

/// A deferred, push-based container for zero or one value.
pub struct Single<T> {
    op: SingleOp<T>,
}

impl<T: 'static> Single<T> {
    /// Creates a single that emits the given value.
    pub fn just(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_supplier(move || Some(value.clone()))
    }

    /// Creates a single that completes empty.
    pub fn empty() -> Self {
        Self::from_supplier(|| None)
    }

    /// Creates a single from a deferred supplier, invoked once per
    /// subscription at subscribe/block time.
    pub fn from_supplier<F>(supply: F) -> Self
    where
        F: Fn() -> Option<T> + 'static,
    {
        Single {
            op: SingleOp::Source {
                supply: Rc::new(supply),
            },
        }
    }

    /// Builds a reduction node. Used by the `Stream` reduce operators.
    pub(crate) fn reduce<F>(resolve: F) -> Self
    where
        F: Fn() -> Result<Option<T>> + 'static,
    {
        Single {
            op: SingleOp::Reduce {
                resolve: Rc::new(resolve),
            },
        }
    }

    /// Lazily transforms the emitted value.
    ///
    /// An empty upstream stays empty; an upstream error propagates
    /// unchanged.
    pub fn map<U, F>(self, f: F) -> Single<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.try_map(move |value| Ok(f(value)))
    }

    /// Fallible variant of [`map`](Self::map): a transform error is
    /// forwarded as the terminal error.
    pub fn try_map<U, F>(self, f: F) -> Single<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + 'static,
    {
        let upstream = Rc::new(self);
        Single {
            op: SingleOp::Map {
                resolve: Rc::new(move || match upstream.resolve()? {
                    Some(value) => Ok(Some(f(value)?)),
                    None => Ok(None),
                }),
            },
        }
    }

    /// Maps presence of a value to a boolean.
    ///
    /// Never errors on empty - only an upstream error propagates.
    pub fn has_element(self) -> Single<bool> {
        let upstream = Rc::new(self);
        Single {
            op: SingleOp::Map {
                resolve: Rc::new(move || Ok(Some(upstream.resolve()?.is_some()))),
            },
        }
    }

    /// Invokes `hook` with a terminal error just before it propagates.
    /// Observation only; the error is neither suppressed nor altered.
    pub fn do_on_error<F>(self, hook: F) -> Single<T>
    where
        F: Fn(&Error) + 'static,
    {
        Single {
            op: SingleOp::OnError {
                upstream: Rc::new(self),
                hook: Rc::new(hook),
            },
        }
    }

    /// Subscribes with the raw signal protocol; the primitive the other
    /// subscribe/block forms are built on. At most one `Item` signal is
    /// followed by exactly one terminal signal.
    pub fn subscribe_signals<F>(&self, mut sink: F) -> Subscription
    where
        F: FnMut(&Subscription, Signal<T>),
    {
        let subscription = Subscription::begin();
        match self.resolve() {
            Ok(Some(value)) => {
                if subscription.mark_emitting() {
                    sink(&subscription, Signal::Item(value));
                }
                if subscription.complete() {
                    sink(&subscription, Signal::Complete);
                }
            }
            Ok(None) => {
                if subscription.complete() {
                    sink(&subscription, Signal::Complete);
                }
            }
            Err(error) => {
                if subscription.fail(&error) {
                    sink(&subscription, Signal::Error(error));
                }
            }
        }
        subscription
    }

    /// Subscribes with a value callback, invoked exactly once if a value is
    /// produced and not at all for an empty source. A terminal error is
    /// retained on the returned handle.
    pub fn subscribe<F>(&self, mut on_value: F) -> Subscription
    where
        F: FnMut(T),
    {
        self.subscribe_signals(move |_, signal| {
            if let Signal::Item(value) = signal {
                on_value(value);
            }
        })
    }

    /// Subscribes with value and error callbacks; the two are mutually
    /// exclusive and each fires at most once.
    pub fn subscribe_with<V, E>(&self, mut on_value: V, mut on_error: E) -> Subscription
    where
        V: FnMut(T),
        E: FnMut(&Error),
    {
        self.subscribe_signals(move |_, signal| match signal {
            Signal::Item(value) => on_value(value),
            Signal::Complete => {}
            Signal::Error(error) => on_error(&error),
        })
    }

    /// Synchronously waits for completion: returns the value, `Ok(None)`
    /// as the empty sentinel, or the terminal error.
    ///
    /// Derived from `subscribe` plus a one-shot capture cell rather than a
    /// second traversal implementation.
    pub fn block(&self) -> Result<Option<T>> {
        let slot = Rc::new(RefCell::new(None));
        let captured = slot.clone();
        let subscription = self.subscribe(move |value| {
            *captured.borrow_mut() = Some(value);
        });
        if let Some(error) = subscription.error() {
            return Err(error);
        }
        let value = slot.borrow_mut().take();
        Ok(value)
    }

    /// Walks the chain once, producing the value / empty / error outcome.
    fn resolve(&self) -> Result<Option<T>> {
        match &self.op {
            SingleOp::Source { supply } => Ok(supply()),
            SingleOp::Map { resolve } | SingleOp::Reduce { resolve } => resolve(),
            SingleOp::OnError { upstream, hook } => {
                let result = upstream.resolve();
                if let Err(error) = &result {
                    hook(error);
                }
                result
            }
        }
    }
}

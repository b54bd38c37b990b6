//! Stream: a deferred ordered 0..N value computation.
//!
//! A `Stream<T>` is a chain of operator nodes over a deferred source. Each
//! operator wraps its upstream and holds a closure; nothing runs until a
//! terminal action (`subscribe*` or `block_first`) walks the chain. Nodes
//! are immutable after construction, so one chain value can be subscribed
//! any number of times and every subscription gets an independent traversal.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use rill_core::{Error, Flow, Result, Signal};

use crate::single::Single;
use crate::subscription::Subscription;

type SupplyFn<T> = Rc<dyn Fn() -> Vec<T>>;
type PredicateFn<T> = Rc<dyn Fn(&T) -> Result<bool>>;
type ErrorHookFn = Rc<dyn Fn(&Error)>;
type DriveFn<T> = Rc<dyn Fn(&mut dyn FnMut(T) -> Result<Flow>) -> Result<Flow>>;

/// A node in the operator chain.
///
/// Same-type operators keep an explicit upstream reference; the
/// type-changing `Map` erases its upstream into the drive closure.
enum StreamOp<T> {
    /// Deferred supplier of the source sequence, invoked once per
    /// subscription.
    Source { supply: SupplyFn<T> },

    /// Passes through items satisfying the predicate, preserving order.
    Filter {
        upstream: Rc<Stream<T>>,
        predicate: PredicateFn<T>,
    },

    /// Element-wise transform of an upstream stream of another item type.
    Map { drive: DriveFn<T> },

    /// Observes a terminal error just before it propagates downstream.
    OnError {
        upstream: Rc<Stream<T>>,
        hook: ErrorHookFn,
    },
}

/// A deferred, push-based, ordered sequence of zero or more values.
pub struct Stream<T> {
    op: StreamOp<T>,
}

impl<T: 'static> Stream<T> {
    /// Creates a stream from a deferred supplier.
    ///
    /// The supplier runs once per subscription, at subscribe/block time -
    /// never at construction time.
    pub fn from_supplier<F>(supply: F) -> Self
    where
        F: Fn() -> Vec<T> + 'static,
    {
        Stream {
            op: StreamOp::Source {
                supply: Rc::new(supply),
            },
        }
    }

    /// Creates a stream over a fixed sequence, emitted in insertion order.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone,
    {
        Self::from_supplier(move || items.clone())
    }

    /// Creates a single-item stream.
    pub fn just(item: T) -> Self
    where
        T: Clone,
    {
        Self::from_supplier(move || alloc::vec![item.clone()])
    }

    /// Creates a stream that completes without emitting.
    pub fn empty() -> Self {
        Self::from_supplier(Vec::new)
    }

    /// Emits only items satisfying `predicate`, preserving order.
    pub fn filter<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.try_filter(move |item| Ok(predicate(item)))
    }

    /// Fallible variant of [`filter`](Self::filter): a predicate error
    /// becomes the terminal error of the whole stream.
    pub fn try_filter<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> Result<bool> + 'static,
    {
        Stream {
            op: StreamOp::Filter {
                upstream: Rc::new(self),
                predicate: Rc::new(predicate),
            },
        }
    }

    /// Transforms each item, preserving order.
    pub fn map<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.try_map(move |item| Ok(f(item)))
    }

    /// Fallible variant of [`map`](Self::map): a transform error aborts
    /// emission and becomes the terminal error of the whole stream.
    pub fn try_map<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + 'static,
    {
        let upstream = Rc::new(self);
        let drive: DriveFn<U> =
            Rc::new(move |sink| upstream.drive(&mut |item| sink(f(item)?)));
        Stream {
            op: StreamOp::Map { drive },
        }
    }

    /// Invokes `hook` with a terminal error just before it propagates.
    ///
    /// An observation point only: the error is neither suppressed nor
    /// altered.
    pub fn do_on_error<F>(self, hook: F) -> Stream<T>
    where
        F: Fn(&Error) + 'static,
    {
        Stream {
            op: StreamOp::OnError {
                upstream: Rc::new(self),
                hook: Rc::new(hook),
            },
        }
    }

    /// Reduces to a `Single` holding the first emitted item, if any.
    ///
    /// Zero matches yield an empty `Single`, not an error; the traversal
    /// stops as soon as the first item is seen.
    pub fn next(self) -> Single<T> {
        let upstream = Rc::new(self);
        Single::reduce(move || {
            let mut first = None;
            upstream.drive(&mut |item| {
                first = Some(item);
                Ok(Flow::Stop)
            })?;
            Ok(first)
        })
    }

    /// Reduces to a `Single` with an exactly-one cardinality contract.
    ///
    /// Fails with `Error::Cardinality` when the stream emits zero items
    /// (count 0) or more than one (count 2; the traversal stops at the
    /// second item).
    pub fn single(self) -> Single<T> {
        let upstream = Rc::new(self);
        Single::reduce(move || {
            let mut seen: Option<T> = None;
            upstream.drive(&mut |item| {
                if seen.is_some() {
                    return Err(Error::cardinality(2));
                }
                seen = Some(item);
                Ok(Flow::Continue)
            })?;
            match seen {
                Some(item) => Ok(Some(item)),
                None => Err(Error::cardinality(0)),
            }
        })
    }

    /// Buffers every emitted item into one ordered list, emitted as a
    /// single value on completion. An empty stream yields an empty list.
    pub fn collect_to_list(self) -> Single<Vec<T>> {
        let upstream = Rc::new(self);
        Single::reduce(move || {
            let mut items = Vec::new();
            upstream.drive(&mut |item| {
                items.push(item);
                Ok(Flow::Continue)
            })?;
            Ok(Some(items))
        })
    }

    /// Subscribes with the raw signal protocol.
    ///
    /// This is the primitive the other subscribe/block forms are built on.
    /// The sink receives the subscription handle with every signal, so a
    /// subscriber can cancel from inside its own callback; delivery stops
    /// before the next item and no completion signal follows.
    pub fn subscribe_signals<F>(&self, mut sink: F) -> Subscription
    where
        F: FnMut(&Subscription, Signal<T>),
    {
        let subscription = Subscription::begin();
        let result = self.drive(&mut |item| {
            if !subscription.mark_emitting() {
                return Ok(Flow::Stop);
            }
            sink(&subscription, Signal::Item(item));
            if subscription.is_cancelled() {
                Ok(Flow::Stop)
            } else {
                Ok(Flow::Continue)
            }
        });
        match result {
            Ok(_) => {
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

    /// Subscribes with an item callback.
    ///
    /// A terminal error is retained on the returned handle.
    pub fn subscribe<F>(&self, mut on_item: F) -> Subscription
    where
        F: FnMut(T),
    {
        self.subscribe_signals(move |_, signal| {
            if let Signal::Item(item) = signal {
                on_item(item);
            }
        })
    }

    /// Subscribes with the full callback set.
    ///
    /// `on_item` is invoked once per item in producer order; exactly one of
    /// `on_complete` / `on_error` follows, never both.
    pub fn subscribe_with<I, C, E>(
        &self,
        mut on_item: I,
        mut on_complete: C,
        mut on_error: E,
    ) -> Subscription
    where
        I: FnMut(T),
        C: FnMut(),
        E: FnMut(&Error),
    {
        self.subscribe_signals(move |_, signal| match signal {
            Signal::Item(item) => on_item(item),
            Signal::Complete => on_complete(),
            Signal::Error(error) => on_error(&error),
        })
    }

    /// Synchronously returns the first item, `Ok(None)` for an empty
    /// stream, or the terminal error.
    pub fn block_first(&self) -> Result<Option<T>> {
        let slot = Rc::new(RefCell::new(None));
        let captured = slot.clone();
        let subscription = self.subscribe_signals(move |handle, signal| {
            if let Signal::Item(item) = signal {
                *captured.borrow_mut() = Some(item);
                handle.cancel();
            }
        });
        if let Some(error) = subscription.error() {
            return Err(error);
        }
        let first = slot.borrow_mut().take();
        Ok(first)
    }

    /// Walks the chain from the source upward, pushing items into `sink`
    /// until the source is exhausted, the sink stops the traversal, or an
    /// error surfaces.
    pub(crate) fn drive(
        &self,
        sink: &mut dyn FnMut(T) -> Result<Flow>,
    ) -> Result<Flow> {
        match &self.op {
            StreamOp::Source { supply } => {
                for item in supply() {
                    if sink(item)?.is_stop() {
                        return Ok(Flow::Stop);
                    }
                }
                Ok(Flow::Continue)
            }
            StreamOp::Filter {
                upstream,
                predicate,
            } => upstream.drive(&mut |item| {
                if predicate(&item)? {
                    sink(item)
                } else {
                    Ok(Flow::Continue)
                }
            }),
            StreamOp::Map { drive } => drive(sink),
            StreamOp::OnError { upstream, hook } => {
                let result = upstream.drive(sink);
                if let Err(error) = &result {
                    hook(error);
                }
                result
            }
        }
    }
}

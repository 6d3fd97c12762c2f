//! Core resolution protocol and the combinator extension trait

use crate::compat::IntoAsync;
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::WindowConfig;

use super::advanced::{FlatMap, Windowed};
use super::consumers::{self, Outcome};
use super::delay::{Diff, Difference, Truncate};
use super::transform::{DropFirst, Filter, Map};

/// Callback applied to a resolved head element.
pub type Handler<'a, T> = dyn FnMut(T) -> StreamResult<()> + 'a;

/// Type-erased stream
pub type BoxStream<'a, T> = Box<dyn Stream<Item = T> + 'a>;

/// A lazily resolved, possibly infinite sequence of `Item`s.
///
/// A stream is either empty, or a head element followed by a remainder
/// stream. The only way to take it apart is [`resolve`](Stream::resolve),
/// which makes some progress towards handing the next head to `handler` or
/// establishing end-of-stream. The remainder is the receiver itself, in its
/// updated state.
///
/// Implementations must uphold:
/// - a resolved head is passed to `handler` exactly once;
/// - if `handler` fails, the call reports [`Resolution::Failed`] with that error;
/// - end-of-stream (either [`Resolution::Exhausted`] or [`Resolution::Failed`])
///   is absorbing: every later call reports [`Resolution::Exhausted`] without
///   invoking `handler`;
/// - a stream with nothing attached (`None`, or a combinator's `Default`)
///   is the empty stream.
pub trait Stream {
    type Item;
    fn resolve(&mut self, handler: &mut Handler<'_, Self::Item>) -> Resolution;
}

/// Result of one [`Stream::resolve`] call.
#[must_use = "a resolution reports end-of-stream and errors"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Not yet at end-of-stream. The handler may or may not have been invoked.
    Progress,
    /// End-of-stream without error.
    Exhausted,
    /// End-of-stream caused by an error.
    Failed(StreamError),
}

impl Resolution {
    /// Map a handler outcome onto a resolution that did hand over an element.
    pub fn from_handled(result: StreamResult<()>) -> Self {
        match result {
            Ok(()) => Resolution::Progress,
            Err(err) => Resolution::Failed(err),
        }
    }

    pub fn is_end_of_stream(&self) -> bool {
        !matches!(self, Resolution::Progress)
    }

    pub fn is_progress(&self) -> bool {
        matches!(self, Resolution::Progress)
    }

    pub fn error(&self) -> Option<&StreamError> {
        match self {
            Resolution::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_error(self) -> Option<StreamError> {
        match self {
            Resolution::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// The absent stream. `None` is empty, and `Some` is dropped as soon as it
/// reaches end-of-stream, which releases whatever it owns.
impl<S: Stream> Stream for Option<S> {
    type Item = S::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, Self::Item>) -> Resolution {
        let Some(stream) = self.as_mut() else {
            return Resolution::Exhausted;
        };
        let resolution = stream.resolve(handler);
        if resolution.is_end_of_stream() {
            *self = None;
        }
        resolution
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, Self::Item>) -> Resolution {
        (**self).resolve(handler)
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    type Item = S::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, Self::Item>) -> Resolution {
        (**self).resolve(handler)
    }
}

/// Extension trait providing stream combinators and terminal consumers
pub trait StreamExt: Stream + Sized {
    /// Apply `f` to every element. A failing `f` ends the stream with its error.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> StreamResult<U>,
    {
        Map::new(self, f)
    }

    /// Replace every element by the sub-stream `f` builds from it and
    /// concatenate the sub-streams in order.
    fn flat_map<St, F>(self, f: F) -> FlatMap<Self, F, St>
    where
        St: Stream,
        F: FnMut(Self::Item) -> StreamResult<St>,
    {
        FlatMap::new(self, f)
    }

    /// Concatenate a stream of streams.
    #[allow(clippy::type_complexity)]
    fn flatten(self) -> FlatMap<Self, fn(Self::Item) -> StreamResult<Self::Item>, Self::Item>
    where
        Self::Item: Stream,
    {
        FlatMap::new(self, Ok as fn(Self::Item) -> StreamResult<Self::Item>)
    }

    /// Skip the first `n` resolved elements.
    fn drop_first(self, n: usize) -> DropFirst<Self> {
        DropFirst::new(self, n)
    }

    /// Delay the stream by `n` elements, discarding the last `n`.
    fn truncate(self, n: usize) -> Truncate<Self> {
        Truncate::new(self, n)
    }

    /// First difference: every element minus its predecessor.
    fn diff(self) -> Diff<Self>
    where
        Self::Item: Difference,
    {
        Diff::new(self, 1)
    }

    /// Lag-`n` difference: every element minus the one `n` positions earlier.
    fn diff_n(self, n: usize) -> Diff<Self>
    where
        Self::Item: Difference,
    {
        Diff::new(self, n)
    }

    /// Keep only the elements matching `predicate`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Sliding windows of `size` elements, advancing one element at a time.
    fn windowed(self, size: usize, compaction: usize) -> Windowed<Self>
    where
        Self::Item: Clone,
    {
        Windowed::new(self, WindowConfig::new(size, compaction))
    }

    /// Like [`windowed`](StreamExt::windowed), with a prepared [`WindowConfig`].
    fn windowed_with(self, config: WindowConfig) -> Windowed<Self>
    where
        Self::Item: Clone,
    {
        Windowed::new(self, config)
    }

    /// Erase the combinator type behind a [`BoxStream`].
    fn boxed<'a>(self) -> BoxStream<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Adapt into a `futures_core::Stream` of results.
    fn into_async(self) -> IntoAsync<Self> {
        IntoAsync::new(self)
    }

    /// Drive the stream to completion, gathering every element.
    fn collect(self) -> Outcome<Vec<Self::Item>> {
        consumers::collect(self)
    }

    /// Drive the stream to completion, folding every element into `seed`.
    fn accumulate<R, F>(self, seed: R, f: F) -> Outcome<R>
    where
        F: FnMut(R, Self::Item) -> R,
    {
        consumers::accumulate(self, seed, f)
    }

    /// Drive the stream to completion, counting its elements.
    fn count(self) -> Outcome<usize> {
        consumers::count(self)
    }
}

impl<S: Stream + Sized> StreamExt for S {}

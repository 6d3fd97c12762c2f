//! Element-wise combinators: map, filter, drop_first
use super::core::{Handler, Resolution, Stream};
use crate::error::StreamResult;

// ================================
// Map
// ================================

pub struct Map<S, F> {
    base: Option<S>,
    f: Option<F>,
}

impl<S, F> Map<S, F> {
    pub fn new(base: S, f: F) -> Self {
        Map { base: Some(base), f: Some(f) }
    }
}

impl<S, F> Default for Map<S, F> {
    fn default() -> Self {
        Map { base: None, f: None }
    }
}

impl<S, U, F> Stream for Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> StreamResult<U>,
{
    type Item = U;

    fn resolve(&mut self, handler: &mut Handler<'_, U>) -> Resolution {
        let Map { base, f } = self;
        let Some(f) = f.as_mut() else {
            return Resolution::Exhausted;
        };
        base.resolve(&mut |item| handler(f(item)?))
    }
}

// ================================
// Filter
// ================================

pub struct Filter<S, F> {
    base: Option<S>,
    predicate: Option<F>,
}

impl<S, F> Filter<S, F> {
    pub fn new(base: S, predicate: F) -> Self {
        Filter { base: Some(base), predicate: Some(predicate) }
    }
}

impl<S, F> Default for Filter<S, F> {
    fn default() -> Self {
        Filter { base: None, predicate: None }
    }
}

impl<S, F> Stream for Filter<S, F>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, S::Item>) -> Resolution {
        let Filter { base, predicate } = self;
        let Some(predicate) = predicate.as_mut() else {
            return Resolution::Exhausted;
        };
        // Rejected elements make this call a no-op for the caller.
        base.resolve(&mut |item| if predicate(&item) { handler(item) } else { Ok(()) })
    }
}

// ================================
// DropFirst
// ================================

/// Skips the first `n` resolved elements of its base.
pub struct DropFirst<S> {
    base: Option<S>,
    n: usize,
    seen: usize,
}

impl<S> DropFirst<S> {
    pub fn new(base: S, n: usize) -> Self {
        DropFirst { base: Some(base), n, seen: 0 }
    }
}

impl<S> Default for DropFirst<S> {
    fn default() -> Self {
        DropFirst { base: None, n: 0, seen: 0 }
    }
}

impl<S: Stream> Stream for DropFirst<S> {
    type Item = S::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, S::Item>) -> Resolution {
        let DropFirst { base, n, seen } = self;
        base.resolve(&mut |item| {
            if *seen < *n {
                *seen += 1;
                return Ok(());
            }
            handler(item)
        })
    }
}

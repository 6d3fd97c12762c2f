//! Stream constructors: empty, once, from_vec, from_iter
use std::collections::VecDeque;
use std::marker::PhantomData;

use super::core::{Handler, Resolution, Stream};

// ================================
// Basic Constructors
// ================================

pub struct Empty<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Empty { _phantom: PhantomData }
    }
}

impl<T> Stream for Empty<T> {
    type Item = T;

    fn resolve(&mut self, _handler: &mut Handler<'_, T>) -> Resolution {
        Resolution::Exhausted
    }
}

pub struct Once<T> {
    value: Option<T>,
}

impl<T> Default for Once<T> {
    fn default() -> Self {
        Once { value: None }
    }
}

impl<T> Stream for Once<T> {
    type Item = T;

    fn resolve(&mut self, handler: &mut Handler<'_, T>) -> Resolution {
        match self.value.take() {
            Some(value) => Resolution::from_handled(handler(value)),
            None => Resolution::Exhausted,
        }
    }
}

/// An ordered in-memory sequence. Also the type of every window emitted by
/// [`Windowed`](super::advanced::Windowed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecStream<T> {
    items: VecDeque<T>,
}

impl<T> VecStream<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements not yet resolved, in order.
    pub fn remaining(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for VecStream<T> {
    fn default() -> Self {
        VecStream { items: VecDeque::new() }
    }
}

impl<T> From<Vec<T>> for VecStream<T> {
    fn from(items: Vec<T>) -> Self {
        VecStream { items: items.into() }
    }
}

impl<T> Stream for VecStream<T> {
    type Item = T;

    fn resolve(&mut self, handler: &mut Handler<'_, T>) -> Resolution {
        let Some(head) = self.items.pop_front() else {
            return Resolution::Exhausted;
        };
        let resolution = Resolution::from_handled(handler(head));
        if resolution.is_end_of_stream() {
            self.items.clear();
        }
        resolution
    }
}

pub struct Iter<I> {
    iter: Option<I>,
}

impl<I> Default for Iter<I> {
    fn default() -> Self {
        Iter { iter: None }
    }
}

impl<I: Iterator> Stream for Iter<I> {
    type Item = I::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, I::Item>) -> Resolution {
        let next = self.iter.as_mut().and_then(|iter| iter.next());
        let Some(head) = next else {
            self.iter = None;
            return Resolution::Exhausted;
        };
        let resolution = Resolution::from_handled(handler(head));
        if resolution.is_end_of_stream() {
            self.iter = None;
        }
        resolution
    }
}

pub fn empty<T>() -> Empty<T> {
    Empty::default()
}

pub fn once<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}

pub fn from_vec<T>(items: Vec<T>) -> VecStream<T> {
    VecStream::from(items)
}

/// Lazily pull elements out of any iterator.
pub fn from_iter<I: IntoIterator>(iter: I) -> Iter<I::IntoIter> {
    Iter { iter: Some(iter.into_iter()) }
}

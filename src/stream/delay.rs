//! Bounded-delay combinators: truncate and diff
//!
//! Both hold the most recent `n` elements in a bounded ring. Nothing is
//! emitted until the ring is full; after that every incoming element evicts
//! the oldest one. Whatever is still held at end-of-stream is discarded.
use super::core::{Handler, Resolution, Stream};

/// Element types [`Diff`] can subtract. Integer differences wrap on overflow
/// instead of panicking.
pub trait Difference: Copy {
    /// `self - earlier`.
    fn difference(self, earlier: Self) -> Self;
}

macro_rules! wrapping_difference {
    ($($t:ty),*) => {
        $(impl Difference for $t {
            #[inline]
            fn difference(self, earlier: Self) -> Self {
                self.wrapping_sub(earlier)
            }
        })*
    };
}

wrapping_difference!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Difference for f32 {
    #[inline]
    fn difference(self, earlier: Self) -> Self {
        self - earlier
    }
}

impl Difference for f64 {
    #[inline]
    fn difference(self, earlier: Self) -> Self {
        self - earlier
    }
}

/// Ring of the last `capacity` elements, in arrival order starting at
/// `cursor`. Storage grows with arrivals, so `capacity` may exceed what
/// the stream will ever hold.
struct DelayLine<T> {
    hold: Vec<T>,
    capacity: usize,
    cursor: usize,
}

impl<T> DelayLine<T> {
    fn new(capacity: usize) -> Self {
        DelayLine { hold: Vec::new(), capacity, cursor: 0 }
    }

    /// Store `item`, returning the element it evicts once the line is full.
    /// A zero-capacity line evicts `item` itself.
    fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        if self.hold.len() < self.capacity {
            self.hold.push(item);
            return None;
        }
        let oldest = std::mem::replace(&mut self.hold[self.cursor], item);
        self.cursor = (self.cursor + 1) % self.capacity;
        Some(oldest)
    }
}

impl<T> Default for DelayLine<T> {
    fn default() -> Self {
        DelayLine::new(0)
    }
}

// ================================
// Truncate
// ================================

/// Emits each element `n` positions late and never flushes the last `n`.
pub struct Truncate<S: Stream> {
    base: Option<S>,
    line: DelayLine<S::Item>,
}

impl<S: Stream> Truncate<S> {
    pub fn new(base: S, n: usize) -> Self {
        Truncate { base: Some(base), line: DelayLine::new(n) }
    }
}

impl<S: Stream> Default for Truncate<S> {
    fn default() -> Self {
        Truncate { base: None, line: DelayLine::default() }
    }
}

impl<S: Stream> Stream for Truncate<S> {
    type Item = S::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, S::Item>) -> Resolution {
        let Truncate { base, line } = self;
        let resolution = base.resolve(&mut |item| match line.push(item) {
            Some(evicted) => handler(evicted),
            None => Ok(()),
        });
        if resolution.is_end_of_stream() {
            line.hold.clear();
        }
        resolution
    }
}

// ================================
// Diff
// ================================

/// Emits `item - earlier` where `earlier` arrived `n` positions before `item`.
/// See [`Difference`] for how the subtraction behaves.
pub struct Diff<S: Stream> {
    base: Option<S>,
    line: DelayLine<S::Item>,
}

impl<S: Stream> Diff<S> {
    pub fn new(base: S, n: usize) -> Self {
        Diff { base: Some(base), line: DelayLine::new(n) }
    }
}

impl<S: Stream> Default for Diff<S> {
    fn default() -> Self {
        Diff { base: None, line: DelayLine::default() }
    }
}

impl<S> Stream for Diff<S>
where
    S: Stream,
    S::Item: Difference,
{
    type Item = S::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, S::Item>) -> Resolution {
        let Diff { base, line } = self;
        let resolution = base.resolve(&mut |item| match line.push(item) {
            Some(earlier) => handler(item.difference(earlier)),
            None => Ok(()),
        });
        if resolution.is_end_of_stream() {
            line.hold.clear();
        }
        resolution
    }
}

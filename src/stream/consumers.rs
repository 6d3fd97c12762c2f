//! Terminal consumers: collect, accumulate, count
//!
//! Each one resolves its stream until end-of-stream or the first error,
//! tolerating any number of resolutions that hand over nothing.
use super::core::{Resolution, Stream};
use crate::error::{StreamError, StreamResult};

/// Value produced by a terminal consumer, alongside the error that stopped
/// it early, if any. On error `value` holds whatever was gathered before.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<R> {
    pub value: R,
    pub error: Option<StreamError>,
}

impl<R> Outcome<R> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_parts(self) -> (R, Option<StreamError>) {
        (self.value, self.error)
    }

    /// Discard the partial value if the stream failed.
    pub fn into_result(self) -> StreamResult<R> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

/// Drive `stream` to completion, gathering every element in arrival order.
pub fn collect<S: Stream>(mut stream: S) -> Outcome<Vec<S::Item>> {
    let mut collection = Vec::new();
    loop {
        let resolution = stream.resolve(&mut |item| {
            collection.push(item);
            Ok(())
        });
        if let Some(error) = finish(resolution) {
            return Outcome { value: collection, error };
        }
    }
}

/// Drive `stream` to completion, folding every element into `seed` with `f`.
pub fn accumulate<S, R, F>(mut stream: S, seed: R, mut f: F) -> Outcome<R>
where
    S: Stream,
    F: FnMut(R, S::Item) -> R,
{
    // Taken out for each fold and put straight back
    let mut acc = Some(seed);
    loop {
        let resolution = stream.resolve(&mut |item| {
            acc = acc.take().map(|a| f(a, item));
            Ok(())
        });
        if let Some(error) = finish(resolution) {
            match acc {
                Some(value) => return Outcome { value, error },
                None => unreachable!("accumulator restored after every fold"),
            }
        }
    }
}

/// Drive `stream` to completion, counting its elements.
pub fn count<S: Stream>(stream: S) -> Outcome<usize> {
    accumulate(stream, 0, |n, _| n + 1)
}

/// `None` while the stream is still progressing, otherwise the error (if any)
/// that ended it.
fn finish(resolution: Resolution) -> Option<Option<StreamError>> {
    if resolution.is_progress() {
        return None;
    }
    let error = resolution.into_error();
    if let Some(err) = &error {
        log::debug!("stream consumer stopped early: {}", err);
    }
    Some(error)
}

//! Bridge from the resolution protocol to `futures_core::Stream`
//!
//! Resolution stays synchronous: every `poll_next` resolves the wrapped
//! stream on the polling task until an element is handed over or the stream
//! ends, so it never returns `Poll::Pending`.
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::error::{StreamError, StreamResult};
use crate::stream::{Resolution, Stream};

pub struct IntoAsync<S: Stream> {
    stream: S,
    buffered: VecDeque<S::Item>,
    error: Option<StreamError>,
    done: bool,
}

impl<S: Stream> IntoAsync<S> {
    pub fn new(stream: S) -> Self {
        IntoAsync { stream, buffered: VecDeque::new(), error: None, done: false }
    }
}

impl<S> futures_core::Stream for IntoAsync<S>
where
    S: Stream + Unpin,
    S::Item: Unpin,
{
    type Item = StreamResult<S::Item>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(item) = this.buffered.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }
            if this.done {
                // The error is yielded once, after everything handed over before it
                return Poll::Ready(this.error.take().map(Err));
            }

            let buffered = &mut this.buffered;
            match this.stream.resolve(&mut |item| {
                buffered.push_back(item);
                Ok(())
            }) {
                Resolution::Progress => {}
                Resolution::Exhausted => this.done = true,
                Resolution::Failed(err) => {
                    this.done = true;
                    this.error = Some(err);
                }
            }
        }
    }
}

impl<S> futures_core::FusedStream for IntoAsync<S>
where
    S: Stream + Unpin,
    S::Item: Unpin,
{
    fn is_terminated(&self) -> bool {
        self.done && self.buffered.is_empty() && self.error.is_none()
    }
}

//! Advanced stream combinators: flat_map, windowed
use super::constructors::VecStream;
use super::core::{Handler, Resolution, Stream};
use crate::error::StreamResult;
use crate::stream_configuration::WindowConfig;

// ================================
// FlatMap
// ================================

/// Concatenates the sub-streams `f` builds from each base element.
///
/// The active sub-stream is drained completely, in its own order, before the
/// next base element is pulled.
pub struct FlatMap<S, F, St> {
    base: Option<S>,
    f: Option<F>,
    inner: Option<St>,
}

impl<S, F, St> FlatMap<S, F, St> {
    pub fn new(base: S, f: F) -> Self {
        FlatMap { base: Some(base), f: Some(f), inner: None }
    }
}

impl<S, F, St> Default for FlatMap<S, F, St> {
    fn default() -> Self {
        FlatMap { base: None, f: None, inner: None }
    }
}

impl<S, F, St> Stream for FlatMap<S, F, St>
where
    S: Stream,
    St: Stream,
    F: FnMut(S::Item) -> StreamResult<St>,
{
    type Item = St::Item;

    fn resolve(&mut self, handler: &mut Handler<'_, St::Item>) -> Resolution {
        let FlatMap { base, f, inner } = self;
        let Some(f) = f.as_mut() else {
            return Resolution::Exhausted;
        };

        // First, advance the active sub-stream
        if let Some(sub) = inner.as_mut() {
            match sub.resolve(handler) {
                Resolution::Progress => return Resolution::Progress,
                Resolution::Exhausted => *inner = None,
                Resolution::Failed(err) => {
                    *inner = None;
                    *base = None;
                    return Resolution::Failed(err);
                }
            }
        }

        // Then pull the next base element and install its sub-stream
        let mut installed = None;
        let resolution = base.resolve(&mut |item| {
            installed = Some(f(item)?);
            Ok(())
        });
        if installed.is_some() {
            log::trace!("flat_map: installed next sub-stream");
            *inner = installed;
        }

        match resolution {
            Resolution::Progress => Resolution::Progress,
            // A sub-stream installed on the last base element still has to drain
            Resolution::Exhausted if inner.is_some() => Resolution::Progress,
            Resolution::Exhausted => Resolution::Exhausted,
            Resolution::Failed(err) => {
                *inner = None;
                Resolution::Failed(err)
            }
        }
    }
}

// ================================
// Windowed
// ================================

/// Sliding windows over the base stream.
///
/// Once `size` elements have been seen, every further base element emits a
/// fresh [`VecStream`] holding the last `size` elements. The backing buffer
/// grows to at most `compaction * size` elements and is then cut back to the
/// newest `size - 1`, which never changes the windows produced.
pub struct Windowed<S: Stream> {
    base: Option<S>,
    hold: Vec<S::Item>,
    config: WindowConfig,
}

impl<S: Stream> Windowed<S> {
    pub fn new(base: S, config: WindowConfig) -> Self {
        // The buffer grows on demand; `size` may be far larger than the stream
        Windowed { base: Some(base), hold: Vec::new(), config }
    }

    /// Window size and compaction factor in effect.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }
}

impl<S: Stream> Default for Windowed<S> {
    fn default() -> Self {
        Windowed { base: None, hold: Vec::new(), config: WindowConfig::default() }
    }
}

impl<S> Stream for Windowed<S>
where
    S: Stream,
    S::Item: Clone,
{
    type Item = VecStream<S::Item>;

    fn resolve(&mut self, handler: &mut Handler<'_, VecStream<S::Item>>) -> Resolution {
        let Windowed { base, hold, config } = self;
        let size = config.size;
        let capacity = config.buffer_capacity();

        let resolution = base.resolve(&mut |item| {
            hold.push(item);
            if hold.len() < size {
                // No complete window yet
                return Ok(());
            }

            let window = hold[hold.len() - size..].to_vec();
            let result = handler(VecStream::from(window));

            if hold.len() >= capacity {
                let keep = size.saturating_sub(1);
                let cut = hold.len() - keep;
                log::trace!("windowed: compacting {} buffered elements down to {}", hold.len(), keep);
                hold.drain(..cut);
            }

            result
        });

        if resolution.is_end_of_stream() {
            hold.clear();
        }
        resolution
    }
}

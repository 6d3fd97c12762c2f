//! Lazy, pull-based streams.
//!
//! A [`Stream`] is taken apart one step at a time with
//! [`resolve`](Stream::resolve); combinators such as [`StreamExt::map`],
//! [`StreamExt::truncate`] or [`StreamExt::windowed`] wrap a base stream and
//! re-expose the same protocol. Evaluation is synchronous and driven entirely
//! by the caller, usually through [`collect`], [`accumulate`] or [`count`].
//!
//! ```
//! use pullstream::{from_vec, StreamExt};
//!
//! let windows = from_vec(vec![3, 1, 4, 1])
//!     .windowed(2, 2)
//!     .map(|window| window.collect().into_result())
//!     .collect();
//! assert_eq!(windows.value, vec![vec![3, 1], vec![1, 4], vec![4, 1]]);
//! ```

pub mod compat;
pub mod error;
pub mod stream;
pub mod stream_configuration;

// Re-export the protocol and combinators at the crate root
pub use compat::IntoAsync;
pub use error::{ErrorOrigin, StreamError, StreamResult};
pub use stream::{
    accumulate, collect, count, empty, from_iter, from_vec, once, BoxStream, Diff, Difference,
    DropFirst, Empty, FileInts, FileLines, Filter, FlatMap, Handler, Iter, Map, Once, Outcome,
    Resolution, Stream, StreamExt, Truncate, VecStream, Windowed,
};
pub use stream_configuration::{FileConfig, WindowConfig};

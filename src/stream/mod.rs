//! Pull-based streams and their combinators
//!
//! This module provides the [`Stream`] resolution protocol, the combinators
//! built on it, and the terminal consumers that drive a chain to completion.

pub mod core;
pub mod constructors;
pub mod transform;
pub mod delay;
pub mod advanced;
pub mod consumers;
pub mod files;

// Re-export core types
pub use self::core::{BoxStream, Handler, Resolution, Stream, StreamExt};

// Re-export constructors
pub use constructors::{empty, from_iter, from_vec, once, Empty, Iter, Once, VecStream};

// Re-export combinators
pub use advanced::{FlatMap, Windowed};
pub use delay::{Diff, Difference, Truncate};
pub use transform::{DropFirst, Filter, Map};

// Re-export terminal consumers
pub use consumers::{accumulate, collect, count, Outcome};

// Re-export file sources
pub use files::{FileInts, FileLines};

//! Error types and handling for pullstream
//!
//! Every failure surfaced through [`Resolution::Failed`](crate::stream::Resolution)
//! is a [`StreamError`]. Errors are tagged by origin so a caller can tell
//! "pipeline logic failed" apart from "data source failed".

use thiserror::Error;

/// Where an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// Caller-supplied logic (a mapping function, flat-map function or consumer handler).
    Handler,
    /// The producer feeding the pipeline (file I/O, malformed input, configuration).
    Source,
}

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Raised by a handler or a transformation function
    #[error("handler error: {0}")]
    Handler(String),
    /// I/O related errors from a source adapter
    #[error("IO error: {0}")]
    Io(String),
    /// Malformed input read by a source adapter
    #[error("parse error on line {line}: unexpected token {token:?}")]
    Parse { line: usize, token: String },
    /// Rejected configuration
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Any other producer failure
    #[error("source error: {0}")]
    Source(String),
}

impl StreamError {
    /// Build a handler-raised error from any displayable message.
    pub fn handler(msg: impl std::fmt::Display) -> Self {
        StreamError::Handler(msg.to_string())
    }

    /// Build a source-raised error from any displayable message.
    pub fn source(msg: impl std::fmt::Display) -> Self {
        StreamError::Source(msg.to_string())
    }

    pub fn origin(&self) -> ErrorOrigin {
        match self {
            StreamError::Handler(_) => ErrorOrigin::Handler,
            StreamError::Io(_)
            | StreamError::Parse { .. }
            | StreamError::Config(_)
            | StreamError::Source(_) => ErrorOrigin::Source,
        }
    }

    pub fn is_handler_error(&self) -> bool {
        self.origin() == ErrorOrigin::Handler
    }

    pub fn is_source_error(&self) -> bool {
        self.origin() == ErrorOrigin::Source
    }
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Io(err.to_string())
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;

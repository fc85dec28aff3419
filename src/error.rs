//! Error types and handling for rivulet streams.
//!
//! All failure modes of the library belong to the single [`StreamError`]
//! family. User-supplied callables are never wrapped: a panic inside a
//! mapper or predicate propagates to the caller of the pull that invoked
//! it.

/// Main error type for stream operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A terminal operation that must exhaust the stream was invoked on a
    /// stream built from an infinite source and never bounded by `take` or
    /// `take_while`. Raised before any element is pulled.
    #[error("cannot use {operation} on an unbounded stream")]
    UnboundedStream { operation: &'static str },

    /// `single`/`single_where` found a second (matching) element.
    #[error("stream contains more than a single value")]
    SingleValue,

    /// An associative materializer hit two elements with equal keys while
    /// the duplicate policy was [`DuplicatePolicy::Fail`].
    ///
    /// [`DuplicatePolicy::Fail`]: crate::stream::DuplicatePolicy::Fail
    #[error("key already exists in {container}")]
    DuplicateKey { container: &'static str },

    /// `or_fail` was invoked on an empty optional with no explicit error
    /// supplied.
    #[error("empty optional accessed")]
    EmptyOptional,
}

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

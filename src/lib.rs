//! Rivulet — a lazy, pull-based stream pipeline library.
//!
//! A single source sequence flows through a chain of composable adapters
//! (map, filter, take, sort, group, fold, …) and is forced by a terminal
//! operation into a scalar or a container. Nothing runs until a terminal
//! pulls: pipelines are single-pass, cost one traversal, and may be built
//! over infinite generators as long as a bounding adapter (`take`,
//! `take_while`) or a short-circuiting terminal limits the work.
//!
//! Terminals that must exhaust the stream check boundedness up front and
//! return [`StreamError::UnboundedStream`] instead of looping forever.
//!
//! # Examples
//! ```
//! use rivulet::{from_iter, repeat_with, StreamResult};
//!
//! fn demo() -> StreamResult<()> {
//!     let big = from_iter([56, 3, 23, 100, 42])
//!         .filter(|x| *x > 50)
//!         .to_vec()?;
//!     assert_eq!(big, vec![56, 100]);
//!
//!     let mut n = 0;
//!     let squares = repeat_with(move || {
//!         n += 1;
//!         n * n
//!     })
//!     .take_while(|x| *x < 50)
//!     .to_vec()?;
//!     assert_eq!(squares, vec![1, 4, 9, 16, 25, 36, 49]);
//!     Ok(())
//! }
//! demo().unwrap();
//! ```

pub mod error;
pub mod optional;
pub mod stream;

// Re-export the whole operation surface at the crate root
pub use error::{StreamError, StreamResult};
pub use optional::OptionalExt;
pub use stream::*;

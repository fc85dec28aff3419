//! The lazy pull engine: core trait and handle, constructors, chainable
//! adapters, terminals, and materializers.

pub mod collect;
pub mod constructors;
pub mod core;
pub mod terminal;

// Re-export core types
pub use core::{
    Chain, Distinct, Filter, FilterMap, FlatMap, Map, Skip, SkipWhile, Stage, Stream, StreamIter,
    Take, TakeWhile, Zip,
};

// Re-export constructors
pub use constructors::{
    empty, from_fn, from_iter, from_ref, from_slice, iterate, once, range, range_by, range_desc,
    range_desc_by, range_step, range_with, repeat, repeat_with, successors, Empty, FromFn, Iter,
    Iterate, Once, Range, Repeat, RepeatWith, Successors,
};

// Re-export the materializer policy
pub use collect::DuplicatePolicy;

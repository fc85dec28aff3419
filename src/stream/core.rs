//! Core pull engine: the [`Stage`] trait, the [`Stream`] handle, and the
//! per-element adapter stages.
//!
//! A pipeline is a singly-linked, single-owner chain of stages. Each
//! adapter owns exactly one upstream stage, moved in at construction, and
//! the whole chain is a static type known at compose time — no boxing, no
//! shared ownership, no fan-out.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{StreamError, StreamResult};

/// The pull-based unit of transformation.
///
/// `pull` produces the next value, or `None` once the sequence is
/// exhausted. Every stage in this crate is fused: after the first `None`,
/// all later pulls return `None` as well.
pub trait Stage {
    type Item;

    fn pull(&mut self) -> Option<Self::Item>;
}

/// The owning handle around a stage chain.
///
/// A `Stream` owns the head of the chain and tracks whether the source is
/// provably infinite. Handles are move-only; every operation consumes the
/// handle and either returns a new one (adapters) or a final value
/// (terminals), so a consumed stream cannot be pulled twice.
#[must_use = "streams are lazy and do nothing unless consumed"]
pub struct Stream<S> {
    pub(crate) stage: S,
    pub(crate) unbounded: bool,
}

impl<S: Stage> Stream<S> {
    pub(crate) fn new(stage: S, unbounded: bool) -> Self {
        Stream { stage, unbounded }
    }

    /// Pull the next value out of the pipeline.
    pub fn pull(&mut self) -> Option<S::Item> {
        self.stage.pull()
    }

    /// Whether the stream is derived from an infinite source and has not
    /// been bounded by `take`/`take_while`.
    pub fn is_unbounded(&self) -> bool {
        self.unbounded
    }

    pub(crate) fn require_bounded(&self, operation: &'static str) -> StreamResult<()> {
        if self.unbounded {
            log::debug!("rejecting {operation}: stream is unbounded");
            return Err(StreamError::UnboundedStream { operation });
        }
        Ok(())
    }

    /// Transform each element with `f`.
    pub fn map<U, F>(self, f: F) -> Stream<Map<S, F>>
    where
        F: FnMut(S::Item) -> U,
    {
        Stream::new(Map { stage: self.stage, f }, self.unbounded)
    }

    /// Keep only the elements matching `pred`.
    pub fn filter<F>(self, pred: F) -> Stream<Filter<S, F>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        Stream::new(Filter { stage: self.stage, pred }, self.unbounded)
    }

    /// Drop the elements matching `pred`; the complement of [`filter`].
    ///
    /// [`filter`]: Stream::filter
    pub fn exclude<F>(self, mut pred: F) -> Stream<Filter<S, impl FnMut(&S::Item) -> bool>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        self.filter(move |item| !pred(item))
    }

    /// Map and filter in one step: keep the `Some` results of `f`.
    pub fn filter_map<U, F>(self, f: F) -> Stream<FilterMap<S, F>>
    where
        F: FnMut(S::Item) -> Option<U>,
    {
        Stream::new(FilterMap { stage: self.stage, f }, self.unbounded)
    }

    /// Map each element to a sequence and flatten the results, in order.
    ///
    /// Empty inner sequences are skipped without producing an element.
    pub fn flat_map<I, F>(self, f: F) -> Stream<FlatMap<S, F, I>>
    where
        F: FnMut(S::Item) -> I,
        I: IntoIterator,
    {
        Stream::new(
            FlatMap { stage: self.stage, f, inner: None },
            self.unbounded,
        )
    }

    /// Yield at most `n` elements. Bounds an unbounded stream.
    pub fn take(self, n: usize) -> Stream<Take<S>> {
        Stream::new(Take { stage: self.stage, remaining: n }, false)
    }

    /// Discard the first `n` elements, then pass the rest through.
    pub fn skip(self, n: usize) -> Stream<Skip<S>> {
        Stream::new(Skip { stage: self.stage, remaining: n }, self.unbounded)
    }

    /// Yield elements while `pred` holds, then end permanently — even if a
    /// later element would match again. Bounds an unbounded stream.
    pub fn take_while<F>(self, pred: F) -> Stream<TakeWhile<S, F>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        Stream::new(
            TakeWhile { stage: self.stage, pred, done: false },
            false,
        )
    }

    /// Discard elements while `pred` holds, then pass everything through
    /// unconditionally — including elements that would match again. The
    /// predicate runs lazily on the first real pull, not eagerly.
    pub fn skip_while<F>(self, pred: F) -> Stream<SkipWhile<S, F>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        Stream::new(
            SkipWhile { stage: self.stage, pred, skipping: true },
            self.unbounded,
        )
    }

    /// Drop duplicate elements, keeping the first occurrence of each.
    pub fn distinct(self) -> Stream<Distinct<S>>
    where
        S::Item: Eq + Hash + Clone,
    {
        Stream::new(
            Distinct { stage: self.stage, seen: HashSet::new() },
            self.unbounded,
        )
    }

    /// Append `other` after this stream. The result is unbounded if either
    /// input is.
    pub fn chain<S2>(self, other: Stream<S2>) -> Stream<Chain<S, S2>>
    where
        S2: Stage<Item = S::Item>,
    {
        Stream::new(
            Chain { first: self.stage, second: other.stage, first_done: false },
            self.unbounded || other.unbounded,
        )
    }

    /// Pair this stream with `other`, ending when either side ends. The
    /// result is unbounded only if both inputs are.
    pub fn zip<S2>(self, other: Stream<S2>) -> Stream<Zip<S, S2>>
    where
        S2: Stage,
    {
        Stream::new(
            Zip { left: self.stage, right: other.stage },
            self.unbounded && other.unbounded,
        )
    }

    /// [`zip`] with a combining function instead of tuples.
    ///
    /// [`zip`]: Stream::zip
    pub fn zip_with<S2, U, F>(
        self,
        other: Stream<S2>,
        mut f: F,
    ) -> Stream<Map<Zip<S, S2>, impl FnMut((S::Item, S2::Item)) -> U>>
    where
        S2: Stage,
        F: FnMut(S::Item, S2::Item) -> U,
    {
        self.zip(other).map(move |(left, right)| f(left, right))
    }
}

/// The single-pass iteration view of a [`Stream`].
pub struct StreamIter<S> {
    stage: S,
}

impl<S: Stage> Iterator for StreamIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.stage.pull()
    }
}

impl<S: Stage> IntoIterator for Stream<S> {
    type Item = S::Item;
    type IntoIter = StreamIter<S>;

    fn into_iter(self) -> StreamIter<S> {
        StreamIter { stage: self.stage }
    }
}

// Adapter stages

pub struct Map<S, F> {
    stage: S,
    f: F,
}

impl<S, U, F> Stage for Map<S, F>
where
    S: Stage,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Option<U> {
        self.stage.pull().map(&mut self.f)
    }
}

pub struct Filter<S, F> {
    stage: S,
    pred: F,
}

impl<S, F> Stage for Filter<S, F>
where
    S: Stage,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        loop {
            let item = self.stage.pull()?;
            if (self.pred)(&item) {
                return Some(item);
            }
        }
    }
}

pub struct FilterMap<S, F> {
    stage: S,
    f: F,
}

impl<S, U, F> Stage for FilterMap<S, F>
where
    S: Stage,
    F: FnMut(S::Item) -> Option<U>,
{
    type Item = U;

    fn pull(&mut self) -> Option<U> {
        loop {
            let item = self.stage.pull()?;
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
    }
}

pub struct FlatMap<S, F, I: IntoIterator> {
    stage: S,
    f: F,
    inner: Option<I::IntoIter>,
}

impl<S, F, I> Stage for FlatMap<S, F, I>
where
    S: Stage,
    F: FnMut(S::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            let outer = self.stage.pull()?;
            self.inner = Some((self.f)(outer).into_iter());
        }
    }
}

pub struct Take<S> {
    stage: S,
    remaining: usize,
}

impl<S: Stage> Stage for Take<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.stage.pull()?;
        self.remaining -= 1;
        Some(item)
    }
}

pub struct Skip<S> {
    stage: S,
    remaining: usize,
}

impl<S: Stage> Stage for Skip<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        while self.remaining > 0 {
            self.stage.pull()?;
            self.remaining -= 1;
        }
        self.stage.pull()
    }
}

pub struct TakeWhile<S, F> {
    stage: S,
    pred: F,
    done: bool,
}

impl<S, F> Stage for TakeWhile<S, F>
where
    S: Stage,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.stage.pull() {
            Some(item) if (self.pred)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

pub struct SkipWhile<S, F> {
    stage: S,
    pred: F,
    skipping: bool,
}

impl<S, F> Stage for SkipWhile<S, F>
where
    S: Stage,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        while self.skipping {
            let item = self.stage.pull()?;
            if !(self.pred)(&item) {
                self.skipping = false;
                return Some(item);
            }
        }
        self.stage.pull()
    }
}

pub struct Distinct<S: Stage> {
    stage: S,
    seen: HashSet<S::Item>,
}

impl<S> Stage for Distinct<S>
where
    S: Stage,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        loop {
            let item = self.stage.pull()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }
}

pub struct Chain<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> Stage for Chain<A, B>
where
    A: Stage,
    B: Stage<Item = A::Item>,
{
    type Item = A::Item;

    fn pull(&mut self) -> Option<A::Item> {
        if !self.first_done {
            if let Some(item) = self.first.pull() {
                return Some(item);
            }
            self.first_done = true;
        }
        self.second.pull()
    }
}

pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Stage for Zip<A, B>
where
    A: Stage,
    B: Stage,
{
    type Item = (A::Item, B::Item);

    fn pull(&mut self) -> Option<(A::Item, B::Item)> {
        let left = self.left.pull()?;
        let right = self.right.pull()?;
        Some((left, right))
    }
}

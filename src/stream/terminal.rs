//! Terminal operations: consumers that drain the pipeline into a scalar,
//! plus the forcing-but-chainable `reversed`/`sorted` family.
//!
//! Every terminal takes the stream by value; a consumed handle cannot be
//! pulled again. Operations that must see the whole sequence check the
//! unbounded flag before the first pull and fail with
//! [`StreamError::UnboundedStream`] instead of looping forever.
//!
//! [`StreamError::UnboundedStream`]: crate::error::StreamError::UnboundedStream

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::Display;
use std::iter::Sum;

use itertools::Itertools;

use super::constructors::{from_iter, Iter};
use super::core::{Stage, Stream};
use crate::error::{StreamError, StreamResult};

impl<S: Stage> Stream<S> {
    /// Count the remaining elements. Requires a bounded stream.
    pub fn count(mut self) -> StreamResult<usize> {
        self.require_bounded("count")?;
        let mut n = 0;
        while self.stage.pull().is_some() {
            n += 1;
        }
        Ok(n)
    }

    /// Count the elements matching `pred`. Requires a bounded stream.
    pub fn count_where<F>(mut self, mut pred: F) -> StreamResult<usize>
    where
        F: FnMut(&S::Item) -> bool,
    {
        self.require_bounded("count_where")?;
        let mut n = 0;
        while let Some(item) = self.stage.pull() {
            if pred(&item) {
                n += 1;
            }
        }
        Ok(n)
    }

    /// The first element, or `None` for an empty stream.
    ///
    /// Pulls at most one element, so unbounded streams are fine.
    pub fn first(mut self) -> Option<S::Item> {
        self.stage.pull()
    }

    /// The first element matching `pred`, or `None` if nothing matches.
    ///
    /// Searching an infinite stream that never matches will not return;
    /// bound the stream first if that is a possibility.
    pub fn first_where<F>(mut self, mut pred: F) -> Option<S::Item>
    where
        F: FnMut(&S::Item) -> bool,
    {
        while let Some(item) = self.stage.pull() {
            if pred(&item) {
                return Some(item);
            }
        }
        None
    }

    /// The last element, or `None` for an empty stream. Requires a
    /// bounded stream.
    pub fn last(mut self) -> StreamResult<Option<S::Item>> {
        self.require_bounded("last")?;
        let mut last = None;
        while let Some(item) = self.stage.pull() {
            last = Some(item);
        }
        Ok(last)
    }

    /// The last element matching `pred`. Requires a bounded stream.
    pub fn last_where<F>(mut self, mut pred: F) -> StreamResult<Option<S::Item>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        self.require_bounded("last_where")?;
        let mut last = None;
        while let Some(item) = self.stage.pull() {
            if pred(&item) {
                last = Some(item);
            }
        }
        Ok(last)
    }

    /// The sole element of the stream.
    ///
    /// Returns `Ok(None)` for an empty stream and
    /// [`StreamError::SingleValue`] if a second element exists — one
    /// element past the first is always pulled to check. Requires a
    /// bounded stream.
    ///
    /// [`StreamError::SingleValue`]: crate::error::StreamError::SingleValue
    pub fn single(mut self) -> StreamResult<Option<S::Item>> {
        self.require_bounded("single")?;
        let value = self.stage.pull();
        if value.is_some() && self.stage.pull().is_some() {
            return Err(StreamError::SingleValue);
        }
        Ok(value)
    }

    /// The sole element matching `pred`.
    ///
    /// Like [`first_where`], the search itself is the terminating
    /// condition, so no up-front boundedness check is made.
    ///
    /// [`first_where`]: Stream::first_where
    pub fn single_where<F>(mut self, mut pred: F) -> StreamResult<Option<S::Item>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        let mut found = None;
        while let Some(item) = self.stage.pull() {
            if pred(&item) {
                if found.is_some() {
                    return Err(StreamError::SingleValue);
                }
                found = Some(item);
            }
        }
        Ok(found)
    }

    /// Whether any element matches `pred`. Short-circuits on the first
    /// match.
    pub fn any_match<F>(mut self, mut pred: F) -> bool
    where
        F: FnMut(&S::Item) -> bool,
    {
        while let Some(item) = self.stage.pull() {
            if pred(&item) {
                return true;
            }
        }
        false
    }

    /// Whether no element matches `pred`.
    pub fn none_match<F>(self, pred: F) -> bool
    where
        F: FnMut(&S::Item) -> bool,
    {
        !self.any_match(pred)
    }

    /// Whether every element matches `pred`. Short-circuits on the first
    /// mismatch.
    pub fn all_match<F>(self, mut pred: F) -> bool
    where
        F: FnMut(&S::Item) -> bool,
    {
        self.none_match(move |item| !pred(item))
    }

    /// Left-fold the stream into `seed`. Requires a bounded stream.
    ///
    /// # Examples
    /// ```
    /// use rivulet::from_iter;
    ///
    /// let total = from_iter([1, 2, 3, 4]).fold(0, |acc, x| acc + x).unwrap();
    /// assert_eq!(total, 10);
    /// ```
    pub fn fold<A, F>(mut self, seed: A, mut f: F) -> StreamResult<A>
    where
        F: FnMut(A, S::Item) -> A,
    {
        self.require_bounded("fold")?;
        let mut acc = seed;
        while let Some(item) = self.stage.pull() {
            acc = f(acc, item);
        }
        Ok(acc)
    }

    /// Seedless fold: the first element seeds the accumulator, and an
    /// empty stream yields `Ok(None)`. Requires a bounded stream.
    pub fn reduce<F>(mut self, mut f: F) -> StreamResult<Option<S::Item>>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        self.require_bounded("reduce")?;
        let mut acc = match self.stage.pull() {
            Some(first) => first,
            None => return Ok(None),
        };
        while let Some(item) = self.stage.pull() {
            acc = f(acc, item);
        }
        Ok(Some(acc))
    }

    /// The smallest element; ties keep the earlier one. Requires a
    /// bounded stream.
    pub fn min(self) -> StreamResult<Option<S::Item>>
    where
        S::Item: Ord,
    {
        self.best("min", |candidate, best| candidate < best)
    }

    /// The smallest element under `cmp`; ties keep the earlier one.
    pub fn min_by<F>(self, mut cmp: F) -> StreamResult<Option<S::Item>>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.best("min_by", move |candidate, best| {
            cmp(candidate, best) == Ordering::Less
        })
    }

    /// The element with the smallest key; ties keep the earlier one.
    pub fn min_by_key<K, F>(self, mut key: F) -> StreamResult<Option<S::Item>>
    where
        K: Ord,
        F: FnMut(&S::Item) -> K,
    {
        self.best("min_by_key", move |candidate, best| key(candidate) < key(best))
    }

    /// The largest element; ties keep the earlier one. Requires a bounded
    /// stream.
    pub fn max(self) -> StreamResult<Option<S::Item>>
    where
        S::Item: Ord,
    {
        self.best("max", |candidate, best| candidate > best)
    }

    /// The largest element under `cmp`; ties keep the earlier one.
    pub fn max_by<F>(self, mut cmp: F) -> StreamResult<Option<S::Item>>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.best("max_by", move |candidate, best| {
            cmp(candidate, best) == Ordering::Greater
        })
    }

    /// The element with the largest key; ties keep the earlier one.
    pub fn max_by_key<K, F>(self, mut key: F) -> StreamResult<Option<S::Item>>
    where
        K: Ord,
        F: FnMut(&S::Item) -> K,
    {
        self.best("max_by_key", move |candidate, best| key(candidate) > key(best))
    }

    // Fold that replaces the accumulator only on strict improvement, so
    // equal elements keep the earliest.
    fn best<F>(mut self, operation: &'static str, mut improves: F) -> StreamResult<Option<S::Item>>
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        self.require_bounded(operation)?;
        let mut best = match self.stage.pull() {
            Some(first) => first,
            None => return Ok(None),
        };
        while let Some(item) = self.stage.pull() {
            if improves(&item, &best) {
                best = item;
            }
        }
        Ok(Some(best))
    }

    /// Sum the elements. Requires a bounded stream.
    pub fn sum<A>(self) -> StreamResult<A>
    where
        A: Sum<S::Item>,
    {
        self.require_bounded("sum")?;
        Ok(self.into_iter().sum())
    }

    /// Concatenate the elements into a `String`, separated by
    /// `separator`. An empty stream yields an empty string. Requires a
    /// bounded stream.
    ///
    /// # Examples
    /// ```
    /// use rivulet::from_iter;
    ///
    /// let csv = from_iter([56, 3, 23]).join(", ").unwrap();
    /// assert_eq!(csv, "56, 3, 23");
    /// ```
    pub fn join(self, separator: &str) -> StreamResult<String>
    where
        S::Item: Display,
    {
        self.require_bounded("join")?;
        Ok(self.into_iter().join(separator))
    }

    /// Invoke `f` on each element for its side effect. Requires a bounded
    /// stream.
    pub fn for_each<F>(mut self, mut f: F) -> StreamResult<()>
    where
        F: FnMut(S::Item),
    {
        self.require_bounded("for_each")?;
        while let Some(item) = self.stage.pull() {
            f(item);
        }
        Ok(())
    }

    /// Reverse the stream.
    ///
    /// Forces execution of the pipeline so far: the elements are drained
    /// into a double-ended buffer in reverse insertion order and a new
    /// bounded stream over that buffer is returned. Requires a bounded
    /// stream.
    pub fn reversed(
        mut self,
    ) -> StreamResult<Stream<Iter<std::collections::vec_deque::IntoIter<S::Item>>>> {
        self.require_bounded("reversed")?;
        let mut buffer = VecDeque::new();
        while let Some(item) = self.stage.pull() {
            buffer.push_front(item);
        }
        Ok(from_iter(buffer))
    }

    /// Sort the stream by natural order.
    ///
    /// Forces execution like [`reversed`]; the sort is stable, so equal
    /// elements keep their relative order. Requires a bounded stream.
    ///
    /// [`reversed`]: Stream::reversed
    pub fn sorted(self) -> StreamResult<Stream<Iter<std::vec::IntoIter<S::Item>>>>
    where
        S::Item: Ord,
    {
        self.require_bounded("sorted")?;
        Ok(from_iter(self.into_iter().sorted()))
    }

    /// Sort the stream with a comparator.
    pub fn sorted_by<F>(self, cmp: F) -> StreamResult<Stream<Iter<std::vec::IntoIter<S::Item>>>>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.require_bounded("sorted_by")?;
        Ok(from_iter(self.into_iter().sorted_by(cmp)))
    }

    /// Sort the stream by the keys extracted with `key`.
    pub fn sorted_by_key<K, F>(
        self,
        key: F,
    ) -> StreamResult<Stream<Iter<std::vec::IntoIter<S::Item>>>>
    where
        K: Ord,
        F: FnMut(&S::Item) -> K,
    {
        self.require_bounded("sorted_by_key")?;
        Ok(from_iter(self.into_iter().sorted_by_key(key)))
    }
}

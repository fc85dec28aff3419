//! Stream constructors: empty, once, from_iter, repeat, generators,
//! seeded iteration, and the range family.
//!
//! Every constructor wraps a source stage and tags the resulting handle
//! with its boundedness: `repeat`, `repeat_with`, and `iterate` are
//! provably infinite and start unbounded; everything else starts bounded.
//! `from_fn` and `successors` are bounded under a caller contract — the
//! supplied function must eventually signal the end of the sequence.

use std::marker::PhantomData;
use std::ops::{Add, Sub};

use num_traits::One;

use super::core::{Stage, Stream};

/// Create an empty stream that is exhausted immediately.
pub fn empty<T>() -> Stream<Empty<T>> {
    Stream::new(Empty { _phantom: PhantomData }, false)
}

/// Emit a single element.
pub fn once<T>(value: T) -> Stream<Once<T>> {
    Stream::new(Once { value: Some(value) }, false)
}

/// Create a stream from anything iterable, moving the elements in.
///
/// This is the workhorse source: owned collections, arrays, and iterator
/// ranges all come in through here.
///
/// # Examples
/// ```
/// use rivulet::from_iter;
///
/// let doubled = from_iter(vec![1, 2, 3])
///     .map(|x| x * 2)
///     .to_vec()
///     .unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn from_iter<I: IntoIterator>(values: I) -> Stream<Iter<I::IntoIter>> {
    Stream::new(Iter { iter: values.into_iter() }, false)
}

/// Create a stream by cloning the elements of a slice.
pub fn from_slice<T: Clone>(values: &[T]) -> Stream<Iter<std::iter::Cloned<std::slice::Iter<'_, T>>>> {
    Stream::new(Iter { iter: values.iter().cloned() }, false)
}

/// Stream a slice by reference, yielding `&T`.
///
/// The stream borrows `values` and cannot outlive it; this is the
/// explicit opt-in for streaming without moving or cloning the source.
pub fn from_ref<T>(values: &[T]) -> Stream<Iter<std::slice::Iter<'_, T>>> {
    Stream::new(Iter { iter: values.iter() }, false)
}

/// Repeat a value indefinitely. The stream is unbounded.
pub fn repeat<T: Clone>(value: T) -> Stream<Repeat<T>> {
    Stream::new(Repeat { value }, true)
}

/// Create an infinite stream by calling `f` for each element.
///
/// # Examples
/// ```
/// use rivulet::repeat_with;
///
/// let mut n = 0;
/// let squares = repeat_with(move || {
///     n += 1;
///     n * n
/// });
/// let result = squares.take_while(|x| *x < 50).to_vec().unwrap();
/// assert_eq!(result, vec![1, 4, 9, 16, 25, 36, 49]);
/// ```
pub fn repeat_with<T, F>(f: F) -> Stream<RepeatWith<F>>
where
    F: FnMut() -> T,
{
    Stream::new(RepeatWith { f }, true)
}

/// Create a finite stream by calling `f` until it returns `None`.
///
/// The stream is treated as bounded: the caller guarantees that `f`
/// eventually ends the sequence. Once it has, the stage stays exhausted
/// even if `f` would produce values again.
pub fn from_fn<T, F>(f: F) -> Stream<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    Stream::new(FromFn { f, done: false }, false)
}

/// Create an infinite stream `seed, f(seed), f(f(seed)), …`.
///
/// # Examples
/// ```
/// use rivulet::iterate;
///
/// let powers = iterate(5, |x| x + x).take(5).to_vec().unwrap();
/// assert_eq!(powers, vec![5, 10, 20, 40, 80]);
/// ```
pub fn iterate<T, F>(seed: T, f: F) -> Stream<Iterate<T, F>>
where
    F: FnMut(&T) -> T,
{
    Stream::new(Iterate { current: Some(seed), f }, true)
}

/// Seeded iteration that ends at the first `None`.
///
/// Yields `seed`, then `f(&last)` for as long as it returns `Some`. An
/// empty seed produces an empty stream. Bounded under the caller contract
/// that `f` eventually returns `None`.
pub fn successors<T, F>(seed: Option<T>, f: F) -> Stream<Successors<T, F>>
where
    F: FnMut(&T) -> Option<T>,
{
    Stream::new(Successors { current: seed, f }, false)
}

/// The elements from `begin` up to, but not including, `end`.
///
/// `range(50, 40)` is empty: production stops as soon as an element falls
/// outside `[begin, end)`.
///
/// # Examples
/// ```
/// use rivulet::range;
///
/// assert_eq!(range(15, 20).to_vec().unwrap(), vec![15, 16, 17, 18, 19]);
/// assert_eq!(range(50, 40).to_vec().unwrap(), Vec::<i32>::new());
/// ```
pub fn range<T>(begin: T, end: T) -> Stream<Range<T, impl FnMut(T) -> T, fn(&T, &T) -> bool>>
where
    T: PartialOrd + Clone + Add<Output = T> + One,
{
    let cmp: fn(&T, &T) -> bool = lt;
    range_with(begin, end, |value| value + T::one(), cmp)
}

/// [`range`] with an explicit additive step.
pub fn range_step<T>(
    begin: T,
    end: T,
    step: T,
) -> Stream<Range<T, impl FnMut(T) -> T, fn(&T, &T) -> bool>>
where
    T: PartialOrd + Clone + Add<Output = T>,
{
    let cmp: fn(&T, &T) -> bool = lt;
    range_with(begin, end, move |value| value + step.clone(), cmp)
}

/// [`range`] with an arbitrary successor function.
pub fn range_by<T, F>(begin: T, end: T, step: F) -> Stream<Range<T, F, fn(&T, &T) -> bool>>
where
    T: PartialOrd + Clone,
    F: FnMut(T) -> T,
{
    let cmp: fn(&T, &T) -> bool = lt;
    range_with(begin, end, step, cmp)
}

/// The elements from `begin` down to, but not including, `end`.
pub fn range_desc<T>(begin: T, end: T) -> Stream<Range<T, impl FnMut(T) -> T, fn(&T, &T) -> bool>>
where
    T: PartialOrd + Clone + Sub<Output = T> + One,
{
    let cmp: fn(&T, &T) -> bool = gt;
    range_with(begin, end, |value| value - T::one(), cmp)
}

/// [`range_desc`] with an arbitrary successor function.
pub fn range_desc_by<T, F>(begin: T, end: T, step: F) -> Stream<Range<T, F, fn(&T, &T) -> bool>>
where
    T: PartialOrd + Clone,
    F: FnMut(T) -> T,
{
    let cmp: fn(&T, &T) -> bool = gt;
    range_with(begin, end, step, cmp)
}

/// The range kernel: an element is yielded while
/// `cmp(element, end) && !cmp(element, begin)`, where `cmp` answers "is
/// the left value strictly before the right one".
pub fn range_with<T, F, C>(begin: T, end: T, step: F, cmp: C) -> Stream<Range<T, F, C>>
where
    T: Clone,
    F: FnMut(T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    Stream::new(
        Range { next: Some(begin.clone()), begin, end, step, cmp },
        false,
    )
}

fn lt<T: PartialOrd>(left: &T, right: &T) -> bool {
    left < right
}

fn gt<T: PartialOrd>(left: &T, right: &T) -> bool {
    left > right
}

// Source stages

pub struct Empty<T> {
    _phantom: PhantomData<T>,
}

impl<T> Stage for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        None
    }
}

pub struct Once<T> {
    value: Option<T>,
}

impl<T> Stage for Once<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.value.take()
    }
}

pub struct Iter<I> {
    pub(crate) iter: I,
}

impl<I: Iterator> Stage for Iter<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

pub struct Repeat<T> {
    value: T,
}

impl<T: Clone> Stage for Repeat<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

pub struct RepeatWith<F> {
    f: F,
}

impl<T, F> Stage for RepeatWith<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        Some((self.f)())
    }
}

pub struct FromFn<F> {
    f: F,
    done: bool,
}

impl<T, F> Stage for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let value = (self.f)();
        if value.is_none() {
            self.done = true;
        }
        value
    }
}

pub struct Iterate<T, F> {
    current: Option<T>,
    f: F,
}

impl<T, F> Stage for Iterate<T, F>
where
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let value = self.current.take()?;
        self.current = Some((self.f)(&value));
        Some(value)
    }
}

pub struct Successors<T, F> {
    current: Option<T>,
    f: F,
}

impl<T, F> Stage for Successors<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let value = self.current.take()?;
        self.current = (self.f)(&value);
        Some(value)
    }
}

pub struct Range<T, F, C> {
    begin: T,
    end: T,
    next: Option<T>,
    step: F,
    cmp: C,
}

impl<T, F, C> Stage for Range<T, F, C>
where
    T: Clone,
    F: FnMut(T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let value = self.next.take()?;
        if !(self.cmp)(&value, &self.end) || (self.cmp)(&value, &self.begin) {
            return None;
        }
        self.next = Some((self.step)(value.clone()));
        Some(value)
    }
}

//! Lazy result streams.
//!
//! A stream is either exhausted, a ready answer followed by more, or a
//! suspended computation. Merging swaps the operands whenever the left
//! stream is suspended, which keeps answers from an infinite branch from
//! starving the other branch.
//!
//! Ready prefixes are walked with loops rather than recursion, so a stream
//! may hold any number of materialized answers.

use std::ops::Deref;
use std::sync::Arc;

pub enum Stream<T> {
    Empty,
    Pair(T, Rest<T>),
    Suspension(Box<dyn FnOnce() -> Stream<T>>),
}

/// The remainder of a stream after a ready answer.
///
/// Dropping it unlinks the chain one cell at a time.
pub struct Rest<T>(Box<Stream<T>>);

impl<T> Rest<T> {
    fn new(stream: Stream<T>) -> Self {
        Rest(Box::new(stream))
    }

    /// Take the remaining stream out of its cell.
    pub fn into_stream(mut self) -> Stream<T> {
        std::mem::replace(&mut *self.0, Stream::Empty)
    }
}

impl<T> Deref for Rest<T> {
    type Target = Stream<T>;
    fn deref(&self) -> &Stream<T> {
        &self.0
    }
}

impl<T> Drop for Rest<T> {
    fn drop(&mut self) {
        let mut next = std::mem::replace(&mut *self.0, Stream::Empty);
        while let Stream::Pair(_, mut rest) = next {
            next = std::mem::replace(&mut *rest.0, Stream::Empty);
        }
    }
}

/// Rebuild `ready` in front of `tail`.
fn prepend<T>(ready: Vec<T>, tail: Stream<T>) -> Stream<T> {
    ready
        .into_iter()
        .rev()
        .fold(tail, |d, a| Stream::cons(a, d))
}

/// Split a stream into its ready answers and whatever follows them.
fn split_ready<T>(mut s: Stream<T>) -> (Vec<T>, Option<Box<dyn FnOnce() -> Stream<T>>>) {
    let mut ready = vec![];
    loop {
        match s {
            Stream::Empty => return (ready, None),
            Stream::Pair(a, rest) => {
                ready.push(a);
                s = rest.into_stream();
            }
            Stream::Suspension(sup) => return (ready, Some(sup)),
        }
    }
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Pair(a, Rest::new(d))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspension(Box::new(sup))
    }

    pub fn from_iter(iter: impl IntoIterator<Item = T>) -> Self {
        prepend(iter.into_iter().collect(), Stream::Empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Number of ready answers, or `None` if the stream ends in a suspension.
    pub fn len(&self) -> Option<usize> {
        let mut n = 0;
        let mut cursor = self;
        loop {
            match cursor {
                Stream::Empty => return Some(n),
                Stream::Pair(_, rest) => {
                    n += 1;
                    cursor = &**rest;
                }
                Stream::Suspension(_) => return None,
            }
        }
    }

    /// Force at most `n` answers.
    pub fn take_inf(self, n: usize) -> Stream<T> {
        Stream::from_iter(self.into_iter().take(n))
    }

    /// Force all answers. Does not return if there are infinitely many.
    pub fn take_inf_all(self) -> Stream<T> {
        Stream::from_iter(self)
    }

    /// Force all answers into a vector.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: 'static> Stream<T> {
    /// Merge two streams. Ready answers of `s` come first; once `s` is
    /// suspended, `t` gets to run before `s` is resumed.
    pub fn append_inf(s: Stream<T>, t: Stream<T>) -> Self {
        let (ready, pending) = split_ready(s);
        let tail = match pending {
            None => t,
            Some(sup) => Stream::suspension(move || Stream::append_inf(t, sup())),
        };
        prepend(ready, tail)
    }

    /// Apply `g` to every answer and merge the resulting streams.
    pub fn append_map_inf(self, g: Arc<dyn Fn(T) -> Self>) -> Self {
        let (ready, pending) = split_ready(self);
        let tail = match pending {
            None => Stream::Empty,
            Some(sup) => {
                let g = g.clone();
                Stream::suspension(move || sup().append_map_inf(g))
            }
        };
        ready
            .into_iter()
            .rev()
            .fold(tail, |merged, a| Stream::append_inf(g(a), merged))
    }

    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        let (ready, pending) = split_ready(self);
        let mapped: Vec<U> = ready.into_iter().map(&f).collect();
        let tail = match pending {
            None => Stream::Empty,
            Some(sup) => Stream::suspension(move || sup().map(f)),
        };
        prepend(mapped, tail)
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    /// Streams compare equal when they are fully ready and hold the same
    /// answers. A suspension equals nothing.
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            match (left, right) {
                (Stream::Empty, Stream::Empty) => return true,
                (Stream::Pair(a, x), Stream::Pair(b, y)) if a == b => {
                    left = &**x;
                    right = &**y;
                }
                _ => return false,
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(")?;
        let mut cursor = self;
        let mut sep = "";
        loop {
            match cursor {
                Stream::Empty => break,
                Stream::Pair(x, rest) => {
                    write!(f, "{}{:?}", sep, x)?;
                    cursor = &**rest;
                }
                Stream::Suspension(_) => {
                    write!(f, "{}...", sep)?;
                    break;
                }
            }
            sep = " ";
        }
        write!(f, ")")
    }
}

pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.0, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Pair(a, rest) => {
                    self.0 = rest.into_stream();
                    return Some(a);
                }
                Stream::Suspension(sup) => self.0 = sup(),
            }
        }
    }
}

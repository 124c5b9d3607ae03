//! Iterator plumbing for [`Outcome`].
//!
//! An `Outcome` iterates like an `Option` over its success side: one item
//! when successful, none when failed. `FromIterator` provides the fail-fast
//! `collect` into `Outcome<Vec<T>, E>`, mirroring std `Result`.

use crate::alloc_type::Vec;
use crate::outcome::Outcome;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut().into_value(),
        }
    }
}

/// Fail-fast collection: stops at the first `Failure` encountered.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::success(vec![1, 2]));
///
/// let broken: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(broken, Outcome::failure("a"));
/// ```
impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let iter = iter.into_iter();
        let mut values = Vec::with_capacity(iter.size_hint().0);
        for outcome in iter {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => return Outcome::Failure(error),
            }
        }
        Outcome::Success(values)
    }
}

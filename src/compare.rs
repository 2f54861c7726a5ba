//! Three-way comparators used by [`Ordered`](crate::Ordered) and
//! [`Heap`](crate::Heap).

use std::cmp::Ordering;

/// A three-way comparison between two elements.
///
/// It must be a strict weak ordering for sorting, searching and heap
/// operations to behave. Any `Fn(&T, &T) -> Ordering` closure is a
/// `Compare<T>`.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
    where F: Fn(&T, &T) -> Ordering
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares elements by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Swaps the operands of the wrapped comparator, reversing the order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Inverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Inverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

//! A `RingList` paired with a comparator.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::compare::{Compare, Inverse};
use crate::heap::Heap;
use crate::list::RingList;
use crate::sort::{heap_sort, stable_sort, Sortable};

/// A view of a `RingList` whose elements are ordered by a [`Compare`]
/// implementation.
///
/// `L` is the storage: an owned `RingList<T>` (the default) or a
/// `&mut RingList<T>` borrowed through [`RingList::ordered`]. The view
/// dereferences to the list, so every list operation stays available.
///
/// # Examples
///
/// ```
/// use ringlist::{Natural, RingList};
///
/// let mut list: RingList<_> = vec![9, 2, 3].into_iter().collect();
/// let mut view = list.ordered(Natural);
/// view.sort();
/// assert_eq!(view.find(&3), Ok(1));
/// assert_eq!(view.find(&4), Err(2));
///
/// view.invert().sort();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 3, 2]);
/// ```
pub struct Ordered<T, C, L = RingList<T>> {
    list: L,
    cmp: C,
    marker: PhantomData<fn() -> T>,
}

impl<T: Default, C: Compare<T>, L: BorrowMut<RingList<T>>> Ordered<T, C, L> {
    pub fn new(list: L, cmp: C) -> Ordered<T, C, L> {
        Ordered {
            list,
            cmp,
            marker: PhantomData,
        }
    }

    /// Returns the storage, dropping the comparator.
    pub fn into_inner(self) -> L {
        self.list
    }

    #[inline]
    pub fn list(&self) -> &RingList<T> {
        self.list.borrow()
    }

    #[inline]
    pub fn list_mut(&mut self) -> &mut RingList<T> {
        self.list.borrow_mut()
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Whether the element at wrapping position `i` orders before the one at
    /// `j`. Always false on an empty list.
    pub fn less(&self, i: isize, j: isize) -> bool {
        self.compare_at(i, j) == Ordering::Less
    }

    /// Compares the elements at wrapping positions `i` and `j`. An empty
    /// list compares `Equal`.
    pub fn compare_at(&self, i: isize, j: isize) -> Ordering {
        let list = self.list();
        match (list.at(i), list.at(j)) {
            (Some(a), Some(b)) => self.cmp.compare(a, b),
            _ => Ordering::Equal,
        }
    }

    /// Sorts the list in ascending order. Equal elements may be reordered.
    pub fn sort(&mut self) {
        let cmp = &self.cmp;
        let list: &mut RingList<T> = self.list.borrow_mut();
        if list.wraps() {
            heap_sort(&mut ByPosition { list, cmp });
        } else {
            let (run, _) = list.as_mut_slices();
            run.sort_unstable_by(|a, b| cmp.compare(a, b));
        }
    }

    /// Sorts the list in ascending order, keeping equal elements in their
    /// original order.
    pub fn sort_stable(&mut self) {
        let cmp = &self.cmp;
        let list: &mut RingList<T> = self.list.borrow_mut();
        if list.wraps() {
            stable_sort(&mut ByPosition { list, cmp });
        } else {
            let (run, _) = list.as_mut_slices();
            run.sort_by(|a, b| cmp.compare(a, b));
        }
    }

    pub fn is_sorted(&self) -> bool {
        let list = self.list();
        let ordered = |a: &T, b: &T| self.cmp.compare(b, a) != Ordering::Less;
        if list.wraps() {
            list.iter().zip(list.iter().skip(1)).all(|(a, b)| ordered(a, b))
        } else {
            let (run, _) = list.as_slices();
            run.windows(2).all(|w| ordered(&w[0], &w[1]))
        }
    }

    /// Binary searches a sorted list for `value`.
    ///
    /// Returns `Ok` with the smallest position holding an element equal to
    /// `value`, or `Err` with the position where `value` would be inserted to
    /// keep the list sorted.
    pub fn find(&self, value: &T) -> Result<usize, usize> {
        let (first, second) = self.list().as_slices();
        let before = |x: &T| self.cmp.compare(x, value) == Ordering::Less;

        let mut at = first.partition_point(|x| before(x));
        let candidate = if at < first.len() {
            first.get(at)
        } else {
            let k = second.partition_point(|x| before(x));
            at += k;
            second.get(k)
        };
        match candidate {
            Some(x) if self.cmp.compare(x, value) == Ordering::Equal => Ok(at),
            _ => Err(at),
        }
    }

    /// Whether a sorted list holds an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_ok()
    }

    /// Returns the same view with the order reversed.
    pub fn invert(self) -> Ordered<T, Inverse<C>, L> {
        Ordered::new(self.list, Inverse(self.cmp))
    }

    /// Turns the view into a heap, establishing the heap order.
    pub fn heap(self) -> Heap<T, C, L> {
        Heap::new(self.list, self.cmp)
    }
}

impl<T: Default> RingList<T> {
    /// Borrows the list as an [`Ordered`] view under `cmp`.
    pub fn ordered<C: Compare<T>>(&mut self, cmp: C) -> Ordered<T, C, &mut RingList<T>> {
        Ordered::new(self, cmp)
    }
}

impl<T: Default, C, L: Borrow<RingList<T>>> Deref for Ordered<T, C, L> {
    type Target = RingList<T>;

    #[inline]
    fn deref(&self) -> &RingList<T> {
        self.list.borrow()
    }
}

impl<T: Default, C, L: BorrowMut<RingList<T>>> DerefMut for Ordered<T, C, L> {
    #[inline]
    fn deref_mut(&mut self) -> &mut RingList<T> {
        self.list.borrow_mut()
    }
}

impl<T, C, L> fmt::Debug for Ordered<T, C, L>
    where T: Default + fmt::Debug,
          L: Borrow<RingList<T>>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list: &RingList<T> = self.list.borrow();
        fmt::Debug::fmt(list, f)
    }
}

/// Drives the index-based sorts through logical positions.
struct ByPosition<'a, T: 'a, C: 'a> {
    list: &'a mut RingList<T>,
    cmp: &'a C,
}

impl<'a, T: Default, C: Compare<T>> Sortable for ByPosition<'a, T, C> {
    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.cmp.compare(&self.list[i], &self.list[j]) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.list.swap_in_range(i, j);
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::borrow::Borrow;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Ordered;
    use crate::compare::Compare;
    use crate::list::RingList;

    impl<T, C, L> Serialize for Ordered<T, C, L>
        where T: Default + Serialize,
              L: Borrow<RingList<T>>
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let list: &RingList<T> = self.list.borrow();
            list.serialize(serializer)
        }
    }

    impl<'de, T, C> Deserialize<'de> for Ordered<T, C>
        where T: Default + Deserialize<'de>,
              C: Compare<T> + Default
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let list = RingList::deserialize(deserializer)?;
            Ok(Ordered::new(list, C::default()))
        }
    }
}

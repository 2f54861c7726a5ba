//! A binary heap stored in a `RingList`.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::compare::{Compare, Inverse};
use crate::error::Result;
use crate::list::RingList;
use crate::ordered::Ordered;

/// A binary min-heap under a [`Compare`] implementation: the element at
/// position 0 orders before every other one.
///
/// The element at position `i` is the parent of those at `2i + 1` and
/// `2i + 2`. New elements enter at the front of the list, so a heap built
/// from a list of `n` elements uses no room beyond it.
///
/// Like [`Ordered`], it works on an owned list or on a `&mut RingList<T>`
/// borrowed through [`RingList::heap`]. It only dereferences immutably; use
/// [`list_mut`](Heap::list_mut) followed by [`init`](Heap::init) or
/// [`fix`](Heap::fix) to edit the elements directly.
///
/// # Examples
///
/// ```
/// use ringlist::{Natural, RingList};
///
/// let mut list: RingList<_> = vec![5, 3, 8, 9].into_iter().collect();
/// assert_eq!(list.heap(Natural).pop(), Some(3));
///
/// let mut heap = list.heap(Natural).invert();
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.pop(), Some(8));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), None);
/// ```
pub struct Heap<T, C, L = RingList<T>> {
    ordered: Ordered<T, C, L>,
}

impl<T: Default, C: Compare<T>, L: BorrowMut<RingList<T>>> Heap<T, C, L> {
    /// Creates a heap over `list`, reordering its elements as needed.
    pub fn new(list: L, cmp: C) -> Heap<T, C, L> {
        let mut heap = Heap { ordered: Ordered::new(list, cmp) };
        heap.init();
        heap
    }

    pub fn into_inner(self) -> L {
        self.ordered.into_inner()
    }

    #[inline]
    pub fn list(&self) -> &RingList<T> {
        self.ordered.list()
    }

    /// Mutable access to the elements. Call `init` or `fix` afterwards to
    /// restore the heap order.
    #[inline]
    pub fn list_mut(&mut self) -> &mut RingList<T> {
        self.ordered.list_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// The least element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list().get(0)
    }

    /// Establishes the heap order over the whole list in `O(n)`.
    pub fn init(&mut self) {
        let n = self.len();
        for i in (0..n / 2).rev() {
            self.down(i, n);
        }
    }

    /// Adds `value` to the heap.
    ///
    /// Fails only if the allocation policy cannot make room for it.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.list_mut().push_front(value)?;
        let last = self.len() - 1;
        self.up(last);
        Ok(())
    }

    /// Removes and returns the least element, or `None` if the heap is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.list_mut().swap_in_range(0, last);
        self.down(0, last);
        self.list_mut().pop_front()
    }

    /// Removes and returns the element at position `i`.
    pub fn remove(&mut self, i: usize) -> Result<T> {
        self.list().element_bound(i)?;
        let last = self.len() - 1;
        if i != last {
            self.list_mut().swap_in_range(i, last);
            if !self.down(i, last) {
                self.up(i);
            }
        }
        self.list_mut().remove(last)
    }

    /// Restores the heap order after the element at position `i` changed.
    pub fn fix(&mut self, i: usize) -> Result<()> {
        self.list().element_bound(i)?;
        let n = self.len();
        if !self.down(i, n) {
            self.up(i);
        }
        Ok(())
    }

    /// Returns a max-heap over the same elements.
    pub fn invert(self) -> Heap<T, Inverse<C>, L> {
        self.ordered.invert().heap()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        let list = self.list();
        self.ordered.comparator().compare(&list[i], &list[j]) == Ordering::Less
    }

    fn up(&mut self, mut j: usize) {
        while j > 0 {
            let parent = (j - 1) / 2;
            if !self.less(j, parent) {
                break;
            }
            self.list_mut().swap_in_range(parent, j);
            j = parent;
        }
    }

    /// Sifts the element at `i0` down within `[0, n)`. Returns whether it
    /// moved.
    fn down(&mut self, i0: usize, n: usize) -> bool {
        let mut i = i0;
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            if left + 1 < n && self.less(left + 1, left) {
                child = left + 1;
            }
            if !self.less(child, i) {
                break;
            }
            self.list_mut().swap_in_range(i, child);
            i = child;
        }
        i > i0
    }
}

impl<T: Default> RingList<T> {
    /// Borrows the list as a [`Heap`] under `cmp`, reordering the elements
    /// into heap order.
    pub fn heap<C: Compare<T>>(&mut self, cmp: C) -> Heap<T, C, &mut RingList<T>> {
        Heap::new(self, cmp)
    }
}

impl<T: Default, C, L: Borrow<RingList<T>>> Deref for Heap<T, C, L> {
    type Target = RingList<T>;

    #[inline]
    fn deref(&self) -> &RingList<T> {
        &self.ordered
    }
}

impl<T, C, L> fmt::Debug for Heap<T, C, L>
    where T: Default + fmt::Debug,
          L: Borrow<RingList<T>>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.ordered, f)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::borrow::{Borrow, BorrowMut};

    use log::debug;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Heap;
    use crate::compare::Compare;
    use crate::list::RingList;

    impl<T: Default, C: Compare<T>, L: BorrowMut<RingList<T>>> Heap<T, C, L> {
        /// Replaces the elements with a sequence read from `deserializer`,
        /// then restores the heap order.
        ///
        /// The order is restored even if decoding fails, so the elements
        /// read before the failure form a valid heap.
        pub fn decode<'de, D>(&mut self, deserializer: D) -> Result<(), D::Error>
            where D: Deserializer<'de>,
                  T: Deserialize<'de>
        {
            let result = self.list_mut().decode(deserializer);
            if result.is_err() {
                debug!("ringlist: heap decode failed, keeping {} elements", self.len());
            }
            self.init();
            result
        }
    }

    impl<T, C, L> Serialize for Heap<T, C, L>
        where T: Default + Serialize,
              L: Borrow<RingList<T>>
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.ordered.serialize(serializer)
        }
    }

    impl<'de, T, C> Deserialize<'de> for Heap<T, C>
        where T: Default + Deserialize<'de>,
              C: Compare<T> + Default
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let list = RingList::deserialize(deserializer)?;
            Ok(Heap::new(list, C::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;
    use proptest::prelude::*;

    fn wrapped(cap: usize, pad: usize, values: &[i32]) -> RingList<i32> {
        let mut list = RingList::with_capacity(cap);
        list.push_front(0).unwrap();
        for _ in 0..pad {
            list.push_front(0).unwrap();
            list.pop_back();
        }
        list.pop_back();
        list.append(values.iter().copied()).unwrap();
        list
    }

    fn is_heap<C: Compare<i32>>(list: &RingList<i32>, cmp: &C) -> bool {
        (1..list.len()).all(|i| cmp.compare(&list[(i - 1) / 2], &list[i]) != Ordering::Greater)
    }

    fn drain<C: Compare<i32>, L: BorrowMut<RingList<i32>>>(heap: &mut Heap<i32, C, L>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(x) = heap.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn test_init_every_layout() {
        let values = [9, 4, 7, 1, 8, 2, 6];
        for pad in 0..8 {
            let mut list = wrapped(8, pad, &values);
            {
                let heap = list.heap(Natural);
                assert_eq!(heap.peek(), Some(&1));
            }
            assert!(is_heap(&list, &Natural), "pad={}", pad);
        }
    }

    #[test]
    fn test_push_pop() {
        let mut heap: Heap<i32, Natural> = Heap::new(RingList::new(), Natural);
        assert_eq!(heap.pop(), None);
        for x in [5, 3, 8, 9, 1, 3] {
            heap.push(x).unwrap();
            assert!(is_heap(heap.list(), &Natural));
        }
        assert_eq!(heap.len(), 6);
        assert_eq!(drain(&mut heap), vec![1, 3, 3, 5, 8, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_remove() {
        for pad in 0..7 {
            let mut list = wrapped(7, pad, &[1, 5, 2, 6, 7, 3]);
            let mut heap = list.heap(Natural);
            assert_eq!(heap.remove(1), Ok(5));
            assert!(is_heap(heap.list(), &Natural));
            assert_eq!(heap.remove(0), Ok(1));
            assert!(heap.remove(4).is_err());
            assert_eq!(drain(&mut heap), vec![2, 3, 6, 7]);
        }
    }

    #[test]
    fn test_fix() {
        let mut heap = Heap::new(vec![1, 4, 2, 6, 5].into_iter().collect::<RingList<_>>(), Natural);
        heap.list_mut()[3] = 0;
        heap.fix(3).unwrap();
        assert_eq!(heap.peek(), Some(&0));
        assert!(is_heap(heap.list(), &Natural));

        heap.list_mut()[0] = 10;
        heap.fix(0).unwrap();
        assert!(is_heap(heap.list(), &Natural));
        assert!(heap.fix(5).is_err());
        assert_eq!(drain(&mut heap), vec![1, 2, 4, 5, 10]);
    }

    #[test]
    fn test_invert() {
        let heap = Heap::new(vec![5, 3, 8, 9].into_iter().collect::<RingList<_>>(), Natural);
        assert_eq!(heap.peek(), Some(&3));
        let mut heap = heap.invert();
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(drain(&mut heap), vec![9, 8, 5, 3]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decode_restores_order() {
        let mut heap: Heap<i32, Natural> = Heap::new(RingList::new(), Natural);
        let mut de = serde_json::Deserializer::from_str("[7,3,5,1]");
        heap.decode(&mut de).unwrap();
        assert_eq!(heap.peek(), Some(&1));

        let mut de = serde_json::Deserializer::from_str("[8,6,4,\"x\"]");
        assert!(heap.decode(&mut de).is_err());
        assert!(is_heap(heap.list(), &Natural));
        assert_eq!(drain(&mut heap), vec![4, 6, 8]);

        let heap: Heap<i32, Natural> = serde_json::from_str("[3,2,1]").unwrap();
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(serde_json::to_string(&heap).unwrap(), "[1,2,3]");
    }

    proptest! {
        #[test]
        fn pops_in_order(values in prop::collection::vec(-100i32..100, 0..60),
                         pad in 0usize..64) {
            let cap = values.len() + 4;
            let mut list = wrapped(cap, pad % cap, &values);
            let mut heap = list.heap(Natural);
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(drain(&mut heap), expected);
            prop_assert!(heap.is_empty());
        }

        #[test]
        fn pushes_keep_heap_order(values in prop::collection::vec(any::<i32>(), 0..60)) {
            let mut heap = Heap::new(RingList::with_capacity(3), Inverse(Natural));
            for x in values.iter().copied() {
                heap.push(x).unwrap();
            }
            prop_assert!(is_heap(heap.list(), &Inverse(Natural)));
            let mut expected = values.clone();
            expected.sort_by(|a, b| b.cmp(a));
            prop_assert_eq!(drain(&mut heap), expected);
        }
    }
}

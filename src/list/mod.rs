use std::fmt;
use std::iter;
use std::mem;
use std::slice;
use std::sync::Arc;

pub use odds::IndexRange as RangeArgument;

use crate::error::{Error, Result};
use crate::logic::{clear_range, clone_between, self_shift};
use crate::policy::{AllocPolicy, ReleasePolicy};
use crate::utils::{fix, wrap_add, wrap_sub};

#[cfg(feature = "rand")]
use rand::Rng;

mod internal;
mod iterator_impls;
#[cfg(feature = "serde")]
mod serde_impls;
mod trait_impls;

type SharedAlloc<T> = Arc<dyn AllocPolicy<T> + Send + Sync>;
type SharedRelease<T> = Arc<dyn ReleasePolicy<T> + Send + Sync>;

/// `RingList` is a growable list stored in a single ring buffer.
///
/// Elements are addressed by logical position, counted from the **back**
/// (index 0) to the **front** (index `len() - 1`). Both ends accept pushes
/// and pops in `O(1)`, and an insertion, deletion or replacement anywhere
/// moves only the elements on the shorter side of the affected range.
///
/// The buffer is only replaced when an operation needs more room than it
/// has. New buffers come from an [`AllocPolicy`]; the replaced one can be
/// handed to a [`ReleasePolicy`].
///
/// Slots that do not hold an element always hold `T::default()`: removing
/// an element drops it right away.
pub struct RingList<T> {
    buf: Box<[T]>,
    start: usize,
    len: usize,
    alloc: Option<SharedAlloc<T>>,
    release: Option<SharedRelease<T>>,
}

/// `RingList` iterator, from the back to the front.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    first: slice::Iter<'a, T>,
    second: slice::Iter<'a, T>,
}

/// `RingList` mutable iterator, from the back to the front.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    first: slice::IterMut<'a, T>,
    second: slice::IterMut<'a, T>,
}

/// A by-value `RingList` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T: Default> {
    inner: RingList<T>,
}

impl<T: Default> RingList<T> {
    /// Creates an empty `RingList` without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list: RingList<u32> = RingList::new();
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> RingList<T> {
        RingList {
            buf: Box::new([]),
            start: 0,
            len: 0,
            alloc: None,
            release: None,
        }
    }

    /// Creates an empty `RingList` with exactly `capacity` slots.
    ///
    /// Like `Vec::with_capacity`, this panics if the buffer cannot be
    /// allocated. Use [`grow`](RingList::grow) on an empty list to get an
    /// error instead.
    pub fn with_capacity(capacity: usize) -> RingList<T> {
        let buf: Vec<T> = iter::repeat_with(T::default).take(capacity).collect();
        RingList::from_buffer(buf, false)
    }

    /// Creates a `RingList` that takes over `buf` as its backing buffer.
    ///
    /// If `use_values` is true the elements of `buf` become the contents of
    /// the list, in order. Otherwise the list starts empty and the slots are
    /// reset to `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list = RingList::from_buffer(vec![1, 2, 3], true);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.free(), 0);
    ///
    /// let list = RingList::from_buffer(vec![1, 2, 3], false);
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.free(), 3);
    /// ```
    pub fn from_buffer(buf: Vec<T>, use_values: bool) -> RingList<T> {
        let mut buf = buf.into_boxed_slice();
        let len = if use_values {
            buf.len()
        } else {
            let n = buf.len() as isize;
            clear_range(&mut buf, 0, n);
            0
        };
        RingList {
            buf,
            start: 0,
            len,
            alloc: None,
            release: None,
        }
    }

    /// Creates a `RingList` over `buf` whose back element sits at offset
    /// `back` of the buffer and which holds `len` elements. The window may
    /// wrap around the end of the buffer.
    ///
    /// `back` must be lower than `buf.len()` (or zero for an empty buffer),
    /// and `len` at most `buf.len()`. Slots outside the window are reset to
    /// `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list = RingList::from_parts(vec![1, 2, 3, 4, 5], 3, 4).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 5, 1, 2]);
    ///
    /// assert!(RingList::from_parts(vec![1, 2, 3], 3, 0).is_err());
    /// ```
    pub fn from_parts(buf: Vec<T>, back: usize, len: usize) -> Result<RingList<T>> {
        let cap = buf.len();
        if (cap == 0 && back != 0) || (cap != 0 && back >= cap) {
            return Err(Error::InvalidPosition { index: back, len: cap });
        }
        if len > cap {
            return Err(Error::InvalidAmount);
        }

        let mut buf = buf.into_boxed_slice();
        let end = wrap_add(back, len, cap);
        clear_range(&mut buf, end, (cap - len) as isize);
        Ok(RingList {
            buf,
            start: back,
            len,
            alloc: None,
            release: None,
        })
    }

    /// Sets the allocation policy consulted whenever a new buffer is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    /// use ringlist::policy::ExactAlloc;
    ///
    /// let mut list = RingList::new().with_alloc_policy(ExactAlloc);
    /// list.append(vec![1, 2, 3]).unwrap();
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn with_alloc_policy<P>(mut self, policy: P) -> RingList<T>
        where P: AllocPolicy<T> + Send + Sync + 'static
    {
        self.set_alloc_policy(policy);
        self
    }

    /// Sets the release policy that receives buffers the list migrates away
    /// from.
    pub fn with_release_policy<P>(mut self, policy: P) -> RingList<T>
        where P: ReleasePolicy<T> + Send + Sync + 'static
    {
        self.set_release_policy(policy);
        self
    }

    /// Sets both strategies at once.
    pub fn with_policies<A, R>(self, alloc: A, release: R) -> RingList<T>
        where A: AllocPolicy<T> + Send + Sync + 'static,
              R: ReleasePolicy<T> + Send + Sync + 'static
    {
        self.with_alloc_policy(alloc).with_release_policy(release)
    }

    pub fn set_alloc_policy<P>(&mut self, policy: P)
        where P: AllocPolicy<T> + Send + Sync + 'static
    {
        self.alloc = Some(Arc::new(policy));
    }

    pub fn set_release_policy<P>(&mut self, policy: P)
        where P: ReleasePolicy<T> + Send + Sync + 'static
    {
        self.release = Some(Arc::new(policy));
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns how many elements can be added without a new allocation.
    ///
    /// `len() + free() == capacity()` always holds.
    #[inline]
    pub fn free(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Whether the elements cross the end of the backing buffer.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.buf.len() - self.start < self.len
    }

    /// Retrieves the element at position `index`, or `None` if there is no
    /// such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list: RingList<_> = vec![3, 4, 5].into_iter().collect();
    /// assert_eq!(list.get(1), Some(&4));
    /// assert_eq!(list.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.buf[self.phys(index)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.phys(index);
            Some(&mut self.buf[idx])
        } else {
            None
        }
    }

    /// Retrieves an element by a position that wraps the list on either
    /// side: `at(-1)` is the front element and `at(len())` the back one.
    ///
    /// Returns `None` only if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list: RingList<_> = vec![3, 4, 5].into_iter().collect();
    /// assert_eq!(list.at(-1), Some(&5));
    /// assert_eq!(list.at(4), Some(&4));
    /// ```
    #[inline]
    pub fn at(&self, index: isize) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        Some(&self.buf[self.phys(fix(self.len, index))])
    }

    #[inline]
    pub fn at_mut(&mut self, index: isize) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }
        let idx = self.phys(fix(self.len, index));
        Some(&mut self.buf[idx])
    }

    /// The element at position 0.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(0)
    }

    /// The element at position `len() - 1`.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.at(-1)
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.at_mut(-1)
    }

    /// Swaps the elements at positions `i` and `j`.
    ///
    /// Returns `Ok(false)` without doing anything if `i == j`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = vec![3, 4, 5].into_iter().collect();
    /// assert_eq!(list.swap(0, 2), Ok(true));
    /// assert_eq!(list.swap(1, 1), Ok(false));
    /// assert!(list.swap(0, 3).is_err());
    /// assert_eq!(list[0], 5);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) -> Result<bool> {
        self.element_bound(i)?;
        self.element_bound(j)?;
        if i == j {
            return Ok(false);
        }
        self.swap_in_range(i, j);
        Ok(true)
    }

    /// Rotates the list so that the element at position `n` becomes the back
    /// element. `n` may be negative.
    ///
    /// When the buffer is full this only moves the window. Otherwise the
    /// shorter side is moved through the free slots, or, if neither side
    /// fits there, the elements are rotated in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = vec![3, 9, 2].into_iter().collect();
    /// list.rotate(1);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 2, 3]);
    /// list.rotate(-1);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 9, 2]);
    /// ```
    pub fn rotate(&mut self, n: isize) {
        let len = self.len;
        if len == 0 {
            return;
        }
        let lead = fix(len, n);
        if lead == 0 {
            return;
        }

        let cap = self.buf.len();
        if len == cap {
            self.start = self.phys(lead);
            return;
        }

        let trail = len - lead;
        let free = cap - len;
        if lead <= free && (lead <= trail || trail > free) {
            // the leading elements move past the front
            let start = self.start;
            self_shift(&mut self.buf, start, lead, len as isize);
            self.start = wrap_add(start, lead, cap);
        } else if trail <= free {
            // the trailing elements move before the back
            let from = self.phys(lead);
            self_shift(&mut self.buf, from, trail, -(len as isize));
            self.start = wrap_sub(self.start, trail, cap);
        } else {
            self.reverse_range(0, lead);
            self.reverse_range(lead, len);
            self.reverse_range(0, len);
        }
    }

    /// Replaces the elements in `range` with `values`, and returns the new
    /// length of the list.
    ///
    /// This is the primitive every other insertion and deletion is built on.
    /// Only the elements on the shorter side of `range` are moved, unless the
    /// buffer is too small for the result, in which case the list is rebuilt
    /// into a new buffer from the allocation policy.
    ///
    /// Fails with `InvalidRange` if `range` is reversed or reaches past the
    /// end of the list, and with `InvalidAllocation` if the allocation policy
    /// does not deliver enough room. The list is unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.insert(0, vec![3, 1, 2]).unwrap();
    /// assert_eq!(list.replace(1..2, vec![9]), Ok(3));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 9, 2]);
    ///
    /// assert_eq!(list.replace(..2, vec![]), Ok(1));
    /// assert_eq!(list.replace(1.., vec![4, 5]), Ok(3));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 4, 5]);
    /// ```
    pub fn replace<R, I>(&mut self, range: R, values: I) -> Result<usize>
        where R: RangeArgument<usize>,
              I: IntoIterator<Item = T>,
              I::IntoIter: ExactSizeIterator
    {
        let (i, j) = self.range_bound(range)?;
        let values = values.into_iter();
        let inserted = values.len();
        if i == j && inserted == 0 {
            return Ok(self.len);
        }

        let need = (self.len - (j - i))
            .checked_add(inserted)
            .ok_or(Error::InvalidAmount)?;
        if need > self.capacity() {
            self.rebuild(i, j, values, need)?;
        } else {
            self.splice_in_place(i, j, values, inserted);
        }
        Ok(self.len)
    }

    /// Inserts `values` so that the first of them ends up at position
    /// `index`. Returns the new length.
    pub fn insert<I>(&mut self, index: usize, values: I) -> Result<usize>
        where I: IntoIterator<Item = T>,
              I::IntoIter: ExactSizeIterator
    {
        if index > self.len {
            return Err(Error::InvalidPosition { index, len: self.len });
        }
        self.replace(index..index, values)
    }

    /// Removes the elements in `range`. Returns the new length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = (0..6).collect();
    /// assert_eq!(list.delete(1..4), Ok(3));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 4, 5]);
    /// ```
    pub fn delete<R>(&mut self, range: R) -> Result<usize>
        where R: RangeArgument<usize>
    {
        self.replace(range, iter::empty())
    }

    /// Inserts `values` after the front element. Returns the new length.
    pub fn append<I>(&mut self, values: I) -> Result<usize>
        where I: IntoIterator<Item = T>,
              I::IntoIter: ExactSizeIterator
    {
        let len = self.len;
        self.replace(len..len, values)
    }

    /// Adds an element past the front, at position `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push_front(1).unwrap();
    /// list.push_front(2).unwrap();
    /// assert_eq!(list.front(), Some(&2));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) -> Result<()> {
        let len = self.len;
        self.replace(len..len, iter::once(value)).map(drop)
    }

    /// Adds an element before the back, at position 0.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.replace(0..0, iter::once(value)).map(drop)
    }

    /// Removes the front element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        Some(self.take_at(last))
    }

    /// Removes the back element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = vec![1, 2].into_iter().collect();
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        Some(self.take_at(0))
    }

    /// Removes and returns the element at position `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.element_bound(index)?;
        Ok(self.take_at(index))
    }

    fn take_at(&mut self, index: usize) -> T {
        let idx = self.phys(index);
        let value = mem::take(&mut self.buf[idx]);
        self.splice_in_place(index, index + 1, iter::empty(), 0);
        value
    }

    /// Makes sure that at least `n` more elements fit without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.grow(5).unwrap();
    /// assert!(list.free() >= 5);
    ///
    /// let cap = list.capacity();
    /// list.insert(0, vec![1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(list.capacity(), cap);
    /// ```
    pub fn grow(&mut self, n: usize) -> Result<()> {
        self.ensure_free(n, None)
    }

    /// Makes sure the free space is within `[min, max]`, migrating to a new
    /// buffer if it is not. This can also shrink the buffer.
    ///
    /// Fails with `InvalidAmount` if `min > max`.
    pub fn grow_range(&mut self, min: usize, max: usize) -> Result<()> {
        if min > max {
            return Err(Error::InvalidAmount);
        }
        self.ensure_free(min, Some(max))
    }

    /// Removes all elements and returns how many there were. The buffer is
    /// kept.
    pub fn clear(&mut self) -> usize {
        let (start, len) = (self.start, self.len);
        let cleared = clear_range(&mut self.buf, start, len as isize);
        self.start = 0;
        self.len = 0;
        cleared
    }

    /// Clones up to `n` elements starting at position `i` into `dest`, and
    /// returns how many were copied (at most `dest.len()`).
    ///
    /// The read continues from position 0 after the front element, so
    /// `i + n` may exceed `len()`, but `n` may not.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list: RingList<_> = vec![1, 2, 3, 4].into_iter().collect();
    /// let mut dest = [0; 3];
    /// assert_eq!(list.copy_to(&mut dest, 2, 3), Ok(3));
    /// assert_eq!(dest, [3, 4, 1]);
    /// ```
    pub fn copy_to(&self, dest: &mut [T], i: usize, n: usize) -> Result<usize>
        where T: Clone
    {
        self.extract_bound(i, n)?;
        let n = n.min(dest.len());
        let first = n.min(self.len - i);
        let (head, rest) = dest.split_at_mut(first);
        let mut copied = clone_between(&self.buf, head, self.phys(i), 0, first);
        copied += clone_between(&self.buf, rest, self.start, 0, n - first);
        Ok(copied)
    }

    /// Shuffles the whole list with Fisher-Yates, drawing from the thread-local
    /// generator.
    #[cfg(feature = "rand")]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffles the whole list with Fisher-Yates, drawing from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<_> = (0..8).collect();
    /// list.shuffle_with(&mut StdRng::seed_from_u64(7));
    ///
    /// let mut seen: Vec<_> = list.iter().copied().collect();
    /// seen.sort();
    /// assert_eq!(seen, (0..8).collect::<Vec<_>>());
    /// ```
    #[cfg(feature = "rand")]
    pub fn shuffle_with<G>(&mut self, rng: &mut G)
        where G: Rng + ?Sized
    {
        let len = self.len;
        self.shuffle_indices(0, len, rng);
    }

    /// Like [`shuffle`](RingList::shuffle), restricted to `range`.
    #[cfg(feature = "rand")]
    pub fn shuffle_range<R>(&mut self, range: R) -> Result<()>
        where R: RangeArgument<usize>
    {
        self.shuffle_range_with(range, &mut rand::rng())
    }

    /// Like [`shuffle_with`](RingList::shuffle_with), restricted to `range`.
    #[cfg(feature = "rand")]
    pub fn shuffle_range_with<R, G>(&mut self, range: R, rng: &mut G) -> Result<()>
        where R: RangeArgument<usize>,
              G: Rng + ?Sized
    {
        let (i, j) = self.range_bound(range)?;
        self.shuffle_indices(i, j, rng);
        Ok(())
    }

    #[cfg(feature = "rand")]
    fn shuffle_indices<G>(&mut self, i: usize, j: usize, rng: &mut G)
        where G: Rng + ?Sized
    {
        for k in (1..j - i).rev() {
            let r = rng.random_range(0..=k);
            self.swap_in_range(i + k, i + r);
        }
    }

    /// Returns a back-to-front iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::with_capacity(4);
    /// list.push_front(5).unwrap();
    /// list.push_front(3).unwrap();
    /// list.push_back(4).unwrap();
    /// let b: &[_] = &[&4, &5, &3];
    /// let c: Vec<&i32> = list.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    /// Returns a back-to-front iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slices();
        IterMut {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingList`. The second slice is empty unless the list wraps.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::with_capacity(5);
    /// list.append(vec![0, 1, 2]).unwrap();
    /// assert_eq!(list.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// list.push_back(10).unwrap();
    /// list.push_back(9).unwrap();
    /// assert_eq!(list.as_slices(), (&[9, 10][..], &[0, 1, 2][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let cap = self.buf.len();
        if self.wraps() {
            let (left, right) = self.buf.split_at(self.start);
            (right, &left[..self.len - (cap - self.start)])
        } else {
            (&self.buf[self.start..self.start + self.len], &[])
        }
    }

    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let cap = self.buf.len();
        let (start, len) = (self.start, self.len);
        if self.wraps() {
            let (left, right) = self.buf.split_at_mut(start);
            (right, &mut left[..len - (cap - start)])
        } else {
            (&mut self.buf[start..start + len], &mut [])
        }
    }

    /// Renders `n` elements starting at position `i` as `[a, b, c]`, using
    /// `f` to render each element.
    ///
    /// Follows the same range rules as [`copy_to`](RingList::copy_to).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list: RingList<_> = (1..6).collect();
    /// let hex = list.render_range_with(3, 3, |x| format!("{:#x}", x)).unwrap();
    /// assert_eq!(hex, "[0x4, 0x5, 0x1]");
    /// ```
    pub fn render_range_with<F>(&self, i: usize, n: usize, mut f: F) -> Result<String>
        where F: FnMut(&T) -> String
    {
        self.extract_bound(i, n)?;
        let mut out = String::from("[");
        for (k, value) in self.iter().skip(i).chain(self.iter()).take(n).enumerate() {
            if k > 0 {
                out.push_str(", ");
            }
            out.push_str(&f(value));
        }
        out.push(']');
        Ok(out)
    }

    /// Like [`render_range_with`](RingList::render_range_with), rendering
    /// each element with its `Debug` representation.
    pub fn render_range(&self, i: usize, n: usize) -> Result<String>
        where T: fmt::Debug
    {
        self.render_range_with(i, n, |value| format!("{:?}", value))
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use generic_array::{ArrayLength, GenericArray};

    use super::RingList;

    /// Takes over a fixed-size array as the contents of the list.
    impl<T: Default, N> From<GenericArray<T, N>> for RingList<T>
        where N: ArrayLength<T>
    {
        fn from(array: GenericArray<T, N>) -> RingList<T> {
            RingList::from_buffer(array.into_iter().collect(), true)
        }
    }

}

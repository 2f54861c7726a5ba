use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};

use super::*;

/// Clones the elements and shares the policies of `self`. The clone's buffer
/// is exactly as large as the source's.
impl<T: Default + Clone> Clone for RingList<T> {
    fn clone(&self) -> RingList<T> {
        let mut buf = vec![T::default(); self.capacity()];
        let len = self.len;
        clone_between(&self.buf, &mut buf, self.start, 0, len);
        RingList {
            buf: buf.into_boxed_slice(),
            start: 0,
            len,
            alloc: self.alloc.clone(),
            release: self.release.clone(),
        }
    }
}

impl<T: Default> Default for RingList<T> {
    #[inline]
    fn default() -> RingList<T> {
        RingList::new()
    }
}

/// Two lists are equal when they hold equal elements in the same logical
/// order, wherever their windows sit in their buffers.
impl<T: Default + PartialEq> PartialEq for RingList<T> {
    fn eq(&self, other: &RingList<T>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (mut a, mut a_next) = self.as_slices();
        let (mut b, mut b_next) = other.as_slices();
        loop {
            // compare the overlap of the current runs, then move on to the
            // second run of whichever side is used up
            let n = a.len().min(b.len());
            if a[..n] != b[..n] {
                return false;
            }
            a = &a[n..];
            b = &b[n..];
            if a.is_empty() {
                if a_next.is_empty() {
                    return true;
                }
                a = mem::take(&mut a_next);
            }
            if b.is_empty() {
                b = mem::take(&mut b_next);
            }
        }
    }
}

impl<T: Default + Eq> Eq for RingList<T> {}

impl<T: Default + PartialOrd> PartialOrd for RingList<T> {
    fn partial_cmp(&self, other: &RingList<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Default + Ord> Ord for RingList<T> {
    #[inline]
    fn cmp(&self, other: &RingList<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Default + Hash> Hash for RingList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for x in self {
            x.hash(state);
        }
    }
}

impl<T: Default> Index<usize> for RingList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(value) => value,
            None => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            }
        }
    }
}

impl<T: Default> IndexMut<usize> for RingList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            }
        }
    }
}

impl<T: Default> iter::FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = RingList::new();
        list.extend(iter);
        list
    }
}

impl<T: Default> IntoIterator for RingList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T: Default> IntoIterator for &'a RingList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: Default> IntoIterator for &'a mut RingList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `RingList` past its front with an iterator.
///
/// Stops without an error at the first element the allocation policy
/// cannot make room for.
impl<T: Default> Extend<T> for RingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            if self.push_front(elt).is_err() {
                return;
            }
        }
    }
}

impl<T: Default + fmt::Debug> fmt::Debug for RingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Formats the elements as `[a, b, c]`, from the back to the front.
impl<T: Default + fmt::Display> fmt::Display for RingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, value) in self.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

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

    fn hash_of(list: &RingList<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_eq_across_layouts() {
        let values = [1, 2, 3, 4, 5, 6];
        for a in 0..7 {
            for b in 0..9 {
                let x = wrapped(7, a, &values);
                let y = wrapped(9, b, &values);
                assert_eq!(x, y);
                assert_eq!(hash_of(&x), hash_of(&y));
                assert_eq!(x.cmp(&y), Ordering::Equal);
            }
        }

        let x = wrapped(7, 3, &[1, 2, 3]);
        assert_ne!(x, wrapped(7, 5, &[1, 2, 4]));
        assert_ne!(x, wrapped(7, 5, &[1, 2]));
        assert!(x < wrapped(4, 1, &[1, 3]));
    }

    #[test]
    fn test_ne_at_every_position_across_layouts() {
        let values = [1, 2, 3, 4, 5, 6];
        for k in 0..values.len() {
            let mut other = values;
            other[k] = 0;
            for a in 0..7 {
                for b in 0..9 {
                    let x = wrapped(7, a, &values);
                    let y = wrapped(9, b, &other);
                    assert_ne!(x, y);
                    assert_ne!(y, x);
                }
            }
        }
    }

    #[test]
    fn test_clone() {
        for pad in 0..5 {
            let list = wrapped(5, pad, &[1, 2, 3]);
            let copy = list.clone();
            assert_eq!(copy, list);
            assert_eq!(copy.capacity(), 5);
            assert!(!copy.wraps());
        }
    }

    #[test]
    fn test_index() {
        let mut list = wrapped(4, 3, &[1, 2, 3]);
        assert_eq!(list[0], 1);
        assert_eq!(list[2], 3);
        list[1] = 7;
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 7, 3]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the len is 3 but the index is 3")]
    fn test_index_out_of_bounds() {
        let list = wrapped(4, 3, &[1, 2, 3]);
        let _ = list[3];
    }

    #[test]
    fn test_extend_stops_when_allocation_fails() {
        let mut list: RingList<i32> = RingList::with_capacity(3)
            .with_alloc_policy(|_min: usize, _max: Option<usize>| -> crate::Result<Vec<i32>> {
                Ok(Vec::new())
            });
        list.extend(vec![1, 2]);
        list.extend(1..10);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 1]);
    }

    #[test]
    fn test_from_iter_and_borrowed_into_iter() {
        let mut list: RingList<i32> = (1..4).collect();
        for x in &mut list {
            *x += 1;
        }
        let sum: i32 = (&list).into_iter().sum();
        assert_eq!(sum, 9);
    }

    #[test]
    fn test_fmt() {
        let list = wrapped(4, 3, &[1, 2, 3]);
        assert_eq!(format!("{}", list), "[1, 2, 3]");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");

        let empty: RingList<String> = RingList::new();
        assert_eq!(format!("{}", empty), "[]");

        let words: RingList<String> = vec!["a".to_string(), "b".to_string()].into_iter().collect();
        assert_eq!(format!("{:?}", words), "[\"a\", \"b\"]");
    }
}

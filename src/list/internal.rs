use std::mem;

use log::{debug, trace};

use super::{RangeArgument, RingList};
use crate::error::{Error, Result};
use crate::logic::{clear_range, fill_from, move_between, self_shift};
use crate::policy::{fix_alloc_size, AllocPolicy, DefaultAlloc};
use crate::utils::{fix, physical};

impl<T: Default> RingList<T> {
    /// Physical offset of a logical position known to be in range.
    #[inline]
    pub(crate) fn phys(&self, logical: usize) -> usize {
        physical(self.start, logical, self.buf.len())
    }

    /// Whether `i` is a valid element position.
    #[inline]
    pub(crate) fn element_bound(&self, i: usize) -> Result<()> {
        if i < self.len {
            Ok(())
        } else {
            Err(Error::InvalidPosition { index: i, len: self.len })
        }
    }

    /// Resolves a range argument to `(start, end)` with
    /// `start <= end <= len`.
    #[inline]
    pub(crate) fn range_bound<R>(&self, range: R) -> Result<(usize, usize)>
        where R: RangeArgument<usize>
    {
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(self.len);
        if start <= end && end <= self.len {
            Ok((start, end))
        } else {
            Err(Error::InvalidRange { start, end, len: self.len })
        }
    }

    /// Validates a read of `n` elements starting at `i` that may continue
    /// past the last element back to the first one.
    #[inline]
    pub(crate) fn extract_bound(&self, i: usize, n: usize) -> Result<()> {
        let start_ok = i < self.len || (n == 0 && i <= self.len);
        if start_ok && n <= self.len {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                start: i,
                end: i.saturating_add(n),
                len: self.len,
            })
        }
    }

    /// Swaps two logical positions already known to be in range.
    #[inline]
    pub(crate) fn swap_in_range(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.len && j < self.len);
        let (pi, pj) = (self.phys(i), self.phys(j));
        self.buf.swap(pi, pj);
    }

    /// Requests a buffer of `min..=max` slots from the allocation policy and
    /// checks that the policy kept its side of the contract.
    fn allocate(&self, min: usize, max: Option<usize>) -> Result<Box<[T]>> {
        let buf = match self.alloc {
            Some(ref policy) => policy.allocate(min, max)?,
            None => DefaultAlloc.allocate(min, max)?,
        };
        let got = buf.len();
        if got < min || fix_alloc_size(got, max) != got {
            return Err(Error::InvalidAllocation { min, max, got });
        }
        Ok(buf.into_boxed_slice())
    }

    /// Installs `new` as the backing buffer. The old buffer has its window
    /// cleared and is handed to the release policy, if any.
    ///
    /// The caller is responsible for having migrated the live elements and
    /// for resetting the window afterwards.
    fn swap_buffer(&mut self, new: Box<[T]>) {
        debug!("ringlist: reallocating from capacity {} to {} with {} elements",
               self.buf.len(),
               new.len(),
               self.len);
        let mut old = mem::replace(&mut self.buf, new);
        if let Some(ref release) = self.release {
            clear_range(&mut old, self.start, self.len as isize);
            trace!("ringlist: releasing buffer of capacity {}", old.len());
            release.release(old);
        }
    }

    /// Makes sure the free space lies in `[min, max]` (or is at least `min`
    /// when `max` is `None`), migrating to a new buffer when it does not.
    pub(crate) fn ensure_free(&mut self, min: usize, max: Option<usize>) -> Result<()> {
        let free = self.free();
        if min <= free && max.map_or(true, |max| free <= max) {
            return Ok(());
        }

        let need = self.len.checked_add(min).ok_or(Error::InvalidAmount)?;
        let limit = match max {
            Some(max) => Some(self.len.checked_add(max).ok_or(Error::InvalidAmount)?),
            None => None,
        };
        let mut new = self.allocate(need, limit)?;

        let (start, len) = (self.start, self.len);
        move_between(&mut self.buf, &mut new, start, 0, len);
        self.swap_buffer(new);
        self.start = 0;
        Ok(())
    }

    /// Rebuilds the list into a new buffer of at least `need` slots:
    /// `[0, i)`, then `values`, then `[j, len)`.
    pub(crate) fn rebuild<I>(&mut self, i: usize, j: usize, values: I, need: usize) -> Result<()>
        where I: Iterator<Item = T>
    {
        let mut new = self.allocate(need, None)?;

        let inserted = need - i - (self.len - j);
        let (start, front, tail) = (self.start, self.phys(j), self.len - j);
        let removed_at = self.phys(i);

        move_between(&mut self.buf, &mut new, start, 0, i);
        fill_from(&mut new[i..i + inserted], 0, values.take(inserted));
        move_between(&mut self.buf, &mut new, front, i + inserted, tail);
        clear_range(&mut self.buf, removed_at, (j - i) as isize);

        self.swap_buffer(new);
        self.start = 0;
        self.len = need;
        Ok(())
    }

    /// Replaces `[i, j)` with `inserted` values without reallocating. The
    /// buffer must already have room for the result.
    ///
    /// Whichever side of the replaced range holds fewer elements is shifted
    /// to open or close the balloon, i.e. the difference between the removed
    /// and the inserted counts.
    pub(crate) fn splice_in_place<I>(&mut self, i: usize, j: usize, values: I, inserted: usize)
        where I: Iterator<Item = T>
    {
        let cap = self.buf.len();
        let old_len = self.len;
        let removed = j - i;
        let tail = old_len - j;
        debug_assert!(i + inserted + tail <= cap);

        let balloon = removed as isize - inserted as isize;
        let mut balloon_start = self.start;

        if balloon != 0 {
            if i < tail {
                //       T   i     j           H
                // [. . . o o x x x o o o o o . . .]
                //
                //             T   i j         H
                // [. . . . . o o I o o o o o . . .]
                //
                // the leading elements slide towards the replaced range
                let start = self.start;
                self_shift(&mut self.buf, start, i, balloon);
                self.start = fix(cap, start as isize + balloon);
            } else {
                //       T         i   j   H
                // [. . . o o o o o x x o o . . . .]
                //
                //       T         i j   H
                // [. . . o o o o o I o o . . . . .]
                //
                // the trailing elements slide towards the replaced range
                let from = self.phys(j);
                self_shift(&mut self.buf, from, tail, -balloon);
                balloon_start = fix(cap, (self.start + old_len) as isize - balloon);
            }
        }

        if balloon > 0 {
            clear_range(&mut self.buf, balloon_start, balloon);
        }

        let at = self.phys(i);
        fill_from(&mut self.buf, at, values.take(inserted));
        self.len = old_len - removed + inserted;
    }

    /// Reverses the logical range `[i, j)` in place.
    pub(crate) fn reverse_range(&mut self, mut i: usize, mut j: usize) {
        while i + 1 < j {
            j -= 1;
            self.swap_in_range(i, j);
            i += 1;
        }
    }
}

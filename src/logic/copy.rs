use std::mem;

use crate::utils::wrap_add;

/// Splits a transfer of `n` elements between two circular buffers into runs
/// that are contiguous in both of them.
///
/// Yields `(src, dst, len)` triples of physical offsets. The total is
/// clamped to the length of the shorter buffer.
#[derive(Clone, Debug)]
pub struct Runs {
    src: usize,
    dst: usize,
    src_len: usize,
    dst_len: usize,
    left: usize,
}

impl Runs {
    pub fn new(src_len: usize, dst_len: usize, src: usize, dst: usize, n: usize) -> Runs {
        if src_len == 0 || dst_len == 0 {
            return Runs { src: 0, dst: 0, src_len, dst_len, left: 0 };
        }
        Runs {
            src: src % src_len,
            dst: dst % dst_len,
            src_len,
            dst_len,
            left: n.min(src_len).min(dst_len),
        }
    }

    /// Number of elements the remaining runs cover.
    #[inline]
    pub fn total(&self) -> usize {
        self.left
    }
}

impl Iterator for Runs {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<(usize, usize, usize)> {
        if self.left == 0 {
            return None;
        }
        let run = self.left
            .min(self.src_len - self.src)
            .min(self.dst_len - self.dst);
        let item = (self.src, self.dst, run);
        self.src = wrap_add(self.src, run, self.src_len);
        self.dst = wrap_add(self.dst, run, self.dst_len);
        self.left -= run;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // at most three runs: each buffer end splits the transfer once
        let upper = if self.left == 0 { 0 } else { 3 };
        (usize::from(self.left > 0), Some(upper))
    }
}

/// Moves `n` elements from the circular buffer `src`, starting at physical
/// `src_start`, into the circular buffer `dst` starting at physical
/// `dst_start`.
///
/// Moved-from slots are left holding `T::default()`. Returns the number of
/// elements moved, which is clamped to the length of either buffer.
pub fn move_between<T: Default>(src: &mut [T],
                                dst: &mut [T],
                                src_start: usize,
                                dst_start: usize,
                                n: usize)
                                -> usize {
    let runs = Runs::new(src.len(), dst.len(), src_start, dst_start, n);
    let total = runs.total();
    for (s, d, run) in runs {
        for (to, from) in dst[d..d + run].iter_mut().zip(&mut src[s..s + run]) {
            *to = mem::take(from);
        }
    }
    total
}

/// Like [`move_between`], but clones the elements and leaves `src` intact.
pub fn clone_between<T: Clone>(src: &[T],
                               dst: &mut [T],
                               src_start: usize,
                               dst_start: usize,
                               n: usize)
                               -> usize {
    let runs = Runs::new(src.len(), dst.len(), src_start, dst_start, n);
    let total = runs.total();
    for (s, d, run) in runs {
        dst[d..d + run].clone_from_slice(&src[s..s + run]);
    }
    total
}

/// Writes `values` into the circular buffer `dst` starting at physical
/// `start`, overwriting whatever was there.
///
/// Stops after one full lap of the buffer or when `values` runs out, and
/// returns the number of elements written.
pub fn fill_from<T, I>(dst: &mut [T], start: usize, values: I) -> usize
    where I: IntoIterator<Item = T>
{
    if dst.is_empty() {
        return 0;
    }
    let start = start % dst.len();
    let (head, tail) = dst.split_at_mut(start);
    let mut written = 0;
    for (slot, value) in tail.iter_mut().chain(head.iter_mut()).zip(values) {
        *slot = value;
        written += 1;
    }
    written
}

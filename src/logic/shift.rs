use std::mem;

use super::copy::Runs;
use crate::utils::fix;

/// Moves the `n` elements starting at physical `start` by `offset` slots
/// within the same circular buffer: towards lower positions when `offset` is
/// negative, towards higher positions when it is positive.
///
/// Slots left behind hold `T::default()`, and elements previously stored in
/// the destination slots are dropped. It is a no-op if `n` is zero, or if `n`
/// or `offset.abs()` reach the length of the buffer.
///
/// The source and destination may overlap, but together they must fit in
/// the buffer: `n + offset.abs() <= buf.len()`.
pub fn self_shift<T: Default>(buf: &mut [T], start: usize, n: usize, offset: isize) {
    let len = buf.len();
    let magnitude = offset.unsigned_abs();
    if len == 0 || n < 1 || n >= len || magnitude == 0 || magnitude >= len {
        return;
    }
    debug_assert!(n + magnitude <= len,
                  "shift overlaps itself: n={} offset={} len={}",
                  n,
                  offset,
                  len);

    let src = start % len;
    let dst = fix(len, src as isize + offset);

    if offset < 0 {
        // target before source:
        //
        //          S . . . .
        // 1 [_ _ _ A B C D E _]
        // 2 [_ A B C D E _ _ _]
        //      D . . . .
        //
        // move the leading elements first
        for (s, d, run) in Runs::new(len, len, src, dst, n) {
            move_run(buf, s, d, run);
        }
    } else {
        // target after source:
        //
        //      S . . . .
        // 1 [_ A B C D E _ _ _]
        // 2 [_ _ _ A B C D E _]
        //          D . . . .
        //
        // move the trailing elements first, walking run ends backwards
        let mut src_end = end_of(src, n, len);
        let mut dst_end = end_of(dst, n, len);
        let mut left = n;
        while left > 0 {
            let run = left.min(src_end).min(dst_end);
            move_run(buf, src_end - run, dst_end - run, run);
            src_end = end_of(src_end, len - run, len);
            dst_end = end_of(dst_end, len - run, len);
            left -= run;
        }
    }
}

/// Exclusive end of a circular run, reported in `1..=len` so that a run
/// ending exactly at the buffer end is not confused with an empty one.
#[inline]
fn end_of(start: usize, n: usize, len: usize) -> usize {
    let end = (start + n) % len;
    if end == 0 { len } else { end }
}

/// Moves a run that is contiguous in both source and destination, in the
/// order that keeps an overlapping source intact.
#[inline]
fn move_run<T: Default>(buf: &mut [T], src: usize, dst: usize, run: usize) {
    if src == dst || run == 0 {
        return;
    }
    if dst < src {
        for k in 0..run {
            buf[dst + k] = mem::take(&mut buf[src + k]);
        }
    } else {
        for k in (0..run).rev() {
            buf[dst + k] = mem::take(&mut buf[src + k]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference: move elements one at a time in logical order.
    fn naive_shift(buf: &mut Vec<i32>, start: usize, n: usize, offset: isize) {
        let len = buf.len();
        let items: Vec<i32> = (0..n).map(|k| buf[(start + k) % len]).collect();
        for k in 0..n {
            buf[(start + k) % len] = 0;
        }
        for (k, v) in items.into_iter().enumerate() {
            let at = fix(len, (start + k) as isize + offset);
            buf[at] = v;
        }
    }

    #[test]
    fn test_shift_every_position() {
        const CAP: usize = 9;
        for start in 0..CAP {
            for n in 1..CAP {
                for offset in -(CAP as isize)..(CAP as isize) {
                    if n + offset.unsigned_abs() > CAP {
                        continue;
                    }
                    let mut buf: Vec<i32> = (1..=CAP as i32).collect();
                    // everything outside the moved range is free space
                    for k in n..CAP {
                        buf[(start + k) % CAP] = 0;
                    }
                    let mut expected = buf.clone();
                    if offset != 0 {
                        naive_shift(&mut expected, start, n, offset);
                    }
                    self_shift(&mut buf, start, n, offset);
                    assert_eq!(buf, expected, "start={} n={} offset={}", start, n, offset);
                }
            }
        }
    }

    #[test]
    fn test_shift_noop() {
        let mut buf = vec![1, 2, 3, 4];
        self_shift(&mut buf, 0, 0, 1);
        self_shift(&mut buf, 0, 4, 0);
        self_shift(&mut buf, 1, 2, 4);
        self_shift(&mut buf, 1, 2, -4);
        self_shift(&mut buf, 0, 4, 1);
        assert_eq!(buf, vec![1, 2, 3, 4]);

        let mut empty: Vec<i32> = Vec::new();
        self_shift(&mut empty, 0, 1, 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_shift_drops_overwritten() {
        let mut buf: Vec<String> = ["a", "b", "x", "y", ""].iter().map(|s| s.to_string()).collect();
        self_shift(&mut buf, 0, 2, 2);
        assert_eq!(buf, vec!["", "", "a", "b", ""]);
    }
}

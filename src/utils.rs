//! Position arithmetic shared by every layer of the crate.

/// Normalizes a position `i` that may lie outside `[0, len)` on either side.
///
/// Returns a value in `[0, len)`, or `0` when `len` is zero.
#[inline]
pub fn fix(len: usize, i: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let n = len as isize;

    // the common cases are within one length of the valid range
    if i >= 0 {
        if i < n {
            return i as usize;
        }
        if i - n < n {
            return (i - n) as usize;
        }
    } else if -n < i {
        return (i + n) as usize;
    }

    i.rem_euclid(n) as usize
}

/// Adds `addend` to a physical offset, wrapping around `capacity`.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    debug_assert!(index < capacity || capacity == 0);
    let sum = index + addend;
    if sum >= capacity {
        sum - capacity
    } else {
        sum
    }
}

/// Subtracts `subtrahend` from a physical offset, wrapping around
/// `capacity`.
#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    debug_assert!(index < capacity || capacity == 0);
    if index >= subtrahend {
        index - subtrahend
    } else {
        index + capacity - subtrahend
    }
}

/// Maps a logical position known to be in range onto a physical offset of a
/// buffer of `capacity` slots whose logical index 0 lives at `start`.
#[inline]
pub fn physical(start: usize, logical: usize, capacity: usize) -> usize {
    debug_assert!(logical <= capacity);
    wrap_add(start, logical, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_empty() {
        assert_eq!(fix(0, 0), 0);
        assert_eq!(fix(0, 7), 0);
        assert_eq!(fix(0, -7), 0);
    }

    #[test]
    fn test_fix_fast_paths() {
        assert_eq!(fix(5, 0), 0);
        assert_eq!(fix(5, 4), 4);
        assert_eq!(fix(5, 5), 0);
        assert_eq!(fix(5, 9), 4);
        assert_eq!(fix(5, -1), 4);
        assert_eq!(fix(5, -4), 1);
    }

    #[test]
    fn test_fix_fallback() {
        assert_eq!(fix(5, 10), 0);
        assert_eq!(fix(5, 23), 3);
        assert_eq!(fix(5, -5), 0);
        assert_eq!(fix(5, -6), 4);
        assert_eq!(fix(5, -23), 2);
        assert_eq!(fix(1, isize::MIN), 0);
        assert_eq!(fix(3, isize::MAX), (isize::MAX % 3) as usize);
    }

    #[test]
    fn test_fix_matches_rem_euclid() {
        for len in 1..8usize {
            for i in -40isize..40 {
                assert_eq!(fix(len, i), i.rem_euclid(len as isize) as usize);
            }
        }
    }

    #[test]
    fn test_wrap_add_sub() {
        assert_eq!(wrap_add(3, 2, 5), 0);
        assert_eq!(wrap_add(3, 1, 5), 4);
        assert_eq!(wrap_add(0, 5, 5), 0);
        assert_eq!(wrap_sub(0, 1, 5), 4);
        assert_eq!(wrap_sub(3, 3, 5), 0);
        assert_eq!(wrap_sub(2, 5, 5), 2);
    }

    #[test]
    fn test_physical() {
        assert_eq!(physical(3, 0, 5), 3);
        assert_eq!(physical(3, 1, 5), 4);
        assert_eq!(physical(3, 2, 5), 0);
        assert_eq!(physical(0, 4, 5), 4);
    }
}

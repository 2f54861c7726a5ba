use crate::utils::fix;

/// Resets `n` slots of a circular buffer to `T::default()`, starting at
/// physical `start`. A negative `n` clears the `n` slots before `start`.
///
/// Clearing at least `buf.len()` slots clears the whole buffer in one pass.
/// Returns the number of cleared slots.
pub fn clear_range<T: Default>(buf: &mut [T], start: usize, n: isize) -> usize {
    let len = buf.len();
    if len == 0 || n == 0 {
        return 0;
    }

    let count = n.unsigned_abs();
    if count >= len {
        buf.fill_with(T::default);
        return len;
    }

    let start = if n < 0 {
        fix(len, (start % len) as isize + n)
    } else {
        start % len
    };
    let end = start + count;
    if end <= len {
        buf[start..end].fill_with(T::default);
    } else {
        buf[start..].fill_with(T::default);
        buf[..end - len].fill_with(T::default);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_forward() {
        let mut buf = [1, 2, 3, 4, 5];
        assert_eq!(clear_range(&mut buf, 1, 2), 2);
        assert_eq!(buf, [1, 0, 0, 4, 5]);
    }

    #[test]
    fn test_clear_wrapping() {
        let mut buf = [1, 2, 3, 4, 5];
        assert_eq!(clear_range(&mut buf, 3, 3), 3);
        assert_eq!(buf, [0, 2, 3, 0, 0]);
    }

    #[test]
    fn test_clear_backwards() {
        let mut buf = [1, 2, 3, 4, 5];
        assert_eq!(clear_range(&mut buf, 1, -2), 2);
        assert_eq!(buf, [0, 2, 3, 4, 0]);

        let mut buf = [1, 2, 3, 4, 5];
        assert_eq!(clear_range(&mut buf, 4, -3), 3);
        assert_eq!(buf, [1, 0, 0, 0, 5]);
    }

    #[test]
    fn test_clear_everything() {
        let mut buf = [1, 2, 3];
        assert_eq!(clear_range(&mut buf, 2, 7), 3);
        assert_eq!(buf, [0, 0, 0]);

        let mut buf = [1, 2, 3];
        assert_eq!(clear_range(&mut buf, 2, -3), 3);
        assert_eq!(buf, [0, 0, 0]);
    }

    #[test]
    fn test_clear_nothing() {
        let mut buf = [1, 2, 3];
        assert_eq!(clear_range(&mut buf, 1, 0), 0);
        assert_eq!(buf, [1, 2, 3]);

        let mut empty: [i32; 0] = [];
        assert_eq!(clear_range(&mut empty, 0, 4), 0);
    }
}

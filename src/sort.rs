//! Index-driven sorting for sequences that cannot be viewed as one slice.
//!
//! Everything here only calls `less` and `swap` on logical positions, so it
//! works on a wrapped `RingList` without moving it into a contiguous run
//! first.

/// A sequence that can be sorted through its positions.
pub(crate) trait Sortable {
    fn len(&self) -> usize;
    fn less(&self, i: usize, j: usize) -> bool;
    fn swap(&mut self, i: usize, j: usize);
}

/// In-place heapsort over `[0, len)`. Not stable.
pub(crate) fn heap_sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    for root in (0..n / 2).rev() {
        sift_down(data, root, n);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

/// Max-heap sift down of `root` within `[0, hi)`.
fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, hi: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= hi {
            return;
        }
        if child + 1 < hi && data.less(child, child + 1) {
            child += 1;
        }
        if !data.less(root, child) {
            return;
        }
        data.swap(root, child);
        root = child;
    }
}

const BLOCK: usize = 20;

/// Stable in-place sort: insertion sort over small blocks, then rounds of
/// in-place merges of neighbouring blocks.
///
/// Takes `O(n log n)` comparisons and `O(n log² n)` swaps.
pub(crate) fn stable_sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();

    let mut a = 0;
    while a + BLOCK <= n {
        insertion_sort(data, a, a + BLOCK);
        a += BLOCK;
    }
    insertion_sort(data, a, n);

    let mut block = BLOCK;
    while block < n {
        let mut a = 0;
        while a + 2 * block <= n {
            sym_merge(data, a, a + block, a + 2 * block);
            a += 2 * block;
        }
        if a + block < n {
            sym_merge(data, a, a + block, n);
        }
        block *= 2;
    }
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    for i in a + 1..b {
        let mut j = i;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merges the sorted runs `[a, m)` and `[m, b)` in place, using the SymMerge
/// algorithm of Kim and Kutzner.
fn sym_merge<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, b: usize) {
    if m - a == 1 {
        // one element on the left: binary search its slot on the right
        let (mut i, mut j) = (m, b);
        while i < j {
            let h = i + (j - i) / 2;
            if data.less(h, a) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in a..i - 1 {
            data.swap(k, k + 1);
        }
        return;
    }

    if b - m == 1 {
        let (mut i, mut j) = (a, m);
        while i < j {
            let h = i + (j - i) / 2;
            if !data.less(m, h) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in (i + 1..=m).rev() {
            data.swap(k, k - 1);
        }
        return;
    }

    let mid = a + (b - a) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;
    while start < r {
        let c = start + (r - start) / 2;
        if !data.less(p - c, c) {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < m && m < end {
        rotate(data, start, m, end);
    }
    if a < start && start < mid {
        sym_merge(data, a, start, mid);
    }
    if mid < end && end < b {
        sym_merge(data, mid, end, b);
    }
}

/// Rotates `[a, b)` so that `[m, b)` comes before `[a, m)`, using block
/// swaps.
fn rotate<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, b: usize) {
    let mut i = m - a;
    let mut j = b - m;
    while i != j {
        if i > j {
            swap_range(data, m - i, m, j);
            i -= j;
        } else {
            swap_range(data, m - i, m + j - i, i);
            j -= i;
        }
    }
    swap_range(data, m - i, m, i);
}

fn swap_range<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, n: usize) {
    for k in 0..n {
        data.swap(a + k, b + k);
    }
}

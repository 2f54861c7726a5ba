use thiserror::Error;

/// Error values reported by `RingList` and the views built on top of it.
///
/// Every error is reported before any mutation takes place, so the list
/// is left exactly as it was.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A literal element position was outside `[0, len)`.
    #[error("invalid element position: the len is {len} but the index is {index}")]
    InvalidPosition {
        /// The rejected position.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// A range was reversed or reached past the end of the list.
    #[error("invalid range {start}..{end} for a list of len {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// A requested amount of elements or capacity is inconsistent, for
    /// example `min > max`.
    #[error("invalid amount of elements")]
    InvalidAmount,

    /// The allocation policy returned a buffer that does not satisfy the
    /// requested size bounds.
    #[error("insufficient space allocated: got {got}, expected at least {min} and at most {max:?}")]
    InvalidAllocation {
        min: usize,
        max: Option<usize>,
        got: usize,
    },

    /// Memory for a buffer of `size` slots could not be obtained.
    #[error("failed to allocate a buffer of {size} slots")]
    AllocationFailed {
        size: usize,
    },
}

/// Shorthand for results carrying a ringlist [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

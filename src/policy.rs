//! Allocation and release strategies for `RingList`.
//!
//! A list asks its [`AllocPolicy`] for a new buffer whenever it needs room
//! it does not have, and optionally hands the buffer it migrated away from
//! to a [`ReleasePolicy`]. Both are plain traits with one method, and any
//! closure of the right shape implements them.

use crate::error::{Error, Result};

/// Strategy that provides buffers for a `RingList`.
///
/// `allocate(min, max)` must return a buffer holding at least `min` slots
/// and, when `max` is `Some`, at most `max` slots. A buffer outside these
/// bounds is rejected with `Error::InvalidAllocation`. The contents of the
/// returned buffer are discarded as they get overwritten, so every slot
/// should already hold `T::default()`.
///
/// A policy that cannot provide memory returns an error, which the list
/// passes on unchanged.
pub trait AllocPolicy<T> {
    fn allocate(&self, min: usize, max: Option<usize>) -> Result<Vec<T>>;
}

impl<T, F> AllocPolicy<T> for F
    where F: Fn(usize, Option<usize>) -> Result<Vec<T>>
{
    #[inline]
    fn allocate(&self, min: usize, max: Option<usize>) -> Result<Vec<T>> {
        self(min, max)
    }
}

/// Strategy that receives the buffer a `RingList` has just migrated away
/// from, for example to return it to a pool.
///
/// Every slot of the released buffer holds `T::default()`.
pub trait ReleasePolicy<T> {
    fn release(&self, buf: Box<[T]>);
}

impl<T, F> ReleasePolicy<T> for F
    where F: Fn(Box<[T]>)
{
    #[inline]
    fn release(&self, buf: Box<[T]>) {
        self(buf)
    }
}

/// Clamps an intended buffer size to `max`, if there is one.
///
/// Helper for `AllocPolicy` implementations.
#[inline]
pub fn fix_alloc_size(intended: usize, max: Option<usize>) -> usize {
    match max {
        Some(max) if max < intended => max,
        _ => intended,
    }
}

/// Builds a buffer of `size` default slots, reporting an allocation failure
/// instead of aborting.
///
/// Helper for `AllocPolicy` implementations.
pub fn default_buffer<T: Default>(size: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| Error::AllocationFailed { size })?;
    buf.resize_with(size, T::default);
    Ok(buf)
}

/// The allocation policy used when none is configured.
///
/// Grows to one and a half times the requested minimum, plus one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultAlloc;

impl<T: Default> AllocPolicy<T> for DefaultAlloc {
    fn allocate(&self, min: usize, max: Option<usize>) -> Result<Vec<T>> {
        let size = fix_alloc_size(min.saturating_mul(3) / 2 + 1, max);
        default_buffer(size)
    }
}

/// Allocation policy that returns buffers of exactly the requested minimum.
///
/// Useful when memory matters more than the number of reallocations.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactAlloc;

impl<T: Default> AllocPolicy<T> for ExactAlloc {
    fn allocate(&self, min: usize, _max: Option<usize>) -> Result<Vec<T>> {
        default_buffer(min)
    }
}

//! A growable double-ended list stored in a single ring buffer.
//!
//! `RingList` has `O(1)` pushes and pops at both ends and `O(1)` indexing
//! like a vector. Insertions, deletions and replacements anywhere in the list
//! move only the elements on the shorter side of the change, and the buffer is
//! only replaced when it runs out of room. Elements are not required to be
//! copyable, only to have a `Default` value that fills unused slots.
//!
//! On top of the list sit two views: [`Ordered`], which sorts and binary
//! searches the list under a comparator, and [`Heap`], a binary heap. Both
//! keep working when the elements wrap around the end of the buffer.
//!
//! # Feature Flags
//! The **ringlist** crate has the following cargo feature flags:
//!
//! - `serde`
//!   - Optional, enabled by default
//!   - Encode lists, views and heaps as sequences, and decode them back
//!
//!
//! - `rand`
//!   - Optional, enabled by default
//!   - Shuffle with the thread-local generator or any `rand::Rng`
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow building a list from a
//!     `GenericArray` buffer.
//!
//!
//! # Positions
//!
//! Position 0 is the **back** of the list and position `len() - 1` is its
//! **front**. `push_front` therefore appends and `push_back` prepends:
//!
//! ```
//! use ringlist::RingList;
//!
//! let mut list = RingList::new();
//! list.push_front(2).unwrap();
//! list.push_front(3).unwrap();
//! list.push_back(1).unwrap();
//! assert_eq!(format!("{}", list), "[1, 2, 3]");
//! assert_eq!(list.at(-1), Some(&3));
//! ```
//!
//! # Replace
//! ```
//! use ringlist::RingList;
//!
//! let mut list = RingList::new();
//! list.insert(0, vec![3, 1, 2]).unwrap();
//! list.replace(1..2, vec![9]).unwrap();
//! assert_eq!(format!("{:?}", list), "[3, 9, 2]");
//!
//! list.rotate(1);
//! assert_eq!(format!("{:?}", list), "[9, 2, 3]");
//! ```
//!
//! # Capacity
//!
//! `len() + free() == capacity()` always holds. Room is requested from an
//! [`AllocPolicy`] only when an operation needs more than `free()` slots;
//! `grow` reserves it ahead of time.
//!
//! ```
//! use ringlist::RingList;
//! use ringlist::policy::ExactAlloc;
//!
//! let mut list = RingList::new().with_alloc_policy(ExactAlloc);
//! list.grow(4).unwrap();
//! assert_eq!(list.capacity(), 4);
//!
//! list.extend(0..4);
//! assert_eq!(list.free(), 0);
//! ```
//!
//! # Sort & Heap
//! ```
//! use ringlist::{Inverse, Natural, RingList};
//!
//! let mut list: RingList<_> = vec![5, 3, 8, 9].into_iter().collect();
//! assert_eq!(list.heap(Natural).pop(), Some(3));
//! assert_eq!(list.heap(Inverse(Natural)).pop(), Some(9));
//!
//! list.ordered(Natural).sort();
//! assert_eq!(format!("{:?}", list), "[5, 8]");
//! ```

pub mod compare;
pub mod error;
mod heap;
mod list;
mod logic;
mod ordered;
pub mod policy;
mod sort;
mod utils;

pub use compare::{Compare, Inverse, Natural};
pub use error::{Error, Result};
pub use heap::Heap;
pub use list::{IntoIter, Iter, IterMut, RangeArgument, RingList};
pub use ordered::Ordered;
pub use policy::{AllocPolicy, ReleasePolicy};

#![no_std]
#![deny(unsafe_code)]

//! `GrowVec`: a contiguous, heap-allocated vector that grows by doubling.
//!
//! `GrowVec<T>` owns one buffer of `capacity` slots. The first `len` slots
//! hold live elements; the rest are allocated but unconstructed. Element
//! lifetimes are managed separately from the buffer: elements are dropped as
//! they leave the live range, the buffer is released only when the vector is
//! dropped or replaced.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! Buffer layout: [live elements: 0..len][unconstructed slots: len..capacity]
//!
//! # Growth
//!
//! A new vector starts with capacity 1. When an insertion finds the buffer
//! full, the capacity doubles: a new buffer is allocated, every live element
//! is moved into it, and the old buffer is released. Capacity never shrinks.
//!
//! ```
//! # use growvec::GrowVec;
//! let mut vec = GrowVec::new();
//! assert_eq!((vec.len(), vec.capacity()), (0, 1));
//!
//! vec.push_back(10);
//! vec.push_back(20);
//! vec.push_back(30);
//! assert_eq!(vec.len(), 3);
//! assert_eq!(vec.capacity(), 4);
//!
//! vec.clear();
//! assert!(vec.is_empty());
//! assert_eq!(vec.capacity(), 4);
//! ```
//!
//! # Element Access
//!
//! Indexing with `[]` panics when out of range, `at()` reports the failure
//! as an error, and `get_unchecked()` skips the check entirely:
//!
//! ```
//! # use growvec::{GrowVec, GrowVecError};
//! let vec = GrowVec::from_elem(3, &7);
//! assert_eq!(vec.as_slice(), &[7, 7, 7]);
//! assert_eq!(vec.capacity(), 3);
//!
//! assert_eq!(vec[2], 7);
//! assert_eq!(vec.at(1), Ok(&7));
//! assert_eq!(
//!     vec.at(3),
//!     Err(GrowVecError::IndexOutOfBounds { index: 3, length: 3 })
//! );
//! assert_eq!(*vec.front(), 7);
//! assert_eq!(*vec.back(), 7);
//! ```
//!
//! # Cursors
//!
//! `begin()` and `end()` return a half-open range of [`Cursor`]s. A cursor is
//! a plain slot offset supporting random-access arithmetic; `insert` and
//! `erase` take one to name a position:
//!
//! ```
//! # use growvec::GrowVec;
//! let mut vec = GrowVec::new();
//! vec.push_back(10);
//! vec.push_back(20);
//! vec.push_back(30);
//!
//! vec.insert(vec.begin() + 1, 15);
//! assert_eq!(vec.as_slice(), &[10, 15, 20, 30]);
//!
//! vec.erase(vec.begin() + 2);
//! assert_eq!(vec.as_slice(), &[10, 15, 30]);
//!
//! let mut cursor = vec.begin();
//! let mut seen = Vec::new();
//! while cursor != vec.end() {
//!     seen.push(vec[cursor]);
//!     cursor.inc();
//! }
//! assert_eq!(seen, [10, 15, 30]);
//! assert_eq!(vec.end() - vec.begin(), 3);
//! ```
//!
//! Cursors do not borrow the vector, so nothing stops a cursor from outliving
//! the layout it was taken from. Any growth, shift or clear leaves it at its
//! old offset:
//!
//! ```
//! # use growvec::GrowVec;
//! let mut vec = GrowVec::from([1, 2, 3]);
//! let stale_end = vec.end();
//! vec.push_back(4);
//! assert_ne!(stale_end, vec.end());
//! assert_eq!(vec[stale_end], 4);
//! ```
//!
//! # Copy and Move
//!
//! `clone()` produces an independent vector with the same length and
//! capacity. `take()` moves the contents out and leaves the source as a
//! fresh, reusable empty vector:
//!
//! ```
//! # use growvec::GrowVec;
//! let mut source = GrowVec::from([1, 2, 3]);
//! let copy = source.clone();
//! assert_eq!(copy, source);
//!
//! let moved = source.take();
//! assert_eq!(moved.as_slice(), &[1, 2, 3]);
//! assert_eq!((source.len(), source.capacity()), (0, 1));
//!
//! source.push_back(9);
//! assert_eq!(source.as_slice(), &[9]);
//! ```
//!
//! # Iterator Support
//!
//! `GrowVec` implements standard Rust iterator patterns:
//!
//! ```
//! # use growvec::GrowVec;
//! let mut vec: GrowVec<i32> = (1..=4).collect();
//!
//! for value in &mut vec {
//!     *value *= 10;
//! }
//!
//! let reversed: Vec<_> = vec.iter().rev().copied().collect();
//! assert_eq!(reversed, [40, 30, 20, 10]);
//!
//! let owned: Vec<i32> = vec.into_iter().collect();
//! assert_eq!(owned, [10, 20, 30, 40]);
//! ```
//!
//! # Logging
//!
//! Reallocations are reported through `tracing` at `TRACE` level and
//! rejected reallocations at `DEBUG` level. No subscriber is installed by
//! this crate.

extern crate alloc;

mod core;
mod cursor;
mod error;
mod iter;
mod raw;

// Re-export public types and traits
pub use crate::core::{GrowVec, INITIAL_CAPACITY};
pub use cursor::Cursor;
pub use error::GrowVecError;
pub use iter::{IntoIter, Iter, IterMut};

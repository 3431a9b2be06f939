//! A fixed-capacity bitset packed into 64-bit words.
//!
//! This crate provides [`BitSet`], which stores `N` boolean flags in
//! `ceil(N / 64)` words. The capacity is chosen at construction and never
//! changes.
//!
//! # Features
//!
//! - **Bounds-checked bit access**: `bit`, `set_bit`, `clear_bit`, `xor_bit`
//! - **Whole-set operations**: `clear`, `set_all`, `xor_all`, `count`
//! - **Equality, clone and bounded copy** between bitsets
//! - **Sub-range extraction** into a new bitset, re-indexed from zero
//! - **`no_std` support** with `alloc` for embedded systems
//!
//! # Examples
//!
//! ```
//! use fixed_bitset::BitSet;
//!
//! let mut b = BitSet::new(128);
//! b.set_bit(0);
//! b.set_bit(64);
//! b.set_bit(70);
//!
//! assert!(b.bit(64));
//! assert_eq!(b.count(), 3);
//!
//! // Take bits [64, 128) as a 64-bit set.
//! let hi = b.sub(64, 128).unwrap();
//! assert!(hi.bit(0));
//! assert!(hi.bit(6));
//! assert_eq!(hi.cap(), 64);
//!
//! // Out-of-range requests are not an error, just `None`.
//! assert!(b.sub(100, 200).is_none());
//! ```
//!
//! # Error Handling
//!
//! Indexing past the capacity is a bug in the caller and panics. Asking for
//! an invalid sub-range returns `None`. Comparing or copying against an
//! absent bitset returns `false` or `0`, and [`OptionBitSetExt`] gives the
//! same treatment to `clear` and `count` on an `Option`.
//!
//! # Padding
//!
//! Whole-set operations and `count` work on full words. Bits past the
//! capacity in the last word are included, so `set_all` on a 70-bit set
//! yields a count of 128.
//!
//! # Concurrency
//!
//! `BitSet` is a plain value with no internal locking. Share it between
//! threads behind a lock of your choice.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitset;
mod option;
pub mod storage;
pub mod traits;

// Re-exports
pub use bitset::BitSet;
pub use option::OptionBitSetExt;
pub use storage::{WORD_BITS, popcount};
pub use traits::{FromWordsError, ParseBitSetError};

//! Example demonstrating `no_std` usage with `BitSet`
//!
//! Build the library without `std` with
//! `cargo run --example no_std --no-default-features`. Everything below only
//! touches `core` and `alloc`.
// #![no_std]

extern crate alloc;
use alloc::{vec, vec::Vec};
use core::str::FromStr;
use fixed_bitset::{BitSet, OptionBitSetExt, ParseBitSetError};

fn main() {
    // Create a bitset - storage comes from alloc
    let mut bitset = BitSet::new(200);

    // Set some bits
    bitset.set_bit(5);
    bitset.set_bit(10);
    bitset.set_bit(150);

    // Count set bits
    let count = bitset.count();
    // println!("Set bits: {count}");
    core::hint::black_box(count);

    // Build from raw words - uses alloc::vec
    let words: Vec<u64> = vec![0b1010, 1];
    let from_words = BitSet::from_words(70, words).unwrap_or_default();
    core::hint::black_box(from_words.bit(64));

    // Extract a range that crosses a word boundary
    let sub = bitset.sub(3, 153);
    // println!("Bit 147 of the range: {:?}", sub.as_ref().map(|s| s.bit(147)));
    core::hint::black_box(sub.as_ref().map(|s| s.bit(147)));

    // Parse errors implement core::error::Error without std
    let err: Result<BitSet, ParseBitSetError> = BitSet::from_str("10x1");
    if let Err(e) = &err {
        let e: &dyn core::error::Error = e;
        core::hint::black_box(e);
    }

    // Absent bitsets still count as empty
    let missing: Option<BitSet> = None;
    core::hint::black_box(missing.count());
}

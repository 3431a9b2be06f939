//! Word-level layout helpers shared by the bitset implementation.

use alloc::{boxed::Box, vec};

/// Number of bits stored in each storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

// Masks for the SWAR population count.
const M1: u64 = 0x5555_5555_5555_5555; // 0101...
const M2: u64 = 0x3333_3333_3333_3333; // 00110011...
const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f; // 4 zeros, 4 ones ...

/// Convert bit index to (word index, bit position within word)
#[inline(always)]
pub(crate) const fn bitpos(idx: usize) -> (usize, usize) {
    (idx >> 6, idx & 63)
}

/// Number of words needed to hold `bits` bits.
#[inline(always)]
pub(crate) const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Allocates zeroed word storage for `bits` bits.
pub(crate) fn zeroed(bits: usize) -> Box<[u64]> {
    vec![0; words_for(bits)].into_boxed_slice()
}

/// Counts the set bits of a word without looping over its bits.
///
/// Partial sums are built up in place: 2-bit fields, then 4-bit fields, then
/// bytes, which are finally folded into the low byte.
///
/// # Examples
///
/// ```
/// use fixed_bitset::popcount;
///
/// assert_eq!(popcount(0), 0);
/// assert_eq!(popcount(0b1011), 3);
/// assert_eq!(popcount(u64::MAX), 64);
/// ```
#[inline]
#[must_use]
pub const fn popcount(mut x: u64) -> u32 {
    x -= (x >> 1) & M1;
    x = (x & M2) + ((x >> 2) & M2);
    x = (x + (x >> 4)) & M4;
    x += x >> 8;
    x += x >> 16;
    x += x >> 32;
    (x & 0x7f) as u32
}

/// Reads the 64-bit window starting at bit `shift` of `words[k]`, with the
/// high part taken from `words[k + 1]`.
///
/// `shift` must be in `1..64` and `words[k + 1]` must exist.
#[inline(always)]
pub(crate) fn window(words: &[u64], k: usize, shift: usize) -> u64 {
    debug_assert!(shift != 0 && shift < WORD_BITS, "shift {shift} out of range");
    (words[k] >> shift) | (words[k + 1] << (WORD_BITS - shift))
}

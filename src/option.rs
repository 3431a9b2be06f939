//! Operations on a bitset that may be absent.

use crate::BitSet;

/// Whole-set operations that treat an absent bitset as empty.
///
/// Clearing nothing is a no-op and nothing holds zero set bits, so code that
/// keeps an optional bitset around can call these without unwrapping first.
///
/// # Examples
///
/// ```
/// use fixed_bitset::{BitSet, OptionBitSetExt};
///
/// let mut missing: Option<BitSet> = None;
/// missing.clear();
/// assert_eq!(missing.count(), 0);
///
/// let mut present = Some(BitSet::new(8));
/// if let Some(b) = present.as_mut() {
///     b.set_bit(3);
/// }
/// assert_eq!(present.count(), 1);
/// present.clear();
/// assert_eq!(present.count(), 0);
/// ```
pub trait OptionBitSetExt {
    /// Counts the set bits, or returns 0 when absent.
    fn count(&self) -> usize;

    /// Clears every word, or does nothing when absent.
    fn clear(&mut self);
}

impl OptionBitSetExt for Option<BitSet> {
    fn count(&self) -> usize {
        self.as_ref().map_or(0, BitSet::count)
    }

    fn clear(&mut self) {
        if let Some(b) = self {
            b.clear();
        }
    }
}

impl OptionBitSetExt for Option<&mut BitSet> {
    fn count(&self) -> usize {
        self.as_deref().map_or(0, BitSet::count)
    }

    fn clear(&mut self) {
        if let Some(b) = self {
            b.clear();
        }
    }
}

//! `BitSet` struct and core implementation.

use alloc::{boxed::Box, vec::Vec};

use crate::{
    storage::{WORD_BITS, bitpos, popcount, window, words_for, zeroed},
    traits::FromWordsError,
};

/// A bitset with a capacity fixed at construction.
///
/// # Overview
///
/// Bits are packed into 64-bit words: bit `i` lives in word `i / 64` at
/// position `i % 64`, least significant bit first. The storage is exactly
/// `ceil(capacity / 64)` words long and never grows or shrinks.
///
/// # Padding
///
/// When the capacity is not a multiple of 64, the high bits of the last word
/// are padding. Per-bit accessors never touch them, but the whole-set
/// operations ([`set_all`](Self::set_all), [`xor_all`](Self::xor_all)) and
/// the word-granular queries ([`count`](Self::count), [`equ`](Self::equ),
/// [`copy_to`](Self::copy_to)) do. After `set_all` on a 70-bit set,
/// `count` reports 128.
///
/// # Errors and panics
///
/// Out-of-range bit indices are programmer errors and panic. An invalid
/// range passed to [`sub`](Self::sub) is an ordinary outcome and yields
/// `None`.
///
/// # Examples
///
/// ```
/// use fixed_bitset::BitSet;
///
/// let mut b = BitSet::new(64000);
/// b.set_bit(1000);
/// b.set_bit(999);
/// if b.bit(1000) {
///     b.clear_bit(1000);
/// }
/// assert_eq!(b.count(), 1);
/// b.clear();
/// assert_eq!(b.count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct BitSet {
    pub(crate) capacity: usize,
    pub(crate) words: Box<[u64]>,
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_range(i: usize, capacity: usize) -> ! {
    panic!("index out of range: {i} (capacity {capacity})")
}

impl BitSet {
    /// Creates a bitset able to hold `capacity` bits, all cleared.
    ///
    /// A capacity of zero is allowed and allocates no words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let b = BitSet::new(70);
    /// assert_eq!(b.cap(), 70);
    /// assert_eq!(b.word_len(), 2);
    /// assert_eq!(b.count(), 0);
    /// ```
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            words: zeroed(capacity),
        }
    }

    /// Creates a bitset from raw storage words.
    ///
    /// Padding bits in the last word are kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`FromWordsError::LengthMismatch`] if `words.len()` is not
    /// `ceil(capacity / 64)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let b = BitSet::from_words(66, vec![0b101, 0b10])?;
    /// assert!(b.bit(0));
    /// assert!(b.bit(2));
    /// assert!(b.bit(65));
    ///
    /// assert!(BitSet::from_words(64, vec![0, 0]).is_err());
    /// # Ok::<(), fixed_bitset::FromWordsError>(())
    /// ```
    pub fn from_words(capacity: usize, words: Vec<u64>) -> Result<Self, FromWordsError> {
        let expected = words_for(capacity);
        if words.len() != expected {
            return Err(FromWordsError::LengthMismatch {
                capacity,
                expected,
                actual: words.len(),
            });
        }
        Ok(Self {
            capacity,
            words: words.into_boxed_slice(),
        })
    }

    /// Returns the number of addressable bits.
    #[must_use]
    #[inline(always)]
    pub const fn cap(&self) -> usize {
        self.capacity
    }

    /// Returns the number of addressable bits. Same as [`cap`](Self::cap).
    #[must_use]
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of storage words.
    #[must_use]
    #[inline(always)]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Returns the underlying storage words, padding included.
    #[must_use]
    #[inline(always)]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    #[inline(always)]
    #[track_caller]
    fn locate(&self, i: usize) -> (usize, u64) {
        if i >= self.capacity {
            index_out_of_range(i, self.capacity);
        }
        let (idx, bp) = bitpos(i);
        (idx, 1 << bp)
    }

    /// Returns whether bit `i` is set.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.cap()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let mut b = BitSet::new(10);
    /// b.set_bit(3);
    /// assert!(b.bit(3));
    /// assert!(!b.bit(4));
    /// ```
    ///
    /// ```should_panic
    /// # use fixed_bitset::BitSet;
    /// let b = BitSet::new(10);
    /// let _ = b.bit(10); // index out of range
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn bit(&self, i: usize) -> bool {
        let (idx, mask) = self.locate(i);
        self.words[idx] & mask != 0
    }

    /// Sets bit `i` to 1.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.cap()`.
    #[inline]
    #[track_caller]
    pub fn set_bit(&mut self, i: usize) {
        let (idx, mask) = self.locate(i);
        self.words[idx] |= mask;
    }

    /// Sets bit `i` to 0.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.cap()`.
    #[inline]
    #[track_caller]
    pub fn clear_bit(&mut self, i: usize) {
        let (idx, mask) = self.locate(i);
        self.words[idx] &= !mask;
    }

    /// Flips bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.cap()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let mut b = BitSet::new(8);
    /// b.xor_bit(5);
    /// assert!(b.bit(5));
    /// b.xor_bit(5);
    /// assert!(!b.bit(5));
    /// ```
    #[inline]
    #[track_caller]
    pub fn xor_bit(&mut self, i: usize) {
        let (idx, mask) = self.locate(i);
        self.words[idx] ^= mask;
    }

    /// Sets bit `i` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.cap()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, i: usize, value: bool) {
        if value {
            self.set_bit(i);
        } else {
            self.clear_bit(i);
        }
    }

    /// Clears every word.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Clears every word. Same as [`clear`](Self::clear).
    pub fn clear_all(&mut self) {
        self.clear();
    }

    /// Sets every bit of every word, padding included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let mut b = BitSet::new(70);
    /// b.set_all();
    /// assert!(b.bit(69));
    /// assert_eq!(b.count(), 128); // two full words
    /// ```
    pub fn set_all(&mut self) {
        self.words.fill(u64::MAX);
    }

    /// Flips every bit of every word, padding included.
    pub fn xor_all(&mut self) {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
    }

    /// Counts the set bits across all words, padding included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let mut b = BitSet::new(10);
    /// b.set_bit(0);
    /// b.set_bit(3);
    /// b.set_bit(9);
    /// assert_eq!(b.count(), 3);
    /// ```
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|&w| popcount(w) as usize).sum()
    }

    /// Returns `true` if no bit is set, padding included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Compares against another bitset word by word.
    ///
    /// Returns `false` when `other` is `None` or the capacities differ.
    /// Padding bits take part in the comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let mut a = BitSet::new(100);
    /// a.set_bit(42);
    /// let b = a.clone();
    /// assert!(a.equ(&b));
    /// assert!(!a.equ(None));
    /// assert!(!a.equ(&BitSet::new(101)));
    /// ```
    #[must_use]
    pub fn equ<'a>(&self, other: impl Into<Option<&'a BitSet>>) -> bool {
        match other.into() {
            Some(other) => self.capacity == other.capacity && self.words == other.words,
            None => false,
        }
    }

    /// Copies this bitset's words over `dest`'s words.
    ///
    /// Words are copied position by position until either storage runs out;
    /// the copy is not limited to the smaller capacity. The return value is
    /// `min(self.cap(), dest.cap())` and is informational only. Returns 0
    /// and does nothing when `dest` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let mut src = BitSet::new(100);
    /// src.set_bit(7);
    /// let mut dest = BitSet::new(80);
    /// assert_eq!(src.copy_to(&mut dest), 80);
    /// assert!(dest.bit(7));
    /// assert_eq!(src.copy_to(None), 0);
    /// ```
    pub fn copy_to<'a>(&self, dest: impl Into<Option<&'a mut BitSet>>) -> usize {
        let Some(dest) = dest.into() else {
            return 0;
        };
        let n = self.words.len().min(dest.words.len());
        dest.words[..n].copy_from_slice(&self.words[..n]);
        self.capacity.min(dest.capacity)
    }

    /// Extracts bits `[start, end)` into a new bitset of capacity
    /// `end - start`, with bit `start` becoming bit 0.
    ///
    /// Returns `None` if `end <= start` or `end > self.cap()`.
    ///
    /// The padding of the result is not masked. A trailing partial word is
    /// the source word holding bit `start + 64 * k` shifted down, so source
    /// bits past `end` in that word land in the padding. The following source
    /// word is only read when the leftover bits run into it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bitset::BitSet;
    /// let mut b = BitSet::new(128);
    /// b.set_bit(70);
    ///
    /// let sub = b.sub(65, 128).unwrap();
    /// assert_eq!(sub.cap(), 63);
    /// assert!(sub.bit(5));
    ///
    /// assert!(b.sub(50, 10).is_none());
    /// assert!(b.sub(0, 129).is_none());
    /// ```
    #[must_use]
    pub fn sub(&self, start: usize, end: usize) -> Option<Self> {
        if end <= start || end > self.capacity {
            return None;
        }
        let bits = end - start;
        let mut out = Self::new(bits);
        let (wi, shift) = bitpos(start);
        let n = out.words.len();
        if shift == 0 {
            // Word-aligned: copy exactly the words we need.
            out.words.copy_from_slice(&self.words[wi..wi + n]);
            return Some(out);
        }

        // Misaligned: each full output word is (v0 >> s) | (v1 << (64 - s)).
        let input = &self.words[wi..];
        let full = bits / WORD_BITS;
        for (k, word) in out.words[..full].iter_mut().enumerate() {
            *word = window(input, k, shift);
        }
        let rem = bits % WORD_BITS;
        if rem != 0 {
            out.words[full] = if shift + rem > WORD_BITS {
                window(input, full, shift)
            } else {
                input[full] >> shift
            };
        }
        Some(out)
    }
}

impl From<BitSet> for Vec<u64> {
    fn from(bitset: BitSet) -> Self {
        bitset.words.into_vec()
    }
}

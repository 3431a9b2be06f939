//! Trait implementations for `BitSet`.

use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::Index,
    str::FromStr,
};

use thiserror::Error;

use crate::{BitSet, storage::WORD_BITS};

/// Errors that can occur when parsing a binary string into a [`BitSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBitSetError {
    /// Invalid character found in the binary string.
    #[error("invalid character '{ch}' at position {pos} in binary string")]
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// The byte position of the invalid character, after any `0b` prefix
        pos: usize,
    },

    /// No binary digits were provided.
    #[error("cannot parse bitset from empty string")]
    Empty,
}

/// Error returned by [`BitSet::from_words`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FromWordsError {
    /// The word count does not match the requested capacity.
    #[error("capacity {capacity} needs {expected} words but {actual} were given")]
    LengthMismatch {
        /// Requested capacity in bits
        capacity: usize,
        /// Number of words the capacity requires
        expected: usize,
        /// Number of words supplied
        actual: usize,
    },
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.equ(other)
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.words.hash(state);
    }
}

impl AsRef<[u64]> for BitSet {
    fn as_ref(&self) -> &[u64] {
        self.as_words()
    }
}

impl Index<usize> for BitSet {
    type Output = bool;

    /// Returns a reference to a static bool representing the bit at the given
    /// index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.cap()`, like [`BitSet::bit`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::BitSet;
    ///
    /// let mut b = BitSet::new(16);
    /// b.set_bit(5);
    ///
    /// assert!(b[5]);
    /// assert!(!b[0]);
    /// ```
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        if self.bit(index) { &true } else { &false }
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl fmt::Binary for BitSet {
    /// Formats bits `[0, cap)` as a binary string, highest bit first.
    ///
    /// Every addressable bit is printed, so the output is exactly `cap()`
    /// digits long. Padding bits are never shown. The alternate flag adds a
    /// `0b` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::BitSet;
    ///
    /// let mut b = BitSet::new(6);
    /// b.set_bit(0);
    /// b.set_bit(2);
    /// assert_eq!(format!("{b:b}"), "000101");
    /// assert_eq!(format!("{b:#b}"), "0b000101");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }

        let words = self.as_words();
        let rem = self.cap() % WORD_BITS;
        let [full @ .., hi] = words else {
            return Ok(());
        };

        if rem == 0 {
            write!(f, "{hi:064b}")?;
        } else {
            let hi = hi & ((1u64 << rem) - 1);
            write!(f, "{hi:0rem$b}")?;
        }
        for &word in full.iter().rev() {
            write!(f, "{word:064b}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSet")
            .field("cap", &self.cap())
            .field("bits", &format_args!("{self:b}"))
            .finish()
    }
}

impl FromStr for BitSet {
    type Err = ParseBitSetError;

    /// Parses a binary string into a [`BitSet`].
    ///
    /// The input may start with `0b` and may contain `_` separators. The
    /// rightmost digit is bit 0 and the capacity is the number of digits.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitSetError`] if the string contains characters other
    /// than `0`, `1` and `_`, or holds no digits at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::str::FromStr;
    /// use fixed_bitset::BitSet;
    ///
    /// let b = BitSet::from_str("0b1_0100")?;
    /// assert_eq!(b.cap(), 5);
    /// assert!(b.bit(2));
    /// assert!(b.bit(4));
    /// assert_eq!(b.count(), 2);
    ///
    /// # Ok::<(), fixed_bitset::ParseBitSetError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0b").unwrap_or(s);

        // Process bits in chunks of 64 from right to left
        let mut words = Vec::with_capacity(s.len().div_ceil(WORD_BITS));
        let mut bits = 0;
        let mut tvalue = 0u64;
        for (pos, ch) in s.char_indices().rev() {
            let bit: u64 = match ch {
                '1' => 1,
                '0' => 0,
                '_' => continue,
                _ => return Err(ParseBitSetError::InvalidChar { ch, pos }),
            };
            tvalue |= bit << (bits % WORD_BITS);
            bits += 1;
            if bits % WORD_BITS == 0 {
                words.push(mem::replace(&mut tvalue, 0));
            }
        }
        if bits == 0 {
            return Err(ParseBitSetError::Empty);
        }
        if bits % WORD_BITS != 0 {
            words.push(tvalue);
        }

        Ok(Self {
            capacity: bits,
            words: words.into_boxed_slice(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::ToString};

    #[test]
    fn test_binary_masks_padding() {
        let mut b = BitSet::new(3);
        b.set_all();
        assert_eq!(b.count(), 64);
        assert_eq!(format!("{b:b}"), "111");
        assert_eq!(b.to_string(), "111");
    }

    #[test]
    fn test_binary_multiword() {
        let mut b = BitSet::new(66);
        b.set_bit(65);
        b.set_bit(0);
        let s = format!("{b:b}");
        assert_eq!(s.len(), 66);
        assert!(s.starts_with("10"));
        assert!(s.ends_with('1'));
        assert_eq!(s.matches('1').count(), 2);
    }

    #[test]
    fn test_binary_full_word() {
        let mut b = BitSet::new(64);
        b.set_bit(63);
        let s = format!("{b:#b}");
        assert_eq!(s.len(), 66);
        assert!(s.starts_with("0b1"));
    }

    #[test]
    fn test_binary_empty() {
        assert_eq!(format!("{:b}", BitSet::new(0)), "");
        assert_eq!(format!("{:#b}", BitSet::new(0)), "0b");
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_hash_follows_equality() {
        use core::hash::BuildHasher;
        use std::collections::hash_map::RandomState;

        let state = RandomState::new();
        let mut a = BitSet::new(90);
        a.set_bit(80);
        let b = a.clone();
        assert_eq!(state.hash_one(&a), state.hash_one(&b));
    }

    #[test]
    fn test_debug() {
        let mut b = BitSet::new(4);
        b.set_bit(1);
        assert_eq!(format!("{b:?}"), "BitSet { cap: 4, bits: 0010 }");
    }

    #[test]
    fn test_parse_roundtrip_multiword() {
        let mut b = BitSet::new(130);
        for i in [0, 1, 63, 64, 100, 129] {
            b.set_bit(i);
        }
        let parsed: BitSet = b.to_string().parse().unwrap();
        assert_eq!(parsed, b);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<BitSet>(), Err(ParseBitSetError::Empty));
        assert_eq!("0b".parse::<BitSet>(), Err(ParseBitSetError::Empty));
        assert_eq!("___".parse::<BitSet>(), Err(ParseBitSetError::Empty));
        assert_eq!(
            "10201".parse::<BitSet>(),
            Err(ParseBitSetError::InvalidChar { ch: '2', pos: 2 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ParseBitSetError::InvalidChar { ch: 'x', pos: 3 };
        assert_eq!(
            err.to_string(),
            "invalid character 'x' at position 3 in binary string"
        );
        let err = BitSet::from_words(10, alloc::vec![]).unwrap_err();
        assert_eq!(err.to_string(), "capacity 10 needs 1 words but 0 were given");
    }
}

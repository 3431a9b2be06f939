use proptest::prelude::*;
use fixed_bitset::BitSet;

// Strategy for generating bitsets with a random capacity and sparse bits
prop_compose! {
    fn arb_bitset(max_bits: usize)
        (cap in 1..max_bits)
        (bits in prop::collection::vec((0..cap, bool::arbitrary()), 0..100), cap in Just(cap))
        -> BitSet
    {
        let mut bitset = BitSet::new(cap);
        for (idx, value) in bits {
            bitset.set(idx, value);
        }
        bitset
    }
}

// Strategy for generating dense bitsets whose capacity is a multiple of 64
prop_compose! {
    fn dense_bitset()
        (words in prop::collection::vec(any::<u64>(), 1..=5))
        -> BitSet
    {
        let cap = words.len() * 64;
        BitSet::from_words(cap, words).unwrap()
    }
}

// Strategy for a bitset plus a valid, non-empty range inside it
fn bitset_and_range() -> impl Strategy<Value = (BitSet, usize, usize)> {
    dense_bitset().prop_flat_map(|bitset| {
        let cap = bitset.cap();
        (Just(bitset), 0..cap)
            .prop_flat_map(move |(bitset, start)| (Just(bitset), Just(start), start + 1..=cap))
    })
}

proptest! {
    #[test]
    fn test_sub_preserves_bits((bitset, start, end) in bitset_and_range()) {
        let sub = bitset.sub(start, end).unwrap();
        prop_assert_eq!(sub.cap(), end - start);

        // Every bit in the range should match the original
        for i in 0..sub.cap() {
            prop_assert_eq!(
                sub.bit(i),
                bitset.bit(start + i),
                "Bit {} (originally {}) mismatch",
                i, start + i
            );
        }
    }

    #[test]
    fn test_sub_matches_manual_extraction(
        bitset in arb_bitset(400),
        start in 0usize..400,
        len in 1usize..200
    ) {
        let end = start + len;
        let sub = bitset.sub(start, end);
        if end > bitset.cap() {
            prop_assert!(sub.is_none());
            return Ok(());
        }

        let sub = sub.unwrap();
        let mut manual = BitSet::new(len);
        for (offset, i) in (start..end).enumerate() {
            manual.set(offset, bitset.bit(i));
        }
        for i in 0..len {
            prop_assert_eq!(sub.bit(i), manual.bit(i), "Mismatch at {} for [{}, {})", i, start, end);
        }
    }

    #[test]
    fn test_sub_invalid_ranges_are_none(
        bitset in arb_bitset(300),
        start in 0usize..400,
        end in 0usize..400
    ) {
        let valid = start < end && end <= bitset.cap();
        prop_assert_eq!(bitset.sub(start, end).is_some(), valid);
    }

    #[test]
    fn test_sub_composition((bitset, start, end) in bitset_and_range(), split in 0usize..320) {
        // Splitting a sub-range again gives the same bits as one direct cut.
        let len = end - start;
        let split = split % len;
        let outer = bitset.sub(start, end).unwrap();
        if split == 0 {
            return Ok(());
        }
        let left = outer.sub(0, split).unwrap();
        let right = outer.sub(split, len).unwrap();
        for i in 0..len {
            let actual = if i < split { left.bit(i) } else { right.bit(i - split) };
            prop_assert_eq!(actual, bitset.bit(start + i), "Bit {} mismatch after split at {}", i, split);
        }
    }

    #[test]
    fn test_count_matches_set_bits(bitset in arb_bitset(500)) {
        // Per-bit mutation never touches padding, so count sees only [0, cap).
        let expected = (0..bitset.cap()).filter(|&i| bitset.bit(i)).count();
        prop_assert_eq!(bitset.count(), expected);
    }

    #[test]
    fn test_count_matches_word_popcount(words in prop::collection::vec(any::<u64>(), 0..8)) {
        let expected: usize = words.iter().map(|w| w.count_ones() as usize).sum();
        let bitset = BitSet::from_words(words.len() * 64, words).unwrap();
        prop_assert_eq!(bitset.count(), expected);
    }

    #[test]
    fn test_xor_all_complements_count(bitset in dense_bitset()) {
        let mut flipped = bitset.clone();
        flipped.xor_all();
        prop_assert_eq!(flipped.count() + bitset.count(), bitset.word_len() * 64);
        flipped.xor_all();
        prop_assert_eq!(flipped, bitset);
    }

    #[test]
    fn test_clone_equals_and_diverges(bitset in arb_bitset(300), idx in 0usize..300) {
        let mut copy = bitset.clone();
        prop_assert!(bitset.equ(&copy));
        let idx = idx % bitset.cap();
        copy.xor_bit(idx);
        prop_assert!(!bitset.equ(&copy));
        prop_assert_ne!(bitset.bit(idx), copy.bit(idx));
    }

    #[test]
    fn test_copy_to_same_shape(src in arb_bitset(300)) {
        let mut dest = BitSet::new(src.cap());
        dest.set_all();
        prop_assert_eq!(src.copy_to(&mut dest), src.cap());
        prop_assert_eq!(dest, src);
    }

    #[test]
    fn test_parse_roundtrip(bitset in arb_bitset(300)) {
        let parsed: BitSet = bitset.to_string().parse().unwrap();
        prop_assert_eq!(parsed, bitset);
    }
}

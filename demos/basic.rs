//! Basic usage examples for `BitSet`

use fixed_bitset::{BitSet, OptionBitSetExt};

fn main() {
    println!("=== BitSet Basic Usage ===\n");

    // Create a bitset with room for 200 bits
    let mut bitset = BitSet::new(200);
    println!("Created bitset");
    println!("Capacity: {} bits", bitset.cap());
    println!("Storage words: {}\n", bitset.word_len());

    // Set some bits
    bitset.set_bit(5);
    bitset.set_bit(10);
    bitset.set_bit(15);
    bitset.set_bit(100);

    println!("Set bits at positions: 5, 10, 15, 100");
    println!("Number of set bits: {}\n", bitset.count());

    // Check if specific bits are set
    println!("Checking individual bits:");
    for i in [0, 5, 10, 15, 20, 100, 150] {
        println!(
            "  Bit {}: {}",
            i,
            if bitset.bit(i) { "set" } else { "unset" }
        );
    }

    // Toggle and clear
    bitset.xor_bit(5);
    bitset.clear_bit(10);
    println!("\nAfter toggling 5 and clearing 10: {} bits set", bitset.count());

    // Extract a sub-range
    println!("\nExtracting bits [10, 110):");
    match bitset.sub(10, 110) {
        Some(sub) => {
            println!("  Capacity: {}", sub.cap());
            println!("  Bit 5 (originally 15): {}", sub.bit(5));
            println!("  Bit 90 (originally 100): {}", sub.bit(90));
        }
        None => println!("  Invalid range"),
    }
    println!("Extracting bits [150, 250): {:?}", bitset.sub(150, 250));

    // Clone and compare
    let mut copy = bitset.clone();
    println!("\nClone equal to original? {}", copy.equ(&bitset));
    copy.set_bit(199);
    println!("After changing the clone? {}", copy.equ(&bitset));

    // Copy into an existing bitset
    let mut dest = BitSet::new(200);
    let copied = bitset.copy_to(&mut dest);
    println!("\nCopied {copied} bits, equal: {}", dest == bitset);

    // Padding bits take part in whole-set operations
    let mut small = BitSet::new(70);
    small.set_all();
    println!("\nset_all on a 70-bit set counts {} bits", small.count());
    println!("Binary: {small}");

    // Absent bitsets behave like empty ones
    let mut missing: Option<BitSet> = None;
    missing.clear();
    println!("\nCount of a missing bitset: {}", missing.count());
}

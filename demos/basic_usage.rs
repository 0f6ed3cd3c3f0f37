//! Basic usage example for veb-fast-set.
//!
//! Walks through construction, mutation and the ordered navigation queries.

use veb_fast_set::VebSet;

fn main() {
    // Capacity is rounded up to the next power of two.
    let mut set = VebSet::new(1000).expect("non-zero capacity");
    println!("Created empty set over universe [0, {})", set.universe());

    // Insert some keys
    println!("\nInserting keys: 100, 200, 150, 300");
    set.insert(100);
    set.insert(200);
    set.insert(150);
    set.insert(300);
    println!("Set now contains {} keys", set.len());

    // Duplicates and out-of-range keys are rejected as values, not panics
    println!("\nRejected operations:");
    println!("  insert(150) again: {}", set.insert(150));
    let out_of_range = set.universe();
    println!("  insert({out_of_range}): {}", set.insert(out_of_range));

    // Check membership
    println!("\nMembership checks:");
    println!("  contains(150): {}", set.contains(150));
    println!("  contains(999): {}", set.contains(999));

    // Get min/max (O(1))
    println!("\nMin/Max (O(1)):");
    println!("  min: {:?}", set.min());
    println!("  max: {:?}", set.max());

    // Navigate the set
    println!("\nNavigation:");
    println!("  successor(100): {:?}", set.successor(100));
    println!("  successor(175): {:?}", set.successor(175));
    println!("  predecessor(200): {:?}", set.predecessor(200));
    println!("  predecessor(175): {:?}", set.predecessor(175));

    // Iterate in sorted order
    println!("\nIteration (sorted order):");
    print!("  Keys: ");
    for key in &set {
        print!("{key} ");
    }
    println!();

    // Remove keys
    println!("\nRemoving key 150:");
    set.remove(150);
    println!("  contains(150): {}", set.contains(150));
    println!("  len: {}", set.len());

    // Removing the minimum exercises the promotion path internally
    println!("\nRemoving the minimum ({:?}):", set.min());
    set.remove(set.min().unwrap());
    println!("  new min: {:?}", set.min());

    // Drain the rest
    while let Some(min) = set.min() {
        set.remove(min);
    }
    println!("\nDrained: len = {}, min = {:?}", set.len(), set.min());
}

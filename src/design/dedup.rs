//! Duplicate removal
//!
//! The enumeration can accept the same design from different state pairs.
//! Deduplication keeps the first occurrence of each design and drops the
//! rest, so downstream order stays tied to enumeration order.

use std::collections::HashSet;

use super::DesignVector;

/// Removes repeated designs, keeping first occurrences in order.
pub fn dedup_designs(designs: &[DesignVector]) -> Vec<DesignVector> {
    let mut seen = HashSet::with_capacity(designs.len());
    let mut unique = Vec::with_capacity(designs.len());
    for design in designs {
        if seen.insert(*design) {
            unique.push(*design);
        }
    }
    unique
}

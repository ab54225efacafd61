//! Mirror collapsing
//!
//! Every surviving design appears alongside its sign mirror, since swapping
//! baseline and treatment negates the difference. Canonicalization keeps one
//! representative per mirror pair, preferring the one whose grass component
//! is non-negative.

use super::DesignVector;

/// Collapses mirror pairs to single representatives.
///
/// Iterates the input in order while consuming from a working copy. A design
/// is only considered while its mirror is still unconsumed; picking a
/// representative consumes both members, so the second member of a pair is
/// skipped when its turn comes. A design whose mirror was never present is
/// dropped outright rather than kept.
pub fn canonicalize_designs(unique: &[DesignVector]) -> Vec<DesignVector> {
    let mut working: Vec<DesignVector> = unique.to_vec();
    let mut canonical = Vec::new();

    for design in unique {
        let mirror = design.negated();
        if !working.contains(&mirror) {
            continue;
        }
        let keep = if design.grass_diff() < 0 {
            mirror
        } else {
            *design
        };
        canonical.push(keep);
        remove_first(&mut working, &keep);
        remove_first(&mut working, &keep.negated());
    }

    canonical
}

/// Removes the first occurrence of `target`, if present.
fn remove_first(list: &mut Vec<DesignVector>, target: &DesignVector) {
    if let Some(pos) = list.iter().position(|d| d == target) {
        list.remove(pos);
    }
}

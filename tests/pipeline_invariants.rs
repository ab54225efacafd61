//! Pipeline Invariant Tests
//!
//! Tests for the design pipeline over the fixed characteristic table:
//! - Stage counts and exact stage outputs are reproducible
//! - Enumeration is sign-symmetric
//! - Canonicalization leaves no mirror pairs behind

use bacegen::characteristics::{CharacteristicVector, IMAGE_CHARACTERISTICS};
use bacegen::design::{dedup_designs, DesignRun, DesignVector, PairOutcome};

// =============================================================================
// Helper Functions
// =============================================================================

fn fixed_run() -> DesignRun {
    DesignRun::execute(&IMAGE_CHARACTERISTICS)
}

fn designs_from(rows: &[[i8; 4]]) -> Vec<DesignVector> {
    rows.iter()
        .map(|&[g, s, l, i]| DesignVector::new(g, s, l, i))
        .collect()
}

/// All 22 accepted designs in enumeration order, duplicates included.
fn reference_accepted() -> Vec<DesignVector> {
    designs_from(&[
        [0, 1, 0, 0],
        [0, 0, 1, 0],
        [1, 0, 0, 0],
        [1, 1, 0, 1],
        [1, 0, 1, 1],
        [0, -1, 0, 0],
        [1, -1, 0, 0],
        [1, 0, 0, 1],
        [0, 0, -1, 0],
        [1, 0, -1, 0],
        [1, 0, 0, 1],
        [-1, 0, 0, 0],
        [-1, 1, 0, 0],
        [-1, 0, 1, 0],
        [0, 1, 0, 1],
        [0, 0, 1, 1],
        [-1, -1, 0, -1],
        [-1, 0, 0, -1],
        [0, -1, 0, -1],
        [-1, 0, -1, -1],
        [-1, 0, 0, -1],
        [0, 0, -1, -1],
    ])
}

/// The 20 deduplicated designs in first-occurrence order.
fn reference_unique() -> Vec<DesignVector> {
    designs_from(&[
        [0, 1, 0, 0],
        [0, 0, 1, 0],
        [1, 0, 0, 0],
        [1, 1, 0, 1],
        [1, 0, 1, 1],
        [0, -1, 0, 0],
        [1, -1, 0, 0],
        [1, 0, 0, 1],
        [0, 0, -1, 0],
        [1, 0, -1, 0],
        [-1, 0, 0, 0],
        [-1, 1, 0, 0],
        [-1, 0, 1, 0],
        [0, 1, 0, 1],
        [0, 0, 1, 1],
        [-1, -1, 0, -1],
        [-1, 0, 0, -1],
        [0, -1, 0, -1],
        [-1, 0, -1, -1],
        [0, 0, -1, -1],
    ])
}

/// The 10 canonical designs in processing order.
fn reference_canonical() -> Vec<DesignVector> {
    designs_from(&[
        [0, 1, 0, 0],
        [0, 0, 1, 0],
        [1, 0, 0, 0],
        [1, 1, 0, 1],
        [1, 0, 1, 1],
        [1, -1, 0, 0],
        [1, 0, 0, 1],
        [1, 0, -1, 0],
        [0, 1, 0, 1],
        [0, 0, 1, 1],
    ])
}

// =============================================================================
// Stage Count Tests
// =============================================================================

/// The fixed table always yields the same stage counts.
#[test]
fn test_stage_counts() {
    let run = fixed_run();
    assert_eq!(run.enumeration.pair_count(), 36);
    assert_eq!(run.enumeration.accepted_count(), 22);
    assert_eq!(run.enumeration.conflict_count(), 8);
    assert_eq!(run.enumeration.no_change_count(), 6);
    assert_eq!(run.deduplicated.len(), 20);
    assert_eq!(run.canonical.len(), 10);
}

/// Every rejection is one of the two filters.
#[test]
fn test_rejections_partition() {
    let run = fixed_run();
    let rejected = run
        .enumeration
        .evaluations
        .iter()
        .filter(|e| e.outcome.design().is_none())
        .count();
    assert_eq!(
        rejected,
        run.enumeration.conflict_count() + run.enumeration.no_change_count()
    );
}

// =============================================================================
// Exact Stage Output Tests
// =============================================================================

/// Accepted designs match the reference list exactly, repeats included.
#[test]
fn test_accepted_designs_exact() {
    let run = fixed_run();
    assert_eq!(run.enumeration.designs, reference_accepted());
}

/// Deduplication keeps the reference 20 in first-occurrence order.
#[test]
fn test_unique_designs_exact() {
    let run = fixed_run();
    assert_eq!(run.deduplicated, reference_unique());
}

/// Canonicalization keeps the reference 10 in processing order.
#[test]
fn test_canonical_designs_exact() {
    let run = fixed_run();
    assert_eq!(run.canonical, reference_canonical());
}

/// Running the pipeline twice gives identical output.
#[test]
fn test_run_is_deterministic() {
    let first = fixed_run();
    let second = fixed_run();
    assert_eq!(first.enumeration.designs, second.enumeration.designs);
    assert_eq!(first.deduplicated, second.deduplicated);
    assert_eq!(first.canonical, second.canonical);
}

// =============================================================================
// Dedup Tests
// =============================================================================

/// Dedup is idempotent.
#[test]
fn test_dedup_idempotent() {
    let run = fixed_run();
    assert_eq!(dedup_designs(&run.deduplicated), run.deduplicated);
}

/// The two repeated acceptances collapse to one entry each.
#[test]
fn test_dedup_removes_known_repeats() {
    let run = fixed_run();
    let repeat = DesignVector::new(1, 0, 0, 1);
    let accepted = run
        .enumeration
        .designs
        .iter()
        .filter(|d| **d == repeat)
        .count();
    let unique = run.deduplicated.iter().filter(|d| **d == repeat).count();
    assert_eq!(accepted, 2);
    assert_eq!(unique, 1);
}

// =============================================================================
// Symmetry and Canonicalization Tests
// =============================================================================

/// Swapping baseline and treatment negates the design, so every accepted
/// design's mirror is also accepted.
#[test]
fn test_enumeration_sign_symmetric() {
    let run = fixed_run();
    for design in &run.enumeration.designs {
        assert!(
            run.enumeration.designs.contains(&design.negated()),
            "mirror of {} missing",
            design
        );
    }
}

/// No canonical design coexists with its own mirror.
#[test]
fn test_canonical_mirror_free() {
    let run = fixed_run();
    for design in &run.canonical {
        assert!(
            !run.canonical.contains(&design.negated()),
            "{} and its mirror are both canonical",
            design
        );
    }
}

/// Every deduplicated design is represented by itself or its mirror.
#[test]
fn test_canonical_covers_every_pair() {
    let run = fixed_run();
    for design in &run.deduplicated {
        assert!(
            run.canonical.contains(design) || run.canonical.contains(&design.negated()),
            "{} has no canonical representative",
            design
        );
    }
}

/// Representatives with a moving grass component always gain grass.
#[test]
fn test_canonical_grass_is_never_negative() {
    let run = fixed_run();
    for design in &run.canonical {
        assert!(design.grass_diff() >= 0, "{} lost grass", design);
        if design.grass_diff() != 0 {
            assert_eq!(design.grass_diff(), 1);
        }
    }
}

// =============================================================================
// End-to-End Transition Tests
// =============================================================================

/// The empty-lot to grass-with-small-trees transition survives end to end.
#[test]
fn test_full_transition_is_canonical() {
    let baseline = CharacteristicVector::new(false, false, false, false);
    let treatment = CharacteristicVector::new(true, true, false, true);
    let design = DesignVector::between(&baseline, &treatment);
    assert_eq!(design.components(), [1, 1, 0, 1]);

    let run = fixed_run();
    assert!(run.canonical.contains(&design));
}

/// The zero design never reaches any stage output.
#[test]
fn test_zero_design_excluded_everywhere() {
    let run = fixed_run();
    let zero = DesignVector::new(0, 0, 0, 0);
    assert!(!run.enumeration.designs.contains(&zero));
    assert!(!run.deduplicated.contains(&zero));
    assert!(!run.canonical.contains(&zero));
}

/// Self pairs are the only no-change rejections on the fixed table.
#[test]
fn test_self_pairs_are_the_no_change_set() {
    let run = fixed_run();
    for eval in &run.enumeration.evaluations {
        if eval.outcome == PairOutcome::NoChange {
            assert_eq!(eval.baseline, eval.treatment);
        }
    }
}

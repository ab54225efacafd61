//! Pairwise enumeration
//!
//! Walks every ordered pair of table states, including self pairs, and
//! rules each one accepted or rejected. The full evaluation record is kept
//! so tracing output can replay every ruling.

use crate::characteristics::CharacteristicVector;

use super::DesignVector;

/// The ruling for one ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Pair yields a usable design.
    Accepted(DesignVector),
    /// Both tree components changed at once.
    TreeChangeConflict,
    /// No component changed.
    NoChange,
}

impl PairOutcome {
    /// Stable name for logs and traces.
    pub fn as_str(&self) -> &'static str {
        match self {
            PairOutcome::Accepted(_) => "accepted",
            PairOutcome::TreeChangeConflict => "tree_change_conflict",
            PairOutcome::NoChange => "no_change",
        }
    }

    /// The accepted design, if any.
    pub fn design(&self) -> Option<DesignVector> {
        match self {
            PairOutcome::Accepted(design) => Some(*design),
            _ => None,
        }
    }
}

/// One evaluated ordered pair.
#[derive(Debug, Clone, Copy)]
pub struct PairEvaluation {
    /// Position in enumeration order, counting from zero.
    pub index: usize,
    pub baseline: CharacteristicVector,
    pub treatment: CharacteristicVector,
    pub outcome: PairOutcome,
}

/// The full result of enumerating a table.
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// Every ordered pair in evaluation order.
    pub evaluations: Vec<PairEvaluation>,
    /// Accepted designs in evaluation order, duplicates included.
    pub designs: Vec<DesignVector>,
}

impl Enumeration {
    /// Number of ordered pairs evaluated.
    pub fn pair_count(&self) -> usize {
        self.evaluations.len()
    }

    /// Number of accepted pairs.
    pub fn accepted_count(&self) -> usize {
        self.designs.len()
    }

    /// Number of pairs rejected for changing both tree fields.
    pub fn conflict_count(&self) -> usize {
        self.evaluations
            .iter()
            .filter(|e| e.outcome == PairOutcome::TreeChangeConflict)
            .count()
    }

    /// Number of pairs rejected for changing nothing.
    pub fn no_change_count(&self) -> usize {
        self.evaluations
            .iter()
            .filter(|e| e.outcome == PairOutcome::NoChange)
            .count()
    }
}

/// Evaluates every ordered pair of states in `table`.
///
/// Pairs are visited baseline-major: pair index is
/// `baseline_row * table.len() + treatment_row`. Self pairs are evaluated
/// like any other and land in the no-change bucket.
pub fn enumerate_designs(table: &[CharacteristicVector]) -> Enumeration {
    let mut evaluations = Vec::with_capacity(table.len() * table.len());
    let mut designs = Vec::new();

    for (i, baseline) in table.iter().enumerate() {
        for (j, treatment) in table.iter().enumerate() {
            let outcome = evaluate_pair(baseline, treatment);
            if let PairOutcome::Accepted(design) = outcome {
                designs.push(design);
            }
            evaluations.push(PairEvaluation {
                index: i * table.len() + j,
                baseline: *baseline,
                treatment: *treatment,
                outcome,
            });
        }
    }

    Enumeration {
        evaluations,
        designs,
    }
}

/// Rules a single ordered pair.
///
/// A pair that moves both tree fields at once is rejected regardless of
/// direction. The conflict test runs before the no-change test, so a
/// conflicting pair is never reported as unchanged.
fn evaluate_pair(baseline: &CharacteristicVector, treatment: &CharacteristicVector) -> PairOutcome {
    let design = DesignVector::between(baseline, treatment);
    if design.small_trees_diff() != 0 && design.large_trees_diff() != 0 {
        return PairOutcome::TreeChangeConflict;
    }
    if design.is_zero() {
        return PairOutcome::NoChange;
    }
    PairOutcome::Accepted(design)
}

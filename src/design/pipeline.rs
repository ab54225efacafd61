//! Full pipeline run
//!
//! Chains enumeration, deduplication, and mirror collapsing over one table
//! and keeps every intermediate stage for reporting.

use crate::characteristics::CharacteristicVector;

use super::{canonicalize_designs, dedup_designs, enumerate_designs, DesignVector, Enumeration};

/// The three pipeline stages of one generation run.
#[derive(Debug, Clone)]
pub struct DesignRun {
    /// Stage one, every ordered pair with its ruling.
    pub enumeration: Enumeration,
    /// Stage two, accepted designs with repeats removed.
    pub deduplicated: Vec<DesignVector>,
    /// Stage three, one representative per mirror pair.
    pub canonical: Vec<DesignVector>,
}

impl DesignRun {
    /// Runs all stages over `table`.
    pub fn execute(table: &[CharacteristicVector]) -> Self {
        let enumeration = enumerate_designs(table);
        let deduplicated = dedup_designs(&enumeration.designs);
        let canonical = canonicalize_designs(&deduplicated);
        DesignRun {
            enumeration,
            deduplicated,
            canonical,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::characteristics::IMAGE_CHARACTERISTICS;

    use super::*;

    #[test]
    fn test_stage_counts_on_fixed_table() {
        let run = DesignRun::execute(&IMAGE_CHARACTERISTICS);
        assert_eq!(run.enumeration.accepted_count(), 22);
        assert_eq!(run.deduplicated.len(), 20);
        assert_eq!(run.canonical.len(), 10);
    }

    #[test]
    fn test_stages_agree() {
        let run = DesignRun::execute(&IMAGE_CHARACTERISTICS);
        assert_eq!(run.deduplicated, dedup_designs(&run.enumeration.designs));
        assert_eq!(run.canonical, canonicalize_designs(&run.deduplicated));
    }
}

//! Scenario realization
//!
//! Maps a stored design back to the concrete baseline/treatment image pairs
//! a survey round can show. A design that came out of the pipeline always
//! has at least one realization, since the filters depend only on the
//! difference itself.

use crate::characteristics::{image_for, CharacteristicVector, ImageAsset};
use crate::design::DesignVector;

/// A design together with one state pair that realizes it.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub design: DesignVector,
    pub baseline: CharacteristicVector,
    pub treatment: CharacteristicVector,
}

impl Scenario {
    /// Survey image for the baseline side, when the state has one.
    pub fn baseline_image(&self) -> Option<&'static ImageAsset> {
        image_for(&self.baseline)
    }

    /// Survey image for the treatment side, when the state has one.
    pub fn treatment_image(&self) -> Option<&'static ImageAsset> {
        image_for(&self.treatment)
    }
}

/// Finds every ordered state pair in `table` whose difference is `design`.
///
/// Pairs come back in table order, baseline-major, matching the order the
/// pipeline first saw them.
pub fn realizations(design: DesignVector, table: &[CharacteristicVector]) -> Vec<Scenario> {
    let mut found = Vec::new();
    for baseline in table {
        for treatment in table {
            if DesignVector::between(baseline, treatment) == design {
                found.push(Scenario {
                    design,
                    baseline: *baseline,
                    treatment: *treatment,
                });
            }
        }
    }
    found
}

//! Design vectors
//!
//! A design is the signed difference between two characteristic states,
//! one component per field. Components are ternary: -1 removes a feature,
//! 0 leaves it alone, +1 adds it.

use std::fmt;

use serde::Serialize;

use crate::characteristics::CharacteristicVector;

/// Signed per-field difference between a baseline and a treatment state.
///
/// Component order is grass, small trees, large trees, interaction. The
/// interaction component is always derived from the raw features of the two
/// states, never read from their stored flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DesignVector([i8; 4]);

impl DesignVector {
    /// Builds a design from raw components.
    pub const fn new(grass: i8, small_trees: i8, large_trees: i8, interaction: i8) -> Self {
        DesignVector([grass, small_trees, large_trees, interaction])
    }

    /// Computes the design that turns `baseline` into `treatment`.
    pub fn between(baseline: &CharacteristicVector, treatment: &CharacteristicVector) -> Self {
        let diff = |b: bool, t: bool| i8::from(t) - i8::from(b);
        DesignVector([
            diff(baseline.grass, treatment.grass),
            diff(baseline.small_trees, treatment.small_trees),
            diff(baseline.large_trees, treatment.large_trees),
            diff(baseline.derived_interaction(), treatment.derived_interaction()),
        ])
    }

    /// Grass component.
    pub const fn grass_diff(&self) -> i8 {
        self.0[0]
    }

    /// Small trees component.
    pub const fn small_trees_diff(&self) -> i8 {
        self.0[1]
    }

    /// Large trees component.
    pub const fn large_trees_diff(&self) -> i8 {
        self.0[2]
    }

    /// Interaction component.
    pub const fn interaction_diff(&self) -> i8 {
        self.0[3]
    }

    /// The sign-mirrored design, swapping the roles of the two states.
    pub fn negated(&self) -> Self {
        DesignVector([-self.0[0], -self.0[1], -self.0[2], -self.0[3]])
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 4]
    }

    /// Raw components in field order.
    pub const fn components(&self) -> [i8; 4] {
        self.0
    }
}

impl fmt::Display for DesignVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

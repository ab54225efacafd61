//! Random design selection

use rand::seq::SliceRandom;
use rand::Rng;

use crate::design::DesignVector;

/// Draws one design uniformly at random, `None` on an empty list.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, designs: &[DesignVector]) -> Option<DesignVector> {
    designs.choose(rng).copied()
}

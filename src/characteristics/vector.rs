//! Image characteristic states
//!
//! A characteristic vector describes one survey image by the presence of
//! grass, small trees, and large trees, plus a stored interaction flag.

use std::fmt;

/// One discrete image state shown to survey respondents.
///
/// All four fields are binary by construction. The stored `interaction`
/// flag is carried over from the source table and assumed, never checked,
/// to equal the derived term; transition math always recomputes the
/// derived term and ignores this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacteristicVector {
    /// Grass present in the image.
    pub grass: bool,
    /// Small trees present in the image.
    pub small_trees: bool,
    /// Large trees present in the image.
    pub large_trees: bool,
    /// Stored interaction flag (grass alongside trees of either size).
    pub interaction: bool,
}

impl CharacteristicVector {
    /// Creates a state from its four binary fields.
    pub const fn new(
        grass: bool,
        small_trees: bool,
        large_trees: bool,
        interaction: bool,
    ) -> Self {
        Self {
            grass,
            small_trees,
            large_trees,
            interaction,
        }
    }

    /// Derived interaction term: grass together with trees of either size.
    pub fn derived_interaction(&self) -> bool {
        self.grass && (self.small_trees || self.large_trees)
    }

    /// The four fields as 0/1 integers, in table column order.
    pub fn as_bits(&self) -> [i8; 4] {
        [
            i8::from(self.grass),
            i8::from(self.small_trees),
            i8::from(self.large_trees),
            i8::from(self.interaction),
        ]
    }
}

impl fmt::Display for CharacteristicVector {
    /// Renders as `[g, s, l, i]` with 0/1 components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.as_bits();
        write!(f, "[{}, {}, {}, {}]", bits[0], bits[1], bits[2], bits[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_interaction_requires_grass() {
        let trees_only = CharacteristicVector::new(false, true, false, false);
        assert!(!trees_only.derived_interaction());

        let grass_only = CharacteristicVector::new(true, false, false, false);
        assert!(!grass_only.derived_interaction());
    }

    #[test]
    fn test_derived_interaction_with_either_tree_size() {
        let small = CharacteristicVector::new(true, true, false, true);
        assert!(small.derived_interaction());

        let large = CharacteristicVector::new(true, false, true, true);
        assert!(large.derived_interaction());
    }

    #[test]
    fn test_derived_interaction_ignores_stored_flag() {
        // A stored flag that disagrees with the derived term is tolerated
        // and never consulted.
        let incoherent = CharacteristicVector::new(true, true, false, false);
        assert!(incoherent.derived_interaction());
        assert!(!incoherent.interaction);
    }

    #[test]
    fn test_display_renders_bits() {
        let state = CharacteristicVector::new(true, false, true, true);
        assert_eq!(state.to_string(), "[1, 0, 1, 1]");
    }

    #[test]
    fn test_as_bits_column_order() {
        let state = CharacteristicVector::new(false, true, false, false);
        assert_eq!(state.as_bits(), [0, 1, 0, 0]);
    }
}

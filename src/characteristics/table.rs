//! The fixed input table
//!
//! Six image states, an intentional subset of the sixteen possible field
//! combinations. Every design the generator emits is the difference
//! between two rows of this table.

use super::CharacteristicVector;

/// The six image characteristic states, in source-table order.
///
/// Row order is load-bearing: enumeration walks the cartesian product in
/// this order and downstream tie-breaks inherit it. The `[_; 6]` type and
/// the `bool` fields make a malformed table unrepresentable.
pub const IMAGE_CHARACTERISTICS: [CharacteristicVector; 6] = [
    CharacteristicVector::new(false, false, false, false),
    CharacteristicVector::new(false, true, false, false),
    CharacteristicVector::new(false, false, true, false),
    CharacteristicVector::new(true, false, false, false),
    CharacteristicVector::new(true, true, false, true),
    CharacteristicVector::new(true, false, true, true),
];

//! Image characteristic states
//!
//! The fixed menu of park renderings shown to survey respondents. Each state
//! records which features are present; the interaction flag is stored
//! alongside the raw features and must always agree with the derived rule.
//! Types enforce well-formedness, tests pin the table contents.

mod images;
mod table;
mod vector;

pub use images::{image_for, ImageAsset};
pub use table::IMAGE_CHARACTERISTICS;
pub use vector::CharacteristicVector;

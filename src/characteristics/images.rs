//! Survey image assets
//!
//! Qualtrics graphic URLs for the six table states, used when designs are
//! expanded into concrete baseline/treatment scenarios.

use super::CharacteristicVector;

/// A hosted survey image for one characteristic state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAsset {
    /// Short state label used in listings and JSON output.
    pub label: &'static str,
    /// Qualtrics graphic URL.
    pub url: &'static str,
}

const BASELINE: ImageAsset = ImageAsset {
    label: "baseline",
    url: "https://brown.co1.qualtrics.com/CP/Graphic.php?IM=IM_3BExhm4UusJYfga",
};

const SMALL_TREES: ImageAsset = ImageAsset {
    label: "small_trees",
    url: "https://brown.co1.qualtrics.com/CP/Graphic.php?IM=IM_bpbbTyvDu0bNWFo",
};

const LARGE_TREES: ImageAsset = ImageAsset {
    label: "large_trees",
    url: "https://brown.co1.qualtrics.com/CP/Graphic.php?IM=IM_6x1QMgV79lnzrWC",
};

const GRASS: ImageAsset = ImageAsset {
    label: "grass",
    url: "https://brown.co1.qualtrics.com/CP/Graphic.php?IM=IM_5ps4NErUcNoGTd4",
};

const SMALL_TREES_GRASS: ImageAsset = ImageAsset {
    label: "small_trees_grass",
    url: "https://brown.co1.qualtrics.com/CP/Graphic.php?IM=IM_eCAXoH8FEEgqMjc",
};

const LARGE_TREES_GRASS: ImageAsset = ImageAsset {
    label: "large_trees_grass",
    url: "https://brown.co1.qualtrics.com/ControlPanel/Graphic.php?IM=IM_8qqRVOS6rtEqN2m",
};

/// Looks up the survey image for a state.
///
/// Total over the six table rows; states outside the table have no asset.
/// The stored interaction flag does not participate in the lookup.
pub fn image_for(state: &CharacteristicVector) -> Option<&'static ImageAsset> {
    let asset = match (state.grass, state.small_trees, state.large_trees) {
        (false, false, false) => &BASELINE,
        (false, true, false) => &SMALL_TREES,
        (false, false, true) => &LARGE_TREES,
        (true, false, false) => &GRASS,
        (true, true, false) => &SMALL_TREES_GRASS,
        (true, false, true) => &LARGE_TREES_GRASS,
        _ => return None,
    };
    Some(asset)
}

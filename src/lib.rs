//! bacegen - deterministic treatment-design generator
//!
//! Derives the canonical set of treatment designs for a choice-experiment
//! database: enumerate every transition between the fixed image states,
//! admit the valid ones, drop exact repeats, collapse sign-mirrored pairs
//! to one representative, and render the result as SQL array literals.

pub mod characteristics;
pub mod cli;
pub mod design;
pub mod observability;
pub mod render;
pub mod scenario;

//! Treatment design pipeline
//!
//! Turns the fixed characteristic table into the canonical set of treatment
//! designs. The pipeline has three stages: enumerate every ordered pair of
//! states, drop repeated designs, then collapse sign mirrors to single
//! representatives. Each stage is deterministic; given the same table the
//! same designs come out in the same order.

mod canonical;
mod dedup;
mod enumerate;
mod pipeline;
mod vector;

pub use canonical::canonicalize_designs;
pub use dedup::dedup_designs;
pub use enumerate::{enumerate_designs, Enumeration, PairEvaluation, PairOutcome};
pub use pipeline::DesignRun;
pub use vector::DesignVector;

//! Survey scenarios
//!
//! Bridges stored designs back to what respondents actually see: the
//! baseline/treatment image pairs realizing each design, and a uniform
//! random draw for ad hoc round assignment.

mod realize;
mod sample;

pub use realize::{realizations, Scenario};
pub use sample::sample;

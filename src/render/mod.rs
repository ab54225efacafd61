//! Output rendering
//!
//! Textual forms of a pipeline run: the SQL value list (with its strict
//! read-back parser), the optional INSERT wrapper, and the human-facing
//! trace and summary listings.

mod errors;
mod report;
mod sql;

pub use errors::{ParseResult, SqlParseError};
pub use report::{render_summary, render_trace};
pub use sql::{parse_value_list, render_insert, render_value_list};

//! Observability subsystem
//!
//! Structured JSON logging with a typed event catalog.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//! 5. Diagnostics go to stderr only; stdout carries the payload

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

//! Observable events
//!
//! Every log line names one of these events. Events are explicit and typed;
//! free-form event strings never reach the logger.

use std::fmt;

/// Observable events across a generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded from file or defaults
    ConfigLoaded,

    // Pipeline
    /// Pipeline run begins
    GenerateBegin,
    /// One ordered pair ruled (TRACE)
    PairEvaluated,
    /// Enumeration stage finished
    EnumerationComplete,
    /// Deduplication stage finished
    DedupComplete,
    /// Mirror collapse stage finished
    CanonicalizeComplete,
    /// SQL block rendered
    RenderComplete,

    // Scenarios
    /// Realizations resolved for every canonical design
    ScenariosResolved,
    /// One design drawn at random
    SampleDrawn,

    // Verification
    /// Round-trip verification begins
    VerifyBegin,
    /// Round-trip verification passed
    VerifyComplete,
    /// Round-trip verification failed
    VerifyFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::GenerateBegin => "GENERATE_BEGIN",
            Event::PairEvaluated => "PAIR_EVALUATED",
            Event::EnumerationComplete => "ENUMERATION_COMPLETE",
            Event::DedupComplete => "DEDUP_COMPLETE",
            Event::CanonicalizeComplete => "CANONICALIZE_COMPLETE",
            Event::RenderComplete => "RENDER_COMPLETE",
            Event::ScenariosResolved => "SCENARIOS_RESOLVED",
            Event::SampleDrawn => "SAMPLE_DRAWN",
            Event::VerifyBegin => "VERIFY_BEGIN",
            Event::VerifyComplete => "VERIFY_COMPLETE",
            Event::VerifyFailed => "VERIFY_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

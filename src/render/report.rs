//! Trace and summary listings

use crate::design::{DesignRun, PairOutcome};

/// Renders one line per evaluated pair, in evaluation order.
pub fn render_trace(run: &DesignRun) -> String {
    let mut out = String::new();
    for eval in &run.enumeration.evaluations {
        let ruling = match eval.outcome {
            PairOutcome::Accepted(design) => format!("accepted {}", design),
            PairOutcome::TreeChangeConflict => "rejected: tree change conflict".to_string(),
            PairOutcome::NoChange => "rejected: no change".to_string(),
        };
        out.push_str(&format!(
            "combination {:02}: {} -> {}  {}\n",
            eval.index, eval.baseline, eval.treatment, ruling
        ));
    }
    out
}

/// Renders the stage-count summary.
pub fn render_summary(run: &DesignRun) -> String {
    format!(
        "pairs evaluated: {}\n\
         designs accepted: {}\n\
         rejected, tree change conflict: {}\n\
         rejected, no change: {}\n\
         unique designs: {}\n\
         canonical designs: {}\n",
        run.enumeration.pair_count(),
        run.enumeration.accepted_count(),
        run.enumeration.conflict_count(),
        run.enumeration.no_change_count(),
        run.deduplicated.len(),
        run.canonical.len(),
    )
}

//! CLI command implementations
//!
//! Every command follows the same sequence: load config, build the logger,
//! run the pipeline, write the payload to stdout. Diagnostics never mix
//! into the payload channel.

use std::io::{self, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

use crate::characteristics::{image_for, CharacteristicVector, IMAGE_CHARACTERISTICS};
use crate::design::{DesignRun, DesignVector};
use crate::observability::{Event, Logger, Severity};
use crate::render::{
    parse_value_list, render_insert, render_summary, render_trace, render_value_list,
};
use crate::scenario::{realizations, sample};

use super::args::Command;
use super::config::GenConfig;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Generate { config } => generate(config.as_deref()),
        Command::Trace { config } => trace(config.as_deref()),
        Command::Scenarios { config, json } => scenarios(config.as_deref(), json),
        Command::Sample { config, seed } => sample_design(config.as_deref(), seed),
        Command::Verify { config } => verify(config.as_deref()),
    }
}

/// Loads the config and builds the run logger.
fn setup(config_path: Option<&Path>) -> CliResult<(GenConfig, Logger)> {
    let config = GenConfig::load_or_default(config_path)?;
    let logger = Logger::new(config.severity());
    let source = match config_path {
        Some(path) => path.display().to_string(),
        None => "defaults".to_string(),
    };
    logger.info(Event::ConfigLoaded.as_str(), &[("source", source.as_str())]);
    Ok((config, logger))
}

/// Runs the pipeline over the fixed table, logging each stage.
fn execute_run(logger: &Logger) -> DesignRun {
    logger.info(Event::GenerateBegin.as_str(), &[]);
    let run = DesignRun::execute(&IMAGE_CHARACTERISTICS);

    if logger.enabled(Severity::Trace) {
        for eval in &run.enumeration.evaluations {
            let index = eval.index.to_string();
            let baseline = eval.baseline.to_string();
            let treatment = eval.treatment.to_string();
            logger.trace(
                Event::PairEvaluated.as_str(),
                &[
                    ("baseline", baseline.as_str()),
                    ("index", index.as_str()),
                    ("outcome", eval.outcome.as_str()),
                    ("treatment", treatment.as_str()),
                ],
            );
        }
    }

    let pairs = run.enumeration.pair_count().to_string();
    let accepted = run.enumeration.accepted_count().to_string();
    let conflicts = run.enumeration.conflict_count().to_string();
    let no_change = run.enumeration.no_change_count().to_string();
    logger.info(
        Event::EnumerationComplete.as_str(),
        &[
            ("accepted", accepted.as_str()),
            ("no_change", no_change.as_str()),
            ("pairs", pairs.as_str()),
            ("tree_change_conflicts", conflicts.as_str()),
        ],
    );

    let unique = run.deduplicated.len().to_string();
    logger.info(Event::DedupComplete.as_str(), &[("unique", unique.as_str())]);

    let canonical = run.canonical.len().to_string();
    logger.info(
        Event::CanonicalizeComplete.as_str(),
        &[("canonical", canonical.as_str())],
    );

    run
}

/// Generate command: print the SQL block for the canonical designs.
pub fn generate(config_path: Option<&Path>) -> CliResult<()> {
    let (config, logger) = setup(config_path)?;
    let run = execute_run(&logger);

    let block = if config.emit_insert {
        render_insert(&run.canonical, &config.table, &config.column)
    } else {
        render_value_list(&run.canonical)
    };
    write_payload(&block)?;

    let rows = run.canonical.len().to_string();
    logger.info(Event::RenderComplete.as_str(), &[("rows", rows.as_str())]);
    Ok(())
}

/// Trace command: print the per-pair listing and the stage summary.
pub fn trace(config_path: Option<&Path>) -> CliResult<()> {
    let (_config, logger) = setup(config_path)?;
    let run = execute_run(&logger);
    let listing = format!("{}\n{}", render_trace(&run), render_summary(&run));
    write_payload(&listing)
}

/// Scenarios command: print the realizations of every canonical design.
pub fn scenarios(config_path: Option<&Path>, as_json: bool) -> CliResult<()> {
    let (_config, logger) = setup(config_path)?;
    let run = execute_run(&logger);

    let mut out = String::new();
    let mut total = 0usize;
    for design in &run.canonical {
        let found = realizations(*design, &IMAGE_CHARACTERISTICS);
        total += found.len();
        if as_json {
            let entries: Vec<Value> = found
                .iter()
                .map(|s| {
                    json!({
                        "baseline": scenario_side(&s.baseline),
                        "treatment": scenario_side(&s.treatment),
                    })
                })
                .collect();
            let line = serde_json::to_string(&json!({
                "design": design,
                "realizations": entries,
            }))?;
            out.push_str(&line);
            out.push('\n');
        } else {
            out.push_str(&format!("design {}\n", design));
            for s in &found {
                out.push_str(&format!(
                    "  {} ({}) -> {} ({})\n",
                    s.baseline,
                    image_label(&s.baseline),
                    s.treatment,
                    image_label(&s.treatment)
                ));
            }
        }
    }
    write_payload(&out)?;

    let designs = run.canonical.len().to_string();
    let count = total.to_string();
    logger.info(
        Event::ScenariosResolved.as_str(),
        &[
            ("designs", designs.as_str()),
            ("realizations", count.as_str()),
        ],
    );
    Ok(())
}

/// Sample command: print one randomly chosen canonical design as JSON.
pub fn sample_design(config_path: Option<&Path>, seed: Option<u64>) -> CliResult<()> {
    let (_config, logger) = setup(config_path)?;
    let run = execute_run(&logger);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let drawn = sample(&mut rng, &run.canonical).ok_or_else(CliError::empty_set)?;

    let line = serde_json::to_string(&json!({ "design": drawn }))?;
    write_payload(&format!("{}\n", line))?;

    let design = drawn.to_string();
    logger.info(Event::SampleDrawn.as_str(), &[("design", design.as_str())]);
    Ok(())
}

/// Verify command: render, re-parse, and check the reference counts.
pub fn verify(config_path: Option<&Path>) -> CliResult<()> {
    let (_config, logger) = setup(config_path)?;
    logger.info(Event::VerifyBegin.as_str(), &[]);
    let run = execute_run(&logger);

    let rendered = render_value_list(&run.canonical);
    let parsed = parse_value_list(&rendered)?;
    if !same_multiset(&parsed, &run.canonical) {
        let expected = run.canonical.len().to_string();
        let reparsed = parsed.len().to_string();
        logger.error(
            Event::VerifyFailed.as_str(),
            &[
                ("check", "round_trip"),
                ("expected", expected.as_str()),
                ("reparsed", reparsed.as_str()),
            ],
        );
        return Err(CliError::verify_failed(
            "re-parsed designs do not match the canonical set",
        ));
    }

    let checks = [
        ("pairs", run.enumeration.pair_count(), 36),
        ("accepted", run.enumeration.accepted_count(), 22),
        ("unique", run.deduplicated.len(), 20),
        ("canonical", run.canonical.len(), 10),
    ];
    for (stage, actual, expected) in checks {
        if actual != expected {
            let actual = actual.to_string();
            let expected = expected.to_string();
            logger.error(
                Event::VerifyFailed.as_str(),
                &[
                    ("actual", actual.as_str()),
                    ("check", stage),
                    ("expected", expected.as_str()),
                ],
            );
            return Err(CliError::verify_failed(format!(
                "stage '{}' produced {} designs, expected {}",
                stage, actual, expected
            )));
        }
    }

    let rows = run.canonical.len();
    let line = serde_json::to_string(&json!({ "verified": true, "rows": rows }))?;
    write_payload(&format!("{}\n", line))?;

    let rows = rows.to_string();
    logger.info(Event::VerifyComplete.as_str(), &[("rows", rows.as_str())]);
    Ok(())
}

/// Writes payload text to stdout in one shot.
fn write_payload(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Compares two design lists as multisets.
fn same_multiset(a: &[DesignVector], b: &[DesignVector]) -> bool {
    let mut a_sorted: Vec<[i8; 4]> = a.iter().map(DesignVector::components).collect();
    let mut b_sorted: Vec<[i8; 4]> = b.iter().map(DesignVector::components).collect();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a_sorted == b_sorted
}

/// Image label for a state, for the text listing.
fn image_label(state: &CharacteristicVector) -> &'static str {
    image_for(state).map(|asset| asset.label).unwrap_or("unlisted")
}

/// One side of a realization as a JSON value.
fn scenario_side(state: &CharacteristicVector) -> Value {
    match image_for(state) {
        Some(asset) => json!({
            "state": state.as_bits(),
            "label": asset.label,
            "url": asset.url,
        }),
        None => json!({ "state": state.as_bits() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_multiset_ignores_order() {
        let a = [DesignVector::new(1, 0, 0, 0), DesignVector::new(0, 1, 0, 0)];
        let b = [DesignVector::new(0, 1, 0, 0), DesignVector::new(1, 0, 0, 0)];
        assert!(same_multiset(&a, &b));
    }

    #[test]
    fn test_same_multiset_counts_repeats() {
        let a = [DesignVector::new(1, 0, 0, 0), DesignVector::new(1, 0, 0, 0)];
        let b = [DesignVector::new(1, 0, 0, 0)];
        assert!(!same_multiset(&a, &b));
    }

    #[test]
    fn test_generate_with_defaults() {
        assert!(generate(None).is_ok());
    }

    #[test]
    fn test_trace_with_defaults() {
        assert!(trace(None).is_ok());
    }

    #[test]
    fn test_scenarios_text_and_json() {
        assert!(scenarios(None, false).is_ok());
        assert!(scenarios(None, true).is_ok());
    }

    #[test]
    fn test_sample_with_seed() {
        assert!(sample_design(None, Some(7)).is_ok());
    }

    #[test]
    fn test_verify_passes_on_fixed_table() {
        assert!(verify(None).is_ok());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = generate(Some(Path::new("/nonexistent/bacegen.json"))).unwrap_err();
        assert_eq!(err.code_str(), "BACE_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_scenario_side_carries_image() {
        let state = CharacteristicVector::new(false, true, false, false);
        let value = scenario_side(&state);
        assert_eq!(value["label"], "small_trees");
        assert_eq!(value["state"][1], 1);
    }
}

use crate::engine::config::SelectionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection::{CandidateSelector, Selection};
use crate::engine::utils::sampling::FeatureSampler;
use tracing::{info, instrument};

/// Samples `config.population` candidates and returns the one whose encoded span is
/// closest to `config.target_span`.
#[instrument(skip_all, name = "selection_workflow")]
pub fn run<S: FeatureSampler + ?Sized>(
    sampler: &mut S,
    config: &SelectionConfig,
    reporter: &ProgressReporter,
) -> Result<Selection, EngineError> {
    config.validate()?;
    info!(
        target_span = config.target_span,
        population = config.population,
        "Starting candidate selection."
    );

    reporter.report(Progress::PhaseStart {
        name: "Candidate Selection",
    });
    let selection = CandidateSelector::new(config, reporter).select(sampler)?;
    reporter.report(Progress::PhaseFinish);

    if selection.skipped > 0 {
        reporter.report(Progress::Message(format!(
            "{} of {} candidates could not be reconstructed and were skipped",
            selection.skipped, config.population
        )));
    }

    Ok(selection)
}

use super::config::{ConfigError, FailurePolicy, SelectionConfig};
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::reconstruct::ChainReconstructor;
use super::utils::sampling::FeatureSampler;
use crate::core::models::chain::AtomChain;
use crate::core::models::features::FeatureVector;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One reconstructed sample and how far its span is from the requested target.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Position of the sample in generation order.
    pub index: usize,
    pub chain: AtomChain,
    /// Displacement norm encoded by the sample.
    pub r1n: f64,
    /// `|r1n - target_span|`.
    pub span_error: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub best: Candidate,
    /// Number of candidates that were reconstructed successfully.
    pub evaluated: usize,
    /// Number of candidates dropped under [`FailurePolicy::SkipFailed`].
    pub skipped: usize,
}

/// Generates a population of independent reconstructions and keeps the one whose span is
/// closest to the target.
pub struct CandidateSelector<'a> {
    config: &'a SelectionConfig,
    reconstructor: ChainReconstructor,
    reporter: &'a ProgressReporter<'a>,
}

impl<'a> CandidateSelector<'a> {
    pub fn new(config: &'a SelectionConfig, reporter: &'a ProgressReporter<'a>) -> Self {
        Self {
            config,
            reconstructor: ChainReconstructor::new(&config.reconstruction),
            reporter,
        }
    }

    /// Draws `population` vectors from `sampler` and selects the best reconstruction.
    ///
    /// Sampling runs sequentially and completes before any reconstruction starts;
    /// reconstructions are independent and run in parallel when the `parallel` feature is
    /// enabled. Ties on the span error go to the lowest generation index.
    #[instrument(skip_all, name = "candidate_selection", fields(target_span = self.config.target_span, population = self.config.population))]
    pub fn select<S: FeatureSampler + ?Sized>(
        &self,
        sampler: &mut S,
    ) -> Result<Selection, EngineError> {
        self.config.validate()?;

        let mut samples = Vec::with_capacity(self.config.population);
        for index in 0..self.config.population {
            let raw = sampler
                .sample()
                .map_err(|source| EngineError::Sampling { index, source })?;
            samples.push(raw);
        }
        debug!(count = samples.len(), "Sampled feature vectors.");

        self.select_from(samples)
    }

    /// Selects among already sampled vectors, indexed by their position in `samples`.
    ///
    /// The length of `samples` takes the place of the configured population.
    pub fn select_from(&self, samples: Vec<Vec<f64>>) -> Result<Selection, EngineError> {
        self.config.validate()?;
        if samples.is_empty() {
            return Err(ConfigError::EmptyPopulation.into());
        }
        let population = samples.len();

        self.reporter.report(Progress::TaskStart {
            total_steps: population as u64,
        });

        #[cfg(not(feature = "parallel"))]
        let iterator = samples.into_iter().enumerate();

        #[cfg(feature = "parallel")]
        let iterator = samples.into_par_iter().enumerate();

        let outcomes: Vec<Result<Candidate, EngineError>> = iterator
            .map(|(index, raw)| {
                let outcome = self.evaluate(index, raw);
                self.reporter.report(Progress::TaskIncrement);
                outcome
            })
            .collect();

        self.reporter.report(Progress::TaskFinish);

        let mut best: Option<Candidate> = None;
        let mut evaluated = 0;
        let mut skipped = 0;

        for (index, outcome) in outcomes.into_iter().enumerate() {
            let candidate = match (outcome, self.config.failure_policy) {
                (Ok(candidate), _) => candidate,
                (Err(error), FailurePolicy::FailFast) => {
                    warn!(index, %error, "Candidate failed, aborting selection.");
                    return Err(error);
                }
                (Err(error), FailurePolicy::SkipFailed) => {
                    warn!(index, %error, "Candidate failed, skipping.");
                    self.reporter.report(Progress::CandidateSkipped {
                        index,
                        reason: error.to_string(),
                    });
                    skipped += 1;
                    continue;
                }
            };

            evaluated += 1;
            let improves = best
                .as_ref()
                .is_none_or(|current| candidate.span_error < current.span_error);
            if improves {
                best = Some(candidate);
            }
        }

        let best = best.ok_or(EngineError::NoViableCandidate { population })?;
        info!(
            index = best.index,
            r1n = best.r1n,
            span_error = best.span_error,
            evaluated,
            skipped,
            "Selected candidate."
        );

        Ok(Selection {
            best,
            evaluated,
            skipped,
        })
    }

    fn evaluate(&self, index: usize, raw: Vec<f64>) -> Result<Candidate, EngineError> {
        let features = FeatureVector::new(raw)?;
        let chain = self.reconstructor.reconstruct(&features)?;
        let r1n = features.compute_r1n();

        Ok(Candidate {
            index,
            chain,
            r1n,
            span_error: (r1n - self.config.target_span).abs(),
        })
    }
}

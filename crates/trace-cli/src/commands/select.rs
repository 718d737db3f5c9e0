use super::emit_chain;
use crate::cli::SelectArgs;
use crate::config::{SamplingMode, SelectAppConfig, build_select_config};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use carbontrace::core::io::vectors::read_vectors_from_path;
use carbontrace::engine::progress::ProgressReporter;
use carbontrace::engine::selection::Selection;
use carbontrace::engine::utils::sampling::{
    FeatureSampler, PoolSampler, SamplingError, SequentialSampler,
};
use carbontrace::workflows;
use tracing::{info, warn};

pub fn run(args: SelectArgs) -> Result<()> {
    let config = build_select_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let selection = execute(&config, &reporter)?;
    let best = &selection.best;

    if selection.skipped > 0 {
        warn!(
            "{} of {} candidates were skipped.",
            selection.skipped, config.selection.population
        );
    }
    eprintln!(
        "Selected candidate {} of {} (r1n {:.2} Å, target {:.2} Å).",
        best.index + 1,
        config.selection.population,
        best.r1n,
        config.selection.target_span
    );

    emit_chain(&best.chain, best.r1n, &config.output)
}

pub(crate) fn execute(config: &SelectAppConfig, reporter: &ProgressReporter) -> Result<Selection> {
    info!("Loading candidate pool from {:?}", &config.input_path);
    let pool = read_vectors_from_path(&config.input_path)?;
    info!("Loaded {} vector(s) into the pool.", pool.len());

    let mut sampler = build_sampler(pool, config).map_err(|e| CliError::FileParsing {
        path: config.input_path.clone(),
        source: e.into(),
    })?;

    Ok(workflows::select::run(
        sampler.as_mut(),
        &config.selection,
        reporter,
    )?)
}

fn build_sampler(
    pool: Vec<Vec<f64>>,
    config: &SelectAppConfig,
) -> std::result::Result<Box<dyn FeatureSampler>, SamplingError> {
    Ok(match (config.sampling, config.seed) {
        (SamplingMode::Sequential, _) => Box::new(SequentialSampler::new(pool)?),
        (SamplingMode::Random, Some(seed)) => Box::new(PoolSampler::seeded(pool, seed)?),
        (SamplingMode::Random, None) => Box::new(PoolSampler::from_entropy(pool)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use carbontrace::engine::config::{FailurePolicy, SelectionConfigBuilder};
    use carbontrace::engine::error::EngineError;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const POOL: &str = "\
0,0,6.0, 0.5,0.5, 0,1, 1,0
0,0,9.5, 0.5,0.5, 0,1, 1,0
0,0,12.0, 0.5,0.5, 0,1, 1,0
";

    fn config(path: &Path, sampling: SamplingMode, policy: FailurePolicy) -> SelectAppConfig {
        SelectAppConfig {
            input_path: path.to_path_buf(),
            selection: SelectionConfigBuilder::new()
                .target_span(10.0)
                .population(3)
                .failure_policy(policy)
                .build()
                .unwrap(),
            sampling,
            seed: Some(3),
            output: OutputConfig {
                path: None,
                sequence: None,
                chain_id: 'A',
            },
        }
    }

    fn write_pool(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("pool.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn sequential_selection_picks_the_closest_span() {
        let dir = tempdir().unwrap();
        let path = write_pool(dir.path(), POOL);
        let reporter = ProgressReporter::new();

        let selection = execute(
            &config(&path, SamplingMode::Sequential, FailurePolicy::FailFast),
            &reporter,
        )
        .unwrap();

        assert_eq!(selection.best.index, 1);
        assert!((selection.best.r1n - 9.5).abs() < 1e-12);
        assert_eq!(selection.best.chain.len(), 4);
    }

    #[test]
    fn seeded_random_selection_is_reproducible() {
        let dir = tempdir().unwrap();
        let path = write_pool(dir.path(), POOL);
        let reporter = ProgressReporter::new();
        let config = config(&path, SamplingMode::Random, FailurePolicy::FailFast);

        let first = execute(&config, &reporter).unwrap();
        let second = execute(&config, &reporter).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_pool_is_reported_against_the_input_file() {
        let dir = tempdir().unwrap();
        let path = write_pool(dir.path(), "# nothing generated\n");
        let reporter = ProgressReporter::new();

        let result = execute(
            &config(&path, SamplingMode::Random, FailurePolicy::FailFast),
            &reporter,
        );

        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn skip_failed_tolerates_malformed_rows() {
        let dir = tempdir().unwrap();
        let path = write_pool(dir.path(), "1,2\n0,0,9.0, 0.5,0.5, 0,1, 1,0\n");
        let reporter = ProgressReporter::new();

        let strict = execute(
            &config(&path, SamplingMode::Sequential, FailurePolicy::FailFast),
            &reporter,
        );
        assert!(matches!(
            strict,
            Err(CliError::Core(EngineError::MalformedInput(_)))
        ));

        let lenient = execute(
            &config(&path, SamplingMode::Sequential, FailurePolicy::SkipFailed),
            &reporter,
        )
        .unwrap();
        assert_eq!(lenient.best.index, 1);
        assert_eq!(lenient.evaluated, 1);
        assert_eq!(lenient.skipped, 2);
    }
}

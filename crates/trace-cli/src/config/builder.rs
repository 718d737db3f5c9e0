use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileReconstructionConfig};
use super::models::{DecodeAppConfig, OutputConfig, SamplingMode, SelectAppConfig};
use crate::cli::{DecodeArgs, OutputArgs, ReconstructionArgs, SelectArgs};
use crate::error::{CliError, Result};
use carbontrace::engine::config::{
    FailurePolicy, ReconstructionConfig, ReconstructionConfigBuilder, SelectionConfigBuilder,
};
use std::path::Path;

pub fn build_decode_config(args: &DecodeArgs) -> Result<DecodeAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(args.config.as_deref())?;

    if args.row == 0 {
        return Err(CliError::Argument(
            "--row is 1-based, the first vector is row 1".to_string(),
        ));
    }

    let reconstruction = merge_reconstruction(
        &args.reconstruction,
        file_config.reconstruction.take(),
        &defaults,
    )?;

    Ok(DecodeAppConfig {
        input_path: args.input.clone(),
        row: args.row - 1,
        show_original: args.original,
        reconstruction,
        output: output_config(&args.output),
    })
}

pub fn build_select_config(args: &SelectArgs) -> Result<SelectAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(args.config.as_deref())?;

    let reconstruction = merge_reconstruction(
        &args.reconstruction,
        file_config.reconstruction.take(),
        &defaults,
    )?;

    let selection_file = file_config.selection.take().unwrap_or_default();
    let population = args
        .population
        .or(selection_file.population)
        .unwrap_or(defaults.population);
    let failure_policy = if args.skip_failed {
        FailurePolicy::SkipFailed
    } else {
        selection_file
            .failure_policy
            .unwrap_or(defaults.failure_policy)
    };
    let sampling = if args.sequential {
        SamplingMode::Sequential
    } else {
        selection_file.sampling.unwrap_or(defaults.sampling)
    };
    let seed = args.seed.or(selection_file.seed);

    let selection = SelectionConfigBuilder::new()
        .target_span(args.span)
        .population(population)
        .failure_policy(failure_policy)
        .reconstruction(reconstruction)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(SelectAppConfig {
        input_path: args.input.clone(),
        selection,
        sampling,
        seed,
        output: output_config(&args.output),
    })
}

fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => FileConfig::from_file(path),
        None => Ok(FileConfig::default()),
    }
}

fn merge_reconstruction(
    cli: &ReconstructionArgs,
    file_val: Option<FileReconstructionConfig>,
    defaults: &DefaultsConfig,
) -> Result<ReconstructionConfig> {
    let file_val = file_val.unwrap_or_default();
    let bond_length = cli
        .bond_length
        .or(file_val.bond_length)
        .unwrap_or(defaults.bond_length);
    let final_bond = cli
        .final_bond
        .map(Into::into)
        .or(file_val.final_bond)
        .unwrap_or(defaults.final_bond);

    ReconstructionConfigBuilder::new()
        .bond_length(bond_length)
        .final_bond(final_bond)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn output_config(args: &OutputArgs) -> OutputConfig {
    OutputConfig {
        path: args.output.clone(),
        sequence: args.sequence.clone(),
        chain_id: args.chain_id,
    }
}

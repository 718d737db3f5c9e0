use crate::cli::{StatsArgs, StructureSource};
use crate::error::Result;
use carbontrace::core::io::vectors::read_vectors_from_path;
use carbontrace::core::models::features::FeatureVector;
use carbontrace::core::statistics::{
    HecDistribution, SecondaryStructure, parse_secondary_structure, structure_from_label,
};
use carbontrace::engine::error::EngineError;
use carbontrace::workflows;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: StatsArgs) -> Result<()> {
    let distribution = execute(&args.input, &args.structure)?;
    print!("{}", format_summary(&distribution));
    Ok(())
}

pub(crate) fn execute(input: &Path, source: &StructureSource) -> Result<HecDistribution> {
    info!("Loading feature vectors from {:?}", input);
    let vectors = read_vectors_from_path(input)?
        .into_iter()
        .map(FeatureVector::new)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(EngineError::from)?;

    let structures = load_structures(source)?;
    Ok(workflows::statistics::run(&structures, &vectors)?)
}

fn load_structures(source: &StructureSource) -> Result<Vec<Vec<SecondaryStructure>>> {
    let structures = match &source.labels {
        Some(path) => {
            info!("Reading secondary structure from labels in {:?}", path);
            read_vectors_from_path(path)?
                .iter()
                .map(|label| structure_from_label(label))
                .collect::<std::result::Result<Vec<_>, _>>()
        }
        None => source
            .ss
            .iter()
            .map(|ss| parse_secondary_structure(ss))
            .collect(),
    };
    Ok(structures.map_err(EngineError::from)?)
}

fn format_summary(distribution: &HecDistribution) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}{:>8}{:>14}{:>14}",
        "structure", "count", "mean alpha", "mean theta"
    );
    for structure in SecondaryStructure::ALL {
        match distribution.summary(structure) {
            Some(summary) => {
                let _ = writeln!(
                    out,
                    "{:<10}{:>8}{:>14.2}{:>14.2}",
                    structure.to_string(),
                    summary.count,
                    summary.mean_alpha,
                    summary.mean_theta
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{:<10}{:>8}{:>14}{:>14}",
                    structure.to_string(),
                    0,
                    "-",
                    "-"
                );
            }
        }
    }
    out
}

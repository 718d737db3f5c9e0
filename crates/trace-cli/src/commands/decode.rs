use super::emit_chain;
use crate::cli::DecodeArgs;
use crate::config::{DecodeAppConfig, build_decode_config};
use crate::error::{CliError, Result};
use carbontrace::core::io::vectors::read_vectors_from_path;
use carbontrace::workflows::{self, decode::DecodeResult};
use tracing::info;

pub fn run(args: DecodeArgs) -> Result<()> {
    let config = build_decode_config(&args)?;
    let result = execute(&config)?;

    if config.show_original {
        println!("{}", format_original(&result.original));
    }
    emit_chain(&result.chain, result.r1n, &config.output)
}

pub(crate) fn execute(config: &DecodeAppConfig) -> Result<DecodeResult> {
    info!("Loading feature vectors from {:?}", &config.input_path);
    let vectors = read_vectors_from_path(&config.input_path)?;

    let raw = vectors.get(config.row).ok_or_else(|| {
        CliError::Argument(format!(
            "row {} requested but '{}' holds {} vector(s)",
            config.row + 1,
            config.input_path.display(),
            vectors.len()
        ))
    })?;

    info!("Decoding row {} ({} values).", config.row + 1, raw.len());
    Ok(workflows::decode::run(raw, &config.reconstruction)?)
}

fn format_original(original: &[f64]) -> String {
    original
        .iter()
        .map(|value| format!("{value:.4}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use carbontrace::engine::config::ReconstructionConfig;
    use carbontrace::engine::error::EngineError;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const VECTORS: &str = "\
# displacement, alpha/180, sin(theta), cos(theta)
0,0,10, 0.5,0.5,0.75, 0,1,1, 1,0,0
1,2
";

    fn config(path: &Path, row: usize) -> DecodeAppConfig {
        DecodeAppConfig {
            input_path: path.to_path_buf(),
            row,
            show_original: false,
            reconstruction: ReconstructionConfig::default(),
            output: OutputConfig {
                path: None,
                sequence: None,
                chain_id: 'A',
            },
        }
    }

    #[test]
    fn decodes_the_requested_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vectors.csv");
        fs::write(&path, VECTORS).unwrap();

        let result = execute(&config(&path, 0)).unwrap();

        assert_eq!(result.chain.len(), 5);
        assert!((result.r1n - 10.0).abs() < 1e-12);
        assert_eq!(
            format_original(&result.original),
            "0.0000,0.0000,10.0000,90.0000,0.0000,90.0000,90.0000,135.0000,90.0000"
        );
    }

    #[test]
    fn malformed_rows_surface_engine_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vectors.csv");
        fs::write(&path, VECTORS).unwrap();

        let result = execute(&config(&path, 1));

        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::MalformedInput(_)))
        ));
    }

    #[test]
    fn rows_past_the_end_are_argument_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vectors.csv");
        fs::write(&path, VECTORS).unwrap();

        assert!(matches!(
            execute(&config(&path, 5)),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempdir().unwrap();
        let result = execute(&config(&dir.path().join("absent.csv"), 0));
        assert!(matches!(result, Err(CliError::VectorRead(_))));
    }
}

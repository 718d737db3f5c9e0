use crate::core::models::chain::AtomChain;
use crate::core::models::features::FeatureVector;
use crate::engine::config::ReconstructionConfig;
use crate::engine::error::EngineError;
use crate::engine::reconstruct::ChainReconstructor;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct DecodeResult {
    pub chain: AtomChain,
    /// Norm of the encoded displacement vector.
    pub r1n: f64,
    /// Displacement followed by interleaved `(alpha, theta)` pairs, in degrees.
    pub original: Vec<f64>,
}

/// Reconstructs the chain encoded by one raw feature vector.
#[instrument(skip_all, name = "decode_workflow", fields(len = raw.len()))]
pub fn run(raw: &[f64], config: &ReconstructionConfig) -> Result<DecodeResult, EngineError> {
    config.validate()?;
    let features = FeatureVector::new(raw.to_vec())?;
    run_features(&features, config)
}

/// Same as [`run`] for an already validated vector.
pub fn run_features(
    features: &FeatureVector,
    config: &ReconstructionConfig,
) -> Result<DecodeResult, EngineError> {
    config.validate()?;
    let chain = ChainReconstructor::new(config).reconstruct(features)?;
    let r1n = features.compute_r1n();
    let original = features.to_original()?;

    info!(
        residues = features.n(),
        atoms = chain.len(),
        r1n,
        "Decoded feature vector."
    );

    Ok(DecodeResult {
        chain,
        r1n,
        original,
    })
}

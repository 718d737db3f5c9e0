use thiserror::Error;

use super::config::ConfigError;
use super::utils::sampling::SamplingError;
use crate::core::models::features::FeatureError;
use crate::core::statistics::StatisticsError;
use crate::core::utils::geometry::GeometryError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(GeometryError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Sampling failed for candidate {index}: {source}")]
    Sampling {
        index: usize,
        #[source]
        source: SamplingError,
    },

    #[error("None of the {population} candidates could be reconstructed")]
    NoViableCandidate { population: usize },
}

impl From<GeometryError> for EngineError {
    fn from(error: GeometryError) -> Self {
        match error {
            GeometryError::NonFinite { .. } => EngineError::MalformedInput(error.to_string()),
            GeometryError::InvalidBondLength(_) => {
                EngineError::InvalidConfiguration(error.to_string())
            }
            GeometryError::ZeroMagnitudeDihedral { .. }
            | GeometryError::CollinearFrame
            | GeometryError::CoincidentAtoms
            | GeometryError::UnreachableSpan { .. } => EngineError::DegenerateGeometry(error),
        }
    }
}

impl From<FeatureError> for EngineError {
    fn from(error: FeatureError) -> Self {
        match error {
            FeatureError::Dihedral { source, .. } => source.into(),
            FeatureError::InvalidLength { .. } | FeatureError::NonFinite { .. } => {
                EngineError::MalformedInput(error.to_string())
            }
        }
    }
}

impl From<StatisticsError> for EngineError {
    fn from(error: StatisticsError) -> Self {
        match error {
            StatisticsError::Feature(inner) => inner.into(),
            StatisticsError::UnknownCode(_) | StatisticsError::InvalidLabel(_) => {
                EngineError::MalformedInput(error.to_string())
            }
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(error: ConfigError) -> Self {
        EngineError::InvalidConfiguration(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_errors_map_onto_error_kinds() {
        let zero = GeometryError::ZeroMagnitudeDihedral { sin: 0.0, cos: 0.0 };
        assert!(matches!(
            EngineError::from(zero),
            EngineError::DegenerateGeometry(GeometryError::ZeroMagnitudeDihedral { .. })
        ));
        assert!(matches!(
            EngineError::from(GeometryError::InvalidBondLength(-1.0)),
            EngineError::InvalidConfiguration(_)
        ));
        assert!(matches!(
            EngineError::from(GeometryError::NonFinite {
                what: "bend angle",
                value: f64::NAN
            }),
            EngineError::MalformedInput(_)
        ));
    }

    #[test]
    fn dihedral_feature_errors_keep_their_geometry_kind() {
        let error = FeatureError::Dihedral {
            residue: 3,
            source: GeometryError::ZeroMagnitudeDihedral { sin: 0.0, cos: 0.0 },
        };
        assert!(matches!(
            EngineError::from(error),
            EngineError::DegenerateGeometry(_)
        ));
        assert!(matches!(
            EngineError::from(FeatureError::InvalidLength { len: 4 }),
            EngineError::MalformedInput(_)
        ));
    }
}
